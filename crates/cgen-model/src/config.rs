//! Model construction settings.

use crate::spec::PromotionPolicy;

#[derive(Clone, Debug, Default)]
pub struct Config {
    /// How enum underlying types are inferred
    pub(crate) promotion: PromotionPolicy,
    /// Report data-quality warnings as errors
    pub(crate) strict: bool,
}

impl Config {
    /// Create a new Config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the enum promotion policy.
    pub fn promotion(mut self, policy: PromotionPolicy) -> Self {
        self.promotion = policy;
        self
    }

    /// Set whether warnings are reported as errors.
    pub fn strict(mut self, value: bool) -> Self {
        self.strict = value;
        self
    }

    pub fn promotion_policy(&self) -> PromotionPolicy {
        self.promotion
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }
}
