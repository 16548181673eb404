//! Enum underlying-type inference.
//!
//! C leaves the integer type of an enum implementation-defined; the binding
//! generator picks one of four candidates from the enumerator literals it has
//! seen so far. Two policies are available:
//!
//! - [`PromotionPolicy::Legacy`] replays the historical transition table, which
//!   depends on the order members arrive in. From `signed long`, any new
//!   literal is classified as if nothing had been seen yet.
//! - [`PromotionPolicy::Covering`] picks the narrowest candidate covering every
//!   observed value, with the literal's native width as a floor. The result is
//!   independent of member order.
//!
//! The promoter always tracks the legacy state as well, so callers can report
//! members where the two policies disagree.

use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::value::Value;

use super::PlainSpec;

/// Candidate underlying types for an enum.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IntegerType {
    UnsignedInt,
    SignedInt,
    UnsignedLong,
    SignedLong,
}

impl IntegerType {
    fn from_parts(long: bool, signed: bool) -> Self {
        match (long, signed) {
            (false, false) => Self::UnsignedInt,
            (false, true) => Self::SignedInt,
            (true, false) => Self::UnsignedLong,
            (true, true) => Self::SignedLong,
        }
    }

    pub fn is_long(self) -> bool {
        matches!(self, Self::UnsignedLong | Self::SignedLong)
    }

    pub fn is_unsigned(self) -> bool {
        matches!(self, Self::UnsignedInt | Self::UnsignedLong)
    }

    /// C spelling, e.g. `unsigned long`.
    pub fn c_name(self) -> &'static str {
        match self {
            Self::UnsignedInt => "unsigned int",
            Self::SignedInt => "int",
            Self::UnsignedLong => "unsigned long",
            Self::SignedLong => "long",
        }
    }

    pub fn to_plain(self) -> PlainSpec {
        match self {
            Self::UnsignedInt => PlainSpec::uint(),
            Self::SignedInt => PlainSpec::int(),
            Self::UnsignedLong => PlainSpec::ulong(),
            Self::SignedLong => PlainSpec::long(),
        }
    }
}

impl std::fmt::Display for IntegerType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.c_name())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromotionPolicy {
    /// Historical, order-sensitive transition table.
    Legacy,
    /// Narrowest type covering all observed values.
    #[default]
    Covering,
}

impl FromStr for PromotionPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(Self::Legacy),
            "covering" => Ok(Self::Covering),
            other => Err(format!(
                "unknown promotion policy '{other}' (expected 'legacy' or 'covering')"
            )),
        }
    }
}

/// Result of feeding one literal to the promoter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PromoteOutcome {
    /// First literal: the type went from unset to `IntegerType`.
    Set(IntegerType),
    Changed { from: IntegerType, to: IntegerType },
    /// Literal recognized, current type already represents it.
    Unchanged(IntegerType),
    /// Literal kind carries no integer representation; state untouched.
    Unrecognized,
}

impl PromoteOutcome {
    /// Type in effect after this step, if any.
    pub fn current(self) -> Option<IntegerType> {
        match self {
            Self::Set(t) | Self::Unchanged(t) => Some(t),
            Self::Changed { to, .. } => Some(to),
            Self::Unrecognized => None,
        }
    }
}

/// Native shape of an integer literal as far as promotion cares.
#[derive(Clone, Copy, Debug)]
struct Literal {
    wide: bool,
    signed: bool,
    negative: bool,
}

impl Literal {
    fn classify(value: &Value) -> Option<Self> {
        let width = value.int_width()?;
        Some(Self {
            wide: width == 64,
            signed: value.is_signed(),
            negative: value.is_negative(),
        })
    }
}

#[derive(Clone, Debug, Default)]
pub struct Promoter {
    policy: PromotionPolicy,
    current: Option<IntegerType>,
    legacy: Option<IntegerType>,
    /// Inclusive `(min, max)` of every observed value.
    range: Option<(i128, i128)>,
    saw_wide: bool,
}

impl Promoter {
    pub fn new(policy: PromotionPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> PromotionPolicy {
        self.policy
    }

    /// Underlying type under the configured policy.
    pub fn current(&self) -> Option<IntegerType> {
        self.current
    }

    /// Underlying type the legacy table would have produced.
    pub fn legacy(&self) -> Option<IntegerType> {
        self.legacy
    }

    /// Whether the configured policy and the legacy table disagree.
    pub fn diverged(&self) -> bool {
        self.current != self.legacy
    }

    /// Inclusive `(min, max)` of every integer literal observed so far.
    pub fn range(&self) -> Option<(i128, i128)> {
        self.range
    }

    /// Whether the observed values need both a negative value and one above
    /// `i64::MAX`, which none of the candidates can hold.
    pub fn is_unrepresentable(&self) -> bool {
        self.range
            .is_some_and(|(min, max)| min < 0 && max > i128::from(i64::MAX))
    }

    /// Refine the underlying type with one enumerator literal.
    pub fn observe(&mut self, value: &Value) -> PromoteOutcome {
        let (Some(lit), Some(v)) = (Literal::classify(value), value.as_i128()) else {
            return PromoteOutcome::Unrecognized;
        };

        self.legacy = Some(legacy_step(self.legacy, lit));
        self.saw_wide |= lit.wide;
        self.range = Some(match self.range {
            Some((min, max)) => (min.min(v), max.max(v)),
            None => (v, v),
        });

        let next = match self.policy {
            PromotionPolicy::Legacy => self.legacy,
            PromotionPolicy::Covering => self.covering(),
        };
        let prev = std::mem::replace(&mut self.current, next);
        let Some(next) = next else {
            return PromoteOutcome::Unrecognized;
        };

        match prev {
            None => {
                debug!("enum promotion: {value} sets {next}");
                PromoteOutcome::Set(next)
            }
            Some(from) if from != next => {
                debug!("enum promotion: {value} moves {from} -> {next}");
                PromoteOutcome::Changed { from, to: next }
            }
            Some(_) => PromoteOutcome::Unchanged(next),
        }
    }

    fn covering(&self) -> Option<IntegerType> {
        let (min, max) = self.range?;
        let signed = min < 0;
        let fits_int = if signed {
            min >= i128::from(i32::MIN) && max <= i128::from(i32::MAX)
        } else {
            max <= i128::from(u32::MAX)
        };
        Some(IntegerType::from_parts(self.saw_wide || !fits_int, signed))
    }
}

/// One step of the historical transition table.
fn legacy_step(current: Option<IntegerType>, lit: Literal) -> IntegerType {
    use IntegerType::*;

    // 64-bit literals pick a long type by sign.
    let wide = || {
        if lit.signed && lit.negative {
            SignedLong
        } else {
            UnsignedLong
        }
    };

    match current {
        Some(UnsignedInt) => match lit {
            Literal { wide: true, .. } => wide(),
            Literal { negative: true, .. } => SignedInt,
            _ => UnsignedInt,
        },
        Some(SignedInt) => match lit {
            Literal { wide: true, .. } => wide(),
            _ => SignedInt,
        },
        Some(UnsignedLong) => match lit {
            Literal {
                wide: true,
                negative: true,
                ..
            } => SignedLong,
            _ => UnsignedLong,
        },
        // Unset and signed long share the initial classification.
        None | Some(SignedLong) => match lit {
            Literal { wide: true, .. } => wide(),
            Literal { negative: true, .. } => SignedInt,
            _ => UnsignedInt,
        },
    }
}
