//! Evaluated literal values.
//!
//! The constant evaluator hands these over with their native representation
//! intact: `1`, `1u`, `1l` and `1ul` are distinct values here even though
//! they compare equal numerically. Enum promotion depends on that.

use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    Int32(i32),
    Uint32(u32),
    Int64(i64),
    Uint64(u64),
    Float(f64),
    Char(char),
    Str(String),
}

impl Value {
    /// Bit width of the native integer representation.
    ///
    /// Non-integer literals have no width.
    pub fn int_width(&self) -> Option<u8> {
        match self {
            Self::Int32(_) | Self::Uint32(_) | Self::Char(_) => Some(32),
            Self::Int64(_) | Self::Uint64(_) => Some(64),
            Self::Float(_) | Self::Str(_) => None,
        }
    }

    /// Whether the native representation is a signed integer type.
    pub fn is_signed(&self) -> bool {
        matches!(self, Self::Int32(_) | Self::Int64(_) | Self::Char(_))
    }

    /// Whether this is an integer value below zero.
    pub fn is_negative(&self) -> bool {
        match self {
            Self::Int32(v) => *v < 0,
            Self::Int64(v) => *v < 0,
            _ => false,
        }
    }

    /// Integer value widened losslessly, for range tracking.
    pub fn as_i128(&self) -> Option<i128> {
        match self {
            Self::Int32(v) => Some(i128::from(*v)),
            Self::Uint32(v) => Some(i128::from(*v)),
            Self::Int64(v) => Some(i128::from(*v)),
            Self::Uint64(v) => Some(i128::from(*v)),
            Self::Char(c) => Some(i128::from(u32::from(*c))),
            Self::Float(_) | Self::Str(_) => None,
        }
    }

    /// Short name of the literal's representation, used in diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Int32(_) => "int32",
            Self::Uint32(_) => "uint32",
            Self::Int64(_) => "int64",
            Self::Uint64(_) => "uint64",
            Self::Float(_) => "float",
            Self::Char(_) => "char",
            Self::Str(_) => "string",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Int32(v) => write!(f, "{v}"),
            Self::Uint32(v) => write!(f, "{v}u"),
            Self::Int64(v) => write!(f, "{v}l"),
            Self::Uint64(v) => write!(f, "{v}ul"),
            Self::Float(v) => write!(f, "{v:?}"),
            Self::Char(c) => write!(f, "{c:?}"),
            Self::Str(s) => write!(f, "{s:?}"),
        }
    }
}
