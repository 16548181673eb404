//! Declaration variants.
//!
//! Each variant implements [`CType`](crate::CType). Aggregates (enums, structs)
//! keep their members behind an `Arc` so that per-site copies share the frozen
//! body while owning their decoration.

mod define;
mod enums;
mod function;
mod plain;
mod promote;
mod structs;
mod typedef;

#[cfg(test)]
mod function_tests;
#[cfg(test)]
mod plain_tests;

pub use define::DefineSpec;
pub use enums::{EnumBuilder, EnumSpec};
pub use function::FunctionSpec;
pub use plain::{PlainSpec, VoidSpec};
pub use promote::{IntegerType, PromoteOutcome, PromotionPolicy, Promoter};
pub use structs::StructSpec;
pub use typedef::TypedefSpec;
