//! JSON declaration manifests.
//!
//! Two layers:
//! - **Deserialization layer** (`raw`): 1:1 mapping of the manifest the parser
//!   front-end writes out, one entry per declarator.
//! - **Lowering** (`lower`): replays those entries through the model builders
//!   into a [`TranslationUnit`](crate::TranslationUnit).

mod lower;
mod raw;

#[cfg(test)]
mod lower_tests;

pub use lower::{load, lower};
pub use raw::{RawDecl, RawManifest, RawMember, RawType, parse_manifest};
