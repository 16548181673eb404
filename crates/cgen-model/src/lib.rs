#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

//! In-memory model of C declarations for the cgen binding generator.
//!
//! The parser front-end builds these values while it walks a header; the
//! emitter reads them back through the [`CType`] contract to produce
//! target-language declarations.
//!
//! - `ctype` - the `CType` contract and the `CSpec` variant sum
//! - `decl` - named declarations binding a spec to a symbol
//! - `spec` - the variants, including enum underlying-type promotion
//! - `manifest` - JSON manifests of parser output, lowered into a unit
//! - `unit` - a parsed translation unit with its tag and alias tables

pub mod config;
pub mod ctype;
pub mod decl;
pub mod decoration;
pub mod diagnostics;
pub mod kind;
pub mod manifest;
pub mod spec;
pub mod unit;
pub mod value;

#[cfg(test)]
mod ctype_tests;

pub use config::Config;
pub use ctype::{CSpec, CType};
pub use decl::{Decl, SourcePos};
pub use decoration::Decoration;
pub use diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use kind::TypeKind;
pub use spec::{
    DefineSpec, EnumBuilder, EnumSpec, FunctionSpec, IntegerType, PlainSpec, PromoteOutcome,
    PromotionPolicy, Promoter, StructSpec, TypedefSpec, VoidSpec,
};
pub use unit::TranslationUnit;
pub use value::Value;

/// Errors raised while loading a manifest into the model.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid manifest: {0}")]
    Parse(#[from] serde_json::Error),

    /// A `named` type refers to an alias no earlier typedef introduced.
    #[error("unknown type name `{name}`")]
    UnknownType { name: String },

    #[error("invalid plain type `{base}`")]
    InvalidPlain { base: String },

    #[error("define `{name}` has no evaluated value")]
    MissingDefineValue { name: String },
}

/// Result type for manifest operations.
pub type Result<T> = std::result::Result<T, Error>;
