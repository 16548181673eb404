//! The type contract shared by every declaration variant.
//!
//! `CType` is what the emitter programs against. `CSpec` is the closed set of
//! variants the parser can produce; it implements `CType` by dispatching to the
//! variant, so callers rarely need to match on it.

use crate::decoration::Decoration;
use crate::kind::TypeKind;
use crate::spec::{
    DefineSpec, EnumSpec, FunctionSpec, PlainSpec, StructSpec, TypedefSpec, VoidSpec,
};

/// Capability set every declaration variant provides.
///
/// Decoration accessors have default implementations on top of
/// [`CType::decoration`]; variants only describe naming, completeness and
/// rendering.
pub trait CType {
    /// Canonical name: typedef alias if one is known, otherwise the tag.
    fn base_name(&self) -> &str;

    /// Bare struct/union/enum tag. Empty for anonymous types.
    fn tag(&self) -> &str;

    /// Record a typedef alias discovered after the type itself was parsed.
    fn set_canonical_name(&mut self, name: &str);

    /// Identifier the emitter uses for this type in the target language.
    ///
    /// Never empty for tagged types: without a typedef alias it falls back to
    /// `<kind>_<tag>`.
    fn emitter_name(&self) -> String;

    fn kind(&self) -> TypeKind;

    /// Whether the type has a body (members, fields) in this unit.
    fn is_complete(&self) -> bool;

    /// Canonical C spelling, including pointer and array decoration.
    fn render(&self) -> String;

    /// Independent copy for a new declarator site.
    ///
    /// Decoration is copied; frozen member lists are shared.
    fn clone_value(&self) -> CSpec;

    fn decoration(&self) -> &Decoration;

    fn decoration_mut(&mut self) -> &mut Decoration;

    fn is_opaque(&self) -> bool {
        !self.is_complete()
    }

    fn array_suffix(&self) -> &str {
        self.decoration().arrays()
    }

    fn variable_array_count(&self) -> u32 {
        self.decoration().var_arrays()
    }

    fn pointer_depth(&self) -> u8 {
        self.decoration().pointers()
    }

    fn set_pointer_depth(&mut self, n: u8) {
        self.decoration_mut().set_pointers(n);
    }

    /// `size > 0` records a fixed dimension, `size == 0` an incomplete `[]`.
    fn append_array_dimension(&mut self, size: u64) {
        self.decoration_mut().append_array(size);
    }

    fn is_const(&self) -> bool {
        self.decoration().is_const()
    }

    fn set_const(&mut self, value: bool) {
        self.decoration_mut().set_const(value);
    }
}

/// Every declaration shape the parser produces.
#[derive(Clone, Debug, PartialEq)]
pub enum CSpec {
    Plain(PlainSpec),
    Void(VoidSpec),
    Define(DefineSpec),
    /// Structs and unions; the kind follows `is_union` and the field list.
    Struct(StructSpec),
    Function(FunctionSpec),
    Enum(EnumSpec),
    Typedef(TypedefSpec),
}

macro_rules! dispatch {
    ($self:expr, $spec:ident => $body:expr) => {
        match $self {
            CSpec::Plain($spec) => $body,
            CSpec::Void($spec) => $body,
            CSpec::Define($spec) => $body,
            CSpec::Struct($spec) => $body,
            CSpec::Function($spec) => $body,
            CSpec::Enum($spec) => $body,
            CSpec::Typedef($spec) => $body,
        }
    };
}

impl CType for CSpec {
    fn base_name(&self) -> &str {
        dispatch!(self, s => s.base_name())
    }

    fn tag(&self) -> &str {
        dispatch!(self, s => s.tag())
    }

    fn set_canonical_name(&mut self, name: &str) {
        dispatch!(self, s => s.set_canonical_name(name))
    }

    fn emitter_name(&self) -> String {
        dispatch!(self, s => s.emitter_name())
    }

    fn kind(&self) -> TypeKind {
        dispatch!(self, s => s.kind())
    }

    fn is_complete(&self) -> bool {
        dispatch!(self, s => s.is_complete())
    }

    fn render(&self) -> String {
        dispatch!(self, s => s.render())
    }

    fn clone_value(&self) -> CSpec {
        self.clone()
    }

    fn decoration(&self) -> &Decoration {
        dispatch!(self, s => s.decoration())
    }

    fn decoration_mut(&mut self) -> &mut Decoration {
        dispatch!(self, s => s.decoration_mut())
    }
}

impl CSpec {
    pub fn as_enum(&self) -> Option<&EnumSpec> {
        match self {
            Self::Enum(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&StructSpec> {
        match self {
            Self::Struct(spec) => Some(spec),
            _ => None,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionSpec> {
        match self {
            Self::Function(spec) => Some(spec),
            _ => None,
        }
    }

    /// Follow typedef aliases down to the aliased spec.
    pub fn resolve(&self) -> &CSpec {
        match self {
            Self::Typedef(spec) => spec.target().resolve(),
            other => other,
        }
    }

    /// Rendering of the type's own definition, bodies included.
    ///
    /// Falls back to [`CType::render`] for variants without a body.
    pub fn render_definition(&self) -> String {
        match self {
            Self::Enum(spec) => spec.render_definition(),
            Self::Struct(spec) => spec.render_definition(),
            other => other.render(),
        }
    }
}

impl std::fmt::Display for CSpec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}

macro_rules! impl_from_spec {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for CSpec {
                fn from(spec: $ty) -> Self {
                    Self::$variant(spec)
                }
            }
        )*
    };
}

impl_from_spec!(
    Plain(PlainSpec),
    Void(VoidSpec),
    Define(DefineSpec),
    Struct(StructSpec),
    Function(FunctionSpec),
    Enum(EnumSpec),
    Typedef(TypedefSpec),
);
