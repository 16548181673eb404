//! Declaration shape kinds.
//!
//! The emitter dispatches on this to pick a rendering strategy for each
//! declaration it receives from the model.

/// Declaration shapes known to the model.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, serde::Serialize)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum TypeKind {
    /// Generic named type, e.g. a typedef alias.
    Type = 0,
    /// Builtin or library primitive (`int`, `unsigned long`, `size_t`).
    Plain = 1,
    /// `void`, possibly behind pointers.
    Void = 2,
    /// Type of a `#define` constant.
    Define = 3,
    /// Struct with a known field list.
    Struct = 4,
    /// Struct referenced by tag only.
    OpaqueStruct = 5,
    Union = 6,
    Function = 7,
    Enum = 8,
}

impl TypeKind {
    /// Convert from raw discriminant.
    pub fn from_u8(v: u8) -> Option<Self> {
        match v {
            0 => Some(Self::Type),
            1 => Some(Self::Plain),
            2 => Some(Self::Void),
            3 => Some(Self::Define),
            4 => Some(Self::Struct),
            5 => Some(Self::OpaqueStruct),
            6 => Some(Self::Union),
            7 => Some(Self::Function),
            8 => Some(Self::Enum),
            _ => None,
        }
    }

    /// Whether this kind carries a member list (struct, union, enum).
    pub fn is_aggregate(self) -> bool {
        matches!(
            self,
            Self::Struct | Self::OpaqueStruct | Self::Union | Self::Enum
        )
    }

    /// Whether this kind is a scalar primitive (plain, void, define).
    pub fn is_primitive(self) -> bool {
        matches!(self, Self::Plain | Self::Void | Self::Define)
    }

    /// Prefix used for emitter names of tag-only types.
    ///
    /// Kinds that are never identified by a bare tag return `None`.
    pub fn tag_prefix(self) -> Option<&'static str> {
        match self {
            Self::Struct | Self::OpaqueStruct => Some("struct"),
            Self::Union => Some("union"),
            Self::Enum => Some("enum"),
            Self::Function => Some("func"),
            _ => None,
        }
    }

    /// Lowercase display name, as used in CLI tables.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Type => "type",
            Self::Plain => "plain",
            Self::Void => "void",
            Self::Define => "define",
            Self::Struct => "struct",
            Self::OpaqueStruct => "opaque_struct",
            Self::Union => "union",
            Self::Function => "function",
            Self::Enum => "enum",
        }
    }
}

impl std::fmt::Display for TypeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
