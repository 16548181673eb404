use serde::Deserialize;

use crate::decl::SourcePos;
use crate::value::Value;

/// Top-level manifest object.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawManifest {
    #[serde(default)]
    pub declarations: Vec<RawDecl>,
}

/// One declarator as seen by the parser.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDecl {
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type")]
    pub ty: RawType,
    #[serde(default)]
    pub pointers: u8,
    /// Array dimensions in declarator order; `0` is an incomplete `[]`.
    #[serde(default)]
    pub arrays: Vec<u64>,
    #[serde(default, rename = "const")]
    pub is_const: bool,
    #[serde(default, rename = "static")]
    pub is_static: bool,
    #[serde(default, rename = "typedef")]
    pub is_typedef: bool,
    #[serde(default, rename = "define")]
    pub is_define: bool,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub expression: String,
    #[serde(default)]
    pub pos: Option<SourcePos>,
    #[serde(default)]
    pub src: String,
}

/// Base type of a declarator, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RawType {
    Plain {
        base: String,
        #[serde(default)]
        unsigned: bool,
        #[serde(default)]
        signed: bool,
        #[serde(default)]
        short: bool,
        #[serde(default)]
        long: u8,
    },
    Void,
    /// Struct or union. A missing or empty field list is a tag reference.
    Struct {
        #[serde(default)]
        tag: String,
        #[serde(default)]
        fields: Option<Vec<RawDecl>>,
        #[serde(default)]
        union: bool,
    },
    /// Enum. A missing or empty member list is a tag reference.
    Enum {
        #[serde(default)]
        tag: String,
        #[serde(default)]
        members: Option<Vec<RawMember>>,
    },
    Function {
        #[serde(default)]
        name: String,
        #[serde(default)]
        ret: Option<Box<RawType>>,
        #[serde(default)]
        ret_pointers: u8,
        #[serde(default)]
        params: Vec<RawDecl>,
        #[serde(default)]
        variadic: bool,
    },
    /// Reference to a typedef alias declared earlier in the unit.
    Named { name: String },
    /// `#define` constant; the type follows from the declaration's value.
    Define,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawMember {
    pub name: String,
    #[serde(default)]
    pub value: Option<Value>,
    #[serde(default)]
    pub expression: String,
    #[serde(default)]
    pub pos: Option<SourcePos>,
}

/// Parse manifest JSON into raw declarations.
pub fn parse_manifest(json: &str) -> Result<RawManifest, serde_json::Error> {
    serde_json::from_str(json)
}
