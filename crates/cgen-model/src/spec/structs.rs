//! Structs and unions.

use std::sync::Arc;

use crate::ctype::{CSpec, CType};
use crate::decl::Decl;
use crate::decoration::Decoration;
use crate::kind::TypeKind;

#[derive(Clone, Debug, PartialEq)]
pub struct StructSpec {
    tag: String,
    typedef: String,
    is_union: bool,
    fields: Arc<[Decl]>,
    deco: Decoration,
}

impl StructSpec {
    /// Struct or union with a field list. An empty list yields an opaque type.
    pub fn new(tag: impl Into<String>, is_union: bool, fields: Vec<Decl>) -> Self {
        Self {
            tag: tag.into(),
            typedef: String::new(),
            is_union,
            fields: fields.into(),
            deco: Decoration::default(),
        }
    }

    /// Forward declaration: `struct Tag;`.
    pub fn opaque(tag: impl Into<String>, is_union: bool) -> Self {
        Self::new(tag, is_union, Vec::new())
    }

    pub fn typedef(&self) -> &str {
        &self.typedef
    }

    pub fn is_union(&self) -> bool {
        self.is_union
    }

    pub fn fields(&self) -> &[Decl] {
        &self.fields
    }

    pub fn shares_fields(&self, other: &StructSpec) -> bool {
        Arc::ptr_eq(&self.fields, &other.fields)
    }

    fn keyword(&self) -> &'static str {
        if self.is_union { "union" } else { "struct" }
    }

    fn render_fields(&self) -> String {
        self.fields
            .iter()
            .map(|f| format!("{};", f.render()))
            .collect::<Vec<_>>()
            .join(" ")
    }

    /// `struct Tag {int a; char *b;}`, body expanded regardless of aliases.
    pub fn render_definition(&self) -> String {
        let mut out = String::from(self.keyword());
        if !self.tag.is_empty() {
            out.push(' ');
            out.push_str(&self.tag);
        }
        if !self.fields.is_empty() {
            out.push_str(" {");
            out.push_str(&self.render_fields());
            out.push('}');
        }
        out
    }
}

impl CType for StructSpec {
    fn base_name(&self) -> &str {
        if self.typedef.is_empty() {
            &self.tag
        } else {
            &self.typedef
        }
    }

    fn tag(&self) -> &str {
        &self.tag
    }

    fn set_canonical_name(&mut self, name: &str) {
        self.typedef = name.to_string();
    }

    fn emitter_name(&self) -> String {
        if self.typedef.is_empty() {
            format!("{}_{}", self.keyword(), self.tag)
        } else {
            self.typedef.clone()
        }
    }

    fn kind(&self) -> TypeKind {
        match (self.is_union, self.fields.is_empty()) {
            (true, _) => TypeKind::Union,
            (false, false) => TypeKind::Struct,
            (false, true) => TypeKind::OpaqueStruct,
        }
    }

    fn is_complete(&self) -> bool {
        !self.fields.is_empty()
    }

    fn render(&self) -> String {
        let mut out = String::from(self.deco.qualifier_prefix());
        if !self.typedef.is_empty() {
            out.push_str(&self.typedef);
        } else if !self.tag.is_empty() {
            out.push_str(self.keyword());
            out.push(' ');
            out.push_str(&self.tag);
        } else if !self.fields.is_empty() {
            out.push_str(self.keyword());
            out.push_str(" {");
            out.push_str(&self.render_fields());
            out.push('}');
        } else {
            out.push_str(self.keyword());
            out.push(' ');
        }
        self.deco.write_suffix(&mut out);
        out
    }

    fn clone_value(&self) -> CSpec {
        CSpec::Struct(self.clone())
    }

    fn decoration(&self) -> &Decoration {
        &self.deco
    }

    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.deco
    }
}
