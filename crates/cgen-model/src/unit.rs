//! A fully parsed translation unit.

use indexmap::IndexMap;

use crate::ctype::{CSpec, CType};
use crate::decl::Decl;
use crate::decoration::Decoration;
use crate::diagnostics::Diagnostics;
use crate::kind::TypeKind;
use crate::spec::EnumSpec;

/// Declarations of one header in source order, plus lookup tables for the
/// types they define.
///
/// Registered specs are kept undecorated; lookups hand out copies that the
/// caller decorates for its own declarator site.
#[derive(Debug, Clone, Default)]
pub struct TranslationUnit {
    decls: Vec<Decl>,
    /// `"enum Color"`, `"struct point"`, ... → defining spec.
    tags: IndexMap<String, CSpec>,
    /// Typedef alias → aliased spec.
    aliases: IndexMap<String, CSpec>,
    diagnostics: Diagnostics,
}

impl TranslationUnit {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, decl: Decl) {
        self.decls.push(decl);
    }

    pub fn decls(&self) -> &[Decl] {
        &self.decls
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Decl> {
        self.decls.iter()
    }

    /// First declaration with the given name.
    pub fn find(&self, name: &str) -> Option<&Decl> {
        self.decls.iter().find(|d| d.name == name)
    }

    /// Enum specs of every declaration, in source order.
    pub fn enums(&self) -> impl Iterator<Item = &EnumSpec> {
        self.decls.iter().filter_map(|d| d.spec.as_enum())
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn diagnostics_mut(&mut self) -> &mut Diagnostics {
        &mut self.diagnostics
    }

    /// Register a tagged type definition. Anonymous specs are ignored.
    pub fn register_tag(&mut self, spec: &CSpec) {
        let Some(key) = tag_key(spec.kind(), spec.tag()) else {
            return;
        };
        let mut stored = spec.clone_value();
        strip_decoration(&mut stored);
        self.tags.insert(key, stored);
    }

    /// Copy of the type defined under `keyword tag`, e.g. `("enum", "Color")`.
    pub fn lookup_tag(&self, keyword: &str, tag: &str) -> Option<CSpec> {
        self.tags
            .get(&format!("{keyword} {tag}"))
            .map(CType::clone_value)
    }

    /// Record `alias` as a name for `spec`.
    pub fn register_alias(&mut self, alias: impl Into<String>, spec: CSpec) {
        self.aliases.insert(alias.into(), spec);
    }

    pub fn lookup_alias(&self, alias: &str) -> Option<CSpec> {
        self.aliases.get(alias).map(CType::clone_value)
    }

    /// Propagate a typedef alias to the registered definition of a tag.
    pub fn name_tag(&mut self, keyword: &str, tag: &str, alias: &str) {
        if let Some(spec) = self.tags.get_mut(&format!("{keyword} {tag}")) {
            spec.set_canonical_name(alias);
        }
    }

    pub fn aliases(&self) -> impl Iterator<Item = (&str, &CSpec)> {
        self.aliases.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn tag_key(kind: TypeKind, tag: &str) -> Option<String> {
    if tag.is_empty() {
        return None;
    }
    let keyword = match kind {
        TypeKind::Enum => "enum",
        TypeKind::Struct | TypeKind::OpaqueStruct => "struct",
        TypeKind::Union => "union",
        _ => return None,
    };
    Some(format!("{keyword} {tag}"))
}

fn strip_decoration(spec: &mut CSpec) {
    *spec.decoration_mut() = Decoration::default();
}
