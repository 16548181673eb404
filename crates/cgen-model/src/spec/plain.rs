//! Primitive types: builtin integers and floats, library scalars, `void`.

use crate::ctype::{CSpec, CType};
use crate::decoration::Decoration;
use crate::kind::TypeKind;

/// A primitive C type such as `unsigned long` or `size_t`.
///
/// `base` holds the last word of the spelling; modifiers are kept apart so
/// that `long`, `long int` and `signed long` all map to the same emitter name.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct PlainSpec {
    base: String,
    unsigned: bool,
    signed: bool,
    short: bool,
    long: u8,
    /// Typedef alias recorded through `set_canonical_name`.
    raw: String,
    deco: Decoration,
}

impl PlainSpec {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            unsigned: false,
            signed: false,
            short: false,
            long: 0,
            raw: String::new(),
            deco: Decoration::default(),
        }
    }

    pub fn int() -> Self {
        Self::new("int")
    }

    pub fn uint() -> Self {
        Self::int().unsigned(true)
    }

    pub fn long() -> Self {
        Self::new("long")
    }

    pub fn ulong() -> Self {
        Self::long().unsigned(true)
    }

    pub fn unsigned(mut self, value: bool) -> Self {
        self.unsigned = value;
        self
    }

    pub fn signed(mut self, value: bool) -> Self {
        self.signed = value;
        self
    }

    pub fn short(mut self, value: bool) -> Self {
        self.short = value;
        self
    }

    /// Number of extra `long` modifiers written before `base`.
    pub fn longs(mut self, count: u8) -> Self {
        self.long = count;
        self
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn is_unsigned(&self) -> bool {
        self.unsigned
    }

    /// C spelling without qualifiers or decoration.
    pub fn spelling(&self) -> String {
        let mut out = String::new();
        if self.unsigned {
            out.push_str("unsigned ");
        } else if self.signed {
            out.push_str("signed ");
        }
        if self.short {
            out.push_str("short ");
        }
        for _ in 0..self.long {
            out.push_str("long ");
        }
        out.push_str(&self.base);
        out
    }

    /// cgo-style identifier for builtin arithmetic types.
    ///
    /// Returns `None` for library scalars (`size_t`, `int32_t`, ...), which
    /// keep their own name.
    fn builtin_name(&self) -> Option<String> {
        let longs = self.long.saturating_add(u8::from(self.base == "long"));
        let width = match (self.base.as_str(), self.short, longs) {
            ("char", false, 0) => {
                let prefix = match (self.unsigned, self.signed) {
                    (true, _) => "u",
                    (false, true) => "s",
                    (false, false) => "",
                };
                return Some(format!("{prefix}char"));
            }
            ("float", false, 0) => return Some("float".to_string()),
            ("double", false, 0) => return Some("double".to_string()),
            ("double", false, 1) => return Some("longdouble".to_string()),
            ("short", false, 0) | ("int", true, 0) => "short",
            ("int" | "long", false, 0) => "int",
            ("int" | "long", false, 1) => "long",
            ("int" | "long", false, 2) => "longlong",
            _ => return None,
        };
        let prefix = if self.unsigned { "u" } else { "" };
        Some(format!("{prefix}{width}"))
    }
}

impl CType for PlainSpec {
    fn base_name(&self) -> &str {
        if self.raw.is_empty() {
            &self.base
        } else {
            &self.raw
        }
    }

    fn tag(&self) -> &str {
        ""
    }

    fn set_canonical_name(&mut self, name: &str) {
        self.raw = name.to_string();
    }

    fn emitter_name(&self) -> String {
        if !self.raw.is_empty() {
            return self.raw.clone();
        }
        self.builtin_name()
            .unwrap_or_else(|| self.spelling().replace(' ', "_"))
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Plain
    }

    fn is_complete(&self) -> bool {
        true
    }

    fn render(&self) -> String {
        let mut out = String::from(self.deco.qualifier_prefix());
        if self.raw.is_empty() {
            out.push_str(&self.spelling());
        } else {
            out.push_str(&self.raw);
        }
        self.deco.write_suffix(&mut out);
        out
    }

    fn clone_value(&self) -> CSpec {
        CSpec::Plain(self.clone())
    }

    fn decoration(&self) -> &Decoration {
        &self.deco
    }

    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.deco
    }
}

/// `void`, usually behind at least one pointer.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct VoidSpec {
    raw: String,
    deco: Decoration,
}

impl VoidSpec {
    pub fn new() -> Self {
        Self::default()
    }
}

impl CType for VoidSpec {
    fn base_name(&self) -> &str {
        if self.raw.is_empty() { "void" } else { &self.raw }
    }

    fn tag(&self) -> &str {
        ""
    }

    fn set_canonical_name(&mut self, name: &str) {
        self.raw = name.to_string();
    }

    fn emitter_name(&self) -> String {
        self.base_name().to_string()
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Void
    }

    /// `void *` is a complete object type; `void` itself never is.
    fn is_complete(&self) -> bool {
        self.deco.pointers() > 0
    }

    fn render(&self) -> String {
        let mut out = String::from(self.deco.qualifier_prefix());
        out.push_str(self.base_name());
        self.deco.write_suffix(&mut out);
        out
    }

    fn clone_value(&self) -> CSpec {
        CSpec::Void(self.clone())
    }

    fn decoration(&self) -> &Decoration {
        &self.deco
    }

    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.deco
    }
}
