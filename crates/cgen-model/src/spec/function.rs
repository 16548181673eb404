//! Function types: prototypes and function pointers.

use crate::ctype::{CSpec, CType};
use crate::decl::Decl;
use crate::decoration::Decoration;
use crate::kind::TypeKind;

use super::VoidSpec;

#[derive(Clone, Debug, PartialEq)]
pub struct FunctionSpec {
    /// Declarator name of the function; reported as its tag.
    name: String,
    typedef: String,
    ret: Box<CSpec>,
    params: Vec<Decl>,
    variadic: bool,
    deco: Decoration,
}

impl FunctionSpec {
    pub fn new(name: impl Into<String>, ret: impl Into<CSpec>) -> Self {
        Self {
            name: name.into(),
            typedef: String::new(),
            ret: Box::new(ret.into()),
            params: Vec::new(),
            variadic: false,
            deco: Decoration::default(),
        }
    }

    /// Function returning `void`.
    pub fn returning_void(name: impl Into<String>) -> Self {
        Self::new(name, VoidSpec::new())
    }

    pub fn push_param(&mut self, param: Decl) {
        self.params.push(param);
    }

    pub fn set_variadic(&mut self, value: bool) {
        self.variadic = value;
    }

    pub fn ret(&self) -> &CSpec {
        &self.ret
    }

    pub fn params(&self) -> &[Decl] {
        &self.params
    }

    pub fn is_variadic(&self) -> bool {
        self.variadic
    }

    fn render_params(&self) -> String {
        let mut parts: Vec<String> = self.params.iter().map(Decl::render).collect();
        if self.variadic {
            parts.push("...".to_string());
        }
        if parts.is_empty() {
            return "void".to_string();
        }
        parts.join(", ")
    }
}

impl CType for FunctionSpec {
    fn base_name(&self) -> &str {
        if self.typedef.is_empty() {
            &self.name
        } else {
            &self.typedef
        }
    }

    fn tag(&self) -> &str {
        &self.name
    }

    fn set_canonical_name(&mut self, name: &str) {
        self.typedef = name.to_string();
    }

    fn emitter_name(&self) -> String {
        if self.typedef.is_empty() {
            format!("func_{}", self.name)
        } else {
            self.typedef.clone()
        }
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Function
    }

    fn is_complete(&self) -> bool {
        true
    }

    /// `int (*)(char *s, ...)` for pointers, `int (void)` for prototypes.
    fn render(&self) -> String {
        let mut out = String::from(self.deco.qualifier_prefix());
        if !self.typedef.is_empty() {
            out.push_str(&self.typedef);
            self.deco.write_suffix(&mut out);
            return out;
        }

        out.push_str(&self.ret.render());
        out.push_str(" (");
        if !self.deco.is_bare() {
            self.deco.write_suffix(&mut out);
            out.push_str(")(");
        }
        out.push_str(&self.render_params());
        out.push(')');
        out
    }

    fn clone_value(&self) -> CSpec {
        CSpec::Function(self.clone())
    }

    fn decoration(&self) -> &Decoration {
        &self.deco
    }

    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.deco
    }
}
