//! Typedef aliases over another spec.

use crate::ctype::{CSpec, CType};
use crate::decoration::Decoration;
use crate::kind::TypeKind;

/// `typedef <target> name;`, used where the alias can't be folded into the
/// target itself (decorated or primitive targets).
#[derive(Clone, Debug, PartialEq)]
pub struct TypedefSpec {
    name: String,
    target: Box<CSpec>,
    deco: Decoration,
}

impl TypedefSpec {
    pub fn new(name: impl Into<String>, target: impl Into<CSpec>) -> Self {
        Self {
            name: name.into(),
            target: Box::new(target.into()),
            deco: Decoration::default(),
        }
    }

    pub fn target(&self) -> &CSpec {
        &self.target
    }
}

impl CType for TypedefSpec {
    fn base_name(&self) -> &str {
        &self.name
    }

    fn tag(&self) -> &str {
        self.target.tag()
    }

    fn set_canonical_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    fn emitter_name(&self) -> String {
        self.name.clone()
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Type
    }

    fn is_complete(&self) -> bool {
        self.target.is_complete()
    }

    fn render(&self) -> String {
        let mut out = String::from(self.deco.qualifier_prefix());
        out.push_str(&self.name);
        self.deco.write_suffix(&mut out);
        out
    }

    fn clone_value(&self) -> CSpec {
        CSpec::Typedef(self.clone())
    }

    fn decoration(&self) -> &Decoration {
        &self.deco
    }

    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.deco
    }
}
