//! Type of a `#define` constant, inferred from its evaluated literal.

use crate::ctype::{CSpec, CType};
use crate::decoration::Decoration;
use crate::kind::TypeKind;
use crate::value::Value;

use super::PlainSpec;

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct DefineSpec {
    inner: PlainSpec,
}

impl DefineSpec {
    pub fn from_value(value: &Value) -> Self {
        let inner = match value {
            Value::Int32(_) => PlainSpec::int(),
            Value::Uint32(_) => PlainSpec::uint(),
            Value::Int64(_) => PlainSpec::long(),
            Value::Uint64(_) => PlainSpec::ulong(),
            Value::Float(_) => PlainSpec::new("double"),
            Value::Char(_) => PlainSpec::new("char"),
            Value::Str(_) => {
                let mut spec = PlainSpec::new("char");
                spec.set_pointer_depth(1);
                spec
            }
        };
        Self { inner }
    }

    /// The plain type the constant is emitted as.
    pub fn plain(&self) -> &PlainSpec {
        &self.inner
    }
}

impl CType for DefineSpec {
    fn base_name(&self) -> &str {
        self.inner.base_name()
    }

    fn tag(&self) -> &str {
        ""
    }

    fn set_canonical_name(&mut self, name: &str) {
        self.inner.set_canonical_name(name);
    }

    fn emitter_name(&self) -> String {
        self.inner.emitter_name()
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Define
    }

    fn is_complete(&self) -> bool {
        true
    }

    fn render(&self) -> String {
        self.inner.render()
    }

    fn clone_value(&self) -> CSpec {
        CSpec::Define(self.clone())
    }

    fn decoration(&self) -> &Decoration {
        self.inner.decoration()
    }

    fn decoration_mut(&mut self) -> &mut Decoration {
        self.inner.decoration_mut()
    }
}
