//! Named declarations.
//!
//! A `Decl` binds a [`CSpec`] to a symbol. The same shape serves top-level
//! declarations, struct fields, function parameters and enumerators.

use serde::{Deserialize, Serialize};

use crate::ctype::{CSpec, CType};
use crate::kind::TypeKind;
use crate::spec::PlainSpec;
use crate::value::Value;

/// Line/column position in the parsed header (1-based).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SourcePos {
    pub line: u32,
    pub column: u32,
}

impl SourcePos {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl std::fmt::Display for SourcePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Decl {
    pub spec: CSpec,
    /// Empty for unnamed declarators, e.g. `int (char *, int)`.
    pub name: String,
    /// Evaluated literal for enumerators and `#define` constants.
    pub value: Option<Value>,
    /// Initializer as written in the source, before evaluation.
    pub expression: String,
    pub is_static: bool,
    pub is_typedef: bool,
    pub is_define: bool,
    pub pos: Option<SourcePos>,
    /// Raw source text, kept for diagnostics.
    pub src: String,
}

impl Decl {
    pub fn new(name: impl Into<String>, spec: impl Into<CSpec>) -> Self {
        Self {
            spec: spec.into(),
            name: name.into(),
            value: None,
            expression: String::new(),
            is_static: false,
            is_typedef: false,
            is_define: false,
            pos: None,
            src: String::new(),
        }
    }

    /// Enumerator constant. Enumerators are `int` in C regardless of the
    /// underlying type eventually chosen for their enum.
    pub fn enumerator(
        name: impl Into<String>,
        value: Option<Value>,
        expression: impl Into<String>,
    ) -> Self {
        Self {
            value,
            expression: expression.into(),
            ..Self::new(name, PlainSpec::int())
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_expression(mut self, expression: impl Into<String>) -> Self {
        self.expression = expression.into();
        self
    }

    pub fn at(mut self, pos: SourcePos) -> Self {
        self.pos = Some(pos);
        self
    }

    pub fn kind(&self) -> TypeKind {
        self.spec.kind()
    }

    pub fn is_opaque(&self) -> bool {
        self.spec.is_opaque()
    }

    pub fn is_const(&self) -> bool {
        self.spec.is_const()
    }

    pub fn set_pointer_depth(&mut self, n: u8) {
        self.spec.set_pointer_depth(n);
    }

    pub fn append_array_dimension(&mut self, size: u64) {
        self.spec.append_array_dimension(size);
    }

    /// `<type> <name> = <expression>`, omitting the parts that are empty.
    pub fn render(&self) -> String {
        let mut out = self.spec.render();
        if !self.name.is_empty() {
            out.push(' ');
            out.push_str(&self.name);
        }
        self.write_initializer(&mut out);
        out
    }

    /// Name and initializer without the type, as written in enum bodies.
    pub fn render_name(&self) -> String {
        let mut out = self.name.clone();
        self.write_initializer(&mut out);
        out
    }

    fn write_initializer(&self, out: &mut String) {
        if !self.expression.is_empty() {
            out.push_str(" = ");
            out.push_str(&self.expression);
        }
    }
}

impl std::fmt::Display for Decl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
