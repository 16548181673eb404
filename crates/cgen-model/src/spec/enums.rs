//! Enumerations.
//!
//! An enum is assembled by [`EnumBuilder`] while the parser walks its body and
//! frozen into an [`EnumSpec`] once the closing brace is reached. The frozen
//! body (members and underlying type) is shared by every copy; tag, typedef
//! alias and decoration belong to each copy.

use std::sync::Arc;

use log::{debug, warn};

use crate::config::Config;
use crate::ctype::{CSpec, CType};
use crate::decl::Decl;
use crate::decoration::Decoration;
use crate::diagnostics::{Diagnostic, DiagnosticKind, Diagnostics, Severity};
use crate::kind::TypeKind;
use crate::value::Value;

use super::promote::{IntegerType, PromoteOutcome, Promoter};
use super::PlainSpec;

#[derive(Debug, Default, PartialEq)]
struct EnumBody {
    members: Vec<Decl>,
    underlying: Option<IntegerType>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct EnumSpec {
    tag: String,
    typedef: String,
    body: Arc<EnumBody>,
    deco: Decoration,
}

impl EnumSpec {
    /// Enum referenced by tag without a body in sight.
    pub fn opaque(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            typedef: String::new(),
            body: Arc::default(),
            deco: Decoration::default(),
        }
    }

    pub fn typedef(&self) -> &str {
        &self.typedef
    }

    /// Enumerators in declaration order.
    pub fn members(&self) -> &[Decl] {
        &self.body.members
    }

    /// Inferred underlying type. `None` when no member carried an integer
    /// literal.
    pub fn underlying(&self) -> Option<IntegerType> {
        self.body.underlying
    }

    pub fn underlying_spec(&self) -> Option<PlainSpec> {
        self.body.underlying.map(IntegerType::to_plain)
    }

    /// Whether `other` is a copy of the same frozen enum.
    pub fn shares_body(&self, other: &EnumSpec) -> bool {
        Arc::ptr_eq(&self.body, &other.body)
    }

    /// `enum Tag {A = 0,\nB = 1}` with the body expanded even when a tag or
    /// alias exists. Decoration is not part of a definition.
    pub fn render_definition(&self) -> String {
        let mut out = String::from("enum");
        if !self.tag.is_empty() {
            out.push(' ');
            out.push_str(&self.tag);
        }
        if !self.body.members.is_empty() {
            out.push_str(" {");
            out.push_str(&self.render_members());
            out.push('}');
        }
        out
    }

    fn render_members(&self) -> String {
        self.body
            .members
            .iter()
            .map(Decl::render_name)
            .collect::<Vec<_>>()
            .join(",\n")
    }
}

impl CType for EnumSpec {
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
            format!("enum_{}", self.tag)
        } else {
            self.typedef.clone()
        }
    }

    fn kind(&self) -> TypeKind {
        TypeKind::Enum
    }

    fn is_complete(&self) -> bool {
        !self.body.members.is_empty()
    }

    /// Alias, then `enum Tag`, then the inline body, then bare `enum `.
    fn render(&self) -> String {
        let mut out = String::from(self.deco.qualifier_prefix());
        if !self.typedef.is_empty() {
            out.push_str(&self.typedef);
        } else if !self.tag.is_empty() {
            out.push_str("enum ");
            out.push_str(&self.tag);
        } else if !self.body.members.is_empty() {
            out.push_str("enum {");
            out.push_str(&self.render_members());
            out.push('}');
        } else {
            out.push_str("enum ");
        }
        self.deco.write_suffix(&mut out);
        out
    }

    fn clone_value(&self) -> CSpec {
        CSpec::Enum(self.clone())
    }

    fn decoration(&self) -> &Decoration {
        &self.deco
    }

    fn decoration_mut(&mut self) -> &mut Decoration {
        &mut self.deco
    }
}

/// Parse-time view of an enum whose body is being walked.
#[derive(Debug)]
pub struct EnumBuilder {
    tag: String,
    typedef: String,
    members: Vec<Decl>,
    promoter: Promoter,
    deco: Decoration,
    diagnostics: Diagnostics,
    strict: bool,
}

impl EnumBuilder {
    pub fn new(tag: impl Into<String>) -> Self {
        Self::with_config(tag, &Config::default())
    }

    pub fn with_config(tag: impl Into<String>, config: &Config) -> Self {
        Self {
            tag: tag.into(),
            typedef: String::new(),
            members: Vec::new(),
            promoter: Promoter::new(config.promotion_policy()),
            deco: Decoration::default(),
            diagnostics: Diagnostics::new(),
            strict: config.is_strict(),
        }
    }

    pub fn set_typedef(&mut self, name: impl Into<String>) {
        self.typedef = name.into();
    }

    pub fn set_pointer_depth(&mut self, n: u8) {
        self.deco.set_pointers(n);
    }

    pub fn append_array_dimension(&mut self, size: u64) {
        self.deco.append_array(size);
    }

    pub fn set_const(&mut self, value: bool) {
        self.deco.set_const(value);
    }

    pub fn members(&self) -> &[Decl] {
        &self.members
    }

    /// Underlying type inferred from the members pushed so far.
    pub fn underlying(&self) -> Option<IntegerType> {
        self.promoter.current()
    }

    /// Refine the underlying type with one evaluated literal.
    pub fn promote(&mut self, value: &Value) -> PromoteOutcome {
        self.promoter.observe(value)
    }

    /// Append an enumerator and promote the underlying type with its literal.
    ///
    /// Members without an integer literal keep the current type and leave a
    /// diagnostic behind.
    pub fn push_member(&mut self, member: Decl) -> PromoteOutcome {
        let outcome = match &member.value {
            Some(value) => self.promote(value),
            None => PromoteOutcome::Unrecognized,
        };

        if outcome == PromoteOutcome::Unrecognized {
            let severity = self.severity();
            let (kind, message) = match &member.value {
                Some(value) => (
                    DiagnosticKind::UnrecognizedLiteral,
                    format!(
                        "enumerator `{}` has a {} literal; underlying type left unchanged",
                        member.name,
                        value.type_name()
                    ),
                ),
                None => (
                    DiagnosticKind::MissingLiteral,
                    format!(
                        "enumerator `{}` has no evaluated value; underlying type left unchanged",
                        member.name
                    ),
                ),
            };
            warn!("{message}");
            self.diagnostics
                .push(Diagnostic::new(kind, severity, message).with_pos(member.pos));
        }

        self.members.push(member);
        outcome
    }

    /// Freeze the body. Returns the enum and any diagnostics collected while
    /// its members were pushed.
    pub fn freeze(mut self) -> (EnumSpec, Diagnostics) {
        let underlying = self.promoter.current();
        if self.promoter.is_unrepresentable() {
            let (min, max) = self.promoter.range().unwrap_or_default();
            let severity = self.severity();
            let chosen = underlying.map_or("unset", IntegerType::c_name);
            let message = format!(
                "enum `{}` spans {min} to {max}; no integer type holds both, using `{chosen}`",
                self.display_name()
            );
            warn!("{message}");
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::UnrepresentableRange,
                severity,
                message,
            ));
        } else if self.promoter.diverged() {
            let legacy = self
                .promoter
                .legacy()
                .map_or("unset", IntegerType::c_name);
            let chosen = underlying.map_or("unset", IntegerType::c_name);
            let message = format!(
                "enum `{}` resolves to `{chosen}`; member order would have given `{legacy}`",
                self.display_name()
            );
            self.diagnostics.push(Diagnostic::new(
                DiagnosticKind::PromotionDiverged,
                Severity::Note,
                message,
            ));
        }
        debug!(
            "froze enum `{}` with {} members as {}",
            self.display_name(),
            self.members.len(),
            underlying.map_or("unset", IntegerType::c_name)
        );

        let spec = EnumSpec {
            tag: self.tag,
            typedef: self.typedef,
            body: Arc::new(EnumBody {
                members: self.members,
                underlying,
            }),
            deco: self.deco,
        };
        (spec, self.diagnostics)
    }

    fn severity(&self) -> Severity {
        if self.strict {
            Severity::Error
        } else {
            Severity::Warning
        }
    }

    fn display_name(&self) -> &str {
        match (self.typedef.is_empty(), self.tag.is_empty()) {
            (false, _) => &self.typedef,
            (true, false) => &self.tag,
            (true, true) => "<anonymous>",
        }
    }
}
