use super::*;
use crate::ctype::CType;
use crate::decl::Decl;
use crate::kind::TypeKind;

fn puts() -> FunctionSpec {
    let mut s = PlainSpec::new("char");
    s.set_pointer_depth(1);
    s.set_const(true);
    let mut spec = FunctionSpec::new("puts", PlainSpec::int());
    spec.push_param(Decl::new("s", s));
    spec
}

#[test]
fn prototype_renders_parameters() {
    let spec = puts();
    assert_eq!(spec.render(), "int (const char* s)");
    assert_eq!(spec.kind(), TypeKind::Function);
    assert!(spec.is_complete());
}

#[test]
fn pointer_wraps_declarator() {
    let mut spec = puts();
    spec.set_pointer_depth(1);
    assert_eq!(spec.render(), "int (*)(const char* s)");
}

#[test]
fn no_parameters_renders_void() {
    let spec = FunctionSpec::returning_void("tick");
    assert_eq!(spec.render(), "void (void)");
    assert_eq!(spec.ret().render(), "void");
    assert!(spec.params().is_empty());
}

#[test]
fn variadic_appends_ellipsis() {
    let mut spec = FunctionSpec::new("printf", PlainSpec::int());
    let mut fmt = PlainSpec::new("char");
    fmt.set_pointer_depth(1);
    spec.push_param(Decl::new("fmt", fmt));
    spec.set_variadic(true);

    assert!(spec.is_variadic());
    assert_eq!(spec.render(), "int (char* fmt, ...)");
}

#[test]
fn naming() {
    let mut spec = puts();
    assert_eq!(spec.tag(), "puts");
    assert_eq!(spec.emitter_name(), "func_puts");

    spec.set_canonical_name("puts_fn");
    assert_eq!(spec.emitter_name(), "puts_fn");
    assert_eq!(spec.base_name(), "puts_fn");
    assert_eq!(spec.render(), "puts_fn");
}
