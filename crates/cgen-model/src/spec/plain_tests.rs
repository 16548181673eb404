use super::*;
use crate::ctype::CType;
use crate::kind::TypeKind;
use crate::value::Value;

#[test]
fn spelling_keeps_modifiers() {
    assert_eq!(PlainSpec::uint().render(), "unsigned int");
    assert_eq!(PlainSpec::int().longs(1).render(), "long int");
    assert_eq!(PlainSpec::new("char").signed(true).render(), "signed char");
    assert_eq!(PlainSpec::int().short(true).unsigned(true).render(), "unsigned short int");
    assert_eq!(PlainSpec::new("size_t").render(), "size_t");
}

#[test]
fn builtin_emitter_names() {
    let cases = [
        (PlainSpec::int(), "int"),
        (PlainSpec::uint(), "uint"),
        (PlainSpec::long(), "long"),
        (PlainSpec::ulong(), "ulong"),
        (PlainSpec::int().longs(1), "long"),
        (PlainSpec::long().longs(1), "longlong"),
        (PlainSpec::int().longs(2).unsigned(true), "ulonglong"),
        (PlainSpec::new("short"), "short"),
        (PlainSpec::int().short(true).unsigned(true), "ushort"),
        (PlainSpec::new("char"), "char"),
        (PlainSpec::new("char").signed(true), "schar"),
        (PlainSpec::new("char").unsigned(true), "uchar"),
        (PlainSpec::new("float"), "float"),
        (PlainSpec::new("double").longs(1), "longdouble"),
    ];
    for (spec, expected) in cases {
        assert_eq!(spec.emitter_name(), expected, "{}", spec.spelling());
    }
}

#[test]
fn library_scalars_keep_their_name() {
    assert_eq!(PlainSpec::new("size_t").emitter_name(), "size_t");
    assert_eq!(PlainSpec::new("int32_t").emitter_name(), "int32_t");
}

#[test]
fn canonical_name_overrides_spelling() {
    let mut spec = PlainSpec::uint();
    spec.set_canonical_name("u32");
    assert_eq!(spec.base_name(), "u32");
    assert_eq!(spec.emitter_name(), "u32");
    assert_eq!(spec.render(), "u32");
    assert_eq!(spec.base(), "int");
}

#[test]
fn decoration_renders_after_spelling() {
    let mut spec = PlainSpec::new("char");
    spec.set_const(true);
    spec.set_pointer_depth(2);
    spec.append_array_dimension(2);
    spec.append_array_dimension(3);
    assert_eq!(spec.render(), "const char**[2][3]");
}

#[test]
fn plain_is_always_complete() {
    let spec = PlainSpec::int();
    assert!(spec.is_complete());
    assert!(!spec.is_opaque());
    assert_eq!(spec.kind(), TypeKind::Plain);
    assert_eq!(spec.tag(), "");
}

#[test]
fn void_needs_a_pointer_to_be_complete() {
    let mut spec = VoidSpec::new();
    assert_eq!(spec.render(), "void");
    assert!(!spec.is_complete());
    assert_eq!(spec.kind(), TypeKind::Void);

    spec.set_pointer_depth(1);
    assert_eq!(spec.render(), "void*");
    assert!(spec.is_complete());
}

#[test]
fn define_type_follows_literal() {
    let cases = [
        (Value::Int32(1), "int"),
        (Value::Uint32(1), "unsigned int"),
        (Value::Int64(1), "long"),
        (Value::Uint64(1), "unsigned long"),
        (Value::Float(1.0), "double"),
        (Value::Char('x'), "char"),
        (Value::Str("hi".into()), "char*"),
    ];
    for (value, expected) in cases {
        let spec = DefineSpec::from_value(&value);
        assert_eq!(spec.render(), expected);
        assert_eq!(spec.kind(), TypeKind::Define);
    }
}

#[test]
fn excessive_long_count_keeps_spelling() {
    let spec = PlainSpec::long().longs(u8::MAX);
    let name = spec.emitter_name();
    assert!(name.starts_with("long_long_"));
    assert!(name.ends_with("_long"));
}
