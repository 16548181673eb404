use super::*;

fn sample_enum() -> EnumSpec {
    let mut builder = EnumBuilder::new("Mode");
    builder.push_member(Decl::enumerator("OFF", Some(Value::Int32(0)), "0"));
    builder.freeze().0
}

#[test]
fn dispatch_matches_variant() {
    let specs: Vec<CSpec> = vec![
        PlainSpec::int().into(),
        VoidSpec::new().into(),
        DefineSpec::from_value(&Value::Int32(1)).into(),
        StructSpec::opaque("s", false).into(),
        FunctionSpec::returning_void("f").into(),
        sample_enum().into(),
        TypedefSpec::new("t", PlainSpec::int()).into(),
    ];
    let kinds: Vec<TypeKind> = specs.iter().map(CType::kind).collect();
    assert_eq!(
        kinds,
        [
            TypeKind::Plain,
            TypeKind::Void,
            TypeKind::Define,
            TypeKind::OpaqueStruct,
            TypeKind::Function,
            TypeKind::Enum,
            TypeKind::Type,
        ]
    );
}

#[test]
fn decoration_defaults_route_through_variant() {
    let mut spec = CSpec::from(sample_enum());
    spec.set_pointer_depth(1);
    spec.append_array_dimension(2);
    spec.append_array_dimension(0);
    spec.set_const(true);

    assert_eq!(spec.pointer_depth(), 1);
    assert_eq!(spec.array_suffix(), "[2]");
    assert_eq!(spec.variable_array_count(), 1);
    assert!(spec.is_const());
    assert_eq!(spec.render(), "const enum Mode*[2]");
    assert_eq!(spec.to_string(), spec.render());
}

#[test]
fn clone_value_is_independent() {
    let mut original = CSpec::from(PlainSpec::int());
    let copy = original.clone_value();
    original.set_pointer_depth(3);

    assert_eq!(original.render(), "int***");
    assert_eq!(copy.render(), "int");
}

#[test]
fn downcasts() {
    let spec = CSpec::from(sample_enum());
    assert!(spec.as_enum().is_some());
    assert!(spec.as_struct().is_none());
    assert!(CSpec::from(FunctionSpec::returning_void("f")).as_function().is_some());
}

#[test]
fn render_definition_expands_aggregates_only() {
    assert_eq!(CSpec::from(sample_enum()).render_definition(), "enum Mode {OFF = 0}");
    assert_eq!(CSpec::from(PlainSpec::uint()).render_definition(), "unsigned int");
}
