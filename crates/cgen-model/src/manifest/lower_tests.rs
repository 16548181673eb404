use indoc::indoc;

use crate::config::Config;
use crate::ctype::CType;
use crate::diagnostics::{DiagnosticKind, Severity};
use crate::spec::{IntegerType, PromotionPolicy};
use crate::unit::TranslationUnit;
use crate::Error;

use super::*;

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn load_ok(json: &str) -> TranslationUnit {
    init_logger();
    load(json, &Config::default()).unwrap()
}

fn dump(unit: &TranslationUnit) -> String {
    unit.iter()
        .map(|d| {
            let name = if d.name.is_empty() { "_" } else { &d.name };
            format!("{name}: {} [{}] {}", d.spec.render(), d.kind(), d.spec.emitter_name())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

const COLORS: &str = indoc! {r#"
    {
      "declarations": [
        {
          "type": {
            "kind": "enum",
            "tag": "Color",
            "members": [
              {"name": "RED", "value": {"int32": 0}, "expression": "0"},
              {"name": "GREEN", "value": {"int32": 1}, "expression": "1"}
            ]
          }
        },
        {"name": "Color_t", "typedef": true, "type": {"kind": "enum", "tag": "Color"}},
        {"name": "palette", "pointers": 2, "arrays": [4], "type": {"kind": "enum", "tag": "Color"}},
        {"name": "primary", "type": {"kind": "named", "name": "Color_t"}}
      ]
    }
"#};

#[test]
fn enum_references_get_own_copies() {
    let unit = load_ok(COLORS);

    insta::assert_snapshot!(dump(&unit), @r"
    _: enum Color [enum] enum_Color
    Color_t: Color_t [enum] Color_t
    palette: Color_t**[4] [enum] Color_t
    primary: Color_t [enum] Color_t
    ");

    let enums: Vec<_> = unit.enums().collect();
    assert_eq!(enums.len(), 4);
    assert!(enums.iter().all(|e| e.shares_body(enums[0])));
    assert_eq!(enums[0].underlying(), Some(IntegerType::UnsignedInt));
    assert_eq!(enums[0].pointer_depth(), 0);
    assert_eq!(enums[2].pointer_depth(), 2);
    assert!(unit.diagnostics().is_empty());
}

#[test]
fn plain_declarations() {
    let json = indoc! {r#"
        {
          "declarations": [
            {"name": "n", "type": {"kind": "plain", "base": "int", "unsigned": true, "long": 2}},
            {"name": "name", "const": true, "pointers": 1, "type": {"kind": "plain", "base": "char"}},
            {"name": "grid", "arrays": [2, 3], "type": {"kind": "plain", "base": "double"}},
            {"name": "tail", "arrays": [0], "type": {"kind": "plain", "base": "int"}},
            {"name": "data", "pointers": 1, "type": {"kind": "plain", "base": "void"}},
            {"name": "len", "static": true, "type": {"kind": "plain", "base": "size_t"}}
          ]
        }
    "#};
    let unit = load_ok(json);

    insta::assert_snapshot!(dump(&unit), @r"
    n: unsigned long long int [plain] ulonglong
    name: const char* [plain] char
    grid: double[2][3] [plain] double
    tail: int [plain] int
    data: void* [void] void
    len: size_t [plain] size_t
    ");

    assert_eq!(unit.find("tail").unwrap().spec.variable_array_count(), 1);
    assert!(unit.find("len").unwrap().is_static);
    assert!(unit.find("name").unwrap().is_const());
}

#[test]
fn struct_typedef_folds_into_tag() {
    let json = indoc! {r#"
        {
          "declarations": [
            {
              "name": "point_t",
              "typedef": true,
              "type": {
                "kind": "struct",
                "tag": "point",
                "fields": [
                  {"name": "x", "type": {"kind": "plain", "base": "int"}},
                  {"name": "y", "type": {"kind": "plain", "base": "int"}}
                ]
              }
            },
            {"name": "origin", "pointers": 1, "type": {"kind": "struct", "tag": "point"}},
            {"name": "handle", "type": {"kind": "struct", "tag": "opaque"}},
            {"name": "num", "type": {"kind": "struct", "tag": "num", "union": true,
              "fields": [{"name": "i", "type": {"kind": "plain", "base": "int"}}]}}
          ]
        }
    "#};
    let unit = load_ok(json);

    insta::assert_snapshot!(dump(&unit), @r"
    point_t: point_t [struct] point_t
    origin: point_t* [struct] point_t
    handle: struct opaque [opaque_struct] struct_opaque
    num: union num [union] union_num
    ");

    let origin = unit.find("origin").unwrap().spec.as_struct().unwrap();
    assert_eq!(origin.render_definition(), "struct point {int x; int y;}");
}

#[test]
fn decorated_typedef_becomes_alias() {
    let json = indoc! {r#"
        {
          "declarations": [
            {"name": "string", "typedef": true, "pointers": 1, "type": {"kind": "plain", "base": "char"}},
            {"name": "greeting", "type": {"kind": "named", "name": "string"}}
          ]
        }
    "#};
    let unit = load_ok(json);

    let greeting = unit.find("greeting").unwrap();
    assert_eq!(greeting.spec.render(), "string");
    assert_eq!(greeting.spec.resolve().render(), "char*");
}

#[test]
fn function_prototypes() {
    let json = indoc! {r#"
        {
          "declarations": [
            {
              "name": "printf",
              "type": {
                "kind": "function",
                "ret": {"kind": "plain", "base": "int"},
                "params": [
                  {"name": "fmt", "const": true, "pointers": 1, "type": {"kind": "plain", "base": "char"}}
                ],
                "variadic": true
              }
            },
            {"name": "on_exit", "pointers": 1, "type": {"kind": "function"}}
          ]
        }
    "#};
    let unit = load_ok(json);

    insta::assert_snapshot!(dump(&unit), @r"
    printf: int (const char* fmt, ...) [function] func_printf
    on_exit: void (*)(void) [function] func_on_exit
    ");
}

#[test]
fn defines_take_type_from_value() {
    let json = indoc! {r#"
        {
          "declarations": [
            {"name": "MAX", "define": true, "type": {"kind": "define"}, "value": {"uint64": 18446744073709551615}, "expression": "~0UL"},
            {"name": "NAME", "define": true, "type": {"kind": "define"}, "value": {"str": "cgen"}}
          ]
        }
    "#};
    let unit = load_ok(json);

    insta::assert_snapshot!(dump(&unit), @r"
    MAX: unsigned long [define] ulong
    NAME: char* [define] char
    ");
    assert!(unit.find("MAX").unwrap().is_define);
}

#[test]
fn enum_promotion_follows_config() {
    let json = indoc! {r#"
        {
          "declarations": [
            {"type": {"kind": "enum", "tag": "Wide", "members": [
              {"name": "LOW", "value": {"int64": -5}},
              {"name": "ONE", "value": {"int32": 1}}
            ]}}
          ]
        }
    "#};
    init_logger();

    let covering = load(json, &Config::default()).unwrap();
    let spec = covering.enums().next().unwrap();
    assert_eq!(spec.underlying(), Some(IntegerType::SignedLong));
    assert_eq!(
        covering
            .diagnostics()
            .of_kind(DiagnosticKind::PromotionDiverged)
            .count(),
        1
    );

    let config = Config::new().promotion(PromotionPolicy::Legacy);
    let legacy = load(json, &config).unwrap();
    let spec = legacy.enums().next().unwrap();
    assert_eq!(spec.underlying(), Some(IntegerType::UnsignedInt));
    assert!(legacy.diagnostics().is_empty());
}

#[test]
fn member_diagnostics_reach_the_unit() {
    let json = indoc! {r#"
        {
          "declarations": [
            {"type": {"kind": "enum", "tag": "E", "members": [
              {"name": "A", "expression": "SOME_MACRO", "pos": {"line": 2, "column": 3}}
            ]}}
          ]
        }
    "#};
    init_logger();

    let unit = load(json, &Config::default()).unwrap();
    let diags: Vec<_> = unit.diagnostics().iter().collect();
    assert_eq!(diags.len(), 1);
    assert_eq!(diags[0].kind, DiagnosticKind::MissingLiteral);
    assert_eq!(diags[0].severity, Severity::Warning);

    let strict = load(json, &Config::new().strict(true)).unwrap();
    assert!(strict.diagnostics().has_errors());
}

#[test]
fn unknown_named_type() {
    init_logger();
    let json = r#"{"declarations": [{"name": "x", "type": {"kind": "named", "name": "nope"}}]}"#;
    let err = load(json, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::UnknownType { ref name } if name == "nope"));
    assert_eq!(err.to_string(), "unknown type name `nope`");
}

#[test]
fn invalid_plain_type() {
    init_logger();
    let json = r#"{"declarations": [{"name": "x", "type": {"kind": "plain", "base": "int", "long": 3}}]}"#;
    let err = load(json, &Config::default()).unwrap_err();
    assert!(matches!(err, Error::InvalidPlain { .. }));
}

#[test]
fn define_without_value() {
    init_logger();
    let json = r#"{"declarations": [{"name": "X", "type": {"kind": "define"}}]}"#;
    let err = load(json, &Config::default()).unwrap_err();
    assert_eq!(err.to_string(), "define `X` has no evaluated value");
}

#[test]
fn malformed_json() {
    init_logger();
    let err = load("{\"declarations\": [", &Config::default()).unwrap_err();
    assert!(matches!(err, Error::Parse(_)));

    let err = load(r#"{"declarations": [{"type": {"kind": "bogus"}}]}"#, &Config::default())
        .unwrap_err();
    assert!(matches!(err, Error::Parse(_)));
}

#[test]
fn empty_manifest() {
    let unit = load_ok("{}");
    assert!(unit.is_empty());
}

#[test]
fn qualified_typedef_does_not_rename_tag() {
    let json = indoc! {r#"
        {
          "declarations": [
            {"type": {"kind": "enum", "tag": "Color", "members": [{"name": "R", "value": {"int32": 0}}]}},
            {"name": "CColor", "typedef": true, "const": true, "type": {"kind": "enum", "tag": "Color"}},
            {"name": "c", "type": {"kind": "enum", "tag": "Color"}},
            {"name": "k", "type": {"kind": "named", "name": "CColor"}}
          ]
        }
    "#};
    let unit = load_ok(json);

    insta::assert_snapshot!(dump(&unit), @r"
    _: enum Color [enum] enum_Color
    CColor: const enum Color [enum] enum_Color
    c: enum Color [enum] enum_Color
    k: CColor [type] CColor
    ");
}
