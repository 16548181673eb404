use cgen_model::{Config, TranslationUnit};
use indoc::indoc;

use super::format_diagnostics;
use super::render::format_unit;
use crate::colors::Colors;

const FIXTURE: &str = include_str!("fixture.json");

fn load(json: &str, config: &Config) -> TranslationUnit {
    cgen_model::manifest::load(json, config).unwrap()
}

#[test]
fn render_fixture() {
    let unit = load(FIXTURE, &Config::default());

    insta::assert_snapshot!(format_unit(&unit, Colors::OFF), @r"
    enum Color {RED = 0,
    GREEN = 1};
    typedef enum Color {RED = 0,
    GREEN = 1} Color_t;
    #define MAX_COLORS 8
    static Color_t*[4] palette;
    unsigned int count = 0;
    struct handle* h;
    ");
}

#[test]
fn define_without_expression_prints_value() {
    let json = indoc! {r#"
        {"declarations": [
          {"name": "LIMIT", "define": true, "type": {"kind": "define"}, "value": {"uint32": 10}}
        ]}
    "#};
    let unit = load(json, &Config::default());
    assert_eq!(format_unit(&unit, Colors::OFF), "#define LIMIT 10u\n");
}

#[test]
fn colors_wrap_names() {
    let json = r#"{"declarations": [{"name": "n", "type": {"kind": "plain", "base": "int"}}]}"#;
    let unit = load(json, &Config::default());
    let out = format_unit(&unit, Colors::ON);
    assert!(out.contains("\x1b[34mn\x1b[0m"));
}

#[test]
fn diagnostics_lines() {
    let json = indoc! {r#"
        {"declarations": [
          {"type": {"kind": "enum", "tag": "E", "members": [
            {"name": "A", "value": {"float": 1.5}, "pos": {"line": 4, "column": 2}},
            {"name": "B", "expression": "OTHER"}
          ]}}
        ]}
    "#};
    let unit = load(json, &Config::new().strict(true));

    insta::assert_snapshot!(format_diagnostics(unit.diagnostics(), Colors::OFF), @r"
    4:2 error: enumerator `A` has a float literal; underlying type left unchanged
    error: enumerator `B` has no evaluated value; underlying type left unchanged
    ");
}

#[test]
fn decorated_typedefs_keep_declarator() {
    let json = indoc! {r#"
        {"declarations": [
          {"type": {"kind": "enum", "tag": "Color", "members": [
            {"name": "R", "value": {"int32": 0}, "expression": "0"}
          ]}},
          {"name": "ColorPtr", "typedef": true, "pointers": 1, "type": {"kind": "enum", "tag": "Color"}},
          {"name": "IntArr", "typedef": true, "arrays": [4], "type": {"kind": "struct", "tag": "S",
            "fields": [{"name": "a", "type": {"kind": "plain", "base": "int"}}]}},
          {"name": "CColor", "typedef": true, "const": true, "type": {"kind": "enum", "tag": "Color"}},
          {"name": "string", "typedef": true, "pointers": 1, "type": {"kind": "plain", "base": "char"}}
        ]}
    "#};
    let unit = load(json, &Config::default());

    insta::assert_snapshot!(format_unit(&unit, Colors::OFF), @r"
    enum Color {R = 0};
    typedef enum Color {R = 0}* ColorPtr;
    typedef struct S {int a;}[4] IntArr;
    typedef const enum Color {R = 0} CColor;
    typedef char* string;
    ");
}
