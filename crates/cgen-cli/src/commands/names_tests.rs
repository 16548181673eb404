use cgen_model::{Config, TranslationUnit};
use serde_json::json;

use super::names::{collect_rows, format_table};
use crate::colors::Colors;

fn fixture() -> TranslationUnit {
    cgen_model::manifest::load(include_str!("fixture.json"), &Config::default()).unwrap()
}

#[test]
fn table() {
    let unit = fixture();
    let rows = collect_rows(&unit);

    insta::assert_snapshot!(format_table(&rows, Colors::OFF), @r"
    -           enum           enum_Color     (unsigned int)
    Color_t     enum           Color_t        (unsigned int)
    MAX_COLORS  define         int
    palette     enum           Color_t        *[4] (unsigned int)
    count       plain          uint
    h           opaque_struct  struct_handle  * opaque
    ");
}

#[test]
fn json_rows() {
    let unit = fixture();
    let rows = collect_rows(&unit);
    let value = serde_json::to_value(&rows[3]).unwrap();

    assert_eq!(
        value,
        json!({
            "name": "palette",
            "kind": "enum",
            "emitter_name": "Color_t",
            "pointers": 1,
            "arrays": "[4]",
            "var_arrays": 0,
            "opaque": false,
            "underlying": "unsigned_int"
        })
    );
    assert_eq!(serde_json::to_value(&rows[4]).unwrap()["underlying"], json!(null));
}

#[test]
fn empty_unit_has_empty_table() {
    let unit = TranslationUnit::new();
    assert_eq!(format_table(&collect_rows(&unit), Colors::OFF), "");
}
