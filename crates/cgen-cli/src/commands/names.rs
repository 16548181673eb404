//! `cgen names`: emitter names and decoration per declaration.

use std::path::PathBuf;

use cgen_model::{CType, Config, IntegerType, TranslationUnit, TypeKind};
use serde::Serialize;

use crate::colors::Colors;

pub struct NamesArgs {
    pub manifest_path: PathBuf,
    pub config: Config,
    pub json: bool,
    pub color: bool,
}

pub fn run(args: NamesArgs) {
    let unit = super::load_or_exit(&args.manifest_path, &args.config);
    let colors = Colors::new(args.color && !args.json);
    let rows = collect_rows(&unit);

    if args.json {
        match serde_json::to_string_pretty(&rows) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    } else {
        print!("{}", format_table(&rows, colors));
    }

    super::finish(unit.diagnostics(), &args.config, colors);
}

#[derive(Debug, Serialize)]
pub struct NameRow<'a> {
    pub name: &'a str,
    pub kind: TypeKind,
    pub emitter_name: String,
    pub pointers: u8,
    pub arrays: &'a str,
    pub var_arrays: u32,
    pub opaque: bool,
    /// Set for enums, through typedef aliases too.
    pub underlying: Option<IntegerType>,
}

pub fn collect_rows(unit: &TranslationUnit) -> Vec<NameRow<'_>> {
    unit.iter()
        .map(|decl| NameRow {
            name: &decl.name,
            kind: decl.kind(),
            emitter_name: decl.spec.emitter_name(),
            pointers: decl.spec.pointer_depth(),
            arrays: decl.spec.array_suffix(),
            var_arrays: decl.spec.variable_array_count(),
            opaque: decl.is_opaque(),
            underlying: decl.spec.resolve().as_enum().and_then(|e| e.underlying()),
        })
        .collect()
}

/// Aligned `name  kind  emitter  decoration` table.
pub fn format_table(rows: &[NameRow<'_>], c: Colors) -> String {
    let name_width = column_width(rows.iter().map(|r| display_name(r.name)));
    let kind_width = column_width(rows.iter().map(|r| r.kind.as_str()));
    let emitter_width = column_width(rows.iter().map(|r| r.emitter_name.as_str()));

    let mut out = String::new();
    for row in rows {
        let line = format!(
            "{}{:name_width$}{}  {}{:kind_width$}{}  {:emitter_width$}  {}",
            c.blue,
            display_name(row.name),
            c.reset,
            c.dim,
            row.kind.as_str(),
            c.reset,
            row.emitter_name,
            decoration(row),
        );
        out.push_str(line.trim_end());
        out.push('\n');
    }
    out
}

fn display_name(name: &str) -> &str {
    if name.is_empty() { "-" } else { name }
}

fn column_width<'a>(values: impl Iterator<Item = &'a str>) -> usize {
    values.map(str::len).max().unwrap_or(0)
}

/// `**[4] +1[] (unsigned int)`, omitting what is absent.
fn decoration(row: &NameRow<'_>) -> String {
    let mut parts = Vec::new();
    let stars = "*".repeat(row.pointers as usize);
    if !stars.is_empty() || !row.arrays.is_empty() {
        parts.push(format!("{stars}{}", row.arrays));
    }
    if row.var_arrays > 0 {
        parts.push(format!("+{}[]", row.var_arrays));
    }
    if row.opaque {
        parts.push("opaque".to_string());
    }
    if let Some(underlying) = row.underlying {
        parts.push(format!("({underlying})"));
    }
    parts.join(" ")
}
