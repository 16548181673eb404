//! `cgen render`: declarations spelled the way the emitter sees them.

use std::path::PathBuf;

use cgen_model::{CSpec, CType, Config, Decl, TranslationUnit};

use crate::colors::Colors;

pub struct RenderArgs {
    pub manifest_path: PathBuf,
    pub config: Config,
    pub color: bool,
}

pub fn run(args: RenderArgs) {
    let unit = super::load_or_exit(&args.manifest_path, &args.config);
    let colors = Colors::new(args.color);

    print!("{}", format_unit(&unit, colors));
    super::finish(unit.diagnostics(), &args.config, colors);
}

pub fn format_unit(unit: &TranslationUnit, colors: Colors) -> String {
    let mut out = String::new();
    for decl in unit.iter() {
        out.push_str(&format_decl(decl, colors));
        out.push('\n');
    }
    out
}

fn format_decl(decl: &Decl, c: Colors) -> String {
    if decl.is_define {
        let body = match (&decl.value, decl.expression.is_empty()) {
            (_, false) => decl.expression.clone(),
            (Some(value), true) => value.to_string(),
            (None, true) => String::new(),
        };
        return format!(
            "{}#define{} {}{}{} {}{}{}",
            c.dim, c.reset, c.blue, decl.name, c.reset, c.green, body, c.reset
        );
    }

    if decl.is_typedef {
        return format!(
            "{}typedef{} {} {}{}{};",
            c.dim,
            c.reset,
            typedef_target(&decl.spec),
            c.blue,
            decl.name,
            c.reset
        );
    }

    // Bare type definitions such as `enum Color {...};`.
    if decl.name.is_empty() {
        return format!("{};", decl.spec.render_definition());
    }

    let storage = if decl.is_static { "static " } else { "" };
    let mut out = format!(
        "{}{}{}{} {}{}{}",
        c.dim,
        storage,
        c.reset,
        decl.spec.render(),
        c.blue,
        decl.name,
        c.reset
    );
    if !decl.expression.is_empty() {
        out.push_str(&format!(" = {}{}{}", c.green, decl.expression, c.reset));
    }
    out.push(';');
    out
}

/// Aliased type with its body expanded. Aggregate definitions carry no
/// decoration, so the declarator's qualifier, stars and arrays are added here.
fn typedef_target(spec: &CSpec) -> String {
    match spec {
        CSpec::Enum(_) | CSpec::Struct(_) => {
            let deco = spec.decoration();
            let mut out = String::from(deco.qualifier_prefix());
            out.push_str(&spec.render_definition());
            deco.write_suffix(&mut out);
            out
        }
        other => other.render(),
    }
}
