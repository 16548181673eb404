pub mod loader;
pub mod names;
pub mod render;

#[cfg(test)]
mod names_tests;
#[cfg(test)]
mod render_tests;

use std::path::Path;

use cgen_model::{Config, Diagnostics, TranslationUnit};

use crate::colors::Colors;

/// Load a unit or print the error and exit.
fn load_or_exit(path: &Path, config: &Config) -> TranslationUnit {
    loader::load_unit(path, config).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    })
}

/// One line per diagnostic: `<pos>: <severity>: <message>`.
fn format_diagnostics(diagnostics: &Diagnostics, colors: Colors) -> String {
    let mut out = String::new();
    for d in diagnostics {
        if let Some(pos) = d.pos {
            out.push_str(&format!("{}{}:{} ", colors.dim, pos, colors.reset));
        }
        out.push_str(&format!(
            "{}{}{}: {}\n",
            colors.severity(d.severity),
            d.severity,
            colors.reset,
            d.message
        ));
    }
    out
}

/// Print diagnostics to stderr and exit 1 if strict mode turned any into
/// errors.
fn finish(diagnostics: &Diagnostics, config: &Config, colors: Colors) {
    eprint!("{}", format_diagnostics(diagnostics, colors));
    if config.is_strict() && diagnostics.has_errors() {
        eprintln!(
            "error: {} diagnostic(s) reported as errors (--strict)",
            diagnostics.error_count()
        );
        std::process::exit(1);
    }
}
