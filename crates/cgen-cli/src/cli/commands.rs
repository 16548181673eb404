//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Flags every command that loads a manifest accepts.
fn with_model_args(cmd: Command) -> Command {
    cmd.arg(manifest_path_arg())
        .arg(promotion_arg())
        .arg(strict_arg())
        .arg(color_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("cgen")
        .about("Inspect the C declaration model a binding emitter consumes")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(render_command())
        .subcommand(names_command())
}

/// Print each declaration as the emitter would spell it in C.
pub fn render_command() -> Command {
    let cmd = Command::new("render")
        .about("Render declarations from a manifest")
        .override_usage(
            "\
  cgen render <MANIFEST>
  cgen render - < manifest.json",
        )
        .after_help(
            r#"EXAMPLES:
  cgen render decls.json                      # one declaration per line
  cgen render decls.json --promotion legacy   # historical enum promotion
  cgen render decls.json --strict             # fail on data-quality warnings"#,
        );

    with_model_args(cmd)
}

/// List emitter names per declaration.
pub fn names_command() -> Command {
    let cmd = Command::new("names")
        .about("List emitter names, kinds and decoration")
        .override_usage(
            "\
  cgen names <MANIFEST>
  cgen names <MANIFEST> --json",
        )
        .after_help(
            r#"EXAMPLES:
  cgen names decls.json          # aligned table
  cgen names decls.json --json   # JSON array, one object per declaration"#,
        )
        .arg(json_arg());

    with_model_args(cmd)
}
