//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so both subcommands can compose the
//! same definitions.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Manifest file, or `-` for stdin (positional).
pub fn manifest_path_arg() -> Arg {
    Arg::new("manifest_path")
        .value_name("MANIFEST")
        .value_parser(value_parser!(PathBuf))
        .required(true)
        .help("Declaration manifest (JSON), or - for stdin")
}

/// Enum promotion policy (--promotion).
pub fn promotion_arg() -> Arg {
    Arg::new("promotion")
        .long("promotion")
        .value_name("POLICY")
        .default_value("covering")
        .value_parser(["covering", "legacy"])
        .help("How enum underlying types are inferred")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize output")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print rows as a JSON array")
}

/// Log verbosity (-v, repeatable).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::Count)
        .global(true)
        .help("Log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides")
}
