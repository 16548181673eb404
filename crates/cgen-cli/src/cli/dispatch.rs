//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! - `*Params` structs mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors pull the fields a command uses
//! - `From<*Params>` impls bridge dispatch and command handlers

use std::path::PathBuf;

use cgen_model::{Config, PromotionPolicy};
use clap::ArgMatches;
use log::LevelFilter;

use super::ColorChoice;
use crate::commands::names::NamesArgs;
use crate::commands::render::RenderArgs;

pub struct RenderParams {
    pub manifest_path: PathBuf,
    pub promotion: PromotionPolicy,
    pub strict: bool,
    pub color: ColorChoice,
}

impl RenderParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest_path: parse_manifest_path(m),
            promotion: parse_promotion(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
        }
    }
}

impl From<RenderParams> for RenderArgs {
    fn from(p: RenderParams) -> Self {
        Self {
            manifest_path: p.manifest_path,
            config: Config::new().promotion(p.promotion).strict(p.strict),
            color: p.color.should_colorize(),
        }
    }
}

pub struct NamesParams {
    pub manifest_path: PathBuf,
    pub promotion: PromotionPolicy,
    pub strict: bool,
    pub json: bool,
    pub color: ColorChoice,
}

impl NamesParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            manifest_path: parse_manifest_path(m),
            promotion: parse_promotion(m),
            strict: m.get_flag("strict"),
            json: m.get_flag("json"),
            color: parse_color(m),
        }
    }
}

impl From<NamesParams> for NamesArgs {
    fn from(p: NamesParams) -> Self {
        Self {
            manifest_path: p.manifest_path,
            config: Config::new().promotion(p.promotion).strict(p.strict),
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

/// Log level from the `-v` count: warn, info, debug, then trace.
pub fn log_level(m: &ArgMatches) -> LevelFilter {
    match m.get_count("verbose") {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

fn parse_manifest_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("manifest_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

fn parse_promotion(m: &ArgMatches) -> PromotionPolicy {
    m.get_one::<String>("promotion")
        .and_then(|s| s.parse().ok())
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
