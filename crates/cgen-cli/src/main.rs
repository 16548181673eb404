mod cli;
mod colors;
mod commands;

use cli::{NamesParams, RenderParams, build_cli, log_level};

fn main() {
    let matches = build_cli().get_matches();

    let Some((name, m)) = matches.subcommand() else {
        unreachable!("clap should have caught this")
    };

    env_logger::Builder::new()
        .filter_level(log_level(m))
        .parse_default_env()
        .init();

    match name {
        "render" => {
            let params = RenderParams::from_matches(m);
            commands::render::run(params.into());
        }
        "names" => {
            let params = NamesParams::from_matches(m);
            commands::names::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}
