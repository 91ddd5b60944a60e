mod cli;
mod commands;

use cli::{CheckParams, GenerateParams, TreeParams, build_cli};

fn main() {
    let matches = build_cli().get_matches();

    match matches.subcommand() {
        Some(("generate", m)) => {
            let params = GenerateParams::from_matches(m);
            init_logging(params.verbose);
            commands::generate::run(params.into());
        }
        Some(("check", m)) => {
            let params = CheckParams::from_matches(m);
            init_logging(params.verbose);
            commands::check::run(params.into());
        }
        Some(("tree", m)) => {
            let params = TreeParams::from_matches(m);
            init_logging(params.verbose);
            commands::tree::run(params.into());
        }
        _ => unreachable!("clap should have caught this"),
    }
}

/// `-v` shows compiler progress, `-vv` everything. `RUST_LOG` still wins.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .parse_default_env()
        .init();
}
