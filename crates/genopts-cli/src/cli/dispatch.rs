//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;
use genopts_compiler::BackendKind;

use super::ColorChoice;
use crate::commands::Input;
use crate::commands::check::CheckArgs;
use crate::commands::generate::GenerateArgs;
use crate::commands::tree::TreeArgs;

pub struct GenerateParams {
    pub input_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub backend: BackendKind,
    pub name: String,
    pub header: bool,
    pub output: Option<PathBuf>,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl GenerateParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            patterns: parse_patterns(m),
            backend: parse_backend(m),
            name: m
                .get_one::<String>("name")
                .cloned()
                .unwrap_or_else(|| "cli".to_string()),
            header: !m.get_flag("no_header"),
            output: m.get_one::<PathBuf>("output").cloned(),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<GenerateParams> for GenerateArgs {
    fn from(p: GenerateParams) -> Self {
        Self {
            input: Input {
                path: p.input_path,
                patterns: p.patterns,
            },
            backend: p.backend,
            name: p.name,
            header: p.header,
            output: p.output,
            color: p.color.should_colorize(),
        }
    }
}

pub struct CheckParams {
    pub input_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub strict: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            patterns: parse_patterns(m),
            strict: m.get_flag("strict"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            input: Input {
                path: p.input_path,
                patterns: p.patterns,
            },
            strict: p.strict,
            color: p.color.should_colorize(),
        }
    }
}

pub struct TreeParams {
    pub input_path: Option<PathBuf>,
    pub patterns: Vec<String>,
    pub json: bool,
    pub color: ColorChoice,
    pub verbose: u8,
}

impl TreeParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input_path: m.get_one::<PathBuf>("input_path").cloned(),
            patterns: parse_patterns(m),
            json: m.get_flag("json"),
            color: parse_color(m),
            verbose: m.get_count("verbose"),
        }
    }
}

impl From<TreeParams> for TreeArgs {
    fn from(p: TreeParams) -> Self {
        Self {
            input: Input {
                path: p.input_path,
                patterns: p.patterns,
            },
            json: p.json,
            color: p.color.should_colorize(),
        }
    }
}

fn parse_patterns(m: &ArgMatches) -> Vec<String> {
    m.get_many::<String>("patterns")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}

fn parse_backend(m: &ArgMatches) -> BackendKind {
    m.get_one::<String>("backend")
        .and_then(|name| BackendKind::from_name(name))
        .unwrap_or_default()
}

fn parse_color(m: &ArgMatches) -> ColorChoice {
    match m.get_one::<String>("color").map(|s| s.as_str()) {
        Some("always") => ColorChoice::Always,
        Some("never") => ColorChoice::Never,
        _ => ColorChoice::Auto,
    }
}
