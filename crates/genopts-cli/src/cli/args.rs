//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` so the same definition can be reused
//! by every subcommand.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Pattern file (positional, `-` for stdin).
pub fn input_path_arg() -> Arg {
    Arg::new("input_path")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Pattern file, one pattern per line (`-` or omitted: stdin)")
}

/// Inline pattern (-p/--pattern), repeatable.
pub fn pattern_arg() -> Arg {
    Arg::new("patterns")
        .short('p')
        .long("pattern")
        .value_name("PATTERN")
        .action(ArgAction::Append)
        .help("Inline pattern (repeatable)")
}

/// Target language (-b/--backend).
pub fn backend_arg() -> Arg {
    Arg::new("backend")
        .short('b')
        .long("backend")
        .value_name("LANG")
        .default_value("c")
        .value_parser(["c", "java"])
        .help("Language of the generated parser")
}

/// Base name of generated types and functions (-n/--name).
pub fn name_arg() -> Arg {
    Arg::new("name")
        .short('n')
        .long("name")
        .value_name("NAME")
        .default_value("cli")
        .help("Base name of generated types and functions")
}

/// Omit the header comment (--no-header).
pub fn no_header_arg() -> Arg {
    Arg::new("no_header")
        .long("no-header")
        .action(ArgAction::SetTrue)
        .help("Omit the generated-file header comment")
}

/// Output file (-o/--output).
pub fn output_arg() -> Arg {
    Arg::new("output")
        .short('o')
        .long("output")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Write to FILE instead of stdout")
}

/// Treat warnings as errors (--strict).
pub fn strict_arg() -> Arg {
    Arg::new("strict")
        .long("strict")
        .action(ArgAction::SetTrue)
        .help("Treat warnings as errors")
}

/// JSON output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print the tree as JSON")
}

/// Color output control (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for verbose, -vv for very verbose)")
}
