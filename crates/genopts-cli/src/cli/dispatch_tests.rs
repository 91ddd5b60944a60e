//! Tests for CLI dispatch logic: argument parsing and params extraction.

use std::path::PathBuf;

use genopts_compiler::BackendKind;

use super::*;
use crate::cli::commands::{check_command, generate_command, tree_command};

#[test]
fn generate_defaults() {
    let m = generate_command()
        .try_get_matches_from(["generate", "patterns.txt"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.input_path, Some(PathBuf::from("patterns.txt")));
    assert!(params.patterns.is_empty());
    assert_eq!(params.backend, BackendKind::C);
    assert_eq!(params.name, "cli");
    assert!(params.header);
    assert_eq!(params.output, None);
    assert_eq!(params.color, ColorChoice::Auto);
    assert_eq!(params.verbose, 0);
}

#[test]
fn generate_all_flags() {
    let m = generate_command()
        .try_get_matches_from([
            "generate",
            "-b",
            "java",
            "-n",
            "git",
            "--no-header",
            "-o",
            "Git.java",
            "--color",
            "never",
            "-vv",
        ])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.input_path, None);
    assert_eq!(params.backend, BackendKind::Java);
    assert_eq!(params.name, "git");
    assert!(!params.header);
    assert_eq!(params.output, Some(PathBuf::from("Git.java")));
    assert_eq!(params.color, ColorChoice::Never);
    assert_eq!(params.verbose, 2);
}

#[test]
fn patterns_repeat_in_order() {
    let m = generate_command()
        .try_get_matches_from(["generate", "-p", "add <file>", "--pattern", "status"])
        .unwrap();
    let params = GenerateParams::from_matches(&m);

    assert_eq!(params.patterns, ["add <file>", "status"]);
}

#[test]
fn unknown_backend_is_rejected() {
    let result = generate_command().try_get_matches_from(["generate", "-b", "rust"]);
    assert!(result.is_err());
}

#[test]
fn check_strict() {
    let m = check_command()
        .try_get_matches_from(["check", "-", "--strict", "--color", "always"])
        .unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.input_path, Some(PathBuf::from("-")));
    assert!(params.strict);
    assert_eq!(params.color, ColorChoice::Always);
}

#[test]
fn check_rejects_generate_flags() {
    let result = check_command().try_get_matches_from(["check", "-b", "java"]);
    assert!(result.is_err());
}

#[test]
fn tree_json() {
    let m = tree_command()
        .try_get_matches_from(["tree", "-p", "status", "--json", "-v"])
        .unwrap();
    let params = TreeParams::from_matches(&m);

    assert_eq!(params.patterns, ["status"]);
    assert!(params.json);
    assert_eq!(params.verbose, 1);
}

#[test]
fn subcommand_is_required() {
    let result = build_cli().try_get_matches_from(["genopts"]);
    assert!(result.is_err());
}

#[test]
fn cli_is_well_formed() {
    build_cli().debug_assert();
}
