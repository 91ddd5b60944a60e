use crate::analyze::{Capture, EntryKind, FIRST_COMMAND, Match, NO_COMMAND, ROOT};
use crate::diagnostics::DiagnosticKind;
use crate::ir::Type;
use crate::test_utils::{compile, compile_errors};

#[test]
fn command_ids_follow_first_visit_order() {
    let analyzed = compile(&["remote add <name> <url>", "remote", "status"]);
    let ctx = analyzed.context();

    assert_eq!(ctx.command_id("remote"), Some(FIRST_COMMAND));
    assert_eq!(ctx.command_id("add"), Some(FIRST_COMMAND + 1));
    assert_eq!(ctx.command_id("status"), Some(FIRST_COMMAND + 2));
    assert_eq!(ctx.command_name(FIRST_COMMAND + 1), Some("add"));
    assert_eq!(ctx.command_id("--help"), None);
}

#[test]
fn parents_accumulate_per_occurrence() {
    let analyzed = compile(&["remote add <name>", "remote rm <name>"]);
    let ctx = analyzed.context();
    let remote = ctx.command_id("remote").unwrap();

    assert_eq!(ctx.parents("remote"), &[ROOT, ROOT]);
    assert_eq!(ctx.parents("add"), &[remote]);
    assert_eq!(ctx.parents("rm"), &[remote]);
}

#[test]
fn shared_options_get_one_entry_and_both_parents() {
    let analyzed = compile(&["cmd1 [-a|--alt]", "cmd2 [-a|--alt]"]);
    let ctx = analyzed.context();

    let options: Vec<&str> = ctx
        .dispatch_entries()
        .into_iter()
        .filter(|(_, entry)| !entry.is_command())
        .map(|(token, _)| token)
        .collect();
    assert_eq!(options, ["--alt", "--help", "-a"]);
    assert_eq!(ctx.parents("-a"), &[2, 3]);
    assert_eq!(ctx.parents("--alt"), &[2, 3]);
    assert_eq!(ctx.exclusions().count(), 1);
}

#[test]
fn command_fields() {
    let analyzed = compile(&["add <file>"]);
    let ctx = analyzed.context();

    let fields: Vec<(&str, Type)> = ctx
        .persistent()
        .iter()
        .map(|v| (v.name.as_str(), v.ty))
        .collect();
    assert_eq!(
        fields,
        [
            ("add", Type::Flag),
            ("add_pos", Type::Int),
            ("file", Type::Str),
            ("help", Type::Flag),
        ]
    );

    let state: Vec<&str> = ctx.transient().iter().map(|v| v.name.as_str()).collect();
    assert_eq!(state, ["cmd", "position", "positional0"]);
}

#[test]
fn inline_value_commands_match_by_prefix() {
    let analyzed = compile(&["clone=<url>"]);
    let entry = analyzed.context().entry("clone").unwrap();

    assert_eq!(entry.matching, Match::Prefix);
    assert_eq!(
        entry.kind,
        EntryKind::Command {
            id: FIRST_COMMAND,
            inline: Some("url".to_string()),
        }
    );
    assert_eq!(analyzed.context().persistent().get("url").unwrap().ty, Type::Str);
}

#[test]
fn value_options_store_into_value_field() {
    let analyzed = compile(&["commit [-F <file>|-m <msg>]"]);
    let ctx = analyzed.context();

    let entry = ctx.entry("-F").unwrap();
    assert_eq!(entry.field, "file");
    assert_eq!(entry.ty, Type::Str);
    assert_eq!(entry.value(), Some("file"));
    assert_eq!(ctx.entry("-m").unwrap().field, "msg");
}

#[test]
fn positional_keys() {
    let analyzed = compile(&["<file>", "rm <files>...", "mv <src> <dst>"]);
    let ctx = analyzed.context();
    let rm = ctx.command_id("rm").unwrap();
    let mv = ctx.command_id("mv").unwrap();

    let keys: Vec<(usize, u32)> = ctx.positionals().map(|(key, _)| *key).collect();
    assert_eq!(keys, [(0, NO_COMMAND), (0, rm), (0, mv), (1, mv)]);

    let (_, variadic) = ctx.positionals().find(|(key, _)| key.1 == rm).unwrap();
    assert_eq!(variadic.capture, Capture::Variadic("files".to_string()));
    assert_eq!(ctx.persistent().get("files_count").unwrap().ty, Type::Int);
}

#[test]
fn shorthand_options_are_exclusive() {
    let analyzed = compile(&["log [--[no-]color]"]);
    let ctx = analyzed.context();

    assert!(ctx.entry("--color").is_some());
    assert!(ctx.entry("--no-color").is_some());
    assert_eq!(ctx.exclusions().count(), 1);
}

#[test]
fn single_option_groups_are_not_exclusive() {
    let analyzed = compile(&["commit [-a] [<msg>]"]);
    assert_eq!(analyzed.context().exclusions().count(), 0);
}

#[test]
fn command_and_option_conflict() {
    let diag = compile_errors(&["foo [-x]", "-x"]);
    assert_eq!(diag.kinds(), [DiagnosticKind::CommandOptionConflict]);

    let message = diag.iter().next().unwrap().message().to_string();
    insta::assert_snapshot!(message, @"`-x` is used both as a command and as an option");
}

#[test]
fn value_and_flag_conflict() {
    let diag = compile_errors(&["a [--set <v>]", "b [--set]"]);
    assert_eq!(diag.kinds(), [DiagnosticKind::ConflictingValue]);
}

#[test]
fn inline_value_conflict() {
    let diag = compile_errors(&["push=<remote>", "push"]);
    assert_eq!(diag.kinds(), [DiagnosticKind::ConflictingValue]);
}

#[test]
fn field_type_conflict() {
    let diag = compile_errors(&["a [--file]", "b <file>"]);
    assert!(diag.kinds().contains(&DiagnosticKind::ConflictingFieldType));

    let message = diag.iter().next().unwrap().message().to_string();
    insta::assert_snapshot!(message, @"field `file` is declared with conflicting types");
}

#[test]
fn command_and_option_share_a_flag_field() {
    let diag = compile_errors(&["add <file>", "status [--add]"]);
    assert_eq!(diag.kinds(), [DiagnosticKind::SharedField]);

    let first = diag.iter().next().unwrap();
    insta::assert_snapshot!(first.message(), @"field `add` is derived from two different tokens");
    assert_eq!(first.related[0].message, "`add` declared here");
}

#[test]
fn one_token_in_many_patterns_keeps_its_flag() {
    let analyzed = compile(&["commit [-a]", "push [-a]"]);
    assert_eq!(analyzed.context().flag_owner("a"), Some("-a"));
}

#[test]
fn slot_captured_two_ways() {
    let diag = compile_errors(&["run <a>", "run <b>..."]);
    assert!(diag.kinds().contains(&DiagnosticKind::ConflictingPositional));
}

#[test]
fn slot_after_variadic_of_same_command() {
    let diag = compile_errors(&["run <args>...", "run <a> <b>"]);
    assert!(diag.kinds().contains(&DiagnosticKind::ConflictingPositional));
}

#[test]
fn duplicate_pattern_is_a_warning() {
    let analyzed = compile(&["add <file>", "add <file>"]);
    let diag = analyzed.diagnostics();

    assert!(!diag.has_errors());
    assert_eq!(diag.kinds(), [DiagnosticKind::DuplicatePattern]);
}
