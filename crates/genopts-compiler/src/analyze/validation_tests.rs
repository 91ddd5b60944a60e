use crate::analyze::{HELP_TOKEN, ROOT};
use crate::diagnostics::DiagnosticKind;
use crate::ir::Type;
use crate::ir::build::{cli, is_set};
use crate::test_utils::{compile, compile_errors};

#[test]
fn help_is_added_when_missing() {
    let analyzed = compile(&["add <file>"]);
    let ctx = analyzed.context();

    let entry = ctx.entry(HELP_TOKEN).unwrap();
    assert!(!entry.is_command());
    assert_eq!(ctx.parents(HELP_TOKEN), &[ROOT]);
    assert_eq!(ctx.help(), Some(&is_set(cli("help"), Type::Flag)));
}

#[test]
fn declared_help_is_kept() {
    let analyzed = compile(&["[--help <topic>]"]);
    let ctx = analyzed.context();

    assert_eq!(ctx.entry(HELP_TOKEN).unwrap().value(), Some("topic"));
    assert!(!ctx.persistent().contains("help"));
    assert_eq!(ctx.help(), Some(&is_set(cli("topic"), Type::Str)));
}

#[test]
fn help_command_keeps_its_field() {
    let analyzed = compile(&["help <topic>", "commit [-a]"]);
    let ctx = analyzed.context();

    assert!(ctx.entry("help").unwrap().is_command());
    assert_eq!(ctx.entry(HELP_TOKEN).unwrap().field, "help_flag");
    assert_eq!(ctx.flag_owner("help"), Some("help"));
    assert_eq!(ctx.flag_owner("help_flag"), Some(HELP_TOKEN));
    assert_eq!(ctx.help(), Some(&is_set(cli("help_flag"), Type::Flag)));
}

#[test]
fn scoped_options_record_their_parent() {
    let analyzed = compile(&["cmd1 [-a]", "cmd2 [-b]", "[-v] cmd3"]);
    let ctx = analyzed.context();

    assert_eq!(ctx.scope_checks().len(), 2);
    assert!(ctx.transient().contains("a_parent"));
    assert!(ctx.transient().contains("b_parent"));
    assert!(!ctx.transient().contains("v_parent"));
}

#[test]
fn global_and_scoped_use_of_one_option_is_global() {
    let analyzed = compile(&["[-v] cmd1", "cmd2 [-v]"]);
    assert!(analyzed.context().scope_checks().is_empty());
}

#[test]
fn optional_before_required_is_unsupported() {
    let diag = compile_errors(&["cp [<a>] <b> <c>"]);
    assert_eq!(diag.kinds(), [DiagnosticKind::UnsupportedOptionalPositional]);

    let message = diag.iter().next().unwrap().message().to_string();
    insta::assert_snapshot!(message, @"optional positional arguments must come last: `<a>` is followed by a required argument");
}

#[test]
fn optional_first_pair_is_supported() {
    let analyzed = compile(&["branch [<oldbranch>] <newbranch>"]);
    assert!(analyzed.diagnostics().is_empty());
}

#[test]
fn trailing_optionals_are_supported() {
    let analyzed = compile(&["show <rev> [<path>]", "tag [<name>] [<rev>]"]);
    assert!(analyzed.diagnostics().is_empty());
}

#[test]
fn same_commands_with_different_layouts() {
    let diag = compile_errors(&["run <a>", "run [-v] <a> <b>"]);
    assert_eq!(diag.kinds(), [DiagnosticKind::ConflictingPositional]);

    let message = diag.iter().next().unwrap().message().to_string();
    insta::assert_snapshot!(message, @"conflicting positional arguments: patterns with the same commands take different arguments");
}

#[test]
fn combinations_end_with_fallback() {
    let analyzed = compile(&["remote", "remote add <name>"]);
    assert_eq!(analyzed.context().combinations().len(), 1);
}
