//! Pattern grammar tests.

use indoc::indoc;

use super::dump;
use crate::parser::parse_pattern;
use crate::pattern::{Alternative, CommandChild};
use crate::source_map::SourceId;

#[test]
fn command_with_argument() {
    insta::assert_snapshot!(dump("add <file>"), @r"
    Pattern `add <file>`
      Command add
        Arg <file>
    ");
}

#[test]
fn exclusive_groups() {
    insta::assert_snapshot!(dump("commit [-a|--interactive|--patch] [-F <file>|-m <msg>]"), @r"
    Pattern `commit [-a|--interactive|--patch] [-F <file>|-m <msg>]`
      Command commit
        Optional
          Option -a
          Option --interactive
          Option --patch
        Optional
          Option -F <file>
          Option -m <msg>
    ");
}

#[test]
fn whitespace_separates_members() {
    insta::assert_snapshot!(dump("log [-v --verbose]"), @r"
    Pattern `log [-v --verbose]`
      Command log
        Optional
          Option -v
          Option --verbose
    ");
}

#[test]
fn flag_token_is_subcommand() {
    insta::assert_snapshot!(dump("branch -d <branchname>"), @r"
    Pattern `branch -d <branchname>`
      Command branch
        Command -d
          Arg <branchname>
    ");
}

#[test]
fn inline_value() {
    insta::assert_snapshot!(dump("branch --set-upstream-to=<upstream>"), @r"
    Pattern `branch --set-upstream-to=<upstream>`
      Command branch
        Command --set-upstream-to=<upstream>
    ");
}

#[test]
fn spaced_value_is_positional() {
    insta::assert_snapshot!(dump("branch --set-upstream-to <upstream>"), @r"
    Pattern `branch --set-upstream-to <upstream>`
      Command branch
        Command --set-upstream-to
          Arg <upstream>
    ");
}

#[test]
fn leading_group_goes_to_bare_command() {
    insta::assert_snapshot!(dump("[--common-option] cmd1 [--same] [--cmd1-option]"), @r"
    Pattern `[--common-option] cmd1 [--same] [--cmd1-option]`
      Command (bare)
        Optional
          Option --common-option
      Command cmd1
        Optional
          Option --same
        Optional
          Option --cmd1-option
    ");
}

#[test]
fn pattern_without_command() {
    insta::assert_snapshot!(dump("[-v] <file>"), @r"
    Pattern `[-v] <file>`
      Command (bare)
        Optional
          Option -v
        Arg <file>
    ");
}

#[test]
fn shorthand_expansion() {
    insta::assert_snapshot!(dump("fetch [--[no-]tags] <remote>"), @r"
    Pattern `fetch [--[no-]tags] <remote>`
      Command fetch
        Optional
          Option --tags
          Option --no-tags
        Arg <remote>
    ");
}

#[test]
fn shorthand_next_to_plain_member() {
    insta::assert_snapshot!(dump("fetch [--[no-]tags --all]"), @r"
    Pattern `fetch [--[no-]tags --all]`
      Command fetch
        Optional
          Option --tags
          Option --no-tags
          Option --all
    ");
}

#[test]
fn shorthand_after_separator() {
    insta::assert_snapshot!(dump("log [-q|--[no-]verbose]"), @r"
    Pattern `log [-q|--[no-]verbose]`
      Command log
        Optional
          Option -q
          Option --verbose
          Option --no-verbose
    ");
}

#[test]
fn optional_variadic() {
    insta::assert_snapshot!(dump("add [<pathspec>...]"), @r"
    Pattern `add [<pathspec>...]`
      Command add
        Optional
          Arg <pathspec>...
    ");
}

#[test]
fn optional_first_positional() {
    insta::assert_snapshot!(dump("branch [<oldbranch>] <newbranch>"), @r"
    Pattern `branch [<oldbranch>] <newbranch>`
      Command branch
        Optional
          Arg <oldbranch>
        Arg <newbranch>
    ");
}

#[test]
fn options_after_subcommand_belong_to_it() {
    insta::assert_snapshot!(dump("submodule [--quiet] update [--init] [<path>...]"), @r"
    Pattern `submodule [--quiet] update [--init] [<path>...]`
      Command submodule
        Optional
          Option --quiet
        Command update
          Optional
            Option --init
          Optional
            Arg <path>...
    ");
}

#[test]
fn surrounding_whitespace_is_trimmed_from_text() {
    let pattern = parse_pattern(SourceId::default(), "   status  ").unwrap();
    assert_eq!(pattern.text, "status");
    assert_eq!(u32::from(pattern.commands[0].span.start()), 3);
}

#[test]
fn spans_point_into_source() {
    let text = "commit [-F <file>]";
    let pattern = parse_pattern(SourceId::default(), text).unwrap();
    let command = &pattern.commands[0];
    let CommandChild::Optional(group) = &command.children[0] else {
        panic!("expected a group");
    };
    let Alternative::Option(option) = &group.members[0] else {
        panic!("expected an option");
    };

    assert_eq!(&text[std::ops::Range::<usize>::from(command.span)], "commit");
    assert_eq!(&text[std::ops::Range::<usize>::from(group.span)], "[-F <file>]");
    assert_eq!(&text[std::ops::Range::<usize>::from(option.span)], "-F <file>");
}

#[test]
fn tree_serializes_to_json() {
    let pattern = parse_pattern(SourceId::default(), "add [-n] <file>...").unwrap();
    let json = serde_json::to_string_pretty(&pattern).unwrap();

    insta::assert_snapshot!(json, @r#"
    {
      "text": "add [-n] <file>...",
      "commands": [
        {
          "name": "add",
          "children": [
            {
              "kind": "optional",
              "members": [
                {
                  "kind": "option",
                  "token": "-n"
                }
              ]
            },
            {
              "kind": "arg",
              "name": "file",
              "variadic": true
            }
          ]
        }
      ]
    }
    "#);
}

#[test]
fn template_dump_lists_every_pattern() {
    let template = crate::pattern::Template {
        patterns: vec![
            parse_pattern(SourceId::default(), "status").unwrap(),
            parse_pattern(SourceId::default(), "add <file>").unwrap(),
        ],
    };

    assert_eq!(
        template.dump(),
        indoc! {"
            Pattern `status`
              Command status
            Pattern `add <file>`
              Command add
                Arg <file>"}
    );
}
