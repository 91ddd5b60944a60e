//! Command builders for the CLI.

use clap::Command;

use super::args::*;

/// Input args shared by every command.
fn with_input_args(cmd: Command) -> Command {
    cmd.arg(input_path_arg())
        .arg(pattern_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("genopts")
        .about("Generate command-line parsers from usage patterns")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(generate_command())
        .subcommand(check_command())
        .subcommand(tree_command())
}

/// Compile patterns into parser source.
pub fn generate_command() -> Command {
    let cmd = Command::new("generate")
        .about("Generate parser, validator and usage source")
        .override_usage(
            "\
  genopts generate [FILE] [-b <LANG>] [-n <NAME>] [-o <FILE>]
  genopts generate -p <PATTERN>...",
        )
        .after_help(
            r#"EXAMPLES:
  genopts generate patterns.txt                  # C to stdout
  genopts generate patterns.txt -b java -n git   # Java class Git
  genopts generate -p 'add <file>' -p status     # inline patterns
  cat patterns.txt | genopts generate -o cli.h   # stdin to file"#,
        )
        .arg(backend_arg())
        .arg(name_arg())
        .arg(no_header_arg())
        .arg(output_arg());

    with_input_args(cmd)
}

/// Validate patterns without generating code.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Validate patterns and report diagnostics")
        .override_usage(
            "\
  genopts check [FILE] [--strict]
  genopts check -p <PATTERN>...",
        )
        .after_help(
            r#"EXAMPLES:
  genopts check patterns.txt            # silent on success
  genopts check patterns.txt --strict   # warnings fail too
  genopts check -p 'commit [-a|--all]'"#,
        )
        .arg(strict_arg());

    with_input_args(cmd)
}

/// Show the parsed pattern tree.
pub fn tree_command() -> Command {
    let cmd = Command::new("tree")
        .about("Show the parsed pattern tree")
        .override_usage(
            "\
  genopts tree [FILE] [--json]
  genopts tree -p <PATTERN>...",
        )
        .after_help(
            r#"EXAMPLES:
  genopts tree patterns.txt
  genopts tree -p 'remote add <name> <url>' --json"#,
        )
        .arg(json_arg());

    with_input_args(cmd)
}
