//! Checks that need a complete pattern tree.

use indexmap::IndexSet;

use super::core::{ParseResult, SyntaxError};
use crate::diagnostics::DiagnosticKind;
use crate::pattern::{Alternative, Arg, Command, CommandChild};

/// Positionals of one command in traversal order, including those inside groups.
fn positionals(command: &Command) -> impl Iterator<Item = &Arg> {
    command.children.iter().flat_map(|child| {
        let args: Vec<&Arg> = match child {
            CommandChild::Arg(arg) => vec![arg],
            CommandChild::Optional(group) => group
                .members
                .iter()
                .filter_map(|m| match m {
                    Alternative::Arg(arg) => Some(arg),
                    Alternative::Option(_) => None,
                })
                .collect(),
        };
        args
    })
}

/// A variadic argument must be the last positional of its pattern, and
/// no argument name may be declared twice.
pub(crate) fn validate_pattern(commands: &[Command]) -> ParseResult<()> {
    let inline: IndexSet<&str> = commands
        .iter()
        .flat_map(Command::chain)
        .filter_map(|c| c.inline_arg.as_deref())
        .collect();

    let mut seen: IndexSet<&str> = IndexSet::new();
    let mut variadic: Option<&Arg> = None;

    for command in commands.iter().flat_map(Command::chain) {
        for arg in positionals(command) {
            if let Some(prev) = variadic {
                return Err(
                    SyntaxError::new(DiagnosticKind::VariadicNotLast, arg.span)
                        .with_detail(format!("`<{}>` follows `<{}>...`", arg.name, prev.name)),
                );
            }
            if inline.contains(arg.name.as_str()) || !seen.insert(arg.name.as_str()) {
                return Err(SyntaxError::new(DiagnosticKind::DuplicateArgument, arg.span)
                    .with_detail(arg.name.clone()));
            }
            if arg.variadic {
                variadic = Some(arg);
            }
        }
    }

    Ok(())
}
