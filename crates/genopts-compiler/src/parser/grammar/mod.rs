//! Recursive-descent rules, one file per construct.
//!
//! ```text
//! pattern  := (group | arg)* command?
//! command  := token ["=" arg] (arg | group)* [command]
//! group    := "[" member (["|"] member)* "]"
//! member   := token arg | arg | expansion | token
//! arg      := "<" name ">" ["..."]
//! ```

mod atoms;
mod commands;
mod groups;

use rowan::{TextRange, TextSize};

use super::core::{ParseResult, Parser, SyntaxError};
use crate::diagnostics::DiagnosticKind;
use crate::pattern::{Command, CommandChild};

impl Parser<'_> {
    /// Parse a whole pattern into its top-level commands.
    ///
    /// Groups and arguments before the first command token are collected
    /// into a bare command that always comes first.
    pub(crate) fn parse_pattern(&mut self) -> ParseResult<Vec<Command>> {
        self.skip_spaces();
        if self.at_eof() {
            let end = TextSize::from(self.source.len() as u32);
            return Err(SyntaxError::new(
                DiagnosticKind::EmptyPattern,
                TextRange::empty(end),
            ));
        }

        let mut commands = Vec::new();
        let mut bare: Option<Command> = None;

        loop {
            self.skip_spaces();
            let Some(c) = self.peek() else { break };
            match c {
                '[' => {
                    let group = self.parse_group()?;
                    let holder = bare.get_or_insert_with(|| Command::bare(group.span));
                    holder.span = holder.span.cover(group.span);
                    holder.children.push(CommandChild::Optional(group));
                }
                '<' => {
                    let arg = self.parse_arg(true)?;
                    let holder = bare.get_or_insert_with(|| Command::bare(arg.span));
                    holder.span = holder.span.cover(arg.span);
                    holder.children.push(CommandChild::Arg(arg));
                }
                ']' => return Err(self.error(DiagnosticKind::UnmatchedBracket)),
                '|' => return Err(self.error(DiagnosticKind::UnexpectedSeparator)),
                '=' => {
                    return Err(self
                        .error(DiagnosticKind::UnexpectedCharacter)
                        .with_detail("="));
                }
                _ => {
                    commands.extend(bare.take());
                    commands.push(self.parse_command()?);
                }
            }
        }

        commands.extend(bare.take());
        Ok(commands)
    }
}
