use super::super::core::{ParseResult, Parser};
use crate::diagnostics::DiagnosticKind;
use crate::pattern::{Command, CommandChild};

impl Parser<'_> {
    /// A command token with its inline value, children and subcommand.
    ///
    /// A nested command consumes the rest of the pattern, so options after
    /// it belong to the deeper command. Stops at the end of input or at a
    /// `]` the caller has to deal with.
    pub(crate) fn parse_command(&mut self) -> ParseResult<Command> {
        let start = self.pos();
        let name = self.token();
        let mut command = Command {
            name: name.to_string(),
            inline_arg: None,
            children: Vec::new(),
            subcommand: None,
            span: self.range_from(start),
        };

        if self.eat('=') {
            if !self.at('<') {
                return Err(self
                    .error(DiagnosticKind::ExpectedArgument)
                    .with_detail(format!("after `{}=`", name)));
            }
            let arg = self.parse_arg(false)?;
            command.inline_arg = Some(arg.name);
        }

        loop {
            self.skip_spaces();
            let Some(c) = self.peek() else { break };
            match c {
                ']' => break,
                '<' => {
                    let arg = self.parse_arg(true)?;
                    command.children.push(CommandChild::Arg(arg));
                }
                '[' => {
                    let group = self.parse_group()?;
                    command.children.push(CommandChild::Optional(group));
                }
                '|' => return Err(self.error(DiagnosticKind::UnexpectedSeparator)),
                '=' => {
                    return Err(self
                        .error(DiagnosticKind::UnexpectedCharacter)
                        .with_detail("="));
                }
                _ => {
                    command.subcommand = Some(Box::new(self.parse_command()?));
                    break;
                }
            }
        }

        Ok(command)
    }
}
