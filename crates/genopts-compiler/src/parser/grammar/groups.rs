use super::super::core::{ParseResult, Parser, SyntaxError};
use crate::diagnostics::DiagnosticKind;
use crate::pattern::{Alternative, OptionWithArg, Optional};

/// What a single group member turned out to be.
enum Member {
    Single,
    Expansion,
}

impl Parser<'_> {
    /// `[` member (`|` member)* `]`. Whitespace separates members as well.
    pub(crate) fn parse_group(&mut self) -> ParseResult<Optional> {
        let start = self.pos();
        self.bump(); // '['

        let mut members = Vec::new();
        let mut after_separator = false;
        let mut after_expansion = false;

        loop {
            self.skip_spaces();
            let Some(c) = self.peek() else {
                return Err(
                    SyntaxError::new(DiagnosticKind::UnclosedGroup, self.range_from(start))
                        .with_detail("group opened here"),
                );
            };
            match c {
                ']' => {
                    if after_separator {
                        return Err(self.error(DiagnosticKind::EmptyAlternative));
                    }
                    self.bump();
                    break;
                }
                '|' => {
                    if after_expansion {
                        return Err(self.error(DiagnosticKind::AmbiguousExpansion));
                    }
                    if members.is_empty() || after_separator {
                        return Err(self.error(DiagnosticKind::EmptyAlternative));
                    }
                    self.bump();
                    after_separator = true;
                }
                '=' => return Err(self.error(DiagnosticKind::UnexpectedEquals)),
                '[' => {
                    return Err(self
                        .error(DiagnosticKind::UnexpectedCharacter)
                        .with_detail("["));
                }
                _ => {
                    let member = self.parse_member(&mut members)?;
                    after_expansion = matches!(member, Member::Expansion);
                    after_separator = false;
                }
            }
        }

        let span = self.range_from(start);
        if members.is_empty() {
            return Err(SyntaxError::new(DiagnosticKind::EmptyGroup, span));
        }

        Ok(Optional { members, span })
    }

    /// Members in priority order: flag with value, bare argument,
    /// shorthand expansion, bare flag.
    fn parse_member(&mut self, members: &mut Vec<Alternative>) -> ParseResult<Member> {
        if self.at('<') {
            members.push(Alternative::Arg(self.parse_arg(true)?));
            return Ok(Member::Single);
        }

        let start = self.pos();
        let token = self.token();

        if self.at('[') {
            self.restore(start);
            let variants = self.parse_expansion()?;
            let span = self.range_from(start);
            log::trace!("expanded `{}` into {:?}", self.slice(start), variants);
            members.extend(variants.into_iter().map(|token| {
                Alternative::Option(OptionWithArg {
                    token,
                    arg: None,
                    span,
                })
            }));
            return Ok(Member::Expansion);
        }

        let span = self.range_from(start);
        let after_token = self.pos();
        self.skip_spaces();
        if self.at('<') {
            let arg = self.parse_arg(false)?;
            members.push(Alternative::Option(OptionWithArg {
                token: token.to_string(),
                arg: Some(arg.name),
                span: span.cover(arg.span),
            }));
            return Ok(Member::Single);
        }
        self.restore(after_token);

        members.push(Alternative::Option(OptionWithArg {
            token: token.to_string(),
            arg: None,
            span,
        }));
        Ok(Member::Single)
    }
}
