use super::super::core::{ParseResult, Parser, SyntaxError, is_special};
use crate::diagnostics::DiagnosticKind;
use crate::pattern::Arg;

impl Parser<'_> {
    /// `<name>` with an optional `...` suffix when `allow_variadic` is set.
    ///
    /// The cursor must sit on `<`.
    pub(crate) fn parse_arg(&mut self, allow_variadic: bool) -> ParseResult<Arg> {
        let start = self.pos();
        self.bump(); // '<'

        let name_start = self.pos();
        loop {
            match self.peek() {
                None => {
                    return Err(SyntaxError::new(
                        DiagnosticKind::UnclosedArgument,
                        self.range_from(start),
                    )
                    .with_detail("argument opened here"));
                }
                Some('>') => break,
                Some(_) => {
                    self.bump();
                }
            }
        }
        let name = self.slice(name_start);
        self.bump(); // '>'

        if name.trim().is_empty() {
            return Err(SyntaxError::new(
                DiagnosticKind::EmptyArgumentName,
                self.range_from(start),
            ));
        }

        let variadic = allow_variadic && self.eat_str("...");
        let span = self.range_from(start);
        self.expect_boundary()?;

        Ok(Arg {
            name: name.to_string(),
            variadic,
            span,
        })
    }

    /// Whatever follows an argument must start a new element.
    pub(super) fn expect_boundary(&self) -> ParseResult<()> {
        match self.peek() {
            Some(c) if !is_special(c) => Err(self
                .error(DiagnosticKind::UnexpectedCharacter)
                .with_detail(c.to_string())),
            _ => Ok(()),
        }
    }
}
