//! Cursor over one pattern and the error type of all grammar rules.

use rowan::{TextRange, TextSize};

use crate::diagnostics::DiagnosticKind;

/// Characters that end a command token.
pub(super) fn is_special(c: char) -> bool {
    matches!(c, '[' | ']' | '|' | '=') || is_space(c)
}

pub(super) fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t')
}

/// A parse failure. Parsing is all-or-nothing, so the first one wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxError {
    pub kind: DiagnosticKind,
    pub range: TextRange,
    pub detail: Option<String>,
}

impl SyntaxError {
    pub(crate) fn new(kind: DiagnosticKind, range: TextRange) -> Self {
        Self {
            kind,
            range,
            detail: None,
        }
    }

    pub(crate) fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }

    pub fn message(&self) -> String {
        self.kind.message(self.detail.as_deref())
    }
}

impl std::fmt::Display for SyntaxError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}..{}: {}",
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message()
        )
    }
}

pub(crate) type ParseResult<T> = Result<T, SyntaxError>;

/// Byte cursor over a single pattern.
pub(crate) struct Parser<'src> {
    pub(super) source: &'src str,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    pub(super) fn rest(&self) -> &'src str {
        &self.source[self.pos..]
    }

    pub(super) fn peek(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub(super) fn at(&self, c: char) -> bool {
        self.peek() == Some(c)
    }

    pub(super) fn at_eof(&self) -> bool {
        self.pos >= self.source.len()
    }

    pub(super) fn bump(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Consume `c` if it is next.
    pub(super) fn eat(&mut self, c: char) -> bool {
        if self.at(c) {
            self.pos += c.len_utf8();
            true
        } else {
            false
        }
    }

    /// Consume `s` if the remaining input starts with it.
    pub(super) fn eat_str(&mut self, s: &str) -> bool {
        if self.rest().starts_with(s) {
            self.pos += s.len();
            true
        } else {
            false
        }
    }

    pub(super) fn skip_spaces(&mut self) {
        while self.peek().is_some_and(is_space) {
            self.pos += 1;
        }
    }

    pub(super) fn pos(&self) -> usize {
        self.pos
    }

    pub(super) fn restore(&mut self, pos: usize) {
        self.pos = pos;
    }

    pub(super) fn offset(&self) -> TextSize {
        TextSize::from(self.pos as u32)
    }

    /// Range from `start` (a byte position) to the cursor.
    pub(super) fn range_from(&self, start: usize) -> TextRange {
        TextRange::new(TextSize::from(start as u32), self.offset())
    }

    /// Range covering the next character, or an empty range at the end.
    pub(super) fn current_range(&self) -> TextRange {
        let len = self.peek().map_or(0, char::len_utf8);
        TextRange::at(self.offset(), TextSize::from(len as u32))
    }

    pub(super) fn slice(&self, start: usize) -> &'src str {
        &self.source[start..self.pos]
    }

    /// Maximal run of non-special characters; empty if the cursor sits on one.
    pub(super) fn token(&mut self) -> &'src str {
        let start = self.pos;
        while self.peek().is_some_and(|c| !is_special(c)) {
            self.bump();
        }
        self.slice(start)
    }

    pub(super) fn error(&self, kind: DiagnosticKind) -> SyntaxError {
        SyntaxError::new(kind, self.current_range())
    }
}
