//! Shorthand option expansion: `--[no-]flag` → `--flag`, `--no-flag`.

use rowan::TextRange;

use super::core::{ParseResult, Parser, SyntaxError, is_space, is_special};
use crate::diagnostics::DiagnosticKind;

/// Literal piece of a shorthand token; depth 0 is mandatory text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub depth: u32,
    pub text: String,
}

impl Segment {
    pub fn new(depth: u32, text: impl Into<String>) -> Self {
        Self {
            depth,
            text: text.into(),
        }
    }
}

/// Every concatenation of one string from `first` with one from `second`.
pub fn combine(first: &[String], second: &[String]) -> Vec<String> {
    first
        .iter()
        .flat_map(|a| second.iter().map(move |b| format!("{a}{b}")))
        .collect()
}

/// All variants of a segmented token, absent-before-present for every
/// bracketed segment. Duplicates are dropped, first occurrence wins.
pub fn expand(segments: &[Segment]) -> Vec<String> {
    let mut variants = fold(segments);
    let mut seen = std::collections::HashSet::new();
    variants.retain(|v| seen.insert(v.clone()));
    variants
}

fn fold(segments: &[Segment]) -> Vec<String> {
    let Some((first, rest)) = segments.split_first() else {
        return vec![String::new()];
    };
    let choices = if first.depth == 0 {
        vec![first.text.clone()]
    } else {
        vec![String::new(), first.text.clone()]
    };
    combine(&choices, &fold(rest))
}

impl Parser<'_> {
    /// Scan a shorthand token starting at the cursor and expand it.
    ///
    /// A `]` at depth 0 ends the token since it closes the enclosing group.
    pub(super) fn parse_expansion(&mut self) -> ParseResult<Vec<String>> {
        let start = self.pos();
        let mut segments = Vec::new();
        let mut depth = 0u32;
        let mut segment_start = start;
        let mut open = start;

        loop {
            match self.peek() {
                None => break,
                Some('[') => {
                    segments.push(Segment::new(depth, self.slice(segment_start)));
                    depth += 1;
                    open = self.pos();
                    self.bump();
                    segment_start = self.pos();
                }
                Some(']') if depth == 0 => break,
                Some(']') => {
                    segments.push(Segment::new(depth, self.slice(segment_start)));
                    depth -= 1;
                    self.bump();
                    segment_start = self.pos();
                }
                Some('|') if depth > 0 => {
                    return Err(self.error(DiagnosticKind::AmbiguousExpansion));
                }
                Some(c) if is_space(c) && depth > 0 => {
                    return Err(self.error(DiagnosticKind::SpaceInExpansion));
                }
                Some(c) if is_special(c) => break,
                Some(_) => {
                    self.bump();
                }
            }
        }

        if depth > 0 {
            let range = TextRange::new((open as u32).into(), self.offset());
            return Err(SyntaxError::new(DiagnosticKind::UnclosedExpansion, range)
                .with_detail("shorthand opened here"));
        }
        segments.push(Segment::new(0, self.slice(segment_start)));
        segments.retain(|s| !s.text.is_empty());

        Ok(expand(&segments))
    }
}
