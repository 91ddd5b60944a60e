//! Parser for the bracket-and-pipe pattern grammar.
//!
//! Each pattern is parsed on its own by a cursor-based recursive-descent
//! parser. Parsing is all-or-nothing: a pattern either yields a complete
//! tree or a single `SyntaxError`; there is no recovery.
//!
//! Special characters are space, `[`, `]`, `|` and `=`. Everything else
//! forms command tokens. Speculative rules (a flag followed by `<value>`)
//! restore the cursor when they don't match.

mod core;
mod expand;
mod grammar;
mod validation;

#[cfg(test)]
mod tests;

pub use self::core::SyntaxError;
pub use expand::{Segment, combine, expand};

use rowan::TextRange;

use crate::diagnostics::Diagnostics;
use crate::pattern::{Pattern, Template};
use crate::source_map::{SourceId, SourceMap};
use self::core::Parser;

/// Parse one pattern.
pub fn parse_pattern(source: SourceId, text: &str) -> Result<Pattern, SyntaxError> {
    let mut parser = Parser::new(text);
    let commands = parser.parse_pattern()?;
    validation::validate_pattern(&commands)?;

    let start = text.len() - text.trim_start().len();
    let end = text.trim_end().len().max(start);
    Ok(Pattern {
        source,
        text: text.trim().to_string(),
        commands,
        span: TextRange::new((start as u32).into(), (end as u32).into()),
    })
}

/// Parse every pattern of a source map.
///
/// Failing patterns are reported and left out of the template.
pub fn parse_template(sources: &SourceMap) -> (Template, Diagnostics) {
    let mut diagnostics = Diagnostics::new();
    let mut patterns = Vec::with_capacity(sources.len());

    for source in sources.iter() {
        match parse_pattern(source.id, source.as_str()) {
            Ok(pattern) => {
                log::trace!("parsed pattern {:?}: {}", source.id, pattern.text);
                patterns.push(pattern);
            }
            Err(err) => {
                log::debug!("pattern {:?} failed to parse: {}", source.id, err);
                let builder = diagnostics.report(source.id, err.kind, err.range);
                match err.detail {
                    Some(detail) => builder.message(detail).emit(),
                    None => builder.emit(),
                }
            }
        }
    }

    (Template { patterns }, diagnostics)
}
