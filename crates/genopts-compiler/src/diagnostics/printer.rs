//! Builder-pattern printer for rendering diagnostics.

use std::fmt::Write;

use annotate_snippets::{AnnotationKind, Group, Level, Renderer, Snippet};
use rowan::TextRange;

use super::Diagnostics;
use super::message::Severity;
use crate::source_map::SourceMap;

/// Renders diagnostics against the patterns they point into.
pub struct DiagnosticsPrinter<'d, 's> {
    diagnostics: &'d Diagnostics,
    sources: &'s SourceMap,
    colored: bool,
}

impl<'d, 's> DiagnosticsPrinter<'d, 's> {
    pub fn new(diagnostics: &'d Diagnostics, sources: &'s SourceMap) -> Self {
        Self {
            diagnostics,
            sources,
            colored: false,
        }
    }

    pub fn colored(mut self, value: bool) -> Self {
        self.colored = value;
        self
    }

    pub fn render(&self) -> String {
        let mut out = String::new();
        self.format(&mut out).expect("String write never fails");
        out
    }

    pub fn format(&self, w: &mut impl Write) -> std::fmt::Result {
        if self.diagnostics.is_empty() {
            return Ok(());
        }

        let renderer = if self.colored {
            Renderer::styled()
        } else {
            Renderer::plain()
        };

        for (i, diag) in self.diagnostics.iter().enumerate() {
            let source = self.sources.get(diag.source);
            let content = source.as_str();

            let mut snippet = Snippet::source(content)
                .line_start(source.line)
                .path(source.kind.display_name())
                .annotation(
                    AnnotationKind::Primary
                        .span(adjust_range(diag.range, content.len()))
                        .label(&diag.message),
                );

            let mut foreign = Vec::new();
            for related in &diag.related {
                if related.span.source == diag.source {
                    snippet = snippet.annotation(
                        AnnotationKind::Context
                            .span(adjust_range(related.span.range, content.len()))
                            .label(&related.message),
                    );
                } else {
                    foreign.push(related);
                }
            }

            let level = severity_to_level(diag.severity());
            let mut group = level.primary_title(&diag.message).element(snippet);

            for related in foreign {
                let other = self.sources.get(related.span.source);
                group = group.element(
                    Snippet::source(other.as_str())
                        .line_start(other.line)
                        .path(other.kind.display_name())
                        .annotation(
                            AnnotationKind::Context
                                .span(adjust_range(related.span.range, other.content.len()))
                                .label(&related.message),
                        ),
                );
            }

            let report: Vec<Group> = vec![group];

            if i > 0 {
                w.write_char('\n')?;
            }
            write!(w, "{}", renderer.render(&report))?;
        }

        Ok(())
    }
}

fn severity_to_level(severity: Severity) -> Level<'static> {
    match severity {
        Severity::Error => Level::ERROR,
        Severity::Warning => Level::WARNING,
    }
}

fn adjust_range(range: TextRange, limit: usize) -> std::ops::Range<usize> {
    let start: usize = range.start().into();
    let end: usize = range.end().into();

    if start == end {
        return start..(start + 1).min(limit);
    }

    start..end
}
