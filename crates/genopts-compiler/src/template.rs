//! Staged compilation: parse, then analyze, then render.
//!
//! ```ignore
//! let analyzed = TemplateBuilder::from_patterns(&["add <file>"]).parse()?.analyze()?;
//! let source = analyzed.emit(BackendKind::C.backend(Config::default()).as_ref());
//! ```

use crate::analyze::{self, Context};
use crate::assemble::{Program, assemble};
use crate::backend::{Backend, BackendKind, Config};
use crate::diagnostics::Diagnostics;
use crate::parser::parse_template;
use crate::pattern::Template;
use crate::source_map::SourceMap;
use crate::{Error, Result};

pub struct TemplateBuilder {
    source_map: SourceMap,
}

impl TemplateBuilder {
    pub fn new(source_map: SourceMap) -> Self {
        Self { source_map }
    }

    /// One inline source per pattern.
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self::new(SourceMap::from_patterns(patterns))
    }

    pub fn parse(self) -> Result<TemplateParsed> {
        if self.source_map.is_empty() {
            return Err(Error::NoPatterns);
        }

        let (template, diag) = parse_template(&self.source_map);
        if diag.has_errors() {
            return Err(Error::PatternParseError(diag));
        }
        log::info!("parsed {} patterns", template.patterns.len());

        Ok(TemplateParsed {
            source_map: self.source_map,
            template,
            diag,
        })
    }
}

#[derive(Debug)]
pub struct TemplateParsed {
    source_map: SourceMap,
    template: Template,
    diag: Diagnostics,
}

impl TemplateParsed {
    pub fn analyze(mut self) -> Result<TemplateAnalyzed> {
        let (context, diag) = analyze::analyze(&self.template);
        self.diag.extend(diag);
        if self.diag.has_errors() {
            return Err(Error::PatternAnalyzeError(self.diag));
        }

        Ok(TemplateAnalyzed {
            parsed: self,
            context,
        })
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.source_map
    }

    pub fn template(&self) -> &Template {
        &self.template
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.diag.clone()
    }
}

/// A template that passed analysis; warnings may remain.
#[derive(Debug)]
pub struct TemplateAnalyzed {
    parsed: TemplateParsed,
    context: Context,
}

impl TemplateAnalyzed {
    pub fn context(&self) -> &Context {
        &self.context
    }

    pub fn template(&self) -> &Template {
        &self.parsed.template
    }

    pub fn source_map(&self) -> &SourceMap {
        &self.parsed.source_map
    }

    pub fn diagnostics(&self) -> Diagnostics {
        self.parsed.diag.clone()
    }

    pub fn program(&self, config: &Config) -> Program {
        assemble(&self.context, config)
    }

    /// Render with the given backend, using its configuration.
    pub fn emit(&self, backend: &dyn Backend) -> String {
        backend.render(&self.program(backend.config()))
    }

    pub fn generate(&self, kind: BackendKind, config: Config) -> String {
        self.emit(kind.backend(config).as_ref())
    }
}
