//! genopts: compile bracket-and-pipe command-line patterns into argument
//! parsers for C and Java.
//!
//! # Example
//!
//! ```
//! use genopts_compiler::{BackendKind, Config, TemplateBuilder};
//!
//! let analyzed = TemplateBuilder::from_patterns(&["add <file>", "commit [-a|--amend]"])
//!     .parse()
//!     .and_then(|parsed| parsed.analyze())
//!     .expect("valid patterns");
//! let source = analyzed.generate(BackendKind::C, Config::default());
//! assert!(source.contains("struct cli"));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod analyze;
pub mod assemble;
pub mod backend;
pub mod diagnostics;
pub mod ir;
pub mod parser;
pub mod pattern;
pub mod source_map;
pub mod template;

#[cfg(test)]
pub mod test_utils;

pub use assemble::Program;
pub use backend::{Backend, BackendKind, Config};
pub use diagnostics::{Diagnostics, DiagnosticsPrinter, Severity};
pub use source_map::SourceMap;
pub use template::{TemplateAnalyzed, TemplateBuilder, TemplateParsed};

/// Errors that stop compilation.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("no patterns given")]
    NoPatterns,

    #[error("pattern parsing failed with {} errors", .0.error_count())]
    PatternParseError(Diagnostics),

    #[error("pattern analysis failed with {} errors", .0.error_count())]
    PatternAnalyzeError(Diagnostics),
}

pub type Result<T> = std::result::Result<T, Error>;
