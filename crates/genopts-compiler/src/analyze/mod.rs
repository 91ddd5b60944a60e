//! Semantic analysis.
//!
//! One visitor pass fills the context tables:
//! - command ids and parents (codegen)
//! - dispatch entries and positional captures (codegen)
//! - mutual-exclusion blocks (codegen)
//!
//! Then the finishing passes run over the complete tables:
//! - implicit `--help` (validation)
//! - parent-scope checks (validation)
//! - command combinations and required arguments (validation)

mod codegen;
pub mod context;
mod validation;

#[cfg(test)]
mod codegen_tests;
#[cfg(test)]
mod validation_tests;

pub use context::{
    ArgSlot, Capture, CommandId, Context, DispatchEntry, EntryKind, FIRST_COMMAND, Match,
    NO_COMMAND, PatternShape, PositionalEntry, ROOT, VarTable,
};
pub use validation::HELP_TOKEN;

pub(crate) use codegen::positional_condition;

use crate::diagnostics::Diagnostics;
use crate::pattern::{Template, walk_template};

use self::codegen::Codegen;

/// Analyze a parsed template.
///
/// The context is complete only when the diagnostics hold no errors.
pub fn analyze(template: &Template) -> (Context, Diagnostics) {
    let mut ctx = Context::new();
    let mut diag = Diagnostics::new();

    let mut codegen = Codegen::new(&mut ctx, &mut diag);
    walk_template(&mut codegen, template);

    validation::add_help(&mut ctx, &mut diag);
    validation::add_scope_checks(&mut ctx);
    validation::add_combinations(&mut ctx, &mut diag);

    log::info!(
        "analyzed {} patterns: {} commands, {} dispatch entries, {} positional captures",
        template.patterns.len(),
        ctx.commands.len(),
        ctx.dispatch.len(),
        ctx.positionals.len()
    );
    (ctx, diag)
}
