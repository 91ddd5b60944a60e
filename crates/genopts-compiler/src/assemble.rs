//! Assembly of the analysis tables into the routines a backend renders.

use crate::analyze::{Context, Match, positional_condition};
use crate::backend::Config;
use crate::ir::build::{
    boolean, comment, current_token, fail_with, int, or, print, ret, str_eq, str_prefix, string,
};
use crate::ir::{Block, Expr, Stmt, Var, chain};

/// Indentation of pattern lines in the usage text.
const USAGE_INDENT: &str = "  ";

/// A complete, backend-neutral program.
#[derive(Debug, Clone)]
pub struct Program {
    /// Base name of generated types and routines.
    pub name: String,
    /// Source patterns, in declaration order.
    pub patterns: Vec<String>,
    /// Fields of the result structure.
    pub persistent: Vec<Var>,
    /// Fields of the auxiliary parser state.
    pub transient: Vec<Var>,
    /// Body of the token loop.
    pub dispatch: Block,
    pub validate: Block,
    pub usage: Block,
    /// Holds when help was requested; validation is skipped then.
    pub help: Expr,
}

pub fn assemble(ctx: &Context, config: &Config) -> Program {
    let mut patterns: Vec<String> = Vec::new();
    for shape in ctx.shapes() {
        if !patterns.contains(&shape.text) {
            patterns.push(shape.text.clone());
        }
    }

    let program = Program {
        name: config.name.clone(),
        persistent: ctx.persistent().to_vec(),
        transient: ctx.transient().to_vec(),
        dispatch: dispatch(ctx),
        validate: validate(ctx),
        usage: usage(&patterns),
        help: ctx.help().cloned().unwrap_or_else(|| boolean(false)),
        patterns,
    };
    log::info!(
        "assembled `{}`: {} result fields, {} state fields",
        program.name,
        program.persistent.len(),
        program.transient.len()
    );
    program
}

fn dispatch(ctx: &Context) -> Block {
    let mut branches = Vec::new();

    for (token, entry) in ctx.dispatch_entries() {
        let exact = str_eq(current_token(), string(token));
        let cond = match entry.matching {
            Match::Exact => exact,
            Match::Prefix => or(exact, str_prefix(current_token(), format!("{token}="))),
        };
        branches.push((cond, entry.block.clone()));
    }

    for (&(slot, cmd), entry) in ctx.positionals() {
        branches.push((positional_condition(slot, cmd), entry.block.clone()));
    }

    let unknown = Block::of([fail_with(
        "Unknown command or argument \"{}\"",
        current_token(),
    )]);
    Block::of(chain(branches, Some(unknown)))
}

fn validate(ctx: &Context) -> Block {
    let mut block = Block::new();

    let exclusions: Vec<Stmt> = ctx.exclusions().cloned().map(Stmt::Block).collect();
    if !exclusions.is_empty() {
        block.push(comment("Mutually exclusive options"));
        block.extend(exclusions);
    }

    if !ctx.scope_checks().is_empty() {
        block.push(comment("Options bound to commands"));
        block.extend(ctx.scope_checks().iter().cloned());
    }

    block.push(comment("Command combinations and required arguments"));
    block.extend(ctx.combinations().iter().cloned());
    block.push(ret(int(1)));
    block
}

fn usage(patterns: &[String]) -> Block {
    let mut block = Block::of([print("Usage:")]);
    block.extend(
        patterns
            .iter()
            .map(|text| print(format!("{USAGE_INDENT}{text}"))),
    );
    block
}
