//! Tables filled by the analyzer and consumed by assembly.
//!
//! Everything here is keyed the way it is rendered: dispatch entries by
//! token (emitted in lexicographic order), positional handlers by
//! `(slot, command)`, generated fields by name in declaration order.

use std::collections::BTreeMap;

use indexmap::IndexMap;

use crate::diagnostics::Span;
use crate::ir::{Block, Expr, Stmt, Type, Var};
use crate::source_map::SourceId;

/// Numeric id assigned to each distinct command token.
pub type CommandId = u32;

/// Value of `aux.cmd` before any command token was seen.
pub const NO_COMMAND: CommandId = 0;
/// Parent of options and commands that precede every command token.
pub const ROOT: CommandId = 1;
pub const FIRST_COMMAND: CommandId = 2;

/// Ordered set of generated fields.
#[derive(Debug, Clone, Default)]
pub struct VarTable {
    vars: IndexMap<String, Var>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a field once; redeclaring with the same type is a no-op.
    ///
    /// Returns the type already on record when it differs.
    pub fn declare(&mut self, name: &str, ty: Type) -> Result<(), Type> {
        match self.vars.get(name) {
            Some(var) if var.ty != ty => Err(var.ty),
            Some(_) => Ok(()),
            None => {
                self.vars.insert(name.to_owned(), Var::new(name, ty));
                Ok(())
            }
        }
    }

    /// Declare a field that must not exist yet; `false` when the name is taken.
    pub fn insert_new(&mut self, name: &str, ty: Type) -> bool {
        if self.vars.contains_key(name) {
            return false;
        }
        self.vars.insert(name.to_owned(), Var::new(name, ty));
        true
    }

    pub fn get(&self, name: &str) -> Option<&Var> {
        self.vars.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Var> {
        self.vars.values()
    }

    pub fn to_vec(&self) -> Vec<Var> {
        self.vars.values().cloned().collect()
    }
}

/// How a dispatch entry recognizes its token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Match {
    Exact,
    /// The token itself or `token=` followed by an inline value.
    Prefix,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Command {
        id: CommandId,
        inline: Option<String>,
    },
    Option {
        /// Name of the value argument, if the option takes one.
        value: Option<String>,
    },
}

/// Handler for one literal token.
#[derive(Debug, Clone)]
pub struct DispatchEntry {
    pub kind: EntryKind,
    pub matching: Match,
    /// Field holding the token's presence (or its value).
    pub field: String,
    pub ty: Type,
    pub block: Block,
    /// First declaration, for related notes.
    pub span: Span,
}

impl DispatchEntry {
    pub fn is_command(&self) -> bool {
        matches!(self.kind, EntryKind::Command { .. })
    }

    pub fn value(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::Command { inline, .. } => inline.as_deref(),
            EntryKind::Option { value } => value.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capture {
    /// Stored into `aux.positional<slot>`, resolved after parsing.
    Slot,
    /// Takes the rest of the argument vector into the named field.
    Variadic(String),
}

/// Handler for a positional token at a given slot under a given command.
#[derive(Debug, Clone)]
pub struct PositionalEntry {
    pub capture: Capture,
    pub block: Block,
    pub span: Span,
}

/// One positional argument as it appears in a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgSlot {
    pub name: String,
    pub field: String,
    pub slot: usize,
    pub optional: bool,
    pub variadic: bool,
    pub span: Span,
}

impl ArgSlot {
    /// Same name, position and flavor; the span is ignored.
    pub fn same_layout(&self, other: &ArgSlot) -> bool {
        self.name == other.name
            && self.slot == other.slot
            && self.optional == other.optional
            && self.variadic == other.variadic
    }
}

/// Command sequence and positional layout of one pattern.
#[derive(Debug, Clone)]
pub struct PatternShape {
    pub source: SourceId,
    pub text: String,
    pub span: Span,
    pub commands: Vec<CommandId>,
    pub args: Vec<ArgSlot>,
}

/// Analysis result: everything assembly needs to build a program.
#[derive(Debug, Clone, Default)]
pub struct Context {
    pub(crate) commands: IndexMap<String, CommandId>,
    pub(crate) parents: IndexMap<String, Vec<CommandId>>,
    pub(crate) dispatch: IndexMap<String, DispatchEntry>,
    pub(crate) positionals: BTreeMap<(usize, CommandId), PositionalEntry>,
    pub(crate) persistent: VarTable,
    pub(crate) transient: VarTable,
    /// Token each presence flag is derived from.
    pub(crate) flag_owners: IndexMap<String, (String, Span)>,
    /// Exclusion checks keyed by their member tokens.
    pub(crate) exclusions: IndexMap<Vec<String>, Block>,
    pub(crate) scope_checks: Vec<Stmt>,
    pub(crate) combinations: Vec<Stmt>,
    pub(crate) shapes: Vec<PatternShape>,
    pub(crate) help: Option<Expr>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    /// Id of a command token, if it was declared as a command.
    pub fn command_id(&self, token: &str) -> Option<CommandId> {
        self.commands.get(token).copied()
    }

    /// Command token for an id.
    pub fn command_name(&self, id: CommandId) -> Option<&str> {
        self.commands
            .iter()
            .find(|(_, v)| **v == id)
            .map(|(k, _)| k.as_str())
    }

    /// Parents recorded for a token, one per occurrence.
    pub fn parents(&self, token: &str) -> &[CommandId] {
        self.parents.get(token).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn entry(&self, token: &str) -> Option<&DispatchEntry> {
        self.dispatch.get(token)
    }

    /// Dispatch entries in lexicographic token order.
    pub fn dispatch_entries(&self) -> Vec<(&str, &DispatchEntry)> {
        let mut entries: Vec<_> = self
            .dispatch
            .iter()
            .map(|(k, v)| (k.as_str(), v))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }

    pub fn positionals(&self) -> impl Iterator<Item = (&(usize, CommandId), &PositionalEntry)> {
        self.positionals.iter()
    }

    pub fn persistent(&self) -> &VarTable {
        &self.persistent
    }

    pub fn transient(&self) -> &VarTable {
        &self.transient
    }

    /// Token whose presence a flag field records.
    pub fn flag_owner(&self, field: &str) -> Option<&str> {
        self.flag_owners.get(field).map(|(token, _)| token.as_str())
    }

    pub fn exclusions(&self) -> impl Iterator<Item = &Block> {
        self.exclusions.values()
    }

    pub fn scope_checks(&self) -> &[Stmt] {
        &self.scope_checks
    }

    pub fn combinations(&self) -> &[Stmt] {
        &self.combinations
    }

    pub fn shapes(&self) -> &[PatternShape] {
        &self.shapes
    }

    /// Predicate that holds when help was requested.
    pub fn help(&self) -> Option<&Expr> {
        self.help.as_ref()
    }

    pub(crate) fn next_command_id(&self) -> CommandId {
        FIRST_COMMAND + self.commands.len() as CommandId
    }
}
