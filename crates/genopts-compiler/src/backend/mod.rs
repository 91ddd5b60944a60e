//! Source backends.
//!
//! A backend turns an assembled `Program` into source text for one target
//! language. Rendering that is the same for every C-family target (braced
//! blocks, if/else chains, assignments, increments) lives in `common` as
//! free functions; the trait's default methods call into it.

mod c;
pub mod common;
mod java;
mod writer;

#[cfg(test)]
mod common_tests;

pub use c::CBackend;
pub use java::JavaBackend;
pub use writer::Writer;

use crate::assemble::Program;
use crate::ir::{Block, Expr, Literal, Message, Stmt, Type, Var};

/// Output configuration shared by all backends.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Base name of generated types and routines.
    pub name: String,
    /// Emit a comment listing the source patterns.
    pub header: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            name: "cli".to_string(),
            header: true,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn header(mut self, header: bool) -> Self {
        self.header = header;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BackendKind {
    #[default]
    C,
    Java,
}

impl BackendKind {
    pub const ALL: [BackendKind; 2] = [BackendKind::C, BackendKind::Java];

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "c" => Some(Self::C),
            "java" => Some(Self::Java),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::C => "c",
            Self::Java => "java",
        }
    }

    pub fn backend(self, config: Config) -> Box<dyn Backend> {
        match self {
            Self::C => Box::new(CBackend::new(config)),
            Self::Java => Box::new(JavaBackend::new(config)),
        }
    }
}

pub trait Backend {
    fn name(&self) -> &'static str;

    fn config(&self) -> &Config;

    fn type_name(&self, ty: Type) -> &'static str;

    fn literal(&self, lit: &Literal) -> String;

    fn expr(&self, expr: &Expr) -> String;

    /// Declaration of a field or local, without indentation.
    fn render_variable(&self, var: &Var) -> String;

    fn render_variables(&self, w: &mut Writer, vars: &[Var]) {
        for var in vars {
            w.line(self.render_variable(var));
        }
    }

    fn render_block(&self, w: &mut Writer, block: &Block) {
        common::render_block(self, w, block);
    }

    fn render_stmt(&self, w: &mut Writer, stmt: &Stmt) {
        common::render_stmt(self, w, stmt);
    }

    /// Print the message to the error stream and return failure.
    fn render_fail(&self, w: &mut Writer, message: &Message);

    fn render_print(&self, w: &mut Writer, text: &str);

    fn render_comment(&self, w: &mut Writer, text: &str);

    /// Complete source unit.
    fn render(&self, program: &Program) -> String;
}
