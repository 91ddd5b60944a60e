//! Test helpers: compile patterns and run the assembled program.
//!
//! `Machine` interprets the IR the way the generated entry routine runs:
//! the token loop over the dispatch block, then the help gate, then the
//! validator.

use indexmap::IndexMap;

use crate::assemble::Program;
use crate::backend::{BackendKind, Config};
use crate::diagnostics::Diagnostics;
use crate::ir::build::{ARGC, ARGV, AUX, CLI, INDEX};
use crate::ir::{BinOp, Block, Expr, Literal, Stmt, Type, Var};
use crate::template::{TemplateAnalyzed, TemplateBuilder};
use crate::{Error, Result};

pub fn try_compile(patterns: &[&str]) -> Result<TemplateAnalyzed> {
    TemplateBuilder::from_patterns(patterns).parse()?.analyze()
}

pub fn compile(patterns: &[&str]) -> TemplateAnalyzed {
    match try_compile(patterns) {
        Ok(analyzed) => analyzed,
        Err(err) => panic!("{patterns:?} failed to compile: {err} {:?}", diagnostics_of(&err)),
    }
}

/// Diagnostics of a failed compilation.
pub fn compile_errors(patterns: &[&str]) -> Diagnostics {
    match try_compile(patterns) {
        Ok(_) => panic!("{patterns:?} compiled without errors"),
        Err(err) => diagnostics_of(&err).cloned().unwrap_or_default(),
    }
}

fn diagnostics_of(err: &Error) -> Option<&Diagnostics> {
    match err {
        Error::NoPatterns => None,
        Error::PatternParseError(diag) | Error::PatternAnalyzeError(diag) => Some(diag),
    }
}

pub fn program(patterns: &[&str]) -> Program {
    compile(patterns).program(&Config::default())
}

pub fn render(patterns: &[&str], kind: BackendKind) -> String {
    compile(patterns)
        .generate(kind, Config::default())
        .replace('\t', "    ")
}

/// Compile `patterns` and run the entry routine with validation and usage on.
pub fn run(patterns: &[&str], args: &[&str]) -> Outcome {
    Machine::new(&program(patterns), args).run(true, true)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    List(Vec<String>),
}

impl Value {
    fn default_for(ty: Type) -> Self {
        match ty {
            Type::Flag => Value::Bool(false),
            Type::Int => Value::Int(0),
            Type::Str | Type::StrList => Value::Null,
        }
    }

    fn truthy(&self) -> bool {
        match self {
            Value::Null => false,
            Value::Bool(b) => *b,
            Value::Int(n) => *n != 0,
            Value::Str(_) | Value::List(_) => true,
        }
    }

    fn int(&self) -> i64 {
        match self {
            Value::Int(n) => *n,
            Value::Bool(b) => *b as i64,
            other => panic!("expected an integer, got {other:?}"),
        }
    }

    fn text(&self) -> String {
        match self {
            Value::Str(s) => s.clone(),
            Value::Int(n) => n.to_string(),
            other => panic!("expected a string, got {other:?}"),
        }
    }
}

/// Result of one run of the entry routine.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub status: i64,
    pub cli: IndexMap<String, Value>,
    pub aux: IndexMap<String, Value>,
    pub stdout: Vec<String>,
    pub stderr: Vec<String>,
}

impl Outcome {
    pub fn ok(&self) -> bool {
        self.status == 1
    }

    pub fn flag(&self, field: &str) -> bool {
        self.cli(field).truthy()
    }

    pub fn str(&self, field: &str) -> Option<&str> {
        match self.cli(field) {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn list(&self, field: &str) -> Option<&[String]> {
        match self.cli(field) {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn int(&self, field: &str) -> i64 {
        self.cli(field).int()
    }

    /// Everything printed to stderr, one message per line.
    pub fn error(&self) -> String {
        self.stderr.join("\n")
    }

    fn cli(&self, field: &str) -> &Value {
        self.cli
            .get(field)
            .unwrap_or_else(|| panic!("no result field `{field}`"))
    }
}

enum Flow {
    Next,
    Break,
    Return(i64),
}

pub struct Machine<'p> {
    program: &'p Program,
    argv: Vec<String>,
    index: i64,
    cli: IndexMap<String, Value>,
    aux: IndexMap<String, Value>,
    locals: Vec<IndexMap<String, Value>>,
    stdout: Vec<String>,
    stderr: Vec<String>,
}

impl<'p> Machine<'p> {
    pub fn new(program: &'p Program, args: &[&str]) -> Self {
        let fields = |vars: &[Var]| -> IndexMap<String, Value> {
            vars.iter()
                .map(|v| (v.name.clone(), Value::default_for(v.ty)))
                .collect()
        };
        Self {
            program,
            argv: args.iter().map(|s| s.to_string()).collect(),
            index: 0,
            cli: fields(&program.persistent),
            aux: fields(&program.transient),
            locals: Vec::new(),
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }

    pub fn run(mut self, validate: bool, usage: bool) -> Outcome {
        let status = self.entry(validate, usage);
        Outcome {
            status,
            cli: self.cli,
            aux: self.aux,
            stdout: self.stdout,
            stderr: self.stderr,
        }
    }

    fn entry(&mut self, validate: bool, usage: bool) -> i64 {
        let program = self.program;

        self.index = 0;
        while (self.index as usize) < self.argv.len() {
            match self.exec_block(&program.dispatch) {
                Flow::Next => {}
                Flow::Break => break,
                Flow::Return(status) => return status,
            }
            self.index += 1;
        }

        if self.eval(&program.help).truthy() {
            if usage {
                self.exec_block(&program.usage);
            }
            return 1;
        }
        if validate {
            return match self.exec_block(&program.validate) {
                Flow::Return(status) => status,
                _ => panic!("validator fell through without returning"),
            };
        }
        1
    }

    fn exec_block(&mut self, block: &Block) -> Flow {
        let mut scope = IndexMap::new();
        for var in &block.vars {
            let value = match &var.init {
                Some(init) => self.eval(init),
                None => Value::default_for(var.ty),
            };
            scope.insert(var.name.clone(), value);
        }
        self.locals.push(scope);

        let mut flow = Flow::Next;
        for stmt in &block.stmts {
            flow = self.exec(stmt);
            if !matches!(flow, Flow::Next) {
                break;
            }
        }

        self.locals.pop();
        flow
    }

    fn exec(&mut self, stmt: &Stmt) -> Flow {
        match stmt {
            Stmt::Assign(target, value) => {
                let value = self.eval(value);
                self.store(target, value);
            }
            Stmt::If(node) => {
                if self.eval(&node.cond).truthy() {
                    return self.exec_block(&node.then);
                } else if let Some(otherwise) = &node.otherwise {
                    return self.exec_block(otherwise);
                }
            }
            Stmt::Return(value) => return Flow::Return(self.eval(value).int()),
            Stmt::Fail(message) => {
                let text = match &message.arg {
                    Some(arg) => message.format(&self.eval(arg).text()),
                    None => message.text.clone(),
                };
                self.stderr.push(text);
                return Flow::Return(0);
            }
            Stmt::Print(text) => self.stdout.push(text.clone()),
            Stmt::Break => return Flow::Break,
            Stmt::Inc(target) => {
                let value = self.eval(target).int();
                self.store(target, Value::Int(value + 1));
            }
            Stmt::Block(block) => return self.exec_block(block),
            Stmt::Comment(_) => {}
        }
        Flow::Next
    }

    fn store(&mut self, target: &Expr, value: Value) {
        match target {
            Expr::Member(base, field) => {
                let table = match base.as_ref() {
                    Expr::Var(name) if name == CLI => &mut self.cli,
                    Expr::Var(name) if name == AUX => &mut self.aux,
                    other => panic!("cannot assign through {other:?}"),
                };
                assert!(table.contains_key(field), "undeclared field `{field}`");
                table.insert(field.clone(), value);
            }
            Expr::Var(name) if name == INDEX => self.index = value.int(),
            Expr::Var(name) => {
                let scope = self
                    .locals
                    .iter_mut()
                    .rev()
                    .find(|scope| scope.contains_key(name))
                    .unwrap_or_else(|| panic!("undeclared local `{name}`"));
                scope.insert(name.clone(), value);
            }
            other => panic!("cannot assign to {other:?}"),
        }
    }

    fn eval(&self, expr: &Expr) -> Value {
        match expr {
            Expr::Lit(lit) => match lit {
                Literal::Bool(b) => Value::Bool(*b),
                Literal::Int(n) => Value::Int(*n),
                Literal::Str(s) => Value::Str(s.clone()),
            },
            Expr::Var(name) => match name.as_str() {
                INDEX => Value::Int(self.index),
                ARGC => Value::Int(self.argv.len() as i64),
                ARGV => Value::List(self.argv.clone()),
                _ => self
                    .locals
                    .iter()
                    .rev()
                    .find_map(|scope| scope.get(name))
                    .cloned()
                    .unwrap_or_else(|| panic!("undeclared local `{name}`")),
            },
            Expr::Member(base, field) => {
                let table = match base.as_ref() {
                    Expr::Var(name) if name == CLI => &self.cli,
                    Expr::Var(name) if name == AUX => &self.aux,
                    other => panic!("no member access on {other:?}"),
                };
                table
                    .get(field)
                    .cloned()
                    .unwrap_or_else(|| panic!("undeclared field `{field}`"))
            }
            Expr::Index(base, idx) => match self.eval(base) {
                Value::List(items) => Value::Str(items[self.eval(idx).int() as usize].clone()),
                other => panic!("cannot index {other:?}"),
            },
            Expr::Slice(base, from) => match self.eval(base) {
                Value::List(items) => Value::List(items[self.eval(from).int() as usize..].to_vec()),
                other => panic!("cannot slice {other:?}"),
            },
            Expr::Suffix(base, offset) => Value::Str(self.eval(base).text()[*offset..].to_string()),
            Expr::Binary(lhs, op, rhs) => self.binary(lhs, *op, rhs),
            Expr::Not(inner) => Value::Bool(!self.eval(inner).truthy()),
            Expr::StrEq(lhs, rhs) => Value::Bool(self.eval(lhs) == self.eval(rhs)),
            Expr::StrPrefix(value, prefix) => {
                Value::Bool(self.eval(value).text().starts_with(prefix.as_str()))
            }
            Expr::IsSet(value, _) => Value::Bool(self.eval(value).truthy()),
        }
    }

    fn binary(&self, lhs: &Expr, op: BinOp, rhs: &Expr) -> Value {
        match op {
            BinOp::And => return Value::Bool(self.eval(lhs).truthy() && self.eval(rhs).truthy()),
            BinOp::Or => return Value::Bool(self.eval(lhs).truthy() || self.eval(rhs).truthy()),
            _ => {}
        }
        let (a, b) = (self.eval(lhs).int(), self.eval(rhs).int());
        match op {
            BinOp::Eq => Value::Bool(a == b),
            BinOp::Ne => Value::Bool(a != b),
            BinOp::Lt => Value::Bool(a < b),
            BinOp::Le => Value::Bool(a <= b),
            BinOp::Gt => Value::Bool(a > b),
            BinOp::Ge => Value::Bool(a >= b),
            BinOp::Add => Value::Int(a + b),
            BinOp::Sub => Value::Int(a - b),
            BinOp::And | BinOp::Or => unreachable!(),
        }
    }
}
