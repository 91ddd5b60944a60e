//! Backend-neutral statements and expressions.
//!
//! The analyzer produces blocks of these; backends only render them. There
//! are no loops: the token loop of the parsing routine is rendered by each
//! backend around the dispatch block.

pub mod build;


/// Value types of generated fields and locals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Type {
    /// Presence flag.
    Flag,
    Int,
    Str,
    /// Tail of the argument vector.
    StrList,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Literal {
    Bool(bool),
    Int(i64),
    Str(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Eq,
    Ne,
    Lt,
    Le,
    Gt,
    Ge,
    Add,
    Sub,
    And,
    Or,
}

impl BinOp {
    /// Operator spelling shared by every C-family target.
    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Eq => "==",
            BinOp::Ne => "!=",
            BinOp::Lt => "<",
            BinOp::Le => "<=",
            BinOp::Gt => ">",
            BinOp::Ge => ">=",
            BinOp::Add => "+",
            BinOp::Sub => "-",
            BinOp::And => "&&",
            BinOp::Or => "||",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Lit(Literal),
    Var(String),
    Member(Box<Expr>, String),
    Index(Box<Expr>, Box<Expr>),
    /// Elements of a list starting at an index.
    Slice(Box<Expr>, Box<Expr>),
    /// Characters of a string starting at a byte offset.
    Suffix(Box<Expr>, usize),
    Binary(Box<Expr>, BinOp, Box<Expr>),
    Not(Box<Expr>),
    StrEq(Box<Expr>, Box<Expr>),
    StrPrefix(Box<Expr>, String),
    /// Whether a value of the given type holds something.
    IsSet(Box<Expr>, Type),
}

/// Runtime diagnostic text. `{}` marks where `arg` is substituted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub arg: Option<Expr>,
}

impl Message {
    /// Text before and after the placeholder; no placeholder means no tail.
    pub fn pieces(&self) -> (&str, Option<&str>) {
        match self.text.split_once("{}") {
            Some((head, tail)) if self.arg.is_some() => (head, Some(tail)),
            _ => (&self.text, None),
        }
    }

    /// The message with `value` in place of the placeholder.
    pub fn format(&self, value: &str) -> String {
        match self.pieces() {
            (head, Some(tail)) => format!("{head}{value}{tail}"),
            (text, None) => text.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    Assign(Expr, Expr),
    If(If),
    Return(Expr),
    /// Print a diagnostic to stderr and return failure.
    Fail(Message),
    /// Print a line to stdout.
    Print(String),
    Break,
    Inc(Expr),
    Block(Block),
    Comment(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct If {
    pub cond: Expr,
    pub then: Block,
    pub otherwise: Option<Block>,
}

impl If {
    pub fn new(cond: Expr, then: Block) -> Self {
        Self {
            cond,
            then,
            otherwise: None,
        }
    }

    pub fn otherwise(mut self, block: Block) -> Self {
        self.otherwise = Some(block);
        self
    }

    /// The `else` block when it is exactly one nested `if` with no locals,
    /// which renders as `else if`.
    pub fn else_if(&self) -> Option<&If> {
        let block = self.otherwise.as_ref()?;
        match block.stmts.as_slice() {
            [Stmt::If(inner)] if block.vars.is_empty() => Some(inner),
            _ => None,
        }
    }
}

/// A local or a field declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Var {
    pub name: String,
    pub ty: Type,
    pub init: Option<Expr>,
}

impl Var {
    pub fn new(name: impl Into<String>, ty: Type) -> Self {
        Self {
            name: name.into(),
            ty,
            init: None,
        }
    }

    pub fn with_init(mut self, init: Expr) -> Self {
        self.init = Some(init);
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Block {
    pub vars: Vec<Var>,
    pub stmts: Vec<Stmt>,
}

impl Block {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn of(stmts: impl IntoIterator<Item = Stmt>) -> Self {
        Self {
            vars: Vec::new(),
            stmts: stmts.into_iter().collect(),
        }
    }

    pub fn with_var(mut self, var: Var) -> Self {
        self.vars.push(var);
        self
    }

    pub fn with(mut self, stmt: Stmt) -> Self {
        self.stmts.push(stmt);
        self
    }

    pub fn push(&mut self, stmt: Stmt) -> &mut Self {
        self.stmts.push(stmt);
        self
    }

    pub fn extend(&mut self, stmts: impl IntoIterator<Item = Stmt>) -> &mut Self {
        self.stmts.extend(stmts);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty() && self.stmts.is_empty()
    }
}

/// Fold condition/body pairs into one if/else-if chain.
///
/// Returns the fallback block's statements unchanged when there are no
/// branches at all.
pub fn chain(branches: Vec<(Expr, Block)>, fallback: Option<Block>) -> Vec<Stmt> {
    let mut tail = fallback;
    for (cond, then) in branches.into_iter().rev() {
        let mut node = If::new(cond, then);
        node.otherwise = tail.take();
        tail = Some(Block::of([Stmt::If(node)]));
    }
    match tail {
        Some(block) if block.vars.is_empty() => block.stmts,
        Some(block) => vec![Stmt::Block(block)],
        None => Vec::new(),
    }
}
