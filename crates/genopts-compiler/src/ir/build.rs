//! Named constructors for IR nodes.
//!
//! Generated routines see `cli` (results), `aux` (parser state), `argv`,
//! `argc` and the loop index `i`; the helpers below name those directly.

use super::{BinOp, Block, Expr, If, Literal, Message, Stmt, Type};

pub const CLI: &str = "cli";
pub const AUX: &str = "aux";
pub const ARGV: &str = "argv";
pub const ARGC: &str = "argc";
pub const INDEX: &str = "i";

pub fn var(name: impl Into<String>) -> Expr {
    Expr::Var(name.into())
}

pub fn member(base: Expr, field: impl Into<String>) -> Expr {
    Expr::Member(Box::new(base), field.into())
}

/// Field of the result structure.
pub fn cli(field: impl Into<String>) -> Expr {
    member(var(CLI), field)
}

/// Field of the auxiliary parser state.
pub fn aux(field: impl Into<String>) -> Expr {
    member(var(AUX), field)
}

pub fn argv() -> Expr {
    var(ARGV)
}

pub fn argc() -> Expr {
    var(ARGC)
}

pub fn index_var() -> Expr {
    var(INDEX)
}

/// `argv[i]`
pub fn current_token() -> Expr {
    index(argv(), index_var())
}

pub fn index(base: Expr, idx: Expr) -> Expr {
    Expr::Index(Box::new(base), Box::new(idx))
}

pub fn slice(base: Expr, from: Expr) -> Expr {
    Expr::Slice(Box::new(base), Box::new(from))
}

pub fn suffix(base: Expr, offset: usize) -> Expr {
    Expr::Suffix(Box::new(base), offset)
}

pub fn int(value: i64) -> Expr {
    Expr::Lit(Literal::Int(value))
}

pub fn boolean(value: bool) -> Expr {
    Expr::Lit(Literal::Bool(value))
}

pub fn string(value: impl Into<String>) -> Expr {
    Expr::Lit(Literal::Str(value.into()))
}

pub fn binary(lhs: Expr, op: BinOp, rhs: Expr) -> Expr {
    Expr::Binary(Box::new(lhs), op, Box::new(rhs))
}

pub fn eq(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOp::Eq, rhs)
}

pub fn ne(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOp::Ne, rhs)
}

pub fn gt(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOp::Gt, rhs)
}

pub fn ge(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOp::Ge, rhs)
}

pub fn add(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOp::Add, rhs)
}

pub fn sub(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOp::Sub, rhs)
}

pub fn and(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOp::And, rhs)
}

pub fn or(lhs: Expr, rhs: Expr) -> Expr {
    binary(lhs, BinOp::Or, rhs)
}

/// Conjunction of all terms, left-associated; `true` when empty.
pub fn all(terms: impl IntoIterator<Item = Expr>) -> Expr {
    terms.into_iter().reduce(and).unwrap_or_else(|| boolean(true))
}

pub fn not(expr: Expr) -> Expr {
    Expr::Not(Box::new(expr))
}

pub fn str_eq(lhs: Expr, rhs: Expr) -> Expr {
    Expr::StrEq(Box::new(lhs), Box::new(rhs))
}

pub fn str_prefix(expr: Expr, prefix: impl Into<String>) -> Expr {
    Expr::StrPrefix(Box::new(expr), prefix.into())
}

pub fn is_set(expr: Expr, ty: Type) -> Expr {
    Expr::IsSet(Box::new(expr), ty)
}

pub fn is_unset(expr: Expr, ty: Type) -> Expr {
    not(is_set(expr, ty))
}

pub fn assign(lhs: Expr, rhs: Expr) -> Stmt {
    Stmt::Assign(lhs, rhs)
}

pub fn if_then(cond: Expr, then: Block) -> Stmt {
    Stmt::If(If::new(cond, then))
}

pub fn if_else(cond: Expr, then: Block, otherwise: Block) -> Stmt {
    Stmt::If(If::new(cond, then).otherwise(otherwise))
}

pub fn inc(target: Expr) -> Stmt {
    Stmt::Inc(target)
}

pub fn ret(value: Expr) -> Stmt {
    Stmt::Return(value)
}

pub fn fail(text: impl Into<String>) -> Stmt {
    Stmt::Fail(Message {
        text: text.into(),
        arg: None,
    })
}

/// Fail with `arg` substituted for the `{}` in `text`.
pub fn fail_with(text: impl Into<String>, arg: Expr) -> Stmt {
    Stmt::Fail(Message {
        text: text.into(),
        arg: Some(arg),
    })
}

pub fn print(text: impl Into<String>) -> Stmt {
    Stmt::Print(text.into())
}

pub fn comment(text: impl Into<String>) -> Stmt {
    Stmt::Comment(text.into())
}

pub fn break_loop() -> Stmt {
    Stmt::Break
}
