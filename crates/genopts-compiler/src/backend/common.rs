//! Rendering shared by the C-family backends.

use crate::ir::{BinOp, Block, Expr, If, Stmt};

use super::{Backend, Writer};

/// Braced block: locals first, then statements.
pub fn render_block<B: Backend + ?Sized>(backend: &B, w: &mut Writer, block: &Block) {
    w.open();
    render_body(backend, w, block);
    w.close();
}

/// Block contents without the braces.
pub fn render_body<B: Backend + ?Sized>(backend: &B, w: &mut Writer, block: &Block) {
    backend.render_variables(w, &block.vars);
    for stmt in &block.stmts {
        backend.render_stmt(w, stmt);
    }
}

pub fn render_stmt<B: Backend + ?Sized>(backend: &B, w: &mut Writer, stmt: &Stmt) {
    match stmt {
        Stmt::Assign(lhs, rhs) => {
            w.line(format!("{} = {};", backend.expr(lhs), backend.expr(rhs)));
        }
        Stmt::If(node) => render_if(backend, w, node),
        Stmt::Return(value) => w.line(format!("return {};", backend.expr(value))),
        Stmt::Fail(message) => backend.render_fail(w, message),
        Stmt::Print(text) => backend.render_print(w, text),
        Stmt::Break => w.line("break;"),
        Stmt::Inc(target) => w.line(format!("{}++;", backend.expr(target))),
        Stmt::Block(block) => backend.render_block(w, block),
        Stmt::Comment(text) => backend.render_comment(w, text),
    }
}

/// `if`, then `else if` for every collapsible else, then a final `else`.
pub fn render_if<B: Backend + ?Sized>(backend: &B, w: &mut Writer, node: &If) {
    w.line(format!("if ({})", backend.expr(&node.cond)));
    backend.render_block(w, &node.then);

    let mut current = node;
    while let Some(inner) = current.else_if() {
        w.line(format!("else if ({})", backend.expr(&inner.cond)));
        backend.render_block(w, &inner.then);
        current = inner;
    }
    if let Some(otherwise) = &current.otherwise {
        w.line("else");
        backend.render_block(w, otherwise);
    }
}

/// Binary expression; nested binaries with another operator get parentheses.
pub fn binary<B: Backend + ?Sized>(backend: &B, lhs: &Expr, op: BinOp, rhs: &Expr) -> String {
    format!(
        "{} {} {}",
        operand(backend, lhs, op),
        op.symbol(),
        operand(backend, rhs, op)
    )
}

fn operand<B: Backend + ?Sized>(backend: &B, expr: &Expr, parent: BinOp) -> String {
    match expr {
        Expr::Binary(_, op, _) if *op != parent => format!("({})", backend.expr(expr)),
        _ => backend.expr(expr),
    }
}

/// Renders without ambiguity as the operand of a prefix operator.
pub fn is_atomic(expr: &Expr) -> bool {
    matches!(
        expr,
        Expr::Lit(_) | Expr::Var(_) | Expr::Member(..) | Expr::Index(..)
    )
}

/// Logical negation, parenthesized unless the operand is atomic.
pub fn negate<B: Backend + ?Sized>(backend: &B, expr: &Expr) -> String {
    if is_atomic(expr) {
        format!("!{}", backend.expr(expr))
    } else {
        format!("!({})", backend.expr(expr))
    }
}
