use indoc::indoc;

use crate::backend::{Backend, CBackend, Config, Writer};
use crate::ir::build::{add, all, argc, eq, ge, inc, index_var, int, var};
use crate::ir::{Block, Stmt, Type, Var, chain};

fn c() -> CBackend {
    CBackend::new(Config::default())
}

#[test]
fn writer_indents_with_tabs() {
    let mut w = Writer::new();
    w.line("a");
    w.open();
    w.line("b");
    w.blank();
    w.line("");
    w.close_with("};");

    assert_eq!(w.depth(), 0);
    assert_eq!(w.finish(), "a\n{\n\tb\n\n\n};\n");
}

#[test]
fn dedent_stops_at_zero() {
    let mut w = Writer::new();
    w.dedent();
    w.line("x");
    assert_eq!(w.finish(), "x\n");
}

#[test]
fn else_if_chains_do_not_nest() {
    let stmts = chain(
        vec![
            (eq(var("x"), int(1)), Block::of([inc(var("x"))])),
            (eq(var("x"), int(2)), Block::of([Stmt::Break])),
        ],
        Some(Block::of([Stmt::Break])),
    );
    let block = Block::of(stmts).with_var(Var::new("x", Type::Int).with_init(int(0)));

    let mut w = Writer::new();
    c().render_block(&mut w, &block);
    let out = w.finish().replace('\t', "    ");

    assert_eq!(
        out,
        indoc! {"
            {
                int x = 0;
                if (x == 1)
                {
                    x++;
                }
                else if (x == 2)
                {
                    break;
                }
                else
                {
                    break;
                }
            }
        "}
    );
}

#[test]
fn else_with_locals_stays_a_block() {
    let inner = Block::of(chain(vec![(var("b"), Block::new())], None))
        .with_var(Var::new("n", Type::Int));
    let stmts = chain(vec![(var("a"), Block::new())], Some(inner));

    let mut w = Writer::new();
    for stmt in &stmts {
        c().render_stmt(&mut w, stmt);
    }
    let out = w.finish().replace('\t', "    ");

    assert_eq!(
        out,
        indoc! {"
            if (a)
            {
            }
            else
            {
                int n;
                if (b)
                {
                }
            }
        "}
    );
}

#[test]
fn mixed_operators_get_parentheses() {
    let expr = all([
        eq(var("a"), int(1)),
        eq(var("b"), int(2)),
        ge(add(index_var(), int(1)), argc()),
    ]);
    assert_eq!(
        c().expr(&expr),
        "(a == 1) && (b == 2) && ((i + 1) >= argc)"
    );
}
