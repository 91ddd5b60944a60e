//! Java backend: one public class holding the results, a nested state class.

use genopts_core::utils::{escape_string, quote, to_field_name, to_pascal_case};

use crate::assemble::Program;
use crate::ir::{Expr, Literal, Message, Type, Var};

use super::common::{binary, is_atomic, negate, render_body};
use super::{Backend, Config, Writer};

pub struct JavaBackend {
    config: Config,
}

impl JavaBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn header(&self, w: &mut Writer, program: &Program) {
        w.line("// Generated by genopts from:");
        for pattern in &program.patterns {
            w.line(format!("//   {pattern}"));
        }
        w.blank();
    }

    fn render_fields(&self, w: &mut Writer, modifier: &str, vars: &[Var]) {
        for var in vars {
            w.line(format!("{modifier}{}", self.render_variable(var)));
        }
    }

    fn render_parse_simple(&self, w: &mut Writer, class: &str, program: &Program) {
        w.line(format!(
            "static int parse{class}Simple(String[] argv, {class} cli, Aux aux)"
        ));
        w.open();
        w.line("int argc = argv.length;");
        w.blank();
        w.line("for (int i = 0; i < argc; i++)");
        w.open();
        render_body(self, w, &program.dispatch);
        w.close();
        w.line("return 1;");
        w.close();
        w.blank();
    }

    fn render_validate(&self, w: &mut Writer, class: &str, program: &Program) {
        w.line(format!("static int validate{class}({class} cli, Aux aux)"));
        w.open();
        render_body(self, w, &program.validate);
        w.close();
        w.blank();
    }

    fn render_usage(&self, w: &mut Writer, class: &str, program: &Program) {
        w.line(format!("static void usage{class}()"));
        w.open();
        render_body(self, w, &program.usage);
        w.close();
        w.blank();
    }

    fn render_entry(&self, w: &mut Writer, class: &str, program: &Program) {
        w.line(format!(
            "public static int parse{class}(String[] argv, {class} cli, int opts)"
        ));
        w.open();
        w.line("Aux aux = new Aux();");
        w.blank();
        w.line(format!("if (parse{class}Simple(argv, cli, aux) == 0)"));
        w.indent();
        w.line("return 0;");
        w.dedent();
        w.line(format!("if ({})", self.expr(&program.help)));
        w.open();
        w.line("if ((opts & POF_USAGE) != 0)");
        w.indent();
        w.line(format!("usage{class}();"));
        w.dedent();
        w.line("return 1;");
        w.close();
        w.line("if ((opts & POF_VALIDATE) != 0)");
        w.indent();
        w.line(format!("return validate{class}(cli, aux);"));
        w.dedent();
        w.line("return 1;");
        w.close();
    }

    /// Negated presence test, spelled per type.
    fn is_unset(&self, value: &Expr, ty: Type) -> String {
        match ty {
            Type::Flag => negate(self, value),
            Type::Int => format!("{} == 0", self.expr(value)),
            Type::Str | Type::StrList => format!("{} == null", self.expr(value)),
        }
    }

    /// Receiver of a method call.
    fn receiver(&self, expr: &Expr) -> String {
        if is_atomic(expr) {
            self.expr(expr)
        } else {
            format!("({})", self.expr(expr))
        }
    }
}

impl Backend for JavaBackend {
    fn name(&self) -> &'static str {
        "java"
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn type_name(&self, ty: Type) -> &'static str {
        match ty {
            Type::Flag => "boolean",
            Type::Int => "int",
            Type::Str => "String",
            Type::StrList => "String[]",
        }
    }

    fn literal(&self, lit: &Literal) -> String {
        match lit {
            Literal::Bool(value) => value.to_string(),
            Literal::Int(value) => value.to_string(),
            Literal::Str(text) => quote(text),
        }
    }

    fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Lit(lit) => self.literal(lit),
            Expr::Var(name) => name.clone(),
            Expr::Member(base, field) => format!("{}.{}", self.expr(base), field),
            Expr::Index(base, idx) => format!("{}[{}]", self.expr(base), self.expr(idx)),
            Expr::Slice(base, from) => {
                let base = self.expr(base);
                format!(
                    "java.util.Arrays.copyOfRange({base}, {}, {base}.length)",
                    self.expr(from)
                )
            }
            Expr::Suffix(base, offset) => format!("{}.substring({offset})", self.receiver(base)),
            Expr::Binary(lhs, op, rhs) => binary(self, lhs, *op, rhs),
            Expr::Not(inner) => match inner.as_ref() {
                Expr::IsSet(value, ty) => self.is_unset(value, *ty),
                other => negate(self, other),
            },
            Expr::StrEq(lhs, rhs) => {
                format!("{}.equals({})", self.receiver(lhs), self.expr(rhs))
            }
            Expr::StrPrefix(value, prefix) => {
                format!("{}.startsWith({})", self.receiver(value), quote(prefix))
            }
            Expr::IsSet(value, ty) => match ty {
                Type::Flag => self.expr(value),
                Type::Int => format!("{} != 0", self.expr(value)),
                Type::Str | Type::StrList => format!("{} != null", self.expr(value)),
            },
        }
    }

    fn render_variable(&self, var: &Var) -> String {
        let ty = self.type_name(var.ty);
        match &var.init {
            Some(init) => format!("{ty} {} = {};", var.name, self.expr(init)),
            None => format!("{ty} {};", var.name),
        }
    }

    fn render_fail(&self, w: &mut Writer, message: &Message) {
        match (message.pieces(), &message.arg) {
            ((head, Some(tail)), Some(arg)) => w.line(format!(
                "System.err.println(\"{}\" + {} + \"{}\");",
                escape_string(head),
                self.expr(arg),
                escape_string(tail)
            )),
            ((text, _), _) => w.line(format!("System.err.println({});", quote(text))),
        }
        w.line("return 0;");
    }

    fn render_print(&self, w: &mut Writer, text: &str) {
        w.line(format!("System.out.println({});", quote(text)));
    }

    fn render_comment(&self, w: &mut Writer, text: &str) {
        w.line(format!("// {text}"));
    }

    fn render(&self, program: &Program) -> String {
        let class = to_pascal_case(&to_field_name(&program.name));
        let mut w = Writer::new();

        if self.config.header {
            self.header(&mut w, program);
        }
        w.line(format!("public class {class}"));
        w.open();
        self.render_fields(&mut w, "public ", &program.persistent);
        w.blank();
        w.line("public static final int POF_VALIDATE = 1 << 0;");
        w.line("public static final int POF_USAGE = 1 << 1;");
        w.blank();

        w.line("static class Aux");
        w.open();
        self.render_fields(&mut w, "", &program.transient);
        w.close();
        w.blank();

        self.render_parse_simple(&mut w, &class, program);
        self.render_validate(&mut w, &class, program);
        self.render_usage(&mut w, &class, program);
        self.render_entry(&mut w, &class, program);
        w.close();

        log::debug!("rendered Java source for `{class}`");
        w.finish()
    }
}
