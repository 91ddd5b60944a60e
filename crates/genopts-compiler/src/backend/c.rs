//! C backend: struct-based state, `strcmp`-style matching, `fprintf` diagnostics.

use genopts_core::utils::{escape_string, quote, to_field_name};

use crate::assemble::Program;
use crate::ir::{Expr, Literal, Message, Type, Var};

use super::common::{binary, negate, render_body};
use super::{Backend, Config, Writer};

pub struct CBackend {
    config: Config,
}

impl CBackend {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Literal body that is also a safe `printf` format.
    fn format_literal(text: &str) -> String {
        escape_string(text).replace('%', "%%")
    }

    fn header(&self, w: &mut Writer, program: &Program) {
        w.line("/*");
        w.line(" * Generated by genopts from:");
        for pattern in &program.patterns {
            w.line(format!(" *   {}", pattern.replace("*/", "* /")));
        }
        w.line(" */");
        w.blank();
    }

    fn render_struct(&self, w: &mut Writer, name: &str, vars: &[Var]) {
        w.line(format!("struct {name}"));
        w.open();
        self.render_variables(w, vars);
        w.close_with("};");
        w.blank();
    }

    fn render_parse_simple(&self, w: &mut Writer, name: &str, program: &Program) {
        w.line(format!(
            "static int parse_{name}_simple(int argc, char *argv[], struct {name} *cli, struct {name}_aux *aux)"
        ));
        w.open();
        w.line("int i;");
        w.blank();
        w.line("for (i = 0; i < argc; i++)");
        w.open();
        render_body(self, w, &program.dispatch);
        w.close();
        w.line("return 1;");
        w.close();
        w.blank();
    }

    fn render_validate(&self, w: &mut Writer, name: &str, program: &Program) {
        w.line(format!(
            "static int validate_{name}(struct {name} *cli, struct {name}_aux *aux)"
        ));
        w.open();
        render_body(self, w, &program.validate);
        w.close();
        w.blank();
    }

    fn render_usage(&self, w: &mut Writer, name: &str, program: &Program) {
        w.line(format!("static void usage_{name}(void)"));
        w.open();
        render_body(self, w, &program.usage);
        w.close();
        w.blank();
    }

    fn render_options(&self, w: &mut Writer, name: &str) {
        w.line(format!("enum parse_{name}_options"));
        w.open();
        w.line("POF_VALIDATE = (1 << 0),");
        w.line("POF_USAGE = (1 << 1),");
        w.close_with("};");
        w.blank();
    }

    fn render_entry(&self, w: &mut Writer, name: &str, program: &Program) {
        w.line(format!(
            "static int parse_{name}(int argc, char *argv[], struct {name} *cli, enum parse_{name}_options opts)"
        ));
        w.open();
        w.line(format!("struct {name}_aux aux = {{0}};"));
        w.blank();
        w.line(format!("if (!parse_{name}_simple(argc, argv, cli, &aux))"));
        w.indent();
        w.line("return 0;");
        w.dedent();
        w.line(format!("if ({})", self.expr(&program.help)));
        w.open();
        w.line("if (opts & POF_USAGE)");
        w.indent();
        w.line(format!("usage_{name}();"));
        w.dedent();
        w.line("return 1;");
        w.close();
        w.line("if (opts & POF_VALIDATE)");
        w.indent();
        w.line(format!("return validate_{name}(cli, &aux);"));
        w.dedent();
        w.line("return 1;");
        w.close();
    }
}

impl Backend for CBackend {
    fn name(&self) -> &'static str {
        "c"
    }

    fn config(&self) -> &Config {
        &self.config
    }

    fn type_name(&self, ty: Type) -> &'static str {
        match ty {
            Type::Flag | Type::Int => "int",
            Type::Str => "char *",
            Type::StrList => "char **",
        }
    }

    fn literal(&self, lit: &Literal) -> String {
        match lit {
            Literal::Bool(true) => "1".to_string(),
            Literal::Bool(false) => "0".to_string(),
            Literal::Int(value) => value.to_string(),
            Literal::Str(text) => quote(text),
        }
    }

    fn expr(&self, expr: &Expr) -> String {
        match expr {
            Expr::Lit(lit) => self.literal(lit),
            Expr::Var(name) => name.clone(),
            Expr::Member(base, field) => format!("{}->{}", self.expr(base), field),
            Expr::Index(base, idx) => format!("{}[{}]", self.expr(base), self.expr(idx)),
            Expr::Slice(base, from) => format!("&{}[{}]", self.expr(base), self.expr(from)),
            Expr::Suffix(base, offset) => format!("&{}[{}]", self.expr(base), offset),
            Expr::Binary(lhs, op, rhs) => binary(self, lhs, *op, rhs),
            Expr::Not(inner) => match inner.as_ref() {
                Expr::IsSet(value, _) => negate(self, value),
                other => negate(self, other),
            },
            Expr::StrEq(lhs, rhs) => format!("!strcmp({}, {})", self.expr(lhs), self.expr(rhs)),
            Expr::StrPrefix(value, prefix) => format!(
                "!strncmp({}, {}, {})",
                self.expr(value),
                quote(prefix),
                prefix.len()
            ),
            Expr::IsSet(value, _) => self.expr(value),
        }
    }

    fn render_variable(&self, var: &Var) -> String {
        let ty = self.type_name(var.ty);
        let sep = if ty.ends_with('*') { "" } else { " " };
        match &var.init {
            Some(init) => format!("{ty}{sep}{} = {};", var.name, self.expr(init)),
            None => format!("{ty}{sep}{};", var.name),
        }
    }

    fn render_fail(&self, w: &mut Writer, message: &Message) {
        match (message.pieces(), &message.arg) {
            ((head, Some(tail)), Some(arg)) => w.line(format!(
                "fprintf(stderr, \"{}%s{}\\n\", {});",
                Self::format_literal(head),
                Self::format_literal(tail),
                self.expr(arg)
            )),
            ((text, _), _) => w.line(format!(
                "fprintf(stderr, \"{}\\n\");",
                Self::format_literal(text)
            )),
        }
        w.line("return 0;");
    }

    fn render_print(&self, w: &mut Writer, text: &str) {
        w.line(format!("puts({});", quote(text)));
    }

    fn render_comment(&self, w: &mut Writer, text: &str) {
        w.line(format!("/* {} */", text.replace("*/", "* /")));
    }

    fn render(&self, program: &Program) -> String {
        let name = to_field_name(&program.name);
        let mut w = Writer::new();

        if self.config.header {
            self.header(&mut w, program);
        }
        w.line("#include <stdio.h>");
        w.line("#include <string.h>");
        w.blank();

        self.render_struct(&mut w, &name, &program.persistent);
        self.render_struct(&mut w, &format!("{name}_aux"), &program.transient);
        self.render_parse_simple(&mut w, &name, program);
        self.render_validate(&mut w, &name, program);
        self.render_usage(&mut w, &name, program);
        self.render_options(&mut w, &name);
        self.render_entry(&mut w, &name, program);

        log::debug!("rendered C source for `{name}`");
        w.finish()
    }
}
