//! Indented text dump of pattern trees.

use std::fmt::Write;

use super::tree::{Arg, Command, OptionWithArg, Optional, Pattern, Template};
use super::visitor::{Visitor, walk_pattern, walk_template};

struct Dumper {
    out: String,
    depth: usize,
}

impl Dumper {
    fn new() -> Self {
        Self {
            out: String::new(),
            depth: 0,
        }
    }

    fn line(&mut self, text: std::fmt::Arguments<'_>) {
        if !self.out.is_empty() {
            self.out.push('\n');
        }
        for _ in 0..self.depth {
            self.out.push_str("  ");
        }
        let _ = self.out.write_fmt(text);
    }
}

impl Visitor for Dumper {
    fn enter_pattern(&mut self, pattern: &Pattern) {
        self.line(format_args!("Pattern `{}`", pattern.text));
        self.depth += 1;
    }

    fn leave_pattern(&mut self, _pattern: &Pattern) {
        self.depth -= 1;
    }

    fn enter_command(&mut self, command: &Command) {
        match (command.is_bare(), &command.inline_arg) {
            (true, _) => self.line(format_args!("Command (bare)")),
            (false, Some(arg)) => self.line(format_args!("Command {}=<{}>", command.name, arg)),
            (false, None) => self.line(format_args!("Command {}", command.name)),
        }
        self.depth += 1;
    }

    fn leave_command(&mut self, _command: &Command) {
        self.depth -= 1;
    }

    fn enter_optional(&mut self, _optional: &Optional) {
        self.line(format_args!("Optional"));
        self.depth += 1;
    }

    fn leave_optional(&mut self, _optional: &Optional) {
        self.depth -= 1;
    }

    fn visit_option(&mut self, option: &OptionWithArg) {
        match &option.arg {
            Some(arg) => self.line(format_args!("Option {} <{}>", option.token, arg)),
            None => self.line(format_args!("Option {}", option.token)),
        }
    }

    fn visit_arg(&mut self, arg: &Arg) {
        let ellipsis = if arg.variadic { "..." } else { "" };
        self.line(format_args!("Arg <{}>{}", arg.name, ellipsis));
    }
}

impl Pattern {
    pub fn dump(&self) -> String {
        let mut dumper = Dumper::new();
        walk_pattern(&mut dumper, self);
        dumper.out
    }
}

impl Template {
    pub fn dump(&self) -> String {
        let mut dumper = Dumper::new();
        walk_template(&mut dumper, self);
        dumper.out
    }
}
