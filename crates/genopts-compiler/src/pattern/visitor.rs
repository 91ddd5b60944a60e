//! Pattern tree visitor.
//!
//! # Usage
//!
//! Implement `Visitor` for your pass and override the hooks it needs.
//! Container nodes get `enter_*`/`leave_*` hooks, leaves get `visit_*`.
//! Drive the traversal with `walk_template` (or any other `walk_*`).
//!
//! Order is fixed: a command is entered before its children, children are
//! visited in declaration order, and the nested subcommand comes last.
//!
//! ```ignore
//! impl Visitor for CountOptions {
//!     fn visit_option(&mut self, _opt: &OptionWithArg) {
//!         self.count += 1;
//!     }
//! }
//! walk_template(&mut counter, &template);
//! ```

use super::tree::{
    Alternative, Arg, Command, CommandChild, OptionWithArg, Optional, Pattern, Template,
};

pub trait Visitor {
    fn enter_template(&mut self, _template: &Template) {}
    fn leave_template(&mut self, _template: &Template) {}

    fn enter_pattern(&mut self, _pattern: &Pattern) {}
    fn leave_pattern(&mut self, _pattern: &Pattern) {}

    fn enter_command(&mut self, _command: &Command) {}
    fn leave_command(&mut self, _command: &Command) {}

    fn enter_optional(&mut self, _optional: &Optional) {}
    fn leave_optional(&mut self, _optional: &Optional) {}

    fn visit_option(&mut self, _option: &OptionWithArg) {}
    fn visit_arg(&mut self, _arg: &Arg) {}
}

pub fn walk_template<V: Visitor + ?Sized>(visitor: &mut V, template: &Template) {
    visitor.enter_template(template);
    for pattern in &template.patterns {
        walk_pattern(visitor, pattern);
    }
    visitor.leave_template(template);
}

pub fn walk_pattern<V: Visitor + ?Sized>(visitor: &mut V, pattern: &Pattern) {
    visitor.enter_pattern(pattern);
    for command in &pattern.commands {
        walk_command(visitor, command);
    }
    visitor.leave_pattern(pattern);
}

pub fn walk_command<V: Visitor + ?Sized>(visitor: &mut V, command: &Command) {
    visitor.enter_command(command);
    for child in &command.children {
        match child {
            CommandChild::Optional(optional) => walk_optional(visitor, optional),
            CommandChild::Arg(arg) => visitor.visit_arg(arg),
        }
    }
    if let Some(sub) = &command.subcommand {
        walk_command(visitor, sub);
    }
    visitor.leave_command(command);
}

pub fn walk_optional<V: Visitor + ?Sized>(visitor: &mut V, optional: &Optional) {
    visitor.enter_optional(optional);
    for member in &optional.members {
        match member {
            Alternative::Option(opt) => visitor.visit_option(opt),
            Alternative::Arg(arg) => visitor.visit_arg(arg),
        }
    }
    visitor.leave_optional(optional);
}
