//! Typed tree of parsed command-line patterns.

mod dump;
mod tree;
mod visitor;


pub use tree::{
    Alternative, Arg, Command, CommandChild, OptionWithArg, Optional, Pattern, Template,
};
pub use visitor::{Visitor, walk_command, walk_optional, walk_pattern, walk_template};
