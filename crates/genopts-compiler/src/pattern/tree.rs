use rowan::TextRange;
use serde::Serialize;

use crate::source_map::SourceId;

/// All patterns that share one generated parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Template {
    pub patterns: Vec<Pattern>,
}

/// One command-line shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pattern {
    #[serde(skip)]
    pub source: SourceId,
    /// Verbatim pattern text, used by the usage printer.
    pub text: String,
    pub commands: Vec<Command>,
    /// Range of `text` inside the source line.
    #[serde(skip)]
    pub span: TextRange,
}

/// A literal command token with its children.
///
/// Groups and arguments that appear before the first command token are held
/// by a bare command with an empty name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_arg: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<CommandChild>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subcommand: Option<Box<Command>>,
    #[serde(skip)]
    pub span: TextRange,
}

impl Command {
    pub(crate) fn bare(span: TextRange) -> Self {
        Self {
            name: String::new(),
            inline_arg: None,
            children: Vec::new(),
            subcommand: None,
            span,
        }
    }

    pub fn is_bare(&self) -> bool {
        self.name.is_empty()
    }

    /// Iterate over this command and its nested subcommands.
    pub fn chain(&self) -> impl Iterator<Item = &Command> {
        std::iter::successors(Some(self), |cmd| cmd.subcommand.as_deref())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CommandChild {
    Optional(Optional),
    Arg(Arg),
}

/// A bracketed set of alternatives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Optional {
    pub members: Vec<Alternative>,
    #[serde(skip)]
    pub span: TextRange,
}

impl Optional {
    /// Option members only; positional members never take part in exclusion.
    pub fn options(&self) -> impl Iterator<Item = &OptionWithArg> {
        self.members.iter().filter_map(|m| match m {
            Alternative::Option(opt) => Some(opt),
            Alternative::Arg(_) => None,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Alternative {
    Option(OptionWithArg),
    Arg(Arg),
}

/// A flag token, optionally taking a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionWithArg {
    pub token: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arg: Option<String>,
    #[serde(skip)]
    pub span: TextRange,
}

/// A positional placeholder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Arg {
    pub name: String,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub variadic: bool,
    #[serde(skip)]
    pub span: TextRange,
}
