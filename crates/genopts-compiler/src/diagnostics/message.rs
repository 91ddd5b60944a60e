use rowan::TextRange;

use crate::source_map::SourceId;

use super::Span;

/// Diagnostic kinds, grouped by the stage that reports them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum DiagnosticKind {
    // Unclosed delimiters
    UnclosedGroup,
    UnclosedArgument,
    UnclosedExpansion,

    // User omitted something required
    EmptyPattern,
    EmptyGroup,
    EmptyAlternative,
    ExpectedArgument,
    EmptyArgumentName,

    // User wrote something that doesn't belong
    UnmatchedBracket,
    UnexpectedSeparator,
    UnexpectedEquals,
    UnexpectedCharacter,
    AmbiguousExpansion,
    SpaceInExpansion,

    // Pattern structure
    VariadicNotLast,
    DuplicateArgument,

    // Valid syntax, conflicting meaning across patterns
    ConflictingFieldType,
    SharedField,
    CommandOptionConflict,
    ConflictingValue,
    ConflictingPositional,
    UnsupportedOptionalPositional,

    // Observations
    DuplicatePattern,
}

impl DiagnosticKind {
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::DuplicatePattern => Severity::Warning,
            _ => Severity::Error,
        }
    }

    /// Parse errors abort before analysis; everything else is semantic.
    pub fn is_syntax_error(&self) -> bool {
        *self < Self::ConflictingFieldType
    }

    /// Base message for this diagnostic kind, used when no custom message is provided.
    pub fn fallback_message(&self) -> &'static str {
        match self {
            Self::UnclosedGroup => "missing closing `]`",
            Self::UnclosedArgument => "missing closing `>`",
            Self::UnclosedExpansion => "missing closing `]` in option shorthand",

            Self::EmptyPattern => "pattern is empty",
            Self::EmptyGroup => "empty `[]` is not allowed",
            Self::EmptyAlternative => "empty alternative",
            Self::ExpectedArgument => "expected an `<argument>`",
            Self::EmptyArgumentName => "empty `<>` is not allowed",

            Self::UnmatchedBracket => "unmatched `]`",
            Self::UnexpectedSeparator => "`|` is only allowed inside `[...]`",
            Self::UnexpectedEquals => "inline values are only supported on commands",
            Self::UnexpectedCharacter => "unexpected character",
            Self::AmbiguousExpansion => "option shorthand cannot be combined with `|`",
            Self::SpaceInExpansion => "option shorthand cannot contain spaces",

            Self::VariadicNotLast => "no positional argument may follow a variadic one",
            Self::DuplicateArgument => "argument is declared twice",

            Self::ConflictingFieldType => "field is declared with conflicting types",
            Self::SharedField => "two tokens map to the same field",
            Self::CommandOptionConflict => "token is used both as a command and as an option",
            Self::ConflictingValue => "token is declared both with and without a value",
            Self::ConflictingPositional => "conflicting positional arguments",
            Self::UnsupportedOptionalPositional => {
                "optional positional arguments must come last"
            }

            Self::DuplicatePattern => "pattern is declared twice",
        }
    }

    /// Template for custom messages. Contains `{}` placeholder for caller-provided detail.
    pub fn custom_message(&self) -> String {
        match self {
            Self::ExpectedArgument => "expected an `<argument>` {}".to_string(),
            Self::UnexpectedCharacter => "unexpected `{}`".to_string(),

            Self::DuplicateArgument => "`<{}>` is declared twice".to_string(),
            Self::ConflictingFieldType => "field `{}` is declared with conflicting types".to_string(),
            Self::SharedField => "field `{}` is derived from two different tokens".to_string(),
            Self::CommandOptionConflict => {
                "`{}` is used both as a command and as an option".to_string()
            }
            Self::ConflictingValue => "`{}` is declared both with and without a value".to_string(),

            Self::UnclosedGroup | Self::UnclosedArgument | Self::UnclosedExpansion => {
                format!("{}; {{}}", self.fallback_message())
            }

            _ => format!("{}: {{}}", self.fallback_message()),
        }
    }

    /// Render the final message.
    ///
    /// - `None` → returns `fallback_message()`
    /// - `Some(detail)` → returns `custom_message()` with `{}` replaced by detail
    pub fn message(&self, detail: Option<&str>) -> String {
        match detail {
            None => self.fallback_message().to_string(),
            Some(detail) => self.custom_message().replace("{}", detail),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Error,
    Warning,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Error => write!(f, "error"),
            Severity::Warning => write!(f, "warning"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelatedInfo {
    pub(crate) span: Span,
    pub(crate) message: String,
}

impl RelatedInfo {
    pub fn new(source: SourceId, range: TextRange, message: impl Into<String>) -> Self {
        Self {
            span: Span::new(source, range),
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticMessage {
    pub(crate) kind: DiagnosticKind,
    pub(crate) source: SourceId,
    /// The range underlined in output.
    pub(crate) range: TextRange,
    pub(crate) message: String,
    pub(crate) related: Vec<RelatedInfo>,
}

impl DiagnosticMessage {
    pub(crate) fn with_default_message(
        source: SourceId,
        kind: DiagnosticKind,
        range: TextRange,
    ) -> Self {
        Self {
            kind,
            source,
            range,
            message: kind.fallback_message().to_string(),
            related: Vec::new(),
        }
    }

    pub fn kind(&self) -> DiagnosticKind {
        self.kind
    }

    pub fn source(&self) -> SourceId {
        self.source
    }

    pub fn range(&self) -> TextRange {
        self.range
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn severity(&self) -> Severity {
        self.kind.default_severity()
    }

    pub fn is_error(&self) -> bool {
        self.severity() == Severity::Error
    }

    pub fn is_warning(&self) -> bool {
        self.severity() == Severity::Warning
    }
}

impl std::fmt::Display for DiagnosticMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}..{}: {}",
            self.severity(),
            u32::from(self.range.start()),
            u32::from(self.range.end()),
            self.message
        )?;
        for related in &self.related {
            write!(
                f,
                " (related: {} at {}..{})",
                related.message,
                u32::from(related.span.range.start()),
                u32::from(related.span.range.end())
            )?;
        }
        Ok(())
    }
}
