//! Pattern storage for one compilation session.
//!
//! Every pattern is its own source: diagnostics point into a single line,
//! and the line number it came from is kept so rendered snippets match the
//! input the user wrote.

/// Lightweight handle to a pattern in a compilation session.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, PartialOrd, Ord)]
pub struct SourceId(pub(crate) u32);

impl SourceId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Describes the origin of a pattern.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SourceKind {
    /// Passed directly on the command line (`-p`) or built in tests.
    Inline,
    /// Read from stdin.
    Stdin,
    /// Read from a file with this path.
    File(String),
}

impl SourceKind {
    /// Returns the display name for diagnostics.
    pub fn display_name(&self) -> &str {
        match self {
            SourceKind::Inline => "<pattern>",
            SourceKind::Stdin => "<stdin>",
            SourceKind::File(path) => path,
        }
    }
}

/// A borrowed view of a pattern source.
#[derive(Clone, Debug)]
pub struct Source<'s> {
    pub id: SourceId,
    pub kind: &'s SourceKind,
    pub content: &'s str,
    /// 1-based line of the pattern in its origin.
    pub line: usize,
}

impl<'s> Source<'s> {
    pub fn as_str(&self) -> &'s str {
        self.content
    }
}

#[derive(Clone, Debug)]
struct SourceEntry {
    kind: SourceKind,
    content: String,
    line: usize,
}

/// Registry of all patterns of a template.
#[derive(Clone, Debug, Default)]
pub struct SourceMap {
    entries: Vec<SourceEntry>,
}

impl SourceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a map from inline patterns (CLI `-p`, tests).
    pub fn from_patterns<S: AsRef<str>>(patterns: &[S]) -> Self {
        let mut map = Self::new();
        for pattern in patterns {
            map.add_inline(pattern.as_ref());
        }
        map
    }

    /// Add a single inline pattern.
    pub fn add_inline(&mut self, content: &str) -> SourceId {
        let line = self.entries.len() + 1;
        self.push_entry(SourceKind::Inline, content, line)
    }

    /// Add every pattern line of a stdin buffer.
    pub fn add_stdin(&mut self, text: &str) -> Vec<SourceId> {
        self.add_lines(SourceKind::Stdin, text)
    }

    /// Add every pattern line of a file.
    pub fn add_file(&mut self, path: &str, text: &str) -> Vec<SourceId> {
        self.add_lines(SourceKind::File(path.to_owned()), text)
    }

    /// Get the content of a pattern by ID.
    pub fn content(&self, id: SourceId) -> &str {
        self.get(id).content
    }

    /// Get the kind of a pattern by ID.
    pub fn kind(&self, id: SourceId) -> &SourceKind {
        self.get(id).kind
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get a pattern by ID.
    ///
    /// Ids are only handed out by this map, so an unknown id is a caller bug.
    pub fn get(&self, id: SourceId) -> Source<'_> {
        let entry = &self.entries[id.index()];
        Source {
            id,
            kind: &entry.kind,
            content: &entry.content,
            line: entry.line,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = Source<'_>> {
        self.entries.iter().enumerate().map(|(idx, entry)| Source {
            id: SourceId(idx as u32),
            kind: &entry.kind,
            content: &entry.content,
            line: entry.line,
        })
    }

    /// Blank lines and `#` comments are skipped; surrounding whitespace is
    /// kept so spans match the original line.
    fn add_lines(&mut self, kind: SourceKind, text: &str) -> Vec<SourceId> {
        text.lines()
            .enumerate()
            .filter(|(_, line)| {
                let trimmed = line.trim();
                !trimmed.is_empty() && !trimmed.starts_with('#')
            })
            .map(|(idx, line)| self.push_entry(kind.clone(), line, idx + 1))
            .collect()
    }

    fn push_entry(&mut self, kind: SourceKind, content: &str, line: usize) -> SourceId {
        let id = SourceId(self.entries.len() as u32);
        self.entries.push(SourceEntry {
            kind,
            content: content.to_owned(),
            line,
        });
        id
    }
}
