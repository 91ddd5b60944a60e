/// Words that cannot be used as identifiers in any supported target language.
///
/// Union of the C and Java keyword sets, kept sorted for binary search.
pub(crate) const RESERVED_WORDS: &[&str] = &[
    "abstract",
    "assert",
    "auto",
    "boolean",
    "break",
    "byte",
    "case",
    "catch",
    "char",
    "class",
    "const",
    "continue",
    "default",
    "do",
    "double",
    "else",
    "enum",
    "extends",
    "extern",
    "false",
    "final",
    "finally",
    "float",
    "for",
    "goto",
    "if",
    "implements",
    "import",
    "inline",
    "instanceof",
    "int",
    "interface",
    "long",
    "native",
    "new",
    "null",
    "package",
    "private",
    "protected",
    "public",
    "register",
    "restrict",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "strictfp",
    "struct",
    "super",
    "switch",
    "synchronized",
    "this",
    "throw",
    "throws",
    "transient",
    "true",
    "try",
    "typedef",
    "union",
    "unsigned",
    "var",
    "void",
    "volatile",
    "while",
];

/// Whether `word` is a keyword in C or Java.
pub fn is_reserved_word(word: &str) -> bool {
    RESERVED_WORDS.binary_search(&word).is_ok()
}

/// Derive a field name from a command-line token or argument name.
///
/// Hyphens and every other character that is not valid in an identifier
/// become underscores, leading underscores are stripped. Names that would
/// start with a digit get an `opt_` prefix, reserved words a trailing `_`.
///
/// # Examples
/// ```
/// use genopts_core::utils::to_field_name;
/// assert_eq!(to_field_name("--no-fetch"), "no_fetch");
/// assert_eq!(to_field_name("-N"), "N");
/// assert_eq!(to_field_name("--set-upstream-to"), "set_upstream_to");
/// ```
pub fn to_field_name(token: &str) -> String {
    let replaced: String = token
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c
            } else {
                '_'
            }
        })
        .collect();

    let trimmed = replaced.trim_start_matches('_');
    let mut name = if trimmed.is_empty() || trimmed.starts_with(|c: char| c.is_ascii_digit()) {
        format!("opt_{}", trimmed)
    } else {
        trimmed.to_string()
    };

    if is_reserved_word(&name) {
        name.push('_');
    }
    name
}

/// Convert snake_case or kebab-case to PascalCase.
///
/// Normalizes words separated by `_`, `-`, or `.`. If the input is already
/// PascalCase (starts uppercase, no separators), it is returned unchanged.
///
/// # Examples
/// ```
/// use genopts_core::utils::to_pascal_case;
/// assert_eq!(to_pascal_case("cli"), "Cli");
/// assert_eq!(to_pascal_case("git-cli"), "GitCli");
/// assert_eq!(to_pascal_case("GitCli"), "GitCli");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    fn is_separator(c: char) -> bool {
        matches!(c, '_' | '-' | '.')
    }

    let starts_uppercase = s.chars().next().is_some_and(|c| c.is_ascii_uppercase());
    let has_lowercase = s.chars().any(|c| c.is_ascii_lowercase());
    if starts_uppercase && has_lowercase && !s.chars().any(is_separator) {
        return s.to_string();
    }

    let mut result = String::with_capacity(s.len());
    let mut capitalize_next = true;
    for c in s.chars() {
        if is_separator(c) {
            capitalize_next = true;
            continue;
        }
        if capitalize_next {
            result.push(c.to_ascii_uppercase());
            capitalize_next = false;
        } else {
            result.push(c.to_ascii_lowercase());
        }
    }
    result
}

/// Join items as a conjunctive English list: `a`, `a and b`, `a, b and c`.
pub fn english_list<S: AsRef<str>>(items: &[S]) -> String {
    match items {
        [] => String::new(),
        [only] => only.as_ref().to_string(),
        [init @ .., last] => {
            let head: Vec<&str> = init.iter().map(AsRef::as_ref).collect();
            format!("{} and {}", head.join(", "), last.as_ref())
        }
    }
}

/// Escape text for the inside of a double-quoted C or Java string literal.
pub fn escape_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape and wrap text in double quotes.
pub fn quote(s: &str) -> String {
    format!("\"{}\"", escape_string(s))
}
