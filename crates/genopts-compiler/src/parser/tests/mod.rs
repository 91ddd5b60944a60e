mod grammar_tests;

use crate::parser::{SyntaxError, parse_pattern};
use crate::source_map::SourceId;

fn dump(text: &str) -> String {
    match parse_pattern(SourceId::default(), text) {
        Ok(pattern) => pattern.dump(),
        Err(err) => panic!("`{}` failed to parse: {}", text, err),
    }
}

fn error(text: &str) -> SyntaxError {
    match parse_pattern(SourceId::default(), text) {
        Ok(pattern) => panic!("`{}` should not parse, got:\n{}", text, pattern.dump()),
        Err(err) => err,
    }
}
