//! Collects patterns from `-p` flags, a file, or stdin into a `SourceMap`.

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use genopts_compiler::{Error as CompileError, SourceMap};
use thiserror::Error;

/// Where the patterns of one invocation come from.
#[derive(Debug, Default)]
pub struct Input {
    pub path: Option<PathBuf>,
    pub patterns: Vec<String>,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read stdin: {0}")]
    Stdin(#[source] io::Error),

    #[error("failed to read '{}': {source}", .path.display())]
    File { path: PathBuf, source: io::Error },
}

/// Inline patterns come first, then the file. Without either, stdin is read.
pub fn load_patterns(input: &Input) -> Result<SourceMap, LoadError> {
    let mut map = SourceMap::from_patterns(&input.patterns);

    match input.path.as_deref() {
        Some(path) if path.as_os_str() == "-" => load_stdin(&mut map)?,
        Some(path) => load_file(&mut map, path)?,
        None if input.patterns.is_empty() => load_stdin(&mut map)?,
        None => {}
    }

    log::debug!("loaded {} patterns", map.len());
    Ok(map)
}

fn load_stdin(map: &mut SourceMap) -> Result<(), LoadError> {
    let mut buf = String::new();
    io::stdin()
        .read_to_string(&mut buf)
        .map_err(LoadError::Stdin)?;
    map.add_stdin(&buf);
    Ok(())
}

fn load_file(map: &mut SourceMap, path: &Path) -> Result<(), LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::File {
        path: path.to_path_buf(),
        source,
    })?;
    map.add_file(&path.to_string_lossy(), &content);
    Ok(())
}

/// Load the input or exit with an error message.
pub fn load_or_exit(input: &Input) -> SourceMap {
    match load_patterns(input) {
        Ok(map) => map,
        Err(err) => {
            eprintln!("error: {}", err);
            std::process::exit(1);
        }
    }
}

/// Report a compilation failure and exit.
pub fn fail(err: CompileError, source_map: &SourceMap, color: bool) -> ! {
    match &err {
        CompileError::NoPatterns => eprintln!("error: {}", err),
        CompileError::PatternParseError(diagnostics)
        | CompileError::PatternAnalyzeError(diagnostics) => {
            eprint!("{}", diagnostics.render_colored(source_map, color));
        }
    }
    std::process::exit(1);
}
