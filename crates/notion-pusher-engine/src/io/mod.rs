use std::fs;
use std::path::{Path, PathBuf};

use crate::parsing::{ParsedDoc, diagnostics::Diagnostic, parse_lines, split_lines};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read a markdown file into its lines
pub fn read_lines(path: &Path) -> Result<Vec<String>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let content = fs::read_to_string(path).map_err(IoError::Io)?;
    Ok(split_lines(&content)
        .into_iter()
        .map(String::from)
        .collect())
}

/// Read and parse a markdown file.
///
/// A missing file is not an error: it parses to an empty document carrying a
/// `MissingInput` diagnostic, and the caller decides whether that is fatal.
pub fn parse_file(path: &Path) -> Result<ParsedDoc, IoError> {
    match read_lines(path) {
        Ok(lines) => Ok(parse_lines(&lines)),
        Err(IoError::NotFound(missing)) => Ok(ParsedDoc {
            blocks: vec![],
            diagnostics: vec![Diagnostic::missing_input(&missing)],
        }),
        Err(e) => Err(e),
    }
}
