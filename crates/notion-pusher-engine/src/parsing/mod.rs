//! # Parsing
//!
//! Markdown text goes through two layers:
//!
//! 1. **Blocks** (`blocks`): a line-oriented scanner classifies each line and
//!    buffers multi-line constructs (code fences, tables, block equations)
//!    until they close.
//! 2. **Inline** (`inline`): every block that carries text hands it to the
//!    inline tokenizer, which produces formatted [`inline::Run`]s.
//!
//! Each line is normalized by `noise` before it is classified. Anything the
//! scanner wants to report ends up in [`ParsedDoc::diagnostics`] rather than
//! in a logger, so parsing stays a pure function of its input.

pub mod blocks;
pub mod diagnostics;
pub mod inline;
pub mod noise;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder};
use diagnostics::Diagnostic;

/// The result of parsing one markdown document.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedDoc {
    /// Top-level blocks in document order.
    pub blocks: Vec<Block>,
    /// Recoverable anomalies found while scanning, in the order they occurred.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParsedDoc {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}

/// Parses an ordered sequence of lines into blocks.
pub fn parse_lines<S: AsRef<str>>(lines: &[S]) -> ParsedDoc {
    let mut builder = BlockBuilder::new();

    for (idx, line) in lines.iter().enumerate() {
        builder.push(idx + 1, line.as_ref());
    }

    builder.finish()
}

/// Parses a whole document held in memory.
pub fn parse_document(text: &str) -> ParsedDoc {
    parse_lines(&split_lines(text))
}

/// Splits text on `\n`, dropping a trailing `\r` from each line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
