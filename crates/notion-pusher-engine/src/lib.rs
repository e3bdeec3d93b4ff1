pub mod io;
pub mod parsing;
pub mod wire;

// Re-export key types for easier usage
pub use io::{IoError, parse_file, read_lines};
pub use parsing::{
    ParsedDoc,
    blocks::{Block, Cell, HeadingLevel, Row, Table},
    diagnostics::{Diagnostic, DiagnosticKind},
    inline::{Run, tokenize},
    parse_document, parse_lines,
};
