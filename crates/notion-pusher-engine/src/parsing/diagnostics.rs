use std::fmt;
use std::path::Path;

/// Longest excerpt of a source line quoted in a diagnostic.
const EXCERPT_CHARS: usize = 50;

/// What kind of recoverable anomaly a [`Diagnostic`] reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// A repeated-digit artifact such as `1111` was stripped from a line.
    NoiseRemoved,
    /// A run of table lines held nothing but separator rows.
    EmptyTable,
    /// Input ended inside a code fence; the fence was closed implicitly.
    UnterminatedCodeFence,
    /// Input ended inside a `$$` block equation; it was closed implicitly.
    UnterminatedEquation,
    /// The input file does not exist.
    MissingInput,
}

/// A warning produced while parsing. Parsing never fails; it reports instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 1-based line number, or 0 when the diagnostic is not tied to a line.
    pub line: usize,
    pub kind: DiagnosticKind,
    pub message: String,
}

impl Diagnostic {
    pub fn noise_removed(line: usize, removed: &str, source: &str) -> Self {
        Self {
            line,
            kind: DiagnosticKind::NoiseRemoved,
            message: format!(
                "removed noise '{removed}' from line: '{}'",
                excerpt(source)
            ),
        }
    }

    pub fn empty_table(line: usize, rows: &[String]) -> Self {
        let preview: Vec<&str> = rows.iter().take(3).map(String::as_str).collect();
        Self {
            line,
            kind: DiagnosticKind::EmptyTable,
            message: format!("table has no data rows, skipped; first lines: {preview:?}"),
        }
    }

    pub fn unterminated_code_fence(line: usize) -> Self {
        Self {
            line,
            kind: DiagnosticKind::UnterminatedCodeFence,
            message: "code fence is never closed; closed at end of input".to_string(),
        }
    }

    pub fn unterminated_equation(line: usize) -> Self {
        Self {
            line,
            kind: DiagnosticKind::UnterminatedEquation,
            message: "block equation is never closed; closed at end of input".to_string(),
        }
    }

    pub fn missing_input(path: &Path) -> Self {
        Self {
            line: 0,
            kind: DiagnosticKind::MissingInput,
            message: format!("file not found: {}", path.display()),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "line {}: {}", self.line, self.message)
        }
    }
}

/// First [`EXCERPT_CHARS`] characters of `source` followed by `...`.
fn excerpt(source: &str) -> String {
    let mut s: String = source.chars().take(EXCERPT_CHARS).collect();
    s.push_str("...");
    s
}
