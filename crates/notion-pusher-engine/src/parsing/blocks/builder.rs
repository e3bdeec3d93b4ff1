use crate::parsing::{ParsedDoc, diagnostics::Diagnostic, inline::tokenize};

use super::{
    classify::{LineClass, LineClassifier, LineKind},
    kinds::{BlockEquation, CodeFence, TableBuilder},
    types::Block,
};

/// Minimum indentation for a line to nest under the preceding list item.
const NEST_INDENT: usize = 2;

/// Scanner mode. Every state but `Normal` buffers lines for one block.
#[derive(Debug)]
enum ScanState {
    Normal,
    InCodeFence {
        language: String,
        lines: Vec<String>,
        opened_at: usize,
    },
    InTable {
        rows: Vec<String>,
        opened_at: usize,
    },
    InEquation {
        lines: Vec<String>,
        opened_at: usize,
    },
}

/// Line-at-a-time state machine producing [`Block`]s.
pub struct BlockBuilder {
    classifier: LineClassifier,
    state: ScanState,
    out: Vec<Block>,
    diagnostics: Vec<Diagnostic>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            classifier: LineClassifier,
            state: ScanState::Normal,
            out: vec![],
            diagnostics: vec![],
        }
    }

    /// Feeds the next raw line, numbered from 1.
    pub fn push(&mut self, number: usize, raw: &str) {
        if self.in_raw_zone() {
            self.consume_raw_line(raw);
            return;
        }

        let mut class = self.classifier.classify(number, raw);
        self.diagnostics.append(&mut class.noise);

        if let ScanState::InTable { rows, .. } = &mut self.state {
            if class.kind == LineKind::TableRow {
                rows.push(class.text);
                return;
            }
            self.flush_state(false);
        }

        self.dispatch(class);
    }

    pub fn finish(mut self) -> ParsedDoc {
        // EOF flush
        self.flush_state(true);
        ParsedDoc {
            blocks: self.out,
            diagnostics: self.diagnostics,
        }
    }

    /// Code fences and block equations take their lines verbatim.
    fn in_raw_zone(&self) -> bool {
        matches!(
            self.state,
            ScanState::InCodeFence { .. } | ScanState::InEquation { .. }
        )
    }

    fn consume_raw_line(&mut self, raw: &str) {
        let closes = match &self.state {
            ScanState::InCodeFence { .. } => CodeFence::closes(raw),
            ScanState::InEquation { .. } => BlockEquation::is_delimiter(raw),
            _ => false,
        };
        if closes {
            self.flush_state(false);
            return;
        }

        match &mut self.state {
            ScanState::InCodeFence { lines, .. } => {
                lines.push(CodeFence::content_line(raw).to_string())
            }
            ScanState::InEquation { lines, .. } => lines.push(raw.trim().to_string()),
            _ => {}
        }
    }

    fn dispatch(&mut self, class: LineClass) {
        let LineClass {
            number,
            indent,
            text,
            kind,
            ..
        } = class;

        let block = match kind {
            LineKind::Blank => return,
            LineKind::FenceOpen { language } => {
                self.state = ScanState::InCodeFence {
                    language,
                    lines: vec![],
                    opened_at: number,
                };
                return;
            }
            LineKind::TableRow => {
                self.state = ScanState::InTable {
                    rows: vec![text],
                    opened_at: number,
                };
                return;
            }
            LineKind::EquationOpen => {
                self.state = ScanState::InEquation {
                    lines: vec![],
                    opened_at: number,
                };
                return;
            }
            LineKind::Divider => Block::Divider,
            LineKind::Image { url } => Block::ImageBlock { url },
            LineKind::Quote { content } => Block::Quote {
                runs: tokenize(&content),
            },
            LineKind::Heading { level, content } => Block::Heading {
                level,
                runs: tokenize(&content),
            },
            LineKind::BulletItem { content } => Block::BulletItem {
                runs: tokenize(&content),
                children: vec![],
            },
            LineKind::NumberedItem { content } => Block::NumberedItem {
                runs: tokenize(&content),
                children: vec![],
            },
            LineKind::Text => Block::Paragraph {
                runs: tokenize(&text),
            },
        };

        self.emit(indent, block);
    }

    /// Appends a block, nesting indented list items and paragraphs under a
    /// directly preceding top-level list item.
    fn emit(&mut self, indent: usize, block: Block) {
        let nestable = block.is_list_item() || matches!(block, Block::Paragraph { .. });
        if indent >= NEST_INDENT && nestable {
            if let Some(children) = self.out.last_mut().and_then(Block::children_mut) {
                children.push(block);
                return;
            }
        }
        self.out.push(block);
    }

    /// Closes the current buffering state, emitting its block.
    ///
    /// `at_eof` marks an implicit close: fences and equations still emit
    /// their content but leave a warning behind.
    fn flush_state(&mut self, at_eof: bool) {
        match std::mem::replace(&mut self.state, ScanState::Normal) {
            ScanState::Normal => {}
            ScanState::InCodeFence {
                language,
                lines,
                opened_at,
            } => {
                if at_eof {
                    self.diagnostics
                        .push(Diagnostic::unterminated_code_fence(opened_at));
                }
                self.out.push(Block::CodeBlock {
                    language,
                    content: lines.join("\n"),
                });
            }
            ScanState::InEquation { lines, opened_at } => {
                if at_eof {
                    self.diagnostics
                        .push(Diagnostic::unterminated_equation(opened_at));
                }
                self.out.push(Block::EquationBlock {
                    expression: BlockEquation::expression(&lines),
                });
            }
            ScanState::InTable { rows, opened_at } => match TableBuilder::build(&rows) {
                Some(table) => self.out.push(Block::Table(table)),
                None => self
                    .diagnostics
                    .push(Diagnostic::empty_table(opened_at, &rows)),
            },
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}
