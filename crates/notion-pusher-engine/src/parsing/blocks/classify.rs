use crate::parsing::{
    diagnostics::Diagnostic,
    noise::{normalize_chars, strip_digit_noise},
};

use super::{
    kinds::{
        BlockEquation, BlockQuote, CodeFence, Divider, Heading, ImageLine, ListItem, TableBuilder,
    },
    types::HeadingLevel,
};

/// Columns a tab counts for when measuring indentation.
const TAB_WIDTH: usize = 4;

/// What a single line looks like, judged without any surrounding context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty after cleaning, or an empty quote line.
    Blank,
    Divider,
    FenceOpen { language: String },
    TableRow,
    Image { url: String },
    /// A line holding only `$$`.
    EquationOpen,
    Quote { content: String },
    Heading { level: HeadingLevel, content: String },
    BulletItem { content: String },
    NumberedItem { content: String },
    /// Anything else: becomes a paragraph.
    Text,
}

/// Classification of a single line containing only local facts.
#[derive(Debug, Clone)]
pub struct LineClass {
    /// 1-based line number in the input.
    pub number: usize,
    /// Leading whitespace width, tabs counting as four.
    pub indent: usize,
    /// The line after normalization, noise removal and trimming.
    pub text: String,
    pub kind: LineKind,
    /// One entry per noise run stripped from this line.
    pub noise: Vec<Diagnostic>,
}

/// Classifies individual lines outside buffering states.
pub struct LineClassifier;

impl LineClassifier {
    /// Normalizes and cleans a raw line, then classifies it.
    ///
    /// Rules are tried in a fixed order and the first match wins; a line no
    /// rule claims is [`LineKind::Text`].
    pub fn classify(&self, number: usize, raw: &str) -> LineClass {
        let normalized = normalize_chars(raw);
        let indent = indent_width(&normalized);
        let source = normalized.trim();

        let cleaned = strip_digit_noise(source);
        let noise = cleaned
            .removed
            .iter()
            .map(|run| Diagnostic::noise_removed(number, run, source))
            .collect();
        let text = cleaned.text.trim().to_string();
        let kind = line_kind(&text);

        LineClass {
            number,
            indent,
            text,
            kind,
            noise,
        }
    }
}

fn line_kind(text: &str) -> LineKind {
    if text.is_empty() {
        return LineKind::Blank;
    }
    if Divider::matches(text) {
        return LineKind::Divider;
    }
    if let Some(language) = CodeFence::open(text) {
        return LineKind::FenceOpen { language };
    }
    if TableBuilder::is_row(text) {
        return LineKind::TableRow;
    }
    if let Some(url) = ImageLine::url(text) {
        return LineKind::Image {
            url: url.to_string(),
        };
    }
    if BlockEquation::is_delimiter(text) {
        return LineKind::EquationOpen;
    }
    if let Some(content) = BlockQuote::content(text) {
        if content.is_empty() {
            return LineKind::Blank;
        }
        return LineKind::Quote {
            content: content.to_string(),
        };
    }
    if let Some((level, content)) = Heading::parse(text) {
        return LineKind::Heading {
            level,
            content: content.to_string(),
        };
    }
    if let Some(content) = ListItem::bullet(text) {
        return LineKind::BulletItem {
            content: content.to_string(),
        };
    }
    if let Some(content) = ListItem::numbered(text) {
        return LineKind::NumberedItem {
            content: content.to_string(),
        };
    }
    LineKind::Text
}

fn indent_width(line: &str) -> usize {
    line.chars()
        .take_while(|c| c.is_whitespace())
        .map(|c| if c == '\t' { TAB_WIDTH } else { 1 })
        .sum()
}
