use super::{
    cursor::Cursor,
    kinds::{CodeSpan, Emphasis, InlineImage, Link, Math, Strong},
    parser::tokenize,
    types::Run,
};

/// The inline constructs, tried in [`InlineRule::PRIORITY`] order.
///
/// The tokenizer walks the text left to right and, at every offset, asks each
/// rule in turn. The earliest offset where any rule matches wins; among rules
/// matching at the same offset, the one listed first wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InlineRule {
    CodeSpan,
    Math,
    Image,
    Link,
    Strong,
    Emphasis,
}

impl InlineRule {
    /// Tie-break order for rules matching at the same offset.
    pub const PRIORITY: [InlineRule; 6] = [
        InlineRule::CodeSpan,
        InlineRule::Math,
        InlineRule::Image,
        InlineRule::Link,
        InlineRule::Strong,
        InlineRule::Emphasis,
    ];

    /// Tries every rule at the cursor, in priority order.
    ///
    /// On success the cursor sits just past the matched construct.
    pub fn first_match(cur: &mut Cursor<'_>) -> Option<(InlineRule, Run)> {
        Self::PRIORITY
            .iter()
            .find_map(|rule| rule.try_match(cur).map(|run| (*rule, run)))
    }

    /// Tries this rule alone at the cursor. The cursor only moves on success.
    pub fn try_match(self, cur: &mut Cursor<'_>) -> Option<Run> {
        match self {
            InlineRule::CodeSpan => CodeSpan::scan(cur).map(|code| Run::Code(code.to_string())),
            InlineRule::Math => Math::scan(cur).map(|expr| Run::Equation(expr.to_string())),
            InlineRule::Image => InlineImage::scan(cur).map(Run::text),
            InlineRule::Link => {
                let start = cur.pos();
                let (text, url) = Link::scan(cur)?;
                Some(link_run(text, url, cur.slice_from(start)))
            }
            InlineRule::Strong => Strong::scan(cur).map(|inner| decorate(inner, Run::Bold)),
            InlineRule::Emphasis => Emphasis::scan(cur).map(|inner| decorate(inner, Run::Italic)),
        }
    }
}

/// Builds a link run. Empty text shows the url; a link with neither is kept
/// as its literal `source`.
fn link_run(text: &str, url: &str, source: &str) -> Run {
    let url = url.trim();
    if url.is_empty() && text.trim().is_empty() {
        return Run::text(source);
    }
    let text = if text.is_empty() { url } else { text };
    Run::Link {
        text: text.to_string(),
        url: url.to_string(),
    }
}

/// Re-tokenizes decorated content and wraps it.
///
/// A span whose content is a single equation is returned bare: equations
/// cannot carry text decorations.
fn decorate(inner: &str, wrap: fn(Vec<Run>) -> Run) -> Run {
    let mut runs = tokenize(inner);
    if runs.len() == 1 && !runs[0].is_text_bearing() {
        return runs.remove(0);
    }
    wrap(runs)
}
