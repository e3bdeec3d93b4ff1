use crate::parsing::blocks::types::HeadingLevel;

/// ATX heading (`#` to `######`), folded to the three levels the target
/// format supports.
pub struct Heading;

impl Heading {
    pub const MARK: char = '#';
    /// From this many `#` on, no whitespace is required after the run.
    const COLLAPSE_DEPTH: usize = 4;

    /// Returns the level and trimmed content if `text` is a heading.
    ///
    /// A line of only `#` marks has no content and is not a heading.
    pub fn parse(text: &str) -> Option<(HeadingLevel, &str)> {
        let rest = text.trim_start_matches(Self::MARK);
        let depth = text.len() - rest.len();
        let content = rest.trim();
        if depth == 0 || content.is_empty() {
            return None;
        }
        if depth < Self::COLLAPSE_DEPTH && !rest.starts_with(char::is_whitespace) {
            return None;
        }
        Some((HeadingLevel::from_depth(depth), content))
    }
}
