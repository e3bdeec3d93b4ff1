/// Single-level quote line.
pub struct BlockQuote;

impl BlockQuote {
    /// The quote prefix character.
    pub const PREFIX: char = '>';

    /// The quoted text, trimmed, if `text` is a quote line. An empty quote
    /// yields `Some("")`.
    pub fn content(text: &str) -> Option<&str> {
        text.strip_prefix(Self::PREFIX).map(str::trim)
    }
}
