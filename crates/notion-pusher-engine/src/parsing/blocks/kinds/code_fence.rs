/// Backtick code fence with owned delimiter constants.
pub struct CodeFence;

impl CodeFence {
    pub const TICKS: &'static str = "```";
    /// Language tag used when the opening fence names none.
    pub const DEFAULT_LANGUAGE: &'static str = "plain text";

    /// Returns the language tag if `text` opens a fence.
    pub fn open(text: &str) -> Option<String> {
        let rest = text.strip_prefix(Self::TICKS)?.trim();
        let language = if rest.is_empty() {
            Self::DEFAULT_LANGUAGE
        } else {
            rest
        };
        Some(language.to_string())
    }

    /// Whether a raw line inside the fence closes it.
    pub fn closes(raw: &str) -> bool {
        raw.trim() == Self::TICKS
    }

    /// A content line as kept in the block: indentation intact, right-trimmed.
    pub fn content_line(raw: &str) -> &str {
        raw.trim_end()
    }
}
