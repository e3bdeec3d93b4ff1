/// Display math spanning lines between two `$$` lines.
pub struct BlockEquation;

impl BlockEquation {
    pub const DELIM: &'static str = "$$";

    pub fn is_delimiter(text: &str) -> bool {
        text.trim() == Self::DELIM
    }

    /// Joins the trimmed body lines with single spaces.
    pub fn expression<S: AsRef<str>>(lines: &[S]) -> String {
        lines
            .iter()
            .map(|l| l.as_ref().trim())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
