use regex::Regex;
use std::sync::OnceLock;

/// A line holding nothing but `![alt](url)`.
pub struct ImageLine;

impl ImageLine {
    /// The trimmed URL if the whole line is an image. Alt text is dropped.
    pub fn url(text: &str) -> Option<&str> {
        static IMAGE: OnceLock<Regex> = OnceLock::new();
        let re = IMAGE
            .get_or_init(|| Regex::new(r"^!\[[^\]]*\]\(([^)]*)\)$").expect("Invalid image regex"));
        re.captures(text)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().trim())
    }
}
