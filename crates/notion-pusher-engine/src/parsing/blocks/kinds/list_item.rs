use regex::Regex;
use std::sync::OnceLock;

/// Bullet and ordered list markers.
pub struct ListItem;

impl ListItem {
    pub const BULLET_MARKERS: [&'static str; 2] = ["- ", "* "];

    pub fn bullet(text: &str) -> Option<&str> {
        Self::BULLET_MARKERS
            .iter()
            .find_map(|m| text.strip_prefix(m))
            .map(str::trim)
    }

    /// Content of `1. item`. The number itself is dropped; the target format
    /// renumbers.
    pub fn numbered(text: &str) -> Option<&str> {
        static ORDERED: OnceLock<Regex> = OnceLock::new();
        let re =
            ORDERED.get_or_init(|| Regex::new(r"^\d+\.\s").expect("Invalid ordered item regex"));
        re.find(text).map(|m| text[m.end()..].trim())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bullet_markers() {
        assert_eq!(ListItem::bullet("- Item"), Some("Item"));
        assert_eq!(ListItem::bullet("* Item"), Some("Item"));
        assert_eq!(ListItem::bullet("-Item"), None);
        assert_eq!(ListItem::bullet("+ Item"), None);
    }

    #[test]
    fn numbered_markers() {
        assert_eq!(ListItem::numbered("1. First"), Some("First"));
        assert_eq!(ListItem::numbered("42. Answer"), Some("Answer"));
        assert_eq!(ListItem::numbered("1.5 is a number"), None);
        assert_eq!(ListItem::numbered("a. b"), None);
    }
}
