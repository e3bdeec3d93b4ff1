use regex::Regex;
use std::fmt;
use std::sync::OnceLock;

use crate::ClientError;

/// A Notion page id, normalized to 32 lowercase hex digits.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PageId(String);

impl PageId {
    /// Extracts a page id from a raw id, a dashed UUID, or a page URL.
    ///
    /// Query strings and fragments are ignored. When several ids appear, the
    /// last one wins: page URLs end with the id after the title slug.
    pub fn parse(input: &str) -> Result<Self, ClientError> {
        static ID: OnceLock<Regex> = OnceLock::new();
        let re = ID.get_or_init(|| {
            Regex::new(
                r"(?i)\b[0-9a-f]{8}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{4}-?[0-9a-f]{12}\b",
            )
            .expect("Invalid page id regex")
        });

        let clean = input.split(['?', '#']).next().unwrap_or_default();
        re.find_iter(clean)
            .last()
            .map(|m| PageId(m.as_str().replace('-', "").to_ascii_lowercase()))
            .ok_or_else(|| ClientError::InvalidPageId(input.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
