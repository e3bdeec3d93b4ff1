use crate::parsing::inline::cursor::Cursor;

use super::Link;

/// `![alt](url)` inside running text.
///
/// Inline images are never turned into image or link runs. The scanner only
/// claims the span so the bracket part is not mistaken for a link; only a
/// line that consists of nothing but an image becomes an image block.
pub struct InlineImage;

impl InlineImage {
    /// Scans `![alt](url)` and returns the full literal source.
    pub fn scan<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
        if cur.peek() != Some(Link::IMAGE_MARK) {
            return None;
        }

        let saved = cur.clone();
        let start = cur.pos();
        cur.bump(); // !
        if Link::scan_body(cur).is_none() {
            *cur = saved;
            return None;
        }
        Some(cur.slice_from(start))
    }
}
