use crate::parsing::inline::cursor::Cursor;

/// `[text](url)` link syntax.
pub struct Link;

impl Link {
    pub const OPEN: u8 = b'[';
    pub const CLOSE: u8 = b']';
    pub const URL_OPEN: u8 = b'(';
    pub const URL_CLOSE: u8 = b')';
    /// A `!` right before `[` turns the link into an image.
    pub const IMAGE_MARK: u8 = b'!';

    /// Scans `[text](url)` and returns `(text, url)` untouched.
    ///
    /// Does not match when the bracket is preceded by `!`; that form belongs
    /// to [`InlineImage`](super::InlineImage).
    pub fn scan<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
        if cur.prev() == Some(Self::IMAGE_MARK) {
            return None;
        }
        Self::scan_body(cur)
    }

    /// Scans the `[text](url)` body shared by links and images.
    ///
    /// Text may not contain `]` and the url may not contain `)`; either may
    /// be empty. On failure the cursor is restored.
    pub fn scan_body<'a>(cur: &mut Cursor<'a>) -> Option<(&'a str, &'a str)> {
        if cur.peek() != Some(Self::OPEN) {
            return None;
        }

        let saved = cur.clone();
        cur.bump(); // [
        let text_start = cur.pos();
        cur.eat_while(|b| b != Self::CLOSE);
        let text = cur.slice_from(text_start);

        if cur.peek() != Some(Self::CLOSE) || cur.peek_at(1) != Some(Self::URL_OPEN) {
            *cur = saved;
            return None;
        }
        cur.bump_n(2); // ](

        let url_start = cur.pos();
        cur.eat_while(|b| b != Self::URL_CLOSE);
        let url = cur.slice_from(url_start);

        if cur.peek() != Some(Self::URL_CLOSE) {
            *cur = saved;
            return None;
        }
        cur.bump(); // )
        Some((text, url))
    }
}
