use crate::parsing::inline::cursor::Cursor;

/// `*italic*` and `_italic_` syntax.
///
/// Both forms need non-blank content that does not start or end with
/// whitespace. Underscores must additionally sit outside words, so
/// `snake_case_name` stays plain text.
pub struct Emphasis;

impl Emphasis {
    pub const STAR: u8 = b'*';
    pub const UNDERSCORE: u8 = b'_';

    /// Scans an emphasis span and returns the text between the delimiters.
    pub fn scan<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
        let delim = match cur.peek() {
            Some(b @ (Self::STAR | Self::UNDERSCORE)) => b,
            _ => return None,
        };
        if cur.peek_at(1) == Some(delim) || cur.prev() == Some(delim) {
            return None;
        }
        if delim == Self::UNDERSCORE && cur.prev_char().is_some_and(char::is_alphanumeric) {
            return None;
        }

        let saved = cur.clone();
        cur.bump();
        let inner_start = cur.pos();
        cur.eat_while(|b| b != delim);
        let inner = cur.slice_from(inner_start);

        if cur.peek() != Some(delim) || !is_tight(inner) {
            *cur = saved;
            return None;
        }
        cur.bump();

        if delim == Self::UNDERSCORE && cur.peek_char().is_some_and(char::is_alphanumeric) {
            *cur = saved;
            return None;
        }
        Some(inner)
    }
}

/// Non-empty and not padded with whitespace on either side.
fn is_tight(inner: &str) -> bool {
    !inner.is_empty() && inner.trim() == inner
}
