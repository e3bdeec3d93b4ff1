use crate::parsing::inline::cursor::Cursor;

/// Code span inline type with owned delimiter constant.
///
/// Code spans are raw zones: math, links and emphasis inside them stay
/// literal.
pub struct CodeSpan;

impl CodeSpan {
    /// The backtick character that delimits code spans.
    pub const TICK: u8 = b'`';

    /// Scans `` `code` `` and returns the text between the backticks.
    ///
    /// An empty span (two adjacent backticks) and an unclosed span do not
    /// match; the cursor is restored.
    pub fn scan<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
        if cur.peek() != Some(Self::TICK) {
            return None;
        }

        let saved = cur.clone();
        cur.bump(); // `
        let inner_start = cur.pos();
        let len = cur.eat_while(|b| b != Self::TICK);
        let inner = cur.slice_from(inner_start);

        if len == 0 || cur.peek() != Some(Self::TICK) {
            *cur = saved;
            return None;
        }
        cur.bump(); // closing `
        Some(inner)
    }
}
