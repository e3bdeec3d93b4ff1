use crate::parsing::inline::cursor::Cursor;

/// Inline math delimited by a run of dollar signs.
///
/// The opening run length `n` decides the closer: the next run of at least
/// `n` dollars closes the expression and exactly `n` of them are consumed.
/// `$x$` and `$$x$$` both work; `$$x$` does not match at the first `$`.
pub struct Math;

impl Math {
    pub const DOLLAR: u8 = b'$';

    /// Scans a math span and returns the expression between the delimiters.
    ///
    /// Blank expressions do not match; the cursor is restored.
    pub fn scan<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
        if cur.peek() != Some(Self::DOLLAR) {
            return None;
        }

        let saved = cur.clone();
        let open = cur.eat_while(|b| b == Self::DOLLAR);
        let inner_start = cur.pos();
        cur.eat_while(|b| b != Self::DOLLAR);
        let inner = cur.slice_from(inner_start);

        let close_start = cur.pos();
        let close = cur.eat_while(|b| b == Self::DOLLAR);
        if inner.trim().is_empty() || close < open {
            *cur = saved;
            return None;
        }

        cur.i = close_start + open;
        Some(inner)
    }
}
