use crate::parsing::inline::cursor::Cursor;

/// `**bold**` syntax.
///
/// The span closes at the first `**` after the opener, so single stars inside
/// (`**a *b* c**`) are left for the italic rule when the content is
/// re-tokenized. Content may not start with `*`: in a run like `***x***` the
/// bold span opens one star later.
pub struct Strong;

impl Strong {
    pub const DELIM: &'static str = "**";

    /// Scans `**text**` and returns the text between the delimiters.
    pub fn scan<'a>(cur: &mut Cursor<'a>) -> Option<&'a str> {
        if !cur.starts_with(Self::DELIM.as_bytes()) {
            return None;
        }

        let inner_start = cur.pos() + Self::DELIM.len();
        if cur.s.as_bytes().get(inner_start) == Some(&b'*') {
            return None;
        }
        let rest = cur.s.get(inner_start..)?;
        let len = rest.find(Self::DELIM)?;

        cur.bump_n(Self::DELIM.len() + len + Self::DELIM.len());
        Some(&rest[..len])
    }
}
