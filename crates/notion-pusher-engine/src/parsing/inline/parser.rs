use super::{cursor::Cursor, rules::InlineRule, types::Run};

/// Tokenizes one span of text into formatted [`Run`]s.
///
/// Never fails: markup that does not match its construct's grammar is kept as
/// plain text. Text between matches becomes [`Run::Text`].
pub fn tokenize(text: &str) -> Vec<Run> {
    let mut cur = Cursor::new(text);
    let mut out = vec![];
    let mut text_start = 0;

    while !cur.eof() {
        let start = cur.pos();
        if let Some((_, run)) = InlineRule::first_match(&mut cur) {
            flush_text(&mut out, &text[text_start..start]);
            out.push(run);
            text_start = cur.pos();
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, &text[text_start..]);
    out
}

fn flush_text(out: &mut Vec<Run>, text: &str) {
    if !text.is_empty() {
        out.push(Run::text(text));
    }
}
