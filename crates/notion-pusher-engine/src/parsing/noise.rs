//! Per-line text normalization applied before a line is classified.
//!
//! Notes pasted from chat tools and PDF extractors carry full-width table
//! punctuation, zero-width spaces, and runs like `1111` left behind by
//! footnote markers. None of that should reach the output document.

/// Full-width vertical line, as produced by CJK input methods.
pub const FULLWIDTH_PIPE: char = '\u{FF5C}';
/// Full-width hyphen-minus.
pub const FULLWIDTH_DASH: char = '\u{FF0D}';

/// Characters dropped outright (zero-width space, byte order mark).
const ZERO_WIDTH: [char; 2] = ['\u{200B}', '\u{FEFF}'];

/// Shortest run of one repeated digit treated as noise.
const MIN_NOISE_RUN: usize = 4;

/// A line with its digit noise stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cleaned {
    pub text: String,
    /// Each removed run, in order of appearance.
    pub removed: Vec<String>,
}

/// Maps full-width pipe and dash to ASCII and drops zero-width characters.
pub fn normalize_chars(line: &str) -> String {
    line.chars()
        .filter_map(|c| match c {
            FULLWIDTH_PIPE => Some('|'),
            FULLWIDTH_DASH => Some('-'),
            c if ZERO_WIDTH.contains(&c) => None,
            c => Some(c),
        })
        .collect()
}

/// Removes runs of a single repeated digit, four or more long, that stand
/// alone as a word (`1111` in `see 1111 below`, but not `11112` or `a1111`).
pub fn strip_digit_noise(line: &str) -> Cleaned {
    let chars: Vec<char> = line.chars().collect();
    let mut text = String::with_capacity(line.len());
    let mut removed = Vec::new();
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let starts_word = i == 0 || !is_word_char(chars[i - 1]);
        if !(c.is_ascii_digit() && starts_word) {
            text.push(c);
            i += 1;
            continue;
        }

        let mut end = i + 1;
        while end < chars.len() && chars[end] == c {
            end += 1;
        }
        let ends_word = end == chars.len() || !is_word_char(chars[end]);
        let run: String = chars[i..end].iter().collect();

        if end - i >= MIN_NOISE_RUN && ends_word {
            removed.push(run);
        } else {
            text.push_str(&run);
        }
        i = end;
    }

    Cleaned { text, removed }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
