/// Thematic break: `---`, `***`, `___` or any mix of at least three.
pub struct Divider;

impl Divider {
    pub const CHARS: [char; 3] = ['-', '*', '_'];
    pub const MIN_LEN: usize = 3;

    pub fn matches(text: &str) -> bool {
        text.chars().count() >= Self::MIN_LEN && text.chars().all(|c| Self::CHARS.contains(&c))
    }
}
