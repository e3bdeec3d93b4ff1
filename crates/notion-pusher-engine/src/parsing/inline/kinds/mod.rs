//! # Inline Kinds
//!
//! Each inline construct owns its delimiters and knows how to scan its own
//! body. Scanners take a [`Cursor`](super::cursor::Cursor) positioned on a
//! candidate opener and either consume the whole construct or leave the
//! cursor where it was.
//!
//! ## Types
//!
//! - **`CodeSpan`**: `` `code` `` - raw, nothing inside is parsed
//! - **`Math`**: `$x$`, `$$x$$` - raw, nothing inside is parsed
//! - **`InlineImage`**: `![alt](url)` - kept as literal text
//! - **`Link`**: `[text](url)`
//! - **`Strong`**: `**text**`
//! - **`Emphasis`**: `*text*`, `_text_`
//!
//! The order in which they are tried lives in
//! [`InlineRule::PRIORITY`](super::rules::InlineRule::PRIORITY), not here.

pub mod code_span;
pub mod emphasis;
pub mod image;
pub mod link;
pub mod math;
pub mod strong;

pub use code_span::CodeSpan;
pub use emphasis::Emphasis;
pub use image::InlineImage;
pub use link::Link;
pub use math::Math;
pub use strong::Strong;
