//! # Inline Parsing
//!
//! Single-pass cursor tokenizer turning one span of text into [`Run`]s.
//!
//! ## Modules
//!
//! - **`types`**: `Run` enum (Text, Bold, Italic, Code, Equation, Link)
//! - **`kinds`**: one scanner per construct, owning its delimiters
//! - **`rules`**: `InlineRule` priority table deciding ties
//! - **`cursor`**: `Cursor` for byte-by-byte scanning
//! - **`parser`**: `tokenize()` main entry point
//!
//! ## Raw Zones
//!
//! Code spans and math are raw: `` `$x$` `` is code, `$a[i]$` is an
//! equation. Bold and italic content is tokenized again, so
//! `**$x$ and y**` keeps its equation.

pub mod cursor;
pub mod kinds;
pub mod parser;
pub mod rules;
pub mod types;

pub use parser::tokenize;
pub use rules::InlineRule;
pub use types::Run;
