//! # Block Parsing
//!
//! Two-phase, line-oriented block parsing.
//!
//! ## Parsing Phases
//!
//! 1. **Line Classification** (`classify`): each line is normalized, cleaned
//!    of noise and classified into a `LineClass` holding local facts only
//! 2. **Block Construction** (`builder`): a `BlockBuilder` state machine
//!    buffers code fences, tables and block equations, and emits `Block`s
//!
//! ## Modules
//!
//! - **`types`**: `Block`, `Table`, `Row`, `HeadingLevel`
//! - **`kinds`**: block-specific types owning their delimiters and line rules
//! - **`classify`**: `LineClassifier` produces a `LineClass` per line
//! - **`builder`**: `BlockBuilder` state machine
//!
//! ## Key Invariants
//!
//! - Code fences and block equations are raw zones: no classification inside
//! - Nesting is exactly one level deep
//! - Every table row has exactly `column_count` cells

pub mod builder;
pub mod classify;
pub mod kinds;
pub mod types;

pub use builder::BlockBuilder;
pub use classify::{LineClass, LineClassifier, LineKind};
pub use types::{Block, Cell, HeadingLevel, Row, Table};
