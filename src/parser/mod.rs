//! INI parsing engine
//!
//! This module turns raw text into a [`Store`](crate::store::Store), one line
//! at a time.
//!
//! # Components
//!
//! - `LineClassifier`: decides whether a line is blank, a comment, a section
//!   header, a property or unparseable
//! - `parse_lines`: applies the options to each classified line and fills the store
//! - `strip_inline_comments` / `strip_enclosing_quotes`: text helpers used on the way

mod classify;
mod engine;
mod text;

// Re-export main types
pub use classify::{Line, LineClassifier};
pub use engine::{parse_lines, parse_lines_with_stats, ParseStats};
pub use text::{strip_enclosing_quotes, strip_inline_comments};
