//! Parser options module
//!
//! This module defines the options that control every parsing and conversion
//! decision, their validation, and loading them from TOML files.
//!
//! # Example
//!
//! ```no_run
//! use inifile::options::load_options;
//! use std::path::Path;
//!
//! let options = load_options(Path::new("mysql-options.toml")).unwrap();
//! println!("Comment lines start with: {}", options.comment_start);
//! ```

mod loader;
mod types;
mod validation;

// Re-export types
pub use types::IniOptions;

// Re-export loader functions
pub use loader::{load_options, parse_options};
