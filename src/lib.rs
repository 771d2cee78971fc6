//! inifile: a configurable INI parser with typed access
//!
//! This crate parses INI-style text into sections of key/value properties and
//! exposes the stored strings as booleans, integers and floats. Parsing and
//! conversion rules are driven by [`IniOptions`], so most INI dialects found in
//! the wild (alternate comment markers, inline comments, quoted values, colon
//! assignment, case-insensitive names) can be read.
//!
//! # Example
//!
//! ```
//! use inifile::{IniConfig, IniOptions};
//!
//! let text = "[server]\nport = 8080\nverbose = true\n";
//! let config = IniConfig::parse_str(text).unwrap();
//! assert_eq!(config.get_u64("server", "port").unwrap(), 8080);
//! assert!(config.get_bool("server", "verbose").unwrap());
//!
//! let options = IniOptions {
//!     case_sensitive: false,
//!     ..IniOptions::default()
//! };
//! let config = IniConfig::parse_str_with_options(text, options).unwrap();
//! assert!(config.section_exists("SERVER"));
//! ```

pub mod config;
pub mod convert;
pub mod options;
pub mod parser;
pub mod section;
pub mod store;
pub mod value;

use thiserror::Error;

/// Name used to address properties declared before any `[section]` header
pub const GLOBAL_SECTION: &str = "";

/// Main error type for parsing and property access
#[derive(Debug, Error)]
pub enum IniError {
    #[error("Failed to read INI source: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid options: {0}")]
    Options(#[from] OptionsError),

    #[error("Syntax error: {0}")]
    Syntax(#[from] SyntaxError),

    #[error("No such section {0}")]
    SectionNotFound(String),

    #[error("No such property [{section}].{property}")]
    PropertyNotFound { section: String, property: String },

    #[error("Conversion error: {0}")]
    Conversion(#[from] ConversionError),
}

impl IniError {
    /// Returns true if the error reports a missing section or property
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::SectionNotFound(_) | Self::PropertyNotFound { .. }
        )
    }
}

/// Errors raised while building or validating [`IniOptions`]
#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("comment-start cannot be empty")]
    EmptyCommentStart,

    #[error("Failed to read options file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Line classification failures; every variant carries the 1-based line number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("Blank line on line {0} (forbidden in options)")]
    BlankLine(usize),

    #[error("Unparseable section line at line {0}")]
    UnparseableSection(usize),

    #[error("Property on line {0} is outside of a named section (forbidden in options)")]
    GlobalProperty(usize),

    #[error("Unparseable property line at line {0}")]
    UnparseableProperty(usize),

    #[error("Unparseable line at line {0}")]
    UnparseableLine(usize),
}

impl SyntaxError {
    /// Line on which the failure was detected
    pub fn line(&self) -> usize {
        match *self {
            Self::BlankLine(line)
            | Self::UnparseableSection(line)
            | Self::GlobalProperty(line)
            | Self::UnparseableProperty(line)
            | Self::UnparseableLine(line) => line,
        }
    }
}

/// A stored value could not be interpreted as the requested type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    #[error("Unable to interpret [{section}].{property} ({value}) as {target}")]
    Number {
        section: String,
        property: String,
        value: String,
        target: &'static str,
    },

    #[error("Unable to interpret [{section}].{property} ({value}) as a bool")]
    Bool {
        section: String,
        property: String,
        value: String,
    },

    #[error("Value of [{section}].{property} ({value}) could not be matched to {true_value} or {false_value}")]
    StrictBool {
        section: String,
        property: String,
        value: String,
        true_value: String,
        false_value: String,
    },
}

/// Result type alias for parsing and access operations
pub type Result<T> = std::result::Result<T, IniError>;

/// Result type alias for options operations
pub type OptionsResult<T> = std::result::Result<T, OptionsError>;

// Re-export commonly used types
pub use config::IniConfig;
pub use options::{load_options, IniOptions};
pub use section::{IniSection, IniSectionMut};
pub use store::Store;
pub use value::OptionalValue;
