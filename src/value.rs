//! Stored property values
//!
//! A property value that keeps track of whether it was ever assigned, so an
//! explicitly empty value can be told apart from the zero value.

use std::fmt;

/// A string that records whether it has been explicitly set
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionalValue {
    value: String,
    set: bool,
}

impl OptionalValue {
    /// Creates a value that is already set
    pub fn new(value: impl Into<String>) -> Self {
        let mut v = Self::default();
        v.set(value);
        v
    }

    /// Replaces the contained value and marks it as set, even when empty
    pub fn set(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.set = true;
    }

    /// Returns true once `set` has been called
    pub fn is_set(&self) -> bool {
        self.set
    }

    /// The contained value, whether or not it was explicitly set
    pub fn as_str(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for OptionalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
