//! Section views
//!
//! Borrowed views that bind a section name to an [`IniConfig`] so repeated
//! lookups in the same section do not repeat the name. They own no data.

use crate::config::IniConfig;
use crate::Result;

/// Read-only view of one section
///
/// Obtained from [`IniConfig::section`].
#[derive(Debug, Clone)]
pub struct IniSection<'a> {
    name: String,
    config: &'a IniConfig,
}

impl<'a> IniSection<'a> {
    pub(crate) fn new(name: &str, config: &'a IniConfig) -> Self {
        Self {
            name: name.to_string(),
            config,
        }
    }

    /// Name of the section as it was requested
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Iterates over the property names in this section (normalised, unordered)
    pub fn property_names(&self) -> impl Iterator<Item = &'a str> {
        self.config.store().property_names(&self.name)
    }

    /// See [`IniConfig::property_exists`]
    pub fn property_exists(&self, property: &str) -> bool {
        self.config.property_exists(&self.name, property)
    }

    /// See [`IniConfig::get`]
    pub fn get(&self, property: &str) -> Result<&'a str> {
        self.config.get(&self.name, property)
    }

    /// See [`IniConfig::get_or_zero`]
    pub fn get_or_zero(&self, property: &str) -> &'a str {
        self.config.get_or_zero(&self.name, property)
    }

    /// See [`IniConfig::get_f64`]
    pub fn get_f64(&self, property: &str) -> Result<f64> {
        self.config.get_f64(&self.name, property)
    }

    /// See [`IniConfig::get_f64_or_zero`]
    pub fn get_f64_or_zero(&self, property: &str) -> f64 {
        self.config.get_f64_or_zero(&self.name, property)
    }

    /// See [`IniConfig::get_i64`]
    pub fn get_i64(&self, property: &str) -> Result<i64> {
        self.config.get_i64(&self.name, property)
    }

    /// See [`IniConfig::get_i64_or_zero`]
    pub fn get_i64_or_zero(&self, property: &str) -> i64 {
        self.config.get_i64_or_zero(&self.name, property)
    }

    /// See [`IniConfig::get_u64`]
    pub fn get_u64(&self, property: &str) -> Result<u64> {
        self.config.get_u64(&self.name, property)
    }

    /// See [`IniConfig::get_u64_or_zero`]
    pub fn get_u64_or_zero(&self, property: &str) -> u64 {
        self.config.get_u64_or_zero(&self.name, property)
    }

    /// See [`IniConfig::get_bool`]
    pub fn get_bool(&self, property: &str) -> Result<bool> {
        self.config.get_bool(&self.name, property)
    }

    /// See [`IniConfig::get_bool_or_zero`]
    pub fn get_bool_or_zero(&self, property: &str) -> bool {
        self.config.get_bool_or_zero(&self.name, property)
    }
}

/// Mutable view of one section
///
/// Obtained from [`IniConfig::section_mut`]; adds [`IniSectionMut::add`] on
/// top of the read accessors.
#[derive(Debug)]
pub struct IniSectionMut<'a> {
    name: String,
    config: &'a mut IniConfig,
}

impl<'a> IniSectionMut<'a> {
    pub(crate) fn new(name: &str, config: &'a mut IniConfig) -> Self {
        Self {
            name: name.to_string(),
            config,
        }
    }

    /// Name of the section as it was requested
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Reborrows as a read-only view
    pub fn as_view(&self) -> IniSection<'_> {
        IniSection::new(&self.name, self.config)
    }

    /// See [`IniConfig::property_exists`]
    pub fn property_exists(&self, property: &str) -> bool {
        self.config.property_exists(&self.name, property)
    }

    /// See [`IniConfig::get`]
    pub fn get(&self, property: &str) -> Result<&str> {
        self.config.get(&self.name, property)
    }

    /// See [`IniConfig::add`]
    pub fn add(&mut self, property: &str, value: &str) {
        self.config.add(&self.name, property, value);
    }
}
