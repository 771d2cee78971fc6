//! Parsed INI configuration and typed property access
//!
//! [`IniConfig`] owns the parsed [`Store`] together with the options it was
//! parsed with. Lookups return errors for missing sections and properties and
//! for values that cannot be converted; the `*_or_zero` variants return the
//! type's zero value instead.

use crate::convert::{match_strict_bool, parse_f64, parse_i64, parse_permissive_bool, parse_u64};
use crate::options::IniOptions;
use crate::parser::parse_lines;
use crate::section::{IniSection, IniSectionMut};
use crate::store::Store;
use crate::{ConversionError, IniError, Result};
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;
use std::str::FromStr;

/// Configuration parsed from INI text
#[derive(Debug, Clone)]
pub struct IniConfig {
    store: Store,
    options: IniOptions,
}

impl IniConfig {
    /// Loads the INI file at `path` using the default options
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_path_with_options(path, IniOptions::default())
    }

    /// Loads the INI file at `path` using the supplied options
    ///
    /// The file is closed before returning, whether or not parsing succeeded.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use inifile::{IniConfig, IniOptions};
    ///
    /// let options = IniOptions {
    ///     comment_start: "#".to_string(),
    ///     ..IniOptions::default()
    /// };
    /// let config = IniConfig::from_path_with_options("/etc/mysql/my.cnf", options).unwrap();
    /// println!("datadir: {}", config.get_or_zero("mysqld", "datadir"));
    /// ```
    pub fn from_path_with_options(path: impl AsRef<Path>, options: IniOptions) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("Loading INI file: {}", path.display());

        let file = File::open(path)?;
        Self::from_reader_with_options(BufReader::new(file), options)
    }

    /// Parses INI text from a reader using the default options
    pub fn from_reader<R: BufRead>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, IniOptions::default())
    }

    /// Parses INI text from a reader using the supplied options
    ///
    /// The reader is consumed to the end (or to the first error); closing the
    /// underlying handle stays with the caller.
    pub fn from_reader_with_options<R: BufRead>(reader: R, options: IniOptions) -> Result<Self> {
        Self::from_lines(reader.lines(), options)
    }

    /// Parses INI text held in memory using the default options
    pub fn parse_str(text: &str) -> Result<Self> {
        Self::parse_str_with_options(text, IniOptions::default())
    }

    /// Parses INI text held in memory using the supplied options
    pub fn parse_str_with_options(text: &str, options: IniOptions) -> Result<Self> {
        Self::from_lines(text.lines().map(Ok::<_, io::Error>), options)
    }

    fn from_lines<I, S>(lines: I, options: IniOptions) -> Result<Self>
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let store = parse_lines(lines, &options)?;
        Ok(Self { store, options })
    }

    /// The options this configuration was parsed with
    pub fn options(&self) -> &IniOptions {
        &self.options
    }

    /// Read-only access to the underlying store
    pub fn store(&self) -> &Store {
        &self.store
    }

    /// Returns true if the section holds at least one property
    pub fn section_exists(&self, section: &str) -> bool {
        self.store.section_exists(section)
    }

    /// Returns true if the section exists and contains the property
    pub fn property_exists(&self, section: &str, property: &str) -> bool {
        self.store.property_exists(section, property)
    }

    /// Iterates over section names (normalised, unordered)
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.store.section_names()
    }

    /// Returns a view bound to one section
    ///
    /// # Returns
    ///
    /// * `Ok(IniSection)` - The section exists
    /// * `Err(IniError::SectionNotFound)` - No property was stored in the section
    pub fn section(&self, section: &str) -> Result<IniSection<'_>> {
        if !self.section_exists(section) {
            return Err(IniError::SectionNotFound(section.to_string()));
        }
        Ok(IniSection::new(section, self))
    }

    /// Returns a mutable view bound to one existing section
    pub fn section_mut(&mut self, section: &str) -> Result<IniSectionMut<'_>> {
        if !self.section_exists(section) {
            return Err(IniError::SectionNotFound(section.to_string()));
        }
        Ok(IniSectionMut::new(section, self))
    }

    /// Returns the raw value of a property
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - The stored value
    /// * `Err(IniError)` - `SectionNotFound` or `PropertyNotFound`
    pub fn get(&self, section: &str, property: &str) -> Result<&str> {
        if !self.store.section_exists(section) {
            return Err(IniError::SectionNotFound(section.to_string()));
        }

        self.store
            .get(section, property)
            .map(|value| value.as_str())
            .ok_or_else(|| IniError::PropertyNotFound {
                section: section.to_string(),
                property: property.to_string(),
            })
    }

    /// Returns the raw value of a property, or `""` if it cannot be found
    pub fn get_or_zero(&self, section: &str, property: &str) -> &str {
        self.get(section, property).unwrap_or_default()
    }

    /// Interprets a property as an `f64`
    pub fn get_f64(&self, section: &str, property: &str) -> Result<f64> {
        self.get_number(section, property, "a float64", parse_f64)
    }

    /// Interprets a property as an `f64`, or returns `0.0` on any error
    pub fn get_f64_or_zero(&self, section: &str, property: &str) -> f64 {
        self.get_f64(section, property).unwrap_or_default()
    }

    /// Interprets a property as an `i64`
    pub fn get_i64(&self, section: &str, property: &str) -> Result<i64> {
        self.get_number(section, property, "an int64", parse_i64)
    }

    /// Interprets a property as an `i64`, or returns `0` on any error
    pub fn get_i64_or_zero(&self, section: &str, property: &str) -> i64 {
        self.get_i64(section, property).unwrap_or_default()
    }

    /// Interprets a property as a `u64`
    ///
    /// Signed and non-integer values are rejected.
    pub fn get_u64(&self, section: &str, property: &str) -> Result<u64> {
        self.get_number(section, property, "a uint64", parse_u64)
    }

    /// Interprets a property as a `u64`, or returns `0` on any error
    pub fn get_u64_or_zero(&self, section: &str, property: &str) -> u64 {
        self.get_u64(section, property).unwrap_or_default()
    }

    /// Interprets a property as a `bool`
    ///
    /// With `use_go_bool_rules` the permissive rule set applies
    /// (`1/t/T/TRUE/true/True` and `0/f/F/FALSE/false/False`). Otherwise the
    /// value must match `strict_bool_true` or `strict_bool_false`, ignoring
    /// case when `strict_bool_case_sensitive` is false.
    pub fn get_bool(&self, section: &str, property: &str) -> Result<bool> {
        let raw = self.get(section, property)?;
        let options = &self.options;

        if options.use_go_bool_rules {
            return parse_permissive_bool(raw).ok_or_else(|| {
                ConversionError::Bool {
                    section: section.to_string(),
                    property: property.to_string(),
                    value: raw.to_string(),
                }
                .into()
            });
        }

        match_strict_bool(
            raw,
            &options.strict_bool_true,
            &options.strict_bool_false,
            options.strict_bool_case_sensitive,
        )
        .ok_or_else(|| {
            ConversionError::StrictBool {
                section: section.to_string(),
                property: property.to_string(),
                value: raw.to_string(),
                true_value: options.strict_bool_true.clone(),
                false_value: options.strict_bool_false.clone(),
            }
            .into()
        })
    }

    /// Interprets a property as a `bool`, or returns `false` on any error
    pub fn get_bool_or_zero(&self, section: &str, property: &str) -> bool {
        self.get_bool(section, property).unwrap_or_default()
    }

    /// Stores a property, overwriting any existing value
    ///
    /// The section is created if needed. Names go through the same case
    /// folding as parsed names.
    pub fn add(&mut self, section: &str, property: &str, value: &str) {
        self.store.add(section, property, value);
    }

    fn get_number<T>(
        &self,
        section: &str,
        property: &str,
        target: &'static str,
        parse: fn(&str) -> Option<T>,
    ) -> Result<T> {
        let raw = self.get(section, property)?;

        parse(raw).ok_or_else(|| {
            ConversionError::Number {
                section: section.to_string(),
                property: property.to_string(),
                value: raw.to_string(),
                target,
            }
            .into()
        })
    }
}

impl FromStr for IniConfig {
    type Err = IniError;

    fn from_str(text: &str) -> Result<Self> {
        Self::parse_str(text)
    }
}
