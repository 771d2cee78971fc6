//! In-memory section and property storage
//!
//! The store maps section names to property maps. When case-insensitive
//! matching is requested, names are lowercased on the way in and on lookup, so
//! only the folded form of a name is ever a key.

use crate::value::OptionalValue;
use std::borrow::Cow;
use std::collections::HashMap;

type PropertyMap = HashMap<String, OptionalValue>;

/// Section -> property -> value mapping
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Store {
    sections: HashMap<String, PropertyMap>,
    case_sensitive: bool,
}

impl Store {
    /// Creates an empty store
    ///
    /// # Arguments
    ///
    /// * `case_sensitive` - When false, section and property names are lowercased
    pub fn new(case_sensitive: bool) -> Self {
        Self {
            sections: HashMap::new(),
            case_sensitive,
        }
    }

    /// Returns true if at least one property was stored in the section
    pub fn section_exists(&self, section: &str) -> bool {
        self.find_section(section).is_some()
    }

    /// Returns true if the section exists and holds the property
    pub fn property_exists(&self, section: &str, property: &str) -> bool {
        self.get(section, property).is_some()
    }

    /// Looks up a stored value
    pub fn get(&self, section: &str, property: &str) -> Option<&OptionalValue> {
        self.find_section(section)?.get(&*self.normalise(property))
    }

    /// Stores a property, overwriting any previous value
    ///
    /// The section is created if it does not exist yet.
    pub fn add(&mut self, section: &str, property: &str, value: &str) {
        let section = self.normalise(section).into_owned();
        let property = self.normalise(property).into_owned();

        self.sections
            .entry(section)
            .or_default()
            .insert(property, OptionalValue::new(value));
    }

    /// Iterates over the stored section names (normalised, unordered)
    pub fn section_names(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    /// Iterates over the property names of a section (normalised, unordered)
    ///
    /// Yields nothing if the section does not exist.
    pub fn property_names<'a>(&'a self, section: &str) -> impl Iterator<Item = &'a str> {
        self.find_section(section)
            .into_iter()
            .flat_map(|properties| properties.keys().map(String::as_str))
    }

    /// Number of sections, the global section included when populated
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Total number of properties across all sections
    pub fn property_count(&self) -> usize {
        self.sections.values().map(HashMap::len).sum()
    }

    fn find_section(&self, section: &str) -> Option<&PropertyMap> {
        self.sections.get(&*self.normalise(section))
    }

    fn normalise<'a>(&self, name: &'a str) -> Cow<'a, str> {
        if self.case_sensitive {
            Cow::Borrowed(name)
        } else {
            Cow::Owned(name.to_lowercase())
        }
    }
}
