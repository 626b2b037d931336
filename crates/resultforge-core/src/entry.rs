//! Entries of a result file.

use std::collections::btree_map;
use std::collections::BTreeMap;

use crate::domain::Population;

/// Key/value metadata attached to an entry.
///
/// Keys are kept sorted so iteration order does not depend on file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Properties {
    values: BTreeMap<String, String>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a property, replacing any earlier value for the same key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.values.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_map(self) -> BTreeMap<String, String> {
        self.values
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut properties = Properties::new();
        for (key, value) in iter {
            properties.insert(key, value);
        }
        properties
    }
}

impl IntoIterator for Properties {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

/// One complete entry: a population and the properties written after it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    population: Population,
    properties: Properties,
}

impl Entry {
    pub fn new(population: Population, properties: Properties) -> Self {
        Self {
            population,
            properties,
        }
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn properties(&self) -> &Properties {
        &self.properties
    }

    /// Shorthand for `self.properties().get(key)`.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key)
    }

    pub fn into_parts(self) -> (Population, Properties) {
        (self.population, self.properties)
    }
}
