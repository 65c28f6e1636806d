use serde_json::Value;
use std::collections::BTreeMap;

use super::error::LandscapeError;
use super::record::LandscapeRecord;

/// Every property of a single landscape, including ones beyond the fixed record shape
pub type Properties = BTreeMap<String, Value>;

/// Landscapes decoded into the fixed record shape
pub type LandscapeRegistry = Registry<LandscapeRecord>;

/// Landscapes decoded as free-form property maps
pub type PropertyRegistry = Registry<Properties>;

/// Landscapes keyed by identifier, iterated in lexicographic order
#[derive(Debug, Clone, PartialEq)]
pub struct Registry<T> {
    entries: BTreeMap<String, T>,
}

impl<T> Registry<T> {
    pub fn new(entries: BTreeMap<String, T>) -> Self {
        Self { entries }
    }

    /// Exact, case-sensitive lookup by landscape identifier
    pub fn lookup(&self, landscape_id: &str) -> Result<&T, LandscapeError> {
        self.entries
            .get(landscape_id)
            .ok_or_else(|| LandscapeError::NotFound(landscape_id.to_string()))
    }

    /// Identifiers in sorted order
    #[cfg(test)]
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in identifier order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(id, entry)| (id.as_str(), entry))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
