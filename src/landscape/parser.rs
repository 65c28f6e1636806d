use serde::de::DeserializeOwned;
use std::collections::BTreeMap;

use super::error::LandscapeError;
use super::registry::{LandscapeRegistry, PropertyRegistry, Registry};

/// Decode the document into fixed-shape landscape records
pub fn parse_typed(text: &str) -> Result<LandscapeRegistry, LandscapeError> {
    parse(text)
}

/// Decode the document keeping every property of every landscape
pub fn parse_untyped(text: &str) -> Result<PropertyRegistry, LandscapeError> {
    parse(text)
}

fn parse<T: DeserializeOwned>(text: &str) -> Result<Registry<T>, LandscapeError> {
    let entries: BTreeMap<String, T> =
        serde_json::from_str(text).map_err(|source| LandscapeError::Parse {
            text: text.to_string(),
            source,
        })?;

    let registry = Registry::new(entries);
    tracing::debug!(landscapes = registry.len(), "parsed landscape configuration");
    Ok(registry)
}
