use std::collections::HashMap;
use std::path::PathBuf;

use crate::error::SpeciesTableError;
use crate::source::SpeciesSource;

/// Species names from a local JSON object, e.g. `{"25": "Pikachu"}`.
///
/// For offline runs, or to pin names for a game newer than PokeAPI.
#[derive(Debug, Clone)]
pub struct JsonMapSource {
    pub path: PathBuf,
}

impl JsonMapSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl SpeciesSource for JsonMapSource {
    fn name(&self) -> &'static str {
        "json-map"
    }

    fn fetch(&self) -> Result<HashMap<u16, String>, SpeciesTableError> {
        let text = std::fs::read_to_string(&self.path).map_err(|source| SpeciesTableError::Io {
            path: self.path.clone(),
            source,
        })?;
        let names: HashMap<u16, String> = serde_json::from_str(&text)?;
        if names.is_empty() {
            return Err(SpeciesTableError::Empty);
        }
        Ok(names)
    }
}
