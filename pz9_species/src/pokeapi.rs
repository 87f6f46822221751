//! Species names from PokeAPI.
//!
//! One request fetches the whole species list; ids come from the trailing
//! segment of each entry's url.

use std::collections::HashMap;
use std::time::Duration;

use serde::Deserialize;

use crate::error::SpeciesTableError;
use crate::source::SpeciesSource;

/// Full species list endpoint.
pub const DEFAULT_SPECIES_URL: &str = "https://pokeapi.co/api/v2/pokemon-species/?limit=10000";

/// Upper bound on the whole fetch, connect through body.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Response from the species list endpoint
#[derive(Debug, Deserialize)]
pub struct SpeciesList {
    pub results: Vec<SpeciesEntry>,
}

#[derive(Debug, Deserialize)]
pub struct SpeciesEntry {
    pub name: String,
    pub url: String,
}

/// Fetches the species list over HTTP.
#[derive(Debug, Clone)]
pub struct PokeApiSource {
    pub url: String,
    pub timeout: Duration,
}

impl Default for PokeApiSource {
    fn default() -> Self {
        Self {
            url: DEFAULT_SPECIES_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl PokeApiSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            timeout,
        }
    }

    async fn fetch_async(&self) -> Result<SpeciesList, SpeciesTableError> {
        let client = reqwest::Client::builder()
            .timeout(self.timeout)
            .build()
            .map_err(SpeciesTableError::Client)?;

        let response = match tokio::time::timeout(self.timeout, client.get(&self.url).send()).await
        {
            Ok(Ok(resp)) => resp,
            Ok(Err(e)) => return Err(SpeciesTableError::Request(e)),
            Err(_) => return Err(SpeciesTableError::Timeout(self.timeout)),
        };

        if !response.status().is_success() {
            return Err(SpeciesTableError::Status(response.status()));
        }

        match tokio::time::timeout(self.timeout, response.json::<SpeciesList>()).await {
            Ok(Ok(list)) => Ok(list),
            Ok(Err(e)) => Err(SpeciesTableError::Request(e)),
            Err(_) => Err(SpeciesTableError::Timeout(self.timeout)),
        }
    }
}

impl SpeciesSource for PokeApiSource {
    fn name(&self) -> &'static str {
        "pokeapi"
    }

    fn fetch(&self) -> Result<HashMap<u16, String>, SpeciesTableError> {
        // Single request, so a current-thread runtime is enough.
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(SpeciesTableError::Runtime)?;

        tracing::debug!(url = %self.url, timeout = ?self.timeout, "fetching species list");
        let list = rt.block_on(self.fetch_async())?;
        let names = species_map_from_list(&list);
        if names.is_empty() {
            return Err(SpeciesTableError::Empty);
        }
        Ok(names)
    }
}

/// Build the id → display name map, skipping entries whose url does not
/// end in `/pokemon-species/<id>/`.
pub fn species_map_from_list(list: &SpeciesList) -> HashMap<u16, String> {
    list.results
        .iter()
        .filter_map(|entry| match species_id_from_url(&entry.url) {
            Some(id) => Some((id, capitalize(&entry.name))),
            None => {
                tracing::debug!(url = %entry.url, "skipping species entry without id");
                None
            }
        })
        .collect()
}

fn species_id_from_url(url: &str) -> Option<u16> {
    let mut segments = url.trim_end_matches('/').rsplit('/');
    let id = segments.next()?;
    if segments.next()? != "pokemon-species" {
        return None;
    }
    if id.is_empty() || !id.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    id.parse().ok()
}

/// Upper-case the first character and lower-case the rest.
fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_species_list() {
        let json = r#"{
            "count": 3,
            "results": [
                {"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon-species/1/"},
                {"name": "pikachu", "url": "https://pokeapi.co/api/v2/pokemon-species/25/"},
                {"name": "mr-mime", "url": "https://pokeapi.co/api/v2/pokemon-species/122"}
            ]
        }"#;
        let list: SpeciesList = serde_json::from_str(json).unwrap();
        let names = species_map_from_list(&list);

        assert_eq!(names.len(), 3);
        assert_eq!(names[&1], "Bulbasaur");
        assert_eq!(names[&25], "Pikachu");
        assert_eq!(names[&122], "Mr-mime");
    }

    #[test]
    fn skips_unrecognised_urls() {
        assert_eq!(species_id_from_url("https://pokeapi.co/api/v2/pokemon/25/"), None);
        assert_eq!(species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/abc/"), None);
        assert_eq!(species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/-1/"), None);
        assert_eq!(species_id_from_url("https://pokeapi.co/api/v2/pokemon-species/99999/"), None);
        assert_eq!(species_id_from_url("pokemon-species/906"), Some(906));
    }

    #[test]
    fn capitalizes_names() {
        assert_eq!(capitalize("sprigatito"), "Sprigatito");
        assert_eq!(capitalize("HO-OH"), "Ho-oh");
        assert_eq!(capitalize(""), "");
    }
}
