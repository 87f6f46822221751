mod error;
mod json_map;
pub mod pokeapi;
mod source;
mod table;

pub use error::SpeciesTableError;
pub use json_map::JsonMapSource;
pub use pokeapi::PokeApiSource;
pub use source::SpeciesSource;
pub use table::SpeciesTable;

use std::path::PathBuf;
use std::time::Duration;

/// Where species names come from for a run.
#[derive(Debug, Clone)]
pub enum SourceConfig {
    /// Local JSON map; no network.
    File(PathBuf),
    /// PokeAPI (or a compatible mirror) with a bounded fetch.
    Http { url: String, timeout: Duration },
}

/// Build an unloaded table for `config`.
///
/// Called once per run by the CLI; the caller decides when `load` runs.
pub fn table_for(config: SourceConfig) -> SpeciesTable<Box<dyn SpeciesSource>> {
    let source: Box<dyn SpeciesSource> = match config {
        SourceConfig::File(path) => Box::new(JsonMapSource::new(path)),
        SourceConfig::Http { url, timeout } => Box::new(PokeApiSource::new(url, timeout)),
    };
    SpeciesTable::new(source)
}
