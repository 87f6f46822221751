use std::fmt;

/// Lifecycle of a species-name table.
///
/// `Unloaded → Loading → Loaded` on success, `Unloaded → Loading →
/// Unavailable` on failure. `Loaded` and `Unavailable` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableState {
    Unloaded,
    Loading,
    Loaded,
    Unavailable,
}

impl fmt::Display for TableState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableState::Unloaded => "unloaded",
            TableState::Loading => "loading",
            TableState::Loaded => "loaded",
            TableState::Unavailable => "unavailable",
        };
        f.write_str(s)
    }
}

/// Name shown for a species id no table could resolve.
pub fn fallback_name(species_id: u16) -> String {
    species_id.to_string()
}

/// Capability mapping species ids to display names.
///
/// Implementations:
/// - Must never fail a lookup: anything unresolved returns
///   [`fallback_name`].
/// - Must keep `resolve` cheap and lock-free once loading has finished;
///   records are assembled concurrently against one shared table.
/// - Fetch their backing data at most once, in `load`, never per lookup.
pub trait SpeciesNames: Send + Sync {
    /// Display name for `species_id`.
    fn resolve(&self, species_id: u16) -> String;

    /// Populate the table. Idempotent: later calls return the settled state.
    fn load(&self) -> TableState {
        self.state()
    }

    fn state(&self) -> TableState;
}

/// A table that is never populated; every lookup falls back.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoSpeciesNames;

impl SpeciesNames for NoSpeciesNames {
    fn resolve(&self, species_id: u16) -> String {
        fallback_name(species_id)
    }

    fn state(&self) -> TableState {
        TableState::Unavailable
    }
}
