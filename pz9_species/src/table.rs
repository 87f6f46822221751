use std::collections::HashMap;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::OnceLock;

use pz9_core::species::{fallback_name, SpeciesNames, TableState};

use crate::source::SpeciesSource;

const UNLOADED: u8 = 0;
const LOADING: u8 = 1;
const LOADED: u8 = 2;
const UNAVAILABLE: u8 = 3;

/// Species-name table populated at most once from a [`SpeciesSource`].
///
/// The first `load` call wins the `Unloaded → Loading` transition and runs
/// the fetch; concurrent callers return immediately with `Loading`. Lookups
/// read the settled map through a `OnceLock` and never wait: until the map
/// is published they return the fallback name. A fetch that errors or
/// panics leaves the table `Unavailable`.
pub struct SpeciesTable<S> {
    source: S,
    phase: AtomicU8,
    names: OnceLock<HashMap<u16, String>>,
}

impl<S: SpeciesSource> SpeciesTable<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            phase: AtomicU8::new(UNLOADED),
            names: OnceLock::new(),
        }
    }

    /// Number of names available for lookup (zero until `Loaded`).
    pub fn len(&self) -> usize {
        self.names.get().map_or(0, HashMap::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}

impl<S: SpeciesSource> SpeciesNames for SpeciesTable<S> {
    fn resolve(&self, species_id: u16) -> String {
        self.names
            .get()
            .and_then(|names| names.get(&species_id).cloned())
            .unwrap_or_else(|| fallback_name(species_id))
    }

    fn load(&self) -> TableState {
        if self
            .phase
            .compare_exchange(UNLOADED, LOADING, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return self.state();
        }

        tracing::debug!(source = self.source.name(), "loading species table");
        let fetched = catch_unwind(AssertUnwindSafe(|| self.source.fetch()));
        match fetched {
            Ok(Ok(names)) => {
                tracing::info!(
                    source = self.source.name(),
                    count = names.len(),
                    "species table loaded"
                );
                // Only the transition winner reaches here, so the cell is empty.
                let _ = self.names.set(names);
                self.phase.store(LOADED, Ordering::Release);
            }
            Ok(Err(e)) => {
                tracing::warn!(
                    source = self.source.name(),
                    "failed to load species names, falling back to numeric ids: {}",
                    e
                );
                self.phase.store(UNAVAILABLE, Ordering::Release);
            }
            Err(_) => {
                tracing::warn!(
                    source = self.source.name(),
                    "species source panicked, falling back to numeric ids"
                );
                self.phase.store(UNAVAILABLE, Ordering::Release);
            }
        }
        self.state()
    }

    fn state(&self) -> TableState {
        match self.phase.load(Ordering::Acquire) {
            UNLOADED => TableState::Unloaded,
            LOADING => TableState::Loading,
            LOADED => TableState::Loaded,
            _ => TableState::Unavailable,
        }
    }
}
