use std::collections::HashMap;

use crate::error::SpeciesTableError;

/// Backing data for a [`SpeciesTable`](crate::SpeciesTable).
///
/// `fetch` is called at most once per table, so it may block (network,
/// disk), but it must bound its own running time.
pub trait SpeciesSource: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    fn fetch(&self) -> Result<HashMap<u16, String>, SpeciesTableError>;
}

impl<S: SpeciesSource + ?Sized> SpeciesSource for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn fetch(&self) -> Result<HashMap<u16, String>, SpeciesTableError> {
        (**self).fetch()
    }
}
