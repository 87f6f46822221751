use serde::{Deserialize, Serialize};

use crate::record::DecodedRecord;
use crate::species::SpeciesNames;

/// Output schema shared by console rendering and JSON export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    pub species: String,
    pub species_id: u16,
    pub nick: String,
    pub ot: String,
    pub tid: String,
    pub sid: String,
    pub trainer_id32: u32,
}

impl RecordSummary {
    /// Combine a decoded record with its resolved species name.
    pub fn assemble(record: &DecodedRecord, names: &dyn SpeciesNames) -> Self {
        Self {
            species: names.resolve(record.species_id),
            species_id: record.species_id,
            nick: record.nickname.clone(),
            ot: record.original_trainer_name.clone(),
            tid: record.tid.clone(),
            sid: record.sid.clone(),
            trainer_id32: record.trainer_id32,
        }
    }
}
