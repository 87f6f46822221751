pub mod error;
pub mod format;
pub mod ids;
pub mod reader;
pub mod record;
pub mod species;
pub mod summary;
pub mod text;

pub use error::{RecordError, Result};
pub use format::{RECORD_SIZE, is_record_extension};
pub use ids::TrainerIds;
pub use reader::RawRecord;
pub use record::DecodedRecord;
pub use species::{NoSpeciesNames, SpeciesNames, TableState, fallback_name};
pub use summary::RecordSummary;

/// Load, validate and decode a record file in one step.
pub fn decode_file(path: impl AsRef<std::path::Path>) -> Result<DecodedRecord> {
    let raw = RawRecord::open(path)?;
    Ok(DecodedRecord::decode(&raw))
}
