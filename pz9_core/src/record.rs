//! Field extraction from a validated [`RawRecord`].

use crate::format::{self, FieldRange};
use crate::ids::TrainerIds;
use crate::reader::RawRecord;
use crate::text::decode_utf16le;

/// Fields decoded from one record. Pure function of the record bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedRecord {
    pub species_id: u16,
    pub trainer_id32: u32,
    pub nickname: String,
    pub original_trainer_name: String,
    /// Six-digit TID7.
    pub tid: String,
    /// SID7, at least four digits.
    pub sid: String,
}

impl DecodedRecord {
    pub fn decode(raw: &RawRecord) -> Self {
        let bytes = raw.as_bytes();
        let species_id = read_u16(bytes, format::SPECIES);
        let trainer_id32 = read_u32(bytes, format::TRAINER_ID32);
        let ids = TrainerIds::from(trainer_id32);

        Self {
            species_id,
            trainer_id32,
            nickname: decode_utf16le(format::NICKNAME.slice(bytes)),
            original_trainer_name: decode_utf16le(format::ORIGINAL_TRAINER_NAME.slice(bytes)),
            tid: ids.tid_string(),
            sid: ids.sid_string(),
        }
    }
}

fn read_u16(bytes: &[u8; format::RECORD_SIZE], range: FieldRange) -> u16 {
    let mut le = [0u8; 2];
    le.copy_from_slice(range.slice(bytes));
    u16::from_le_bytes(le)
}

fn read_u32(bytes: &[u8; format::RECORD_SIZE], range: FieldRange) -> u32 {
    let mut le = [0u8; 4];
    le.copy_from_slice(range.slice(bytes));
    u32::from_le_bytes(le)
}
