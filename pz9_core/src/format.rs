/// Exact size of one `.pz9` / `.pa9` record in bytes.
/// Anything shorter or longer is rejected, never truncated or padded.
pub const RECORD_SIZE: usize = 344;

/// File extensions recognised as single-record containers.
pub const RECORD_EXTENSIONS: &[&str] = &["pz9", "pa9"];

/// A fixed byte range inside a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRange {
    pub offset: usize,
    pub len: usize,
}

impl FieldRange {
    pub const fn new(offset: usize, len: usize) -> Self {
        Self { offset, len }
    }

    /// One past the last byte of the range.
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    pub fn slice<'a>(&self, buf: &'a [u8; RECORD_SIZE]) -> &'a [u8] {
        &buf[self.offset..self.end()]
    }
}

// ── Field table ────────────────────────────────────────────────────────────
//
//   0x00 ..0x08  encryption constant, sanity, checksum (not decoded)
//   0x08 ..0x0A  species:u16
//   0x0C ..0x10  trainer_id32:u32  (SID7 * 1_000_000 + TID7)
//   0x58 ..0x72  nickname, 13 UTF-16LE code units
//   0xF8 ..0x112 original trainer name, 13 UTF-16LE code units

pub const SPECIES: FieldRange = FieldRange::new(0x08, 2);
pub const TRAINER_ID32: FieldRange = FieldRange::new(0x0C, 4);
pub const NICKNAME: FieldRange = FieldRange::new(0x58, 0x1A);
pub const ORIGINAL_TRAINER_NAME: FieldRange = FieldRange::new(0xF8, 0x1A);

/// All decoded fields, in offset order, for display in hex dumps.
pub const FIELDS: &[(&str, FieldRange)] = &[
    ("species", SPECIES),
    ("trainer_id32", TRAINER_ID32),
    ("nickname", NICKNAME),
    ("ot_name", ORIGINAL_TRAINER_NAME),
];

/// Returns `true` if `ext` (without the dot) names a record container.
pub fn is_record_extension(ext: &str) -> bool {
    RECORD_EXTENSIONS
        .iter()
        .any(|known| known.eq_ignore_ascii_case(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_fit_inside_record() {
        for (name, range) in FIELDS {
            assert!(range.end() <= RECORD_SIZE, "{} overruns the record", name);
        }
    }

    #[test]
    fn extension_match_ignores_case() {
        assert!(is_record_extension("pz9"));
        assert!(is_record_extension("PA9"));
        assert!(!is_record_extension("pk9"));
        assert!(!is_record_extension(""));
    }
}
