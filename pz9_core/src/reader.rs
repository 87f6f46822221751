use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::{RecordError, Result};
use crate::format::RECORD_SIZE;

/// One undecoded record: exactly [`RECORD_SIZE`] bytes.
///
/// Construction is the only validation step; once a `RawRecord` exists every
/// fixed-offset read inside it is in bounds.
#[derive(Clone, PartialEq, Eq)]
pub struct RawRecord {
    bytes: [u8; RECORD_SIZE],
}

impl RawRecord {
    /// Validate `buf` as a whole record. Any length other than
    /// [`RECORD_SIZE`] is `InvalidLength`.
    pub fn from_bytes(buf: &[u8]) -> Result<Self> {
        let bytes: [u8; RECORD_SIZE] =
            buf.try_into().map_err(|_| RecordError::InvalidLength {
                expected: RECORD_SIZE,
                actual: buf.len(),
            })?;
        Ok(Self { bytes })
    }

    /// Read the entire source and validate it as one record.
    ///
    /// At most `RECORD_SIZE + 1` bytes are pulled, enough to tell an
    /// oversized source apart from an exact one.
    pub fn read_from(src: impl Read) -> Result<Self> {
        let mut buf = Vec::with_capacity(RECORD_SIZE + 1);
        src.take(RECORD_SIZE as u64 + 1).read_to_end(&mut buf)?;
        if buf.len() > RECORD_SIZE {
            return Err(RecordError::InvalidLength {
                expected: RECORD_SIZE,
                actual: buf.len(),
            });
        }
        Self::from_bytes(&buf)
    }

    /// Load a record file. Oversized files report their real length.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let read_err = |source: std::io::Error| RecordError::Read {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(read_err)?;
        let len = file.metadata().map_err(read_err)?.len();
        if len != RECORD_SIZE as u64 {
            return Err(RecordError::InvalidLength {
                expected: RECORD_SIZE,
                actual: len as usize,
            });
        }

        let mut bytes = [0u8; RECORD_SIZE];
        (&file).read_exact(&mut bytes).map_err(read_err)?;
        tracing::debug!(path = %path.display(), "loaded record");
        Ok(Self { bytes })
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; RECORD_SIZE] {
        &self.bytes
    }
}

impl std::fmt::Debug for RawRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RawRecord")
            .field("len", &self.bytes.len())
            .finish_non_exhaustive()
    }
}
