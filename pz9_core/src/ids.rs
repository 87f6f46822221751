//! TID7 / SID7 derivation.
//!
//! Gen 7+ games show trainer ids as the low six decimal digits of the packed
//! 32-bit id (TID7) and the remaining quotient (SID7).

use std::fmt;

/// Divisor splitting the packed id into its two displayed halves.
pub const TID7_MODULUS: u64 = 1_000_000;

/// Displayed trainer identifiers derived from one packed id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TrainerIds {
    /// Always in `0..1_000_000`.
    pub tid7: u32,
    pub sid7: u64,
}

impl TrainerIds {
    /// Split a packed id. Takes `u64` so ids beyond the 32-bit field still
    /// derive without overflow; records feed it a zero-extended `u32`.
    pub fn from_packed(packed: u64) -> Self {
        Self {
            tid7: (packed % TID7_MODULUS) as u32,
            sid7: packed / TID7_MODULUS,
        }
    }

    /// Exactly six digits, zero-padded.
    pub fn tid_string(&self) -> String {
        format!("{:06}", self.tid7)
    }

    /// At least four digits, zero-padded, never truncated.
    pub fn sid_string(&self) -> String {
        format!("{:04}", self.sid7)
    }

    /// Reassemble the packed value.
    pub fn packed(&self) -> u64 {
        self.sid7 * TID7_MODULUS + self.tid7 as u64
    }
}

impl From<u32> for TrainerIds {
    fn from(trainer_id32: u32) -> Self {
        Self::from_packed(u64::from(trainer_id32))
    }
}

impl fmt::Display for TrainerIds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.sid_string(), self.tid_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_reference_id() {
        let ids = TrainerIds::from(1_341_021_203u32);
        assert_eq!(ids.tid_string(), "021203");
        assert_eq!(ids.sid_string(), "1341");
    }

    #[test]
    fn splits_id_wider_than_32_bits() {
        let ids = TrainerIds::from_packed(7_890_123_456);
        assert_eq!(ids.tid_string(), "123456");
        assert_eq!(ids.sid_string(), "7890");
    }

    #[test]
    fn pads_small_values() {
        let ids = TrainerIds::from(42u32);
        assert_eq!(ids.tid_string(), "000042");
        assert_eq!(ids.sid_string(), "0000");
        assert_eq!(ids.to_string(), "0000-000042");
    }

    #[test]
    fn u32_extremes() {
        let max = TrainerIds::from(u32::MAX);
        assert_eq!(max.tid_string(), "967295");
        assert_eq!(max.sid_string(), "4294");

        let big = TrainerIds::from_packed(12_345_000_001);
        assert_eq!(big.sid_string(), "12345");
        assert_eq!(big.tid_string(), "000001");
    }

    #[test]
    fn derivation_invariant_holds_across_range() {
        let mut packed = 0u64;
        while packed <= u32::MAX as u64 {
            let ids = TrainerIds::from_packed(packed);
            assert!(ids.tid7 < 1_000_000);
            assert_eq!(ids.packed(), packed);
            assert_eq!(ids.tid_string().len(), 6);
            assert_eq!(ids.tid_string().parse::<u64>().unwrap(), packed % 1_000_000);
            assert_eq!(ids.sid_string().parse::<u64>().unwrap(), packed / 1_000_000);
            packed += 999_983;
        }
    }
}
