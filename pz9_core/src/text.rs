//! UTF-16LE name fields.
//!
//! Names are stored as little-endian 16-bit code units, terminated by the
//! first zero unit or by the end of their fixed range. Decoding is lossy:
//! unpaired surrogates become U+FFFD, nothing here can fail.

use std::char::REPLACEMENT_CHARACTER;

/// Decode a zero-terminated UTF-16LE field.
///
/// A trailing odd byte cannot form a code unit and is ignored.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    let units = bytes
        .chunks_exact(2)
        .map(|pair| u16::from_le_bytes([pair[0], pair[1]]))
        .take_while(|&unit| unit != 0);

    let mut out = String::with_capacity(bytes.len() / 2);
    let mut replaced = 0usize;
    for decoded in char::decode_utf16(units) {
        match decoded {
            Ok(c) => out.push(c),
            Err(_) => {
                replaced += 1;
                out.push(REPLACEMENT_CHARACTER);
            }
        }
    }
    if replaced > 0 {
        tracing::debug!(replaced, "substituted unpaired UTF-16 surrogates");
    }
    out
}

/// A printable UTF-16LE run found by [`scan_utf16le`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoundString {
    /// Byte offset of the first code unit.
    pub offset: usize,
    pub text: String,
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || " _-.'!?:;&()/".contains(c)
}

/// Find runs of at least `min_chars` name-like characters at either byte
/// alignment, sorted by offset.
///
/// Diagnostic only: used by `inspect --strings` to locate name fields in
/// unfamiliar dumps. Decoding always goes through the fixed ranges.
pub fn scan_utf16le(data: &[u8], min_chars: usize) -> Vec<FoundString> {
    let mut found = Vec::new();

    for align in 0..2 {
        let mut run = String::new();
        let mut run_start = align;
        let mut pos = align;

        while pos + 2 <= data.len() {
            let unit = u16::from_le_bytes([data[pos], data[pos + 1]]);
            match char::from_u32(unit as u32).filter(|&c| is_name_char(c)) {
                Some(c) => {
                    if run.is_empty() {
                        run_start = pos;
                    }
                    run.push(c);
                }
                None => {
                    if run.chars().count() >= min_chars {
                        found.push(FoundString {
                            offset: run_start,
                            text: std::mem::take(&mut run),
                        });
                    }
                    run.clear();
                }
            }
            pos += 2;
        }
        if run.chars().count() >= min_chars {
            found.push(FoundString {
                offset: run_start,
                text: run,
            });
        }
    }

    found.sort_by_key(|s| s.offset);
    found.dedup();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utf16(s: &str) -> Vec<u8> {
        s.encode_utf16().flat_map(u16::to_le_bytes).collect()
    }

    #[test]
    fn stops_at_first_zero_unit() {
        let mut bytes = utf16("Pika");
        bytes.extend_from_slice(&[0, 0]);
        bytes.extend(utf16("junk"));
        assert_eq!(decode_utf16le(&bytes), "Pika");
    }

    #[test]
    fn runs_to_end_without_terminator() {
        assert_eq!(decode_utf16le(&utf16("ABCDEFGHIJKLM")), "ABCDEFGHIJKLM");
    }

    #[test]
    fn all_zero_is_empty() {
        assert_eq!(decode_utf16le(&[0u8; 26]), "");
    }

    #[test]
    fn zero_low_byte_alone_is_not_a_terminator() {
        // U+0100 is encoded 00 01
        assert_eq!(decode_utf16le(&[0x00, 0x01, 0x41, 0x00]), "\u{100}A");
    }

    #[test]
    fn unpaired_surrogates_are_replaced() {
        // lone high surrogate, then 'A', then lone low surrogate
        let bytes = [0x3D, 0xD8, 0x41, 0x00, 0x00, 0xDC];
        assert_eq!(decode_utf16le(&bytes), "\u{FFFD}A\u{FFFD}");
    }

    #[test]
    fn surrogate_pairs_decode() {
        assert_eq!(decode_utf16le(&utf16("a\u{1F600}")), "a\u{1F600}");
    }

    #[test]
    fn odd_trailing_byte_ignored() {
        let mut bytes = utf16("Hi");
        bytes.push(0x42);
        assert_eq!(decode_utf16le(&bytes), "Hi");
    }

    #[test]
    fn arbitrary_bytes_never_panic() {
        let mut rng = 0x1234_5678u64;
        let bytes: Vec<u8> = (0..4096)
            .map(|_| {
                rng = rng
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                (rng >> 56) as u8
            })
            .collect();
        for window in bytes.chunks(26) {
            let s = decode_utf16le(window);
            assert!(s.encode_utf16().count() <= 13);
        }
    }

    #[test]
    fn scan_finds_both_alignments() {
        let mut data = vec![0u8; 8];
        data.extend(utf16("Ash"));
        data.extend_from_slice(&[0, 0, 0]);
        data.extend(utf16("Misty"));
        data.extend_from_slice(&[0, 0]);

        let found = scan_utf16le(&data, 2);
        assert_eq!(
            found,
            vec![
                FoundString { offset: 8, text: "Ash".into() },
                FoundString { offset: 17, text: "Misty".into() },
            ]
        );
    }

    #[test]
    fn scan_respects_minimum_length() {
        let mut data = utf16("A");
        data.extend_from_slice(&[0, 0]);
        assert!(scan_utf16le(&data, 2).is_empty());
    }
}
