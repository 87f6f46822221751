use std::io::Write;
use std::path::Path;

use anyhow::Context;

use pz9_core::format::{FieldRange, FIELDS};
use pz9_core::text::scan_utf16le;
use pz9_core::{DecodedRecord, RawRecord};

const ROW: usize = 16;

fn field_at(offset: usize) -> Option<&'static str> {
    FIELDS
        .iter()
        .find(|(_, range)| range.offset <= offset && offset < range.end())
        .map(|(name, _)| *name)
}

fn write_field(out: &mut dyn Write, name: &str, range: FieldRange, value: &str) -> std::io::Result<()> {
    writeln!(
        out,
        "  {:<14} 0x{:03x}..0x{:03x}  {}",
        name,
        range.offset,
        range.end(),
        value
    )
}

/// Print the decoded fields, a hex dump annotated with the fields each row
/// touches, and optionally every UTF-16LE string found in the record.
pub fn run_inspect(file: &Path, strings: bool, out: &mut dyn Write) -> anyhow::Result<()> {
    let raw = RawRecord::open(file).with_context(|| format!("inspecting {:?}", file))?;
    let record = DecodedRecord::decode(&raw);
    let bytes = raw.as_bytes();

    writeln!(out, "=== Record: {:?} ({} bytes) ===", file, bytes.len())?;
    writeln!(out)?;
    for (name, range) in FIELDS {
        let value = match *name {
            "species" => record.species_id.to_string(),
            "trainer_id32" => format!(
                "{} (TID {} / SID {})",
                record.trainer_id32, record.tid, record.sid
            ),
            "nickname" => format!("{:?}", record.nickname),
            _ => format!("{:?}", record.original_trainer_name),
        };
        write_field(out, name, *range, &value)?;
    }
    writeln!(out)?;

    for (i, chunk) in bytes.chunks(ROW).enumerate() {
        let base = i * ROW;
        write!(out, "  {:04x}  ", base)?;
        for b in chunk {
            write!(out, "{:02x} ", b)?;
        }
        for _ in chunk.len()..ROW {
            write!(out, "   ")?;
        }
        write!(out, " |")?;
        for b in chunk {
            if b.is_ascii_graphic() || *b == b' ' {
                write!(out, "{}", *b as char)?;
            } else {
                write!(out, ".")?;
            }
        }
        write!(out, "|")?;

        let mut touched: Vec<&str> = (base..base + chunk.len()).filter_map(field_at).collect();
        touched.dedup();
        if !touched.is_empty() {
            write!(out, "  {}", touched.join(", "))?;
        }
        writeln!(out)?;
    }

    if strings {
        writeln!(out)?;
        writeln!(out, "  UTF-16LE strings:")?;
        let found = scan_utf16le(bytes, 2);
        if found.is_empty() {
            writeln!(out, "    (none)")?;
        }
        for s in found {
            let field = field_at(s.offset).unwrap_or("-");
            writeln!(out, "    0x{:03x}  {:<14} {:?}", s.offset, field, s.text)?;
        }
    }

    Ok(())
}
