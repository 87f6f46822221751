use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Serialize;

use pz9_core::RecordSummary;

/// Line printed between consecutive record blocks.
pub const SEPARATOR: &str = "------------------";

/// Write one console block: five labelled lines, values aligned.
pub fn write_summary(out: &mut dyn Write, summary: &RecordSummary) -> std::io::Result<()> {
    writeln!(out, "Species: {}", summary.species)?;
    writeln!(out, "Nick:    {}", summary.nick)?;
    writeln!(out, "OT:      {}", summary.ot)?;
    writeln!(out, "TID:     {}", summary.tid)?;
    writeln!(out, "SID:     {}", summary.sid)
}

#[derive(Serialize)]
struct DecodedUnit<'a> {
    file: &'a str,
    #[serde(flatten)]
    summary: &'a RecordSummary,
}

#[derive(Serialize)]
struct ErrorUnit<'a> {
    file: &'a str,
    error: &'a str,
}

/// File name shown in console errors and export units.
pub fn display_name(input: &Path) -> String {
    input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| input.display().to_string())
}

fn export_path(out_dir: &Path, input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "record".to_string());
    out_dir.join(format!("{}_{}.json", stem, suffix))
}

fn write_json(path: &Path, value: &impl Serialize) -> anyhow::Result<()> {
    let mut text = serde_json::to_string_pretty(value)?;
    text.push('\n');
    std::fs::write(path, text).with_context(|| format!("writing {:?}", path))
}

/// Write `<stem>_decoded.json` for a decoded record. Returns the path written.
pub fn export_summary(
    out_dir: &Path,
    input: &Path,
    summary: &RecordSummary,
) -> anyhow::Result<PathBuf> {
    let path = export_path(out_dir, input, "decoded");
    let file = display_name(input);
    write_json(&path, &DecodedUnit { file: &file, summary })?;
    Ok(path)
}

/// Write `<stem>_error.json` for a record that failed to decode.
pub fn export_error(out_dir: &Path, input: &Path, error: &str) -> anyhow::Result<PathBuf> {
    let path = export_path(out_dir, input, "error");
    let file = display_name(input);
    write_json(&path, &ErrorUnit { file: &file, error })?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RecordSummary {
        RecordSummary {
            species: "Pikachu".into(),
            species_id: 25,
            nick: "Sparky".into(),
            ot: "Ash".into(),
            tid: "021203".into(),
            sid: "1341".into(),
            trainer_id32: 1_341_021_203,
        }
    }

    #[test]
    fn console_block_layout() {
        let mut buf = Vec::new();
        write_summary(&mut buf, &sample()).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "Species: Pikachu\nNick:    Sparky\nOT:      Ash\nTID:     021203\nSID:     1341\n"
        );
        assert_eq!(SEPARATOR.len(), 18);
    }

    #[test]
    fn exports_named_after_input_stem() {
        let dir = std::env::temp_dir().join(format!("pz9_output_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let path = export_summary(&dir, Path::new("box/slot1.pz9"), &sample()).unwrap();
        assert_eq!(path, dir.join("slot1_decoded.json"));

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["file"], "slot1.pz9");
        assert_eq!(json["species"], "Pikachu");
        assert_eq!(json["tid"], "021203");
        assert_eq!(json["sid"], "1341");

        let err_path = export_error(&dir, Path::new("slot2.pa9"), "expected 344 bytes, got 300").unwrap();
        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&err_path).unwrap()).unwrap();
        assert_eq!(json["file"], "slot2.pa9");
        assert_eq!(json["error"], "expected 344 bytes, got 300");

        std::fs::remove_dir_all(&dir).ok();
    }
}
