//! Batch decoding: many record files, one shared species table.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use rayon::prelude::*;

use pz9_core::{decode_file, DecodedRecord, RecordError, RecordSummary, SpeciesNames, TableState};

use crate::output::{display_name, export_error, export_summary, write_summary, SEPARATOR};

/// Counts reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub decoded: usize,
    pub failed: usize,
    pub exported: usize,
    pub export_failures: usize,
    /// Records whose console block or error line could not be written.
    pub console_failures: usize,
    pub species: Option<TableState>,
}

/// How a batch run treats the species table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameLoading {
    /// Run `load` alongside decoding.
    Load,
    /// Use the table as-is.
    Skip,
}

/// Decode every file in parallel. Results keep input order.
pub fn decode_all(paths: &[PathBuf]) -> Vec<Result<DecodedRecord, RecordError>> {
    paths.par_iter().map(|path| decode_file(path)).collect()
}

/// Decode `paths`, print one block per record to `out`, and optionally
/// export JSON into `out_dir`.
///
/// The species table loads concurrently with decoding; summaries are
/// assembled after both finish. A failure in one record (bad length, export
/// write, console write) is reported and counted, never aborting the rest.
pub fn run_batch(
    paths: &[PathBuf],
    names: &dyn SpeciesNames,
    loading: NameLoading,
    out_dir: Option<&Path>,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> BatchReport {
    let (species_state, results) = rayon::join(
        || match loading {
            NameLoading::Load => names.load(),
            NameLoading::Skip => names.state(),
        },
        || decode_all(paths),
    );
    tracing::debug!(state = %species_state, "species table settled");

    let mut report = BatchReport {
        species: Some(species_state),
        ..BatchReport::default()
    };
    let last = paths.len().saturating_sub(1);

    for (i, (path, result)) in paths.iter().zip(results).enumerate() {
        match result {
            Ok(record) => {
                report.decoded += 1;
                let summary = RecordSummary::assemble(&record, names);
                if let Err(e) = print_block(out, &summary, i < last) {
                    report.console_failures += 1;
                    tracing::warn!("printing {} failed: {}", display_name(path), e);
                }
                if let Some(dir) = out_dir {
                    match export_summary(dir, path, &summary) {
                        Ok(written) => {
                            report.exported += 1;
                            tracing::debug!(path = ?written, "exported record");
                        }
                        Err(e) => {
                            report.export_failures += 1;
                            tracing::warn!("export failed for {}: {:#}", display_name(path), e);
                        }
                    }
                }
            }
            Err(e) => {
                report.failed += 1;
                if let Err(write_err) =
                    writeln!(err, "[!] Error decoding {}: {}", display_name(path), e)
                {
                    report.console_failures += 1;
                    tracing::warn!("reporting {} failed: {}", display_name(path), write_err);
                }
                if let Some(dir) = out_dir {
                    if let Err(export_err) = export_error(dir, path, &e.to_string()) {
                        report.export_failures += 1;
                        tracing::warn!(
                            "error report failed for {}: {:#}",
                            display_name(path),
                            export_err
                        );
                    }
                }
            }
        }
    }

    tracing::info!(
        decoded = report.decoded,
        failed = report.failed,
        exported = report.exported,
        export_failures = report.export_failures,
        console_failures = report.console_failures,
        "batch finished"
    );
    report
}

fn print_block(out: &mut dyn Write, summary: &RecordSummary, separator: bool) -> io::Result<()> {
    write_summary(out, summary)?;
    if separator {
        writeln!(out, "{}", SEPARATOR)?;
    }
    Ok(())
}
