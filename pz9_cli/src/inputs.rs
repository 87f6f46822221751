use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;

use pz9_core::is_record_extension;

fn has_record_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(is_record_extension)
}

/// Expand the command-line inputs into record files.
///
/// Directories are scanned one level deep and their matches sorted by name;
/// named files are kept in argument order. A file reached through more than
/// one input is kept only at its first occurrence. An input that cannot be
/// read at all is fatal for the run.
pub fn gather_inputs(inputs: &[PathBuf]) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for input in inputs {
        let meta = std::fs::metadata(input)
            .with_context(|| format!("reading input {:?}", input))?;

        if meta.is_dir() {
            let mut found = Vec::new();
            for entry in std::fs::read_dir(input)
                .with_context(|| format!("scanning directory {:?}", input))?
            {
                let path = entry
                    .with_context(|| format!("scanning directory {:?}", input))?
                    .path();
                if path.is_file() && has_record_extension(&path) {
                    found.push(path);
                }
            }
            found.sort();
            tracing::debug!(dir = ?input, count = found.len(), "scanned directory");
            files.extend(found);
        } else if has_record_extension(input) {
            files.push(input.clone());
        } else {
            tracing::warn!(file = ?input, "skipping file without a .pz9/.pa9 extension");
        }
    }

    let mut seen = HashSet::new();
    files.retain(|path| {
        let key = std::fs::canonicalize(path).unwrap_or_else(|_| path.clone());
        seen.insert(key)
    });
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("pz9_inputs_{}_{}", std::process::id(), name));
        std::fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn scans_directory_sorted_and_filtered() {
        let dir = temp_dir("scan");
        for name in ["b.pz9", "a.PA9", "c.txt", "d.pk9"] {
            std::fs::write(dir.join(name), b"x").unwrap();
        }
        std::fs::create_dir_all(dir.join("nested.pz9")).unwrap();

        let files = gather_inputs(&[dir.clone()]).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.PA9", "b.pz9"]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn named_files_keep_argument_order() {
        let dir = temp_dir("named");
        let z = dir.join("z.pz9");
        let a = dir.join("a.pz9");
        let other = dir.join("notes.md");
        for p in [&z, &a, &other] {
            std::fs::write(p, b"x").unwrap();
        }

        let files = gather_inputs(&[z.clone(), other, a.clone()]).unwrap();
        assert_eq!(files, vec![z, a]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn overlapping_inputs_keep_first_occurrence() {
        let dir = temp_dir("overlap");
        let a = dir.join("a.pz9");
        let b = dir.join("b.pz9");
        std::fs::write(&a, b"x").unwrap();
        std::fs::write(&b, b"x").unwrap();
        let a_again = dir.join(".").join("a.pz9");

        let files = gather_inputs(&[b.clone(), dir.clone(), a_again, dir.clone()]).unwrap();
        assert_eq!(files, vec![b, a]);

        std::fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn missing_input_is_fatal() {
        let missing = std::env::temp_dir().join("pz9_inputs_definitely_missing_dir");
        assert!(gather_inputs(&[missing]).is_err());
    }
}
