//! Full-file rewrite of a record collection.

use std::{
    fmt, fs, io,
    path::{Path, PathBuf},
};

/// Failure to rewrite a backing file.
#[derive(Debug, thiserror::Error)]
#[error("failed to write {}: {source}", .path.display())]
pub struct WriteError {
    path: PathBuf,
    source: io::Error,
}

impl WriteError {
    /// The file that could not be written.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Rewrites `path` with one line per record.
///
/// Any prior contents are discarded; this is an unconditional overwrite, not
/// an append. Records are rendered with their [`Display`](fmt::Display)
/// implementation and joined with newlines. The resulting file is an export,
/// not a database: nothing in this crate reads it back.
///
/// # Errors
///
/// Returns an error if the file cannot be written. There is no recovery
/// path; a crash mid-write can leave a truncated file.
pub fn write_records<R: fmt::Display>(path: &Path, records: &[R]) -> Result<(), WriteError> {
    let contents = records
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n");

    fs::write(path, contents).map_err(|source| WriteError {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!("wrote {} records to {}", records.len(), path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use tempfile::TempDir;

    use super::write_records;

    #[test]
    fn joins_records_with_newlines() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("records.txt");

        write_records(&path, &["first", "second"]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "first\nsecond");
    }

    #[test]
    fn overwrites_previous_contents() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("records.txt");

        write_records(&path, &["first", "second"]).unwrap();
        write_records(&path, &["only"]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "only");
    }

    #[test]
    fn empty_collection_truncates_the_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("records.txt");

        write_records(&path, &["stale"]).unwrap();
        write_records::<&str>(&path, &[]).unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    }

    #[test]
    fn unwritable_path_reports_the_path() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("missing-dir").join("records.txt");

        let err = write_records(&path, &["record"]).unwrap_err();
        assert_eq!(err.path(), path);
    }
}
