use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::ProcessError;
use crate::formatters;
use crate::types::StatsResult;

/// Writes the formatted report to `path`, replacing any existing file.
///
/// # Errors
/// Returns [`ProcessError::Write`] if the file cannot be created or written.
pub fn write_results(path: &Path, stats: &StatsResult) -> Result<(), ProcessError> {
    let report = formatters::report::format(stats);
    fs::write(path, report).map_err(|source| ProcessError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "report written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample() -> StatsResult {
        StatsResult {
            total_sum: 10.0,
            average: 2.5,
            percentage: 40.0,
        }
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("results.txt");
        fs::write(&path, "stale contents that are longer than the report ".repeat(10)).unwrap();
        write_results(&path, &sample()).unwrap();
        let s = fs::read_to_string(&path).unwrap();
        assert!(s.starts_with("Data Processing Results\n"));
        assert!(s.ends_with("Percentage (first value): 40.00%\n"));
        assert!(!s.contains("stale"));
    }

    #[test]
    fn unwritable_destination_is_write_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing-dir").join("results.txt");
        match write_results(&path, &sample()).unwrap_err() {
            ProcessError::Write { path: p, .. } => assert_eq!(p, path),
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
