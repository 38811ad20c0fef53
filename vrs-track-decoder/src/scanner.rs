//! Parallel snapshot scanner
//!
//! Determines which files in a directory mention the queried transponder
//! code. Each file is one independent unit of work with no shared state, so
//! the whole pass is a single parallel map over the directory listing.
//!
//! A file that cannot be read or parsed fails alone: its error lands in the
//! report and every other file is still checked. No match is not an error.

use crate::snapshot::load_snapshot;
use crate::types::{DecoderError, Result};
use rayon::prelude::*;
use std::path::Path;

/// Outcome of scanning one directory
#[derive(Debug)]
pub struct ScanReport {
    /// Names of files that mention the queried identifier, in sorted
    /// directory order
    pub matches: Vec<String>,
    /// Files that could not be scanned, with the error for each
    pub failures: Vec<ScanFailure>,
    /// Total number of directory entries checked
    pub scanned: usize,
}

/// One file that could not be scanned
#[derive(Debug)]
pub struct ScanFailure {
    /// File name relative to the scanned directory
    pub file: String,
    /// Why the scan of this file failed
    pub error: DecoderError,
}

/// Check whether one snapshot file mentions the queried identifier
///
/// Matching is exact, case-sensitive string equality on the `Icao` field.
/// This is the unit of parallel work.
pub fn scan_file(path: &Path, icao: &str) -> Result<bool> {
    let snapshot = load_snapshot(path)?;
    Ok(snapshot.aircraft.iter().any(|ac| ac.matches(icao)))
}

/// Scan every entry of `dir` for the queried identifier on `workers` threads
///
/// The directory listing is sorted lexicographically before scanning so that
/// repeated runs over an unchanged directory produce identical match order.
/// Every entry is treated as an input file - there is no extension filter,
/// so stray non-JSON files show up as failures rather than being ignored.
///
/// The thread pool is created for this one parallel map and torn down when
/// the scan completes. Only a directory that cannot be listed at all is
/// fatal; per-file failures are collected in the report.
pub fn scan_directory(dir: &Path, icao: &str, workers: usize) -> Result<ScanReport> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .map_err(|e| DecoderError::DirectoryRead(format!("{:?}: {}", dir, e)))?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();

    log::info!("Scanning {} files in {:?} for {}", names.len(), dir, icao);

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(workers)
        .build()
        .map_err(|e| DecoderError::WorkerPool(e.to_string()))?;

    let results: Vec<(String, Result<bool>)> = pool.install(|| {
        names
            .par_iter()
            .map(|name| (name.clone(), scan_file(&dir.join(name), icao)))
            .collect()
    });

    let scanned = results.len();
    let mut matches = Vec::new();
    let mut failures = Vec::new();
    for (file, result) in results {
        match result {
            Ok(true) => matches.push(file),
            Ok(false) => {}
            Err(error) => {
                log::warn!("Skipping unreadable file {}: {}", file, error);
                failures.push(ScanFailure { file, error });
            }
        }
    }

    log::info!(
        "Scan complete: {} matches, {} failures out of {} files",
        matches.len(),
        failures.len(),
        scanned
    );

    Ok(ScanReport {
        matches,
        failures,
        scanned,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_file(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    fn snapshot_for(icao: &str) -> String {
        format!(r#"{{"acList": [{{"Icao": "{}", "Lat": 1.0, "Long": 2.0, "PosTime": 1000}}]}}"#, icao)
    }

    #[test]
    fn test_scan_file_match_and_no_match() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.json", &snapshot_for("ABC123"));

        let path = dir.path().join("a.json");
        assert!(scan_file(&path, "ABC123").unwrap());
        assert!(!scan_file(&path, "DEF456").unwrap());
    }

    #[test]
    fn test_scan_is_case_sensitive() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.json", &snapshot_for("ABC123"));

        let path = dir.path().join("a.json");
        assert!(!scan_file(&path, "abc123").unwrap());
    }

    #[test]
    fn test_scan_directory_collects_sorted_matches() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "b.json", &snapshot_for("ABC123"));
        write_file(&dir, "a.json", &snapshot_for("ABC123"));
        write_file(&dir, "c.json", &snapshot_for("DEF456"));

        let report = scan_directory(dir.path(), "ABC123", 2).unwrap();
        assert_eq!(report.scanned, 3);
        assert_eq!(report.matches, vec!["a.json", "b.json"]);
        assert!(report.failures.is_empty());
    }

    #[test]
    fn test_scan_directory_isolates_bad_files() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "good.json", &snapshot_for("ABC123"));
        write_file(&dir, "broken.json", "this is not json");
        write_file(&dir, "no_list.json", r#"{"totalAc": 0}"#);

        let report = scan_directory(dir.path(), "ABC123", 2).unwrap();
        assert_eq!(report.scanned, 3);
        assert_eq!(report.matches, vec!["good.json"]);
        assert_eq!(report.failures.len(), 2);
    }

    #[test]
    fn test_scan_directory_unreadable_dir_is_fatal() {
        let result = scan_directory(Path::new("no/such/dir"), "ABC123", 1);
        assert!(result.is_err());
    }

    #[test]
    fn test_scan_directory_zero_matches_is_not_an_error() {
        let dir = TempDir::new().unwrap();
        write_file(&dir, "a.json", &snapshot_for("DEF456"));

        let report = scan_directory(dir.path(), "ABC123", 1).unwrap();
        assert!(report.matches.is_empty());
        assert!(report.failures.is_empty());
    }
}
