//! Track assembly
//!
//! Sequentially re-reads the files the scanner matched, extracts every
//! position sample belonging to the target aircraft, and accumulates them
//! into one ordered point sequence. Points land in file-iteration order,
//! then in-file trail order; no de-duplication, no merging of overlapping
//! trails. An optional stable timestamp sort can be enabled for callers that
//! want a chronologically coherent trail across files.
//!
//! Nothing here aborts the batch: files that fail to read and records that
//! fail to decode are collected into the build report instead.

use crate::formats::extract_points;
use crate::snapshot::load_snapshot;
use crate::types::{DecoderError, SkipReason, TrackPoint};
use std::path::Path;

/// Builds one track for one target aircraft
pub struct TrackBuilder {
    icao: String,
    sort_by_time: bool,
}

/// A finished track plus the diagnostics gathered while building it
#[derive(Debug)]
pub struct BuiltTrack {
    /// Accumulated points, ready for serialization
    pub points: Vec<TrackPoint>,
    /// What was read, what was skipped, and why
    pub report: BuildReport,
}

/// Diagnostics for one build pass
#[derive(Debug, Default)]
pub struct BuildReport {
    /// Number of matched files successfully read
    pub files_read: usize,
    /// Matched files that could not be read or parsed on the second pass
    pub file_failures: Vec<FileFailure>,
    /// Records that contributed zero points, with the reason for each
    pub skipped_records: Vec<SkippedRecord>,
}

/// One matched file that failed during the build pass
#[derive(Debug)]
pub struct FileFailure {
    pub file: String,
    pub error: DecoderError,
}

/// One record of the target aircraft that was skipped
#[derive(Debug)]
pub struct SkippedRecord {
    /// File the record came from
    pub file: String,
    /// Why the record contributed no points
    pub reason: SkipReason,
}

impl TrackBuilder {
    /// Create a builder for the given transponder code
    pub fn new(icao: impl Into<String>) -> Self {
        Self {
            icao: icao.into(),
            sort_by_time: false,
        }
    }

    /// Builder method: stably sort the accumulated points by timestamp
    /// before returning them
    ///
    /// Off by default: the plain accumulation order (file order, then trail
    /// order) is the tool's documented contract, and multiple snapshot files
    /// may contain overlapping trail segments that only a sort untangles.
    pub fn with_time_sorting(mut self, enabled: bool) -> Self {
        self.sort_by_time = enabled;
        self
    }

    /// Assemble the track from the matched files under `dir`
    ///
    /// `files` is iterated in input order. All per-file and per-record
    /// failures are isolated into the report; this call itself cannot fail.
    pub fn build(&self, dir: &Path, files: &[String]) -> BuiltTrack {
        let mut points = Vec::new();
        let mut report = BuildReport::default();

        for file in files {
            let snapshot = match load_snapshot(&dir.join(file)) {
                Ok(snapshot) => snapshot,
                Err(error) => {
                    log::warn!("Skipping matched file {}: {}", file, error);
                    report.file_failures.push(FileFailure {
                        file: file.clone(),
                        error,
                    });
                    continue;
                }
            };
            report.files_read += 1;

            for aircraft in snapshot.aircraft.iter().filter(|ac| ac.matches(&self.icao)) {
                match extract_points(aircraft) {
                    Ok(extracted) => {
                        log::debug!("{}: {} points from {}", self.icao, extracted.len(), file);
                        points.extend(extracted);
                    }
                    Err(reason) => {
                        log::warn!("Skipping record of {} in {}: {}", self.icao, file, reason);
                        report.skipped_records.push(SkippedRecord {
                            file: file.clone(),
                            reason,
                        });
                    }
                }
            }
        }

        if self.sort_by_time {
            points.sort_by_key(|point| point.time);
        }

        log::info!(
            "Built track for {}: {} points, {} skipped records, {} file failures",
            self.icao,
            points.len(),
            report.skipped_records.len(),
            report.file_failures.len()
        );

        BuiltTrack { points, report }
    }
}
