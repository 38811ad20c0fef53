//! VRS aircraft-list snapshot data model
//!
//! A snapshot is one JSON document produced by Virtual Radar Server's
//! `AircraftList.json` endpoint: a top-level `acList` array of aircraft
//! records plus assorted server bookkeeping keys that this tool ignores.
//! Snapshots are read once and never retained.

use crate::types::{DecoderError, Result};
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// One aircraft-list snapshot
#[derive(Debug, Clone, Deserialize)]
pub struct Snapshot {
    /// All aircraft known to the server when the snapshot was taken
    #[serde(rename = "acList")]
    pub aircraft: Vec<Aircraft>,
}

/// One aircraft record inside a snapshot
///
/// A record carries either a compact trail array (`Cos`, governed by `TT`)
/// or a single discrete position (`Lat`/`Long`/`Alt`/`PosTime`). The trail
/// elements stay raw `serde_json::Value`s so that one malformed element
/// skips only that record, never the whole file.
#[derive(Debug, Clone, Deserialize)]
pub struct Aircraft {
    /// Mode S ICAO transponder code, uppercase hex. A record without one
    /// can never match a query.
    #[serde(rename = "Icao", default)]
    pub icao: String,

    /// Compact trail array: flat groups of 3 or 4 values, oldest first
    #[serde(rename = "Cos", default)]
    pub trail: Option<Vec<serde_json::Value>>,

    /// Trail type indicator: absent/empty = positions only, "a" = altitude,
    /// "s" = speed
    #[serde(rename = "TT", default)]
    pub trail_type: Option<String>,

    /// Latitude of the current position, decimal degrees
    #[serde(rename = "Lat", default)]
    pub latitude: Option<f64>,

    /// Longitude of the current position, decimal degrees
    #[serde(rename = "Long", default)]
    pub longitude: Option<f64>,

    /// Altitude of the current position
    #[serde(rename = "Alt", default)]
    pub altitude: Option<f64>,

    /// Server time the current position was seen at
    #[serde(rename = "PosTime", default)]
    pub position_time: Option<i64>,
}

impl Aircraft {
    /// Exact, case-sensitive identifier match
    pub fn matches(&self, icao: &str) -> bool {
        self.icao == icao
    }
}

/// Read and parse one snapshot file
///
/// Fails when the file cannot be opened, is not valid JSON, or lacks the
/// `acList` array. These failures belong to this file's unit of work only;
/// callers decide whether to isolate or propagate them.
pub fn load_snapshot(path: &Path) -> Result<Snapshot> {
    let file = File::open(path)
        .map_err(|e| DecoderError::SnapshotRead(format!("{:?}: {}", path, e)))?;

    let reader = BufReader::new(file);
    serde_json::from_reader(reader)
        .map_err(|e| DecoderError::SnapshotParse(format!("{:?}: {}", path, e)))
}
