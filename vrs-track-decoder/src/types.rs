//! Core types for the VRS track decoder library
//!
//! This module defines the fundamental types shared by the scanner and the
//! track builder. The decoder is stateless and only produces track points -
//! it does not follow aircraft across snapshots or keep any history of its own.

use chrono::{DateTime, Utc};
use std::fmt;

/// Timestamp type used throughout the decoder
pub type Timestamp = DateTime<Utc>;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Errors that can occur while scanning or building a track
#[derive(Debug, thiserror::Error)]
pub enum DecoderError {
    #[error("Failed to read snapshot file: {0}")]
    SnapshotRead(String),

    #[error("Failed to parse snapshot JSON: {0}")]
    SnapshotParse(String),

    #[error("Failed to read input directory: {0}")]
    DirectoryRead(String),

    #[error("Failed to start scan worker pool: {0}")]
    WorkerPool(String),

    #[error("Failed to write GPX output: {0}")]
    GpxWrite(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Trail encoding carried by an aircraft record, derived from the `TT` field
///
/// The compact trail array packs values in groups of 3 or 4. The group size
/// and the meaning of the 4th element are governed entirely by this indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrailKind {
    /// Groups of 3: latitude, longitude, timestamp
    PositionOnly,
    /// Groups of 4: latitude, longitude, timestamp, altitude
    Altitude,
    /// Groups of 4: latitude, longitude, timestamp, speed
    Speed,
}

impl TrailKind {
    /// Derive the trail kind from the `TT` indicator field
    ///
    /// Absent, empty or unrecognized indicators all mean position-only groups.
    pub fn from_indicator(indicator: Option<&str>) -> Self {
        match indicator {
            Some("a") => TrailKind::Altitude,
            Some("s") => TrailKind::Speed,
            _ => TrailKind::PositionOnly,
        }
    }

    /// Number of values per trail group for this kind
    pub fn group_size(&self) -> usize {
        match self {
            TrailKind::PositionOnly => 3,
            TrailKind::Altitude | TrailKind::Speed => 4,
        }
    }
}

impl fmt::Display for TrailKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TrailKind::PositionOnly => write!(f, "position-only"),
            TrailKind::Altitude => write!(f, "altitude"),
            TrailKind::Speed => write!(f, "speed"),
        }
    }
}

/// A single normalized position sample - the only entity that survives into
/// the output document
#[derive(Debug, Clone, PartialEq)]
pub struct TrackPoint {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
    /// Absolute UTC instant the position was seen at
    pub time: Timestamp,
    /// Altitude, when the source record carried one
    pub elevation: Option<f64>,
    /// Ground speed, when the source record carried one
    pub speed: Option<f64>,
}

impl TrackPoint {
    /// Create a point with neither elevation nor speed set
    pub fn new(latitude: f64, longitude: f64, time: Timestamp) -> Self {
        Self {
            latitude,
            longitude,
            time,
            elevation: None,
            speed: None,
        }
    }
}

/// Why a record contributed zero points to the track
///
/// The original tool swallowed these outcomes; here every skipped record is
/// reported with its reason so callers can surface them.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SkipReason {
    #[error("trail length {len} is not a multiple of group size {group}")]
    UnevenTrail { len: usize, group: usize },

    #[error("trail element at offset {0} is not a number")]
    NonNumericTrail(usize),

    #[error("timestamp {0} is outside the representable range")]
    TimestampOutOfRange(i64),

    #[error("position record is missing the {0} field")]
    MissingField(&'static str),
}
