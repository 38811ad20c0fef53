//! VRS Track Decoder Library
//!
//! A stateless, reusable library for turning directories of Virtual Radar
//! Server aircraft-list snapshot files (JSON) into a single GPX track,
//! filtered to one aircraft by its Mode S ICAO transponder code.
//!
//! # Architecture
//!
//! This library is intentionally minimal and focused on the conversion:
//! - Scans a snapshot directory in parallel for files mentioning the code
//! - Decodes both position encodings (compact trail arrays and discrete
//!   current-position records)
//! - Assembles one single-track, single-segment GPX document
//! - Isolates every per-file and per-record failure into reports instead of
//!   aborting the batch
//!
//! The library does NOT:
//! - Follow multiple aircraft at once
//! - Validate snapshots beyond field presence
//! - Stream or watch directories for new snapshots
//!
//! Argument handling, configuration files and progress output live in the
//! application layer (vrs-track-cli).
//!
//! # Example Usage
//!
//! ```no_run
//! use vrs_track_decoder::{scan_directory, TrackBuilder, write_track_file};
//! use std::path::Path;
//!
//! let dir = Path::new("./files");
//! let report = scan_directory(dir, "ABC123", 4).unwrap();
//!
//! if !report.matches.is_empty() {
//!     let built = TrackBuilder::new("ABC123").build(dir, &report.matches);
//!     write_track_file(Path::new("out.gpx"), &built.points).unwrap();
//! }
//! ```

// Public modules
pub mod gpx_writer;
pub mod scanner;
pub mod snapshot;
pub mod track;
pub mod types;

// Re-export main types for convenience
pub use gpx_writer::{to_gpx, write_gpx, write_track_file};
pub use scanner::{scan_directory, scan_file, ScanFailure, ScanReport};
pub use snapshot::{load_snapshot, Aircraft, Snapshot};
pub use track::{BuildReport, BuiltTrack, FileFailure, SkippedRecord, TrackBuilder};
pub use types::{DecoderError, Result, SkipReason, Timestamp, TrackPoint, TrailKind};

// Internal modules (not exposed in public API)
mod formats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
