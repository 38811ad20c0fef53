//! Position-encoding decoders
//!
//! A VRS aircraft record carries its position in one of two incompatible
//! encodings: a compact trail array (`Cos`, governed by `TT`) or a single
//! discrete position record. Each encoding has its own decoder module; this
//! module dispatches between them.

use crate::snapshot::Aircraft;
use crate::types::{SkipReason, TrackPoint, TrailKind};

pub mod position;
pub mod trail;

/// Decode all position samples carried by one aircraft record
///
/// Records with a trail array use the trail decoder; records without one
/// fall back to the discrete-position decoder. A malformed record yields a
/// `SkipReason` instead of points - never a partial emission.
pub fn extract_points(aircraft: &Aircraft) -> Result<Vec<TrackPoint>, SkipReason> {
    match &aircraft.trail {
        Some(values) => {
            let kind = TrailKind::from_indicator(aircraft.trail_type.as_deref());
            trail::decode_trail(values, kind)
        }
        None => position::decode_position(aircraft).map(|point| vec![point]),
    }
}
