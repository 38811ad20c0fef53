//! Discrete current-position decoder
//!
//! Fallback encoding for records without a trail array: one point built from
//! the `Lat`, `Long`, `Alt` and `PosTime` fields. Unlike trail timestamps,
//! `PosTime` is carried into the output as-is - the numeric value is taken
//! directly as the Unix timestamp with no millisecond scaling. The two
//! encodings are asymmetric on purpose; see DESIGN.md.

use crate::snapshot::Aircraft;
use crate::types::{SkipReason, TrackPoint};
use chrono::DateTime;

/// Decode a discrete position record into a single track point
///
/// `Lat`, `Long` and `PosTime` are required; a record missing any of them is
/// skipped with the field named in the reason. `Alt` is optional.
pub fn decode_position(aircraft: &Aircraft) -> Result<TrackPoint, SkipReason> {
    let latitude = aircraft.latitude.ok_or(SkipReason::MissingField("Lat"))?;
    let longitude = aircraft.longitude.ok_or(SkipReason::MissingField("Long"))?;
    let seconds = aircraft
        .position_time
        .ok_or(SkipReason::MissingField("PosTime"))?;

    let time = DateTime::from_timestamp(seconds, 0)
        .ok_or(SkipReason::TimestampOutOfRange(seconds))?;

    let mut point = TrackPoint::new(latitude, longitude, time);
    point.elevation = aircraft.altitude;
    Ok(point)
}
