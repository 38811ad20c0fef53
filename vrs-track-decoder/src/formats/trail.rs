//! Compact trail array decoder
//!
//! The `Cos` array packs an aircraft's recent movement history as a flat
//! numeric sequence in groups of 3 or 4 values:
//!
//! - `TT` absent or empty: `[latitude, longitude, epoch-millis]`
//! - `TT = "a"`: `[latitude, longitude, epoch-millis, altitude]`
//! - `TT = "s"`: `[latitude, longitude, epoch-millis, speed]`
//!
//! Groups are ordered oldest-first within a file. The group size is computed
//! from the indicator before any slicing happens; a trail whose length does
//! not divide by it is rejected as a whole. Trail timestamps are JavaScript
//! ticks (milliseconds since the Unix epoch) and are converted to absolute
//! UTC instants here.

use crate::types::{SkipReason, TrackPoint, TrailKind};
use chrono::DateTime;
use serde_json::Value;

/// Decode a trail array into track points, oldest first
///
/// Returns a `SkipReason` for the whole record on any malformed group -
/// there is no partial emission.
pub fn decode_trail(values: &[Value], kind: TrailKind) -> Result<Vec<TrackPoint>, SkipReason> {
    let group = kind.group_size();
    if values.len() % group != 0 {
        return Err(SkipReason::UnevenTrail {
            len: values.len(),
            group,
        });
    }

    let mut points = Vec::with_capacity(values.len() / group);
    for (index, chunk) in values.chunks_exact(group).enumerate() {
        let base = index * group;
        let latitude = number_at(chunk, 0, base)?;
        let longitude = number_at(chunk, 1, base)?;
        let millis = number_at(chunk, 2, base)? as i64;

        let time = DateTime::from_timestamp_millis(millis)
            .ok_or(SkipReason::TimestampOutOfRange(millis))?;

        let mut point = TrackPoint::new(latitude, longitude, time);
        match kind {
            TrailKind::Altitude => point.elevation = Some(number_at(chunk, 3, base)?),
            TrailKind::Speed => point.speed = Some(number_at(chunk, 3, base)?),
            TrailKind::PositionOnly => {}
        }
        points.push(point);
    }

    Ok(points)
}

/// Read one trail element as a number, reporting its absolute offset on failure
fn number_at(chunk: &[Value], offset: usize, base: usize) -> Result<f64, SkipReason> {
    chunk[offset]
        .as_f64()
        .ok_or(SkipReason::NonNumericTrail(base + offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(numbers: &[f64]) -> Vec<Value> {
        numbers.iter().map(|n| serde_json::json!(n)).collect()
    }

    #[test]
    fn test_position_only_triples() {
        let trail = values(&[51.0, -0.1, 1000.0, 51.1, -0.2, 2000.0]);
        let points = decode_trail(&trail, TrailKind::PositionOnly).unwrap();

        assert_eq!(points.len(), 2);
        for point in &points {
            assert_eq!(point.elevation, None);
            assert_eq!(point.speed, None);
        }
        assert_eq!(points[0].latitude, 51.0);
        assert_eq!(points[1].longitude, -0.2);
    }

    #[test]
    fn test_millis_conversion() {
        // 1000 ms of JavaScript ticks is one second past the epoch
        let trail = values(&[51.0, -0.1, 1000.0]);
        let points = decode_trail(&trail, TrailKind::PositionOnly).unwrap();
        assert_eq!(points[0].time, DateTime::from_timestamp(1, 0).unwrap());
    }

    #[test]
    fn test_altitude_quadruples() {
        let trail = values(&[51.0, -0.1, 1000.0, 35000.0, 51.1, -0.2, 2000.0, 36000.0]);
        let points = decode_trail(&trail, TrailKind::Altitude).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].elevation, Some(35000.0));
        assert_eq!(points[1].elevation, Some(36000.0));
        assert_eq!(points[0].speed, None);
    }

    #[test]
    fn test_speed_quadruples() {
        let trail = values(&[51.0, -0.1, 1000.0, 450.0]);
        let points = decode_trail(&trail, TrailKind::Speed).unwrap();

        assert_eq!(points[0].speed, Some(450.0));
        assert_eq!(points[0].elevation, None);
    }

    #[test]
    fn test_uneven_length_rejected() {
        let trail = values(&[51.0, -0.1, 1000.0, 51.1]);
        let result = decode_trail(&trail, TrailKind::PositionOnly);
        assert_eq!(
            result,
            Err(SkipReason::UnevenTrail { len: 4, group: 3 })
        );
    }

    #[test]
    fn test_stride_matches_group_size() {
        // Two position-only triples must decode as two points, not be
        // misread at a stride of four
        let trail = values(&[10.0, 20.0, 1000.0, 30.0, 40.0, 2000.0]);
        let points = decode_trail(&trail, TrailKind::PositionOnly).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[1].latitude, 30.0);
        assert_eq!(points[1].longitude, 40.0);
        assert_eq!(points[1].time, DateTime::from_timestamp(2, 0).unwrap());
    }

    #[test]
    fn test_non_numeric_element_rejected() {
        let mut trail = values(&[51.0, -0.1]);
        trail.push(serde_json::json!("not-a-number"));

        let result = decode_trail(&trail, TrailKind::PositionOnly);
        assert_eq!(result, Err(SkipReason::NonNumericTrail(2)));
    }

    #[test]
    fn test_empty_trail_yields_no_points() {
        let points = decode_trail(&[], TrailKind::PositionOnly).unwrap();
        assert!(points.is_empty());
    }
}
