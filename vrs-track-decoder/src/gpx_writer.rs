//! GPX serialization
//!
//! Turns the accumulated point sequence into a GPX document with exactly one
//! track holding exactly one segment, and writes it through the `gpx` crate.
//! The document is emitted as GPX 1.0 - the schema revision that still has a
//! `speed` element on track points.
//!
//! Timestamps live as `chrono::DateTime<Utc>` everywhere else in this crate;
//! the bridge to the `time::OffsetDateTime` the `gpx` crate expects happens
//! only here.

use crate::types::{DecoderError, Result, Timestamp, TrackPoint};
use geo_types::Point;
use gpx::{Gpx, GpxVersion, Track, TrackSegment, Waypoint};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use time::OffsetDateTime;

/// Creator string embedded in the output document
pub const CREATOR: &str = "vrs2gpx";

/// Build a single-track, single-segment GPX document from the points
pub fn to_gpx(points: &[TrackPoint]) -> Result<Gpx> {
    let mut segment = TrackSegment::default();
    for point in points {
        segment.points.push(to_waypoint(point)?);
    }

    let mut track = Track::default();
    track.segments.push(segment);

    let mut gpx = Gpx::default();
    gpx.version = GpxVersion::Gpx10;
    gpx.creator = Some(CREATOR.to_string());
    gpx.tracks.push(track);
    Ok(gpx)
}

/// Serialize a GPX document to any writer
pub fn write_gpx<W: Write>(gpx: &Gpx, writer: W) -> Result<()> {
    gpx::write(gpx, writer).map_err(|e| DecoderError::GpxWrite(e.to_string()))
}

/// Build and write the track document to `path`, overwriting any existing file
pub fn write_track_file(path: &Path, points: &[TrackPoint]) -> Result<()> {
    let gpx = to_gpx(points)?;
    let file = File::create(path)
        .map_err(|e| DecoderError::GpxWrite(format!("{:?}: {}", path, e)))?;
    write_gpx(&gpx, BufWriter::new(file))?;
    log::info!("Wrote {} points to {:?}", points.len(), path);
    Ok(())
}

fn to_waypoint(point: &TrackPoint) -> Result<Waypoint> {
    // gpx waypoints take (x, y) = (longitude, latitude)
    let mut waypoint = Waypoint::new(Point::new(point.longitude, point.latitude));
    waypoint.elevation = point.elevation;
    waypoint.speed = point.speed;
    waypoint.time = Some(to_gpx_time(point.time)?.into());
    Ok(waypoint)
}

fn to_gpx_time(time: Timestamp) -> Result<OffsetDateTime> {
    let nanos = time
        .timestamp_nanos_opt()
        .ok_or_else(|| DecoderError::GpxWrite(format!("timestamp out of range: {}", time)))?;
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(nanos))
        .map_err(|e| DecoderError::GpxWrite(format!("timestamp out of range: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn sample_points() -> Vec<TrackPoint> {
        let mut first = TrackPoint::new(51.0, -0.1, DateTime::from_timestamp(1, 0).unwrap());
        first.elevation = Some(35000.0);
        let mut second = TrackPoint::new(51.1, -0.2, DateTime::from_timestamp(2, 0).unwrap());
        second.speed = Some(450.0);
        vec![first, second]
    }

    #[test]
    fn test_single_track_single_segment() {
        let gpx = to_gpx(&sample_points()).unwrap();
        assert_eq!(gpx.tracks.len(), 1);
        assert_eq!(gpx.tracks[0].segments.len(), 1);
        assert_eq!(gpx.tracks[0].segments[0].points.len(), 2);
        assert_eq!(gpx.creator.as_deref(), Some(CREATOR));
    }

    #[test]
    fn test_waypoint_fields() {
        let gpx = to_gpx(&sample_points()).unwrap();
        let points = &gpx.tracks[0].segments[0].points;

        let first = points[0].point();
        assert_eq!(first.y(), 51.0);
        assert_eq!(first.x(), -0.1);
        assert_eq!(points[0].elevation, Some(35000.0));
        assert_eq!(points[0].speed, None);
        assert_eq!(points[1].speed, Some(450.0));
        assert!(points[0].time.is_some());
    }

    #[test]
    fn test_empty_track_serializes() {
        let gpx = to_gpx(&[]).unwrap();
        let mut buffer = Vec::new();
        write_gpx(&gpx, &mut buffer).unwrap();

        let xml = String::from_utf8(buffer).unwrap();
        assert!(xml.contains("<gpx"));
        assert!(xml.contains("<trk"));
    }

    #[test]
    fn test_written_document_is_deterministic() {
        // Same points in, byte-identical XML out - the idempotence half of
        // the pipeline that does not depend on the filesystem
        let points = sample_points();
        let mut first = Vec::new();
        let mut second = Vec::new();
        write_gpx(&to_gpx(&points).unwrap(), &mut first).unwrap();
        write_gpx(&to_gpx(&points).unwrap(), &mut second).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_written_document_contains_coordinates() {
        let points = sample_points();
        let mut buffer = Vec::new();
        write_gpx(&to_gpx(&points).unwrap(), &mut buffer).unwrap();

        let xml = String::from_utf8(buffer).unwrap();
        assert!(xml.contains("lat="));
        assert!(xml.contains("lon="));
        assert!(xml.contains("1970-01-01"));
    }
}
