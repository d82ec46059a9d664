
use std::path::PathBuf;

use geo::Point;
use time::macros::datetime;

use super::gpx::GpxGenerator;
use super::position::TrackPoint;
use super::tracker::{TrackSegmentOptions, Tracker};
use crate::{TrackLog, TrackLogError};

fn point(lng: f64, lat: f64, time: time::OffsetDateTime) -> TrackPoint {
    TrackPoint {
        coordinates: Point::new(lng, lat),
        time,
        altitude: Some(1000.0),
    }
}

fn ual5316() -> Result<TrackLog, TrackLogError> {
    TrackLog::open(
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("testdata")
            .join("FlightAware_UAL5316_KMRY_KSFO_20200114.kml"),
    )
}

#[test]
fn simple_track() -> Result<(), TrackLogError> {
    let p1 = point(-121.8432, 36.5870, datetime!(2020-01-14 8:15 UTC));
    let p2 = point(-121.8801, 36.6402, datetime!(2020-01-14 8:16 UTC));
    let p3 = point(-121.9533, 36.7511, datetime!(2020-01-14 8:17 UTC));

    let track = Tracker::new("UAL5316".to_string())
        .description("KMRY-KSFO 2020-01-14".to_string())
        .source("ual5316.kml".to_string())
        .build(&[p1.clone(), p2.clone(), p3.clone()])?;
    assert_eq!(1, track.segments.len());
    assert_eq!(Some("UAL5316".to_string()), track.name);
    assert_eq!(Some("KMRY-KSFO 2020-01-14".to_string()), track.description);
    assert_eq!(Some("ual5316.kml".to_string()), track.source);

    let segment = &track.segments[0];
    assert_eq!(3, segment.points.len());
    assert_eq!(p1.coordinates, segment.points[0].point());
    assert_eq!(Some(p1.time.into()), segment.points[0].time);
    assert_eq!(Some(1000.0), segment.points[0].elevation);
    assert_eq!(p3.coordinates, segment.points[2].point());
    assert_eq!(Some(p3.time.into()), segment.points[2].time);

    Ok(())
}

#[test]
fn simple_track_reversed() -> Result<(), TrackLogError> {
    let p1 = point(-121.8432, 36.5870, datetime!(2020-01-14 8:15 UTC));
    let p2 = point(-121.8801, 36.6402, datetime!(2020-01-14 8:16 UTC));
    let p3 = point(-121.9533, 36.7511, datetime!(2020-01-14 8:17 UTC));

    let track = Tracker::new("UAL5316".to_string()).build(&[p3.clone(), p2.clone(), p1.clone()])?;
    assert_eq!(1, track.segments.len());
    assert_eq!(None, track.description);

    let segment = &track.segments[0];
    assert_eq!(3, segment.points.len());
    assert_eq!(p1.coordinates, segment.points[0].point());
    assert_eq!(p2.coordinates, segment.points[1].point());
    assert_eq!(p3.coordinates, segment.points[2].point());

    Ok(())
}

#[test]
fn segments_by_duration() -> Result<(), TrackLogError> {
    let points = [
        point(-121.8432, 36.5870, datetime!(2020-01-14 8:15 UTC)),
        point(-121.8801, 36.6402, datetime!(2020-01-14 8:16 UTC)),
        point(-121.9533, 36.7511, datetime!(2020-01-14 8:21 UTC)),
    ];

    let track = Tracker::new("UAL5316".to_string()).build(&points)?;
    assert_eq!(2, track.segments.len());
    assert_eq!(2, track.segments[0].points.len());
    assert_eq!(1, track.segments[1].points.len());

    let track = Tracker::new("UAL5316".to_string())
        .options(TrackSegmentOptions {
            max_duration: 3600,
            vw_tolerance: None,
        })
        .build(&points)?;
    assert_eq!(1, track.segments.len());

    Ok(())
}

#[test]
fn simplified_segment_keeps_ends() -> Result<(), TrackLogError> {
    // The middle point is on the straight line between its neighbours
    let points = [
        point(0.0, 0.0, datetime!(2020-01-14 8:15 UTC)),
        point(1.0, 1.0, datetime!(2020-01-14 8:16 UTC)),
        point(2.0, 2.0, datetime!(2020-01-14 8:17 UTC)),
    ];

    let track = Tracker::new("UAL5316".to_string())
        .options(TrackSegmentOptions {
            max_duration: 3600,
            vw_tolerance: Some(0.01),
        })
        .build(&points)?;

    let segment = &track.segments[0];
    assert_eq!(2, segment.points.len());
    assert_eq!(Point::new(0.0, 0.0), segment.points[0].point());
    assert_eq!(Point::new(2.0, 2.0), segment.points[1].point());

    Ok(())
}

#[test]
fn flightaware_to_gpx() -> Result<(), TrackLogError> {
    let log = ual5316()?;

    let gpx = GpxGenerator::from_tracklog(&log, &TrackSegmentOptions::new())?.generate()?;
    assert_eq!(Some("tracklog".to_string()), gpx.creator);

    assert_eq!(2, gpx.waypoints.len());
    assert_eq!(Some("KMRY".to_string()), gpx.waypoints[0].name);
    assert_eq!(Point::new(-121.8432, 36.5870), gpx.waypoints[0].point());
    assert_eq!(Some(45.7), gpx.waypoints[0].elevation);
    assert_eq!(Some("KSFO".to_string()), gpx.waypoints[1].name);

    assert_eq!(1, gpx.tracks.len());
    let track = &gpx.tracks[0];
    assert_eq!(Some("UAL5316".to_string()), track.name);
    assert_eq!(Some("KMRY-KSFO 2020-01-14".to_string()), track.description);

    // 08:15, 08:16, 08:17:30 | 08:21 | 08:40
    assert_eq!(3, track.segments.len());
    let total: usize = track.segments.iter().map(|s| s.points.len()).sum();
    assert_eq!(log.len(), total);
    assert_eq!(Some(3048.0), track.segments[1].points[0].elevation);

    Ok(())
}

#[test]
fn positions_follow_samples() -> Result<(), TrackLogError> {
    let log = ual5316()?;
    let positions = log.positions()?;

    assert_eq!(log.len(), positions.len());
    assert_eq!(datetime!(2020-01-14 8:15 UTC), positions[0].time);
    assert_eq!(datetime!(2020-01-14 8:40 UTC), positions[4].time);
    assert_eq!(Point::new(-122.3750, 37.6190), positions[4].coordinates);

    Ok(())
}
