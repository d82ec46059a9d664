//! GPX generator API

use gpx::{Gpx, GpxVersion, Track, Waypoint};

use super::tracker::{TrackSegmentOptions, Tracker};
use crate::{TrackLog, TrackLogError};

pub struct GpxGenerator {
    pub tracks: Vec<Track>,
    pub waypoints: Vec<Waypoint>,
}

impl GpxGenerator {
    pub fn empty() -> Self {
        Self {
            tracks: vec![],
            waypoints: vec![],
        }
    }

    /// Flight track plus one waypoint per airport, named by its code
    pub fn from_tracklog(
        log: &TrackLog,
        options: &TrackSegmentOptions,
    ) -> Result<Self, TrackLogError> {
        let track = Tracker::for_log(log)
            .options(options.clone())
            .build(&log.positions()?)?;

        let (origin, destination) = log.airports()?;
        let mut generator = Self::empty();
        generator.tracks.push(track);
        for (code, coords) in [
            (log.origin_code(), origin),
            (log.destination_code(), destination),
        ] {
            let mut wp = Waypoint::new(coords.point);
            wp.name = Some(code.to_string());
            wp.elevation = coords.altitude;
            generator.waypoints.push(wp);
        }

        Ok(generator)
    }

    pub fn generate(self) -> Result<Gpx, TrackLogError> {
        let mut gpx: Gpx = Default::default();
        gpx.version = GpxVersion::Gpx11;
        gpx.creator = Some("tracklog".to_string());
        gpx.tracks = self.tracks;
        gpx.waypoints = self.waypoints;

        Ok(gpx)
    }
}
