//! Track generator API

use std::collections::BTreeMap;

use geo::{LineString, SimplifyVwIdx};
use gpx::{Track, TrackSegment, Waypoint};
use log::debug;
use serde::{Deserialize, Serialize};

use super::position::TrackPoint;
use crate::{TrackLog, TrackLogError};

/// How the samples are split into GPX segments
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrackSegmentOptions {
    /// Max segment duration in seconds
    pub max_duration: u32,
    /// Visvalingam-Whyatt area threshold, in squared degrees
    pub vw_tolerance: Option<f64>,
}

impl Default for TrackSegmentOptions {
    fn default() -> Self {
        Self {
            max_duration: 300,
            vw_tolerance: None,
        }
    }
}

impl TrackSegmentOptions {
    pub fn new() -> Self {
        Self::default()
    }
}

pub struct Tracker {
    /// Flight number, including callsign
    pub name: String,
    /// Eg.: `KMRY-KSFO 2020-01-14`
    pub description: Option<String>,
    /// Data source, eg.: the track log file
    pub source: Option<String>,
    pub options: TrackSegmentOptions,
}

impl Tracker {
    /// Start a new tracker instance
    pub fn new(name: String) -> Self {
        Self {
            name,
            description: None,
            source: None,
            options: TrackSegmentOptions::default(),
        }
    }

    /// Tracker named and described after a track log
    pub fn for_log(log: &TrackLog) -> Self {
        let mut tracker = Self::new(log.flight_identifier().to_string());
        tracker
            .description(format!(
                "{}-{} {}",
                log.origin_code(),
                log.destination_code(),
                log.flight_date()
            ))
            .source(log.source_path().display().to_string());

        tracker
    }

    pub fn description(&mut self, description: String) -> &mut Self {
        self.description = Some(description);

        self
    }

    pub fn source(&mut self, source: String) -> &mut Self {
        self.source = Some(source);

        self
    }

    pub fn options(&mut self, options: TrackSegmentOptions) -> &mut Self {
        self.options = options;

        self
    }

    /// Build the track with the tracker params
    pub fn build(&self, positions: &[TrackPoint]) -> Result<Track, TrackLogError> {
        let mut track = Track::new();
        track.name = Some(self.name.clone());
        track.description = self.description.clone();
        track.source = self.source.clone();

        let mut positions: Vec<&TrackPoint> = positions.iter().collect();
        positions.sort_by_key(|p| p.time);

        let slot = i64::from(self.options.max_duration.max(1));
        let mut segs: BTreeMap<i64, Vec<&TrackPoint>> = BTreeMap::new();

        // Samples fall in fixed slots of `max_duration` seconds
        for poi in positions {
            let key = poi.time.unix_timestamp().div_euclid(slot);
            segs.entry(key).or_default().push(poi);
        }

        for (_, seg) in segs {
            let kept = self.simplify(&seg);

            let mut tseg = TrackSegment::new();
            for poi in kept {
                let mut wp = Waypoint::new(poi.coordinates);
                wp.time = Some(poi.time.into());
                wp.elevation = poi.altitude;

                tseg.points.push(wp);
            }
            track.segments.push(tseg);
        }

        debug!("track {} built with {} segments", self.name, track.segments.len());

        Ok(track)
    }

    /// Drop the points Visvalingam-Whyatt considers redundant
    fn simplify<'p>(&self, seg: &[&'p TrackPoint]) -> Vec<&'p TrackPoint> {
        let tolerance = match self.options.vw_tolerance {
            Some(t) if seg.len() > 2 => t,
            _ => return seg.to_vec(),
        };

        let line: LineString = seg.iter().map(|p| p.coordinates).collect();

        line.simplify_vw_idx(&tolerance)
            .into_iter()
            .map(|i| seg[i])
            .collect()
    }
}
