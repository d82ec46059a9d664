//! Track log record definition

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;

/// A FlightAware track log, fully read from one KML document
///
/// Built only through [`TrackLog::open`], [`TrackLog::open_with`] or
/// [`TrackLog::parse`]; read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TrackLog {
    pub(crate) source_path: PathBuf,
    /// Flight number, including callsign
    pub(crate) flight_identifier: String,
    /// `YYYY-MM-DD`, date part of the first timestamp
    pub(crate) flight_date: String,
    pub(crate) origin_code: String,
    /// `lon,lat,alt`, verbatim
    pub(crate) origin_coordinates: String,
    pub(crate) destination_code: String,
    pub(crate) destination_coordinates: String,
    pub(crate) altitude_reference_mode: Option<String>,
    /// `YYYY-MM-DDTHH:MM:SSZ`, one per sample
    pub(crate) timestamps: Vec<String>,
    /// `lon,lat,alt`, index-aligned with `timestamps`
    pub(crate) track_coordinates: Vec<String>,
}

/// One track sample, the time and position sharing an index
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TrackSample<'a> {
    pub time: &'a str,
    pub coordinates: &'a str,
}

impl TrackLog {
    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    pub fn flight_identifier(&self) -> &str {
        &self.flight_identifier
    }

    pub fn flight_date(&self) -> &str {
        &self.flight_date
    }

    pub fn origin_code(&self) -> &str {
        &self.origin_code
    }

    pub fn origin_coordinates(&self) -> &str {
        &self.origin_coordinates
    }

    pub fn destination_code(&self) -> &str {
        &self.destination_code
    }

    pub fn destination_coordinates(&self) -> &str {
        &self.destination_coordinates
    }

    /// Eg.: `absolute`, meaning above sea level. `None` when the track omits it
    pub fn altitude_reference_mode(&self) -> Option<&str> {
        self.altitude_reference_mode.as_deref()
    }

    pub fn timestamps(&self) -> &[String] {
        &self.timestamps
    }

    pub fn track_coordinates(&self) -> &[String] {
        &self.track_coordinates
    }

    /// Number of track samples
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Walk the samples in document order
    pub fn samples(&self) -> impl Iterator<Item = TrackSample<'_>> {
        self.timestamps
            .iter()
            .zip(self.track_coordinates.iter())
            .map(|(time, coordinates)| TrackSample { time, coordinates })
    }
}

impl fmt::Display for TrackLog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {}",
            self.flight_identifier, self.origin_code, self.destination_code, self.flight_date
        )
    }
}
