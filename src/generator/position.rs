//! Position definition

use geo::geometry::Point;
use time::format_description::well_known;
use time::OffsetDateTime;

use crate::{TrackLog, TrackLogError};

/// Parsed `lon,lat,alt` coordinate string
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Coordinates {
    pub point: Point,
    /// Meters, as found in the document
    pub altitude: Option<f64>,
}

impl Coordinates {
    /// Parse `lon,lat[,alt]`. `gx:coord` entries may use blanks instead of commas
    pub fn parse(raw: &str) -> Result<Self, TrackLogError> {
        let trimmed = raw.trim();
        let parts: Vec<&str> = if trimmed.contains(',') {
            trimmed.split(',').map(|s| s.trim()).collect()
        } else {
            trimmed.split_whitespace().collect()
        };
        if parts.len() != 2 && parts.len() != 3 {
            return Err(TrackLogError::Coordinates(raw.to_string()));
        }

        let number = |s: &str| {
            s.parse::<f64>()
                .map_err(|_| TrackLogError::Coordinates(raw.to_string()))
        };

        let lng = number(parts[0])?;
        let lat = number(parts[1])?;
        let altitude = match parts.get(2) {
            Some(alt) => Some(number(*alt)?),
            None => None,
        };

        Ok(Self {
            point: Point::new(lng, lat),
            altitude,
        })
    }
}

/// One track sample with its time and position parsed
#[derive(Clone, Debug, PartialEq)]
pub struct TrackPoint {
    pub coordinates: Point,
    pub time: OffsetDateTime,
    pub altitude: Option<f64>,
}

impl TrackPoint {
    pub fn parse(time: &str, coordinates: &str) -> Result<Self, TrackLogError> {
        let time = OffsetDateTime::parse(time, &well_known::Rfc3339).map_err(|source| {
            TrackLogError::Timestamp {
                value: time.to_string(),
                source,
            }
        })?;
        let coordinates = Coordinates::parse(coordinates)?;

        Ok(Self {
            coordinates: coordinates.point,
            time,
            altitude: coordinates.altitude,
        })
    }
}

impl TrackLog {
    /// Airport positions, origin then destination
    pub fn airports(&self) -> Result<(Coordinates, Coordinates), TrackLogError> {
        Ok((
            Coordinates::parse(self.origin_coordinates())?,
            Coordinates::parse(self.destination_coordinates())?,
        ))
    }

    /// Every sample with time and coordinates parsed, document order
    pub fn positions(&self) -> Result<Vec<TrackPoint>, TrackLogError> {
        self.samples()
            .map(|s| TrackPoint::parse(s.time, s.coordinates))
            .collect()
    }
}
