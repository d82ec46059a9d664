//! KML track log parser
//!
//! A FlightAware track log holds one `Document` with three `Placemark`
//! children, always in the same order: origin airport, destination
//! airport, then the flight track itself.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use roxmltree::Document;

mod airport;
mod namespaces;
mod track;


pub use airport::AirportRole;
pub use namespaces::{Namespaces, GX_NS, KML_NS};

use crate::{TrackLog, TrackLogError};

/// Placemarks expected in the container, in order
const PLACEMARKS: usize = 3;

/// Record under construction, filled in place by the extractors
#[derive(Debug, Default)]
struct Draft {
    flight_identifier: Option<String>,
    flight_date: Option<String>,
    origin: Option<(String, String)>,
    destination: Option<(String, String)>,
    altitude_reference_mode: Option<String>,
    timestamps: Vec<String>,
    track_coordinates: Vec<String>,
}

impl Draft {
    /// Freeze the draft, every extraction step must have run
    fn finish(self, source_path: PathBuf) -> Result<TrackLog, TrackLogError> {
        let (origin_code, origin_coordinates) = self
            .origin
            .ok_or_else(|| TrackLogError::structure("origin airport not extracted"))?;
        let (destination_code, destination_coordinates) = self
            .destination
            .ok_or_else(|| TrackLogError::structure("destination airport not extracted"))?;
        let flight_identifier = self
            .flight_identifier
            .ok_or_else(|| TrackLogError::structure("flight identifier not extracted"))?;
        let flight_date = self.flight_date.ok_or(TrackLogError::EmptyTrack)?;

        Ok(TrackLog {
            source_path,
            flight_identifier,
            flight_date,
            origin_code,
            origin_coordinates,
            destination_code,
            destination_coordinates,
            altitude_reference_mode: self.altitude_reference_mode,
            timestamps: self.timestamps,
            track_coordinates: self.track_coordinates,
        })
    }
}

impl TrackLog {
    /// Read the track log at `path` with the standard KML namespaces
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, TrackLogError> {
        Self::open_with(path, &Namespaces::default())
    }

    /// Read the track log at `path`
    pub fn open_with<P: AsRef<Path>>(path: P, ns: &Namespaces) -> Result<Self, TrackLogError> {
        let path = path.as_ref();

        if !path.is_file() {
            return Err(TrackLogError::NotFound(path.to_path_buf()));
        }

        // The handle is closed before parsing starts, on every path
        let text = fs::read_to_string(path).map_err(|source| TrackLogError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse(path, &text, ns)
    }

    /// Build a track log from KML text already in memory
    pub fn parse<P: AsRef<Path>>(
        source_path: P,
        text: &str,
        ns: &Namespaces,
    ) -> Result<Self, TrackLogError> {
        let source_path = source_path.as_ref().to_path_buf();
        debug!("parsing track log {}", source_path.display());

        let doc = Document::parse(text)?;

        let containers = namespaces::find_all(doc.root_element(), "default:Document", ns)?;
        if containers.len() > 1 {
            warn!(
                "{}: {} Document nodes found, only the first one is used",
                source_path.display(),
                containers.len()
            );
        }
        let container = containers
            .into_iter()
            .next()
            .ok_or_else(|| TrackLogError::structure("no Document node found"))?;

        let placemarks = namespaces::find_all(container, "default:Placemark", ns)?;
        if placemarks.len() != PLACEMARKS {
            return Err(TrackLogError::Structure(format!(
                "expected {} Placemark nodes, found {}",
                PLACEMARKS,
                placemarks.len()
            )));
        }

        let mut draft = Draft::default();
        airport::extract(&mut draft, placemarks[0], ns, AirportRole::Origin)?;
        airport::extract(&mut draft, placemarks[1], ns, AirportRole::Destination)?;
        track::extract(&mut draft, placemarks[2], ns)?;

        let log = draft.finish(source_path)?;
        debug!("parsed track log {} with {} samples", log, log.len());

        Ok(log)
    }
}
