//! tracklog - FlightAware KML track log reader
//!
//! ```no_run
//! use tracklog::TrackLog;
//!
//! let log = TrackLog::open("FlightAware_UAL5316_KMRY_KSFO_20200114.kml")?;
//! println!("{} with {} samples", log, log.len());
//! # Ok::<(), tracklog::TrackLogError>(())
//! ```

mod error;
mod generator;
mod parser;
mod record;

pub use error::TrackLogError;
pub use generator::gpx::GpxGenerator;
pub use generator::position::{Coordinates, TrackPoint};
pub use generator::tracker::{TrackSegmentOptions, Tracker};
pub use parser::{AirportRole, Namespaces, GX_NS, KML_NS};
pub use record::{TrackLog, TrackSample};
