//! Airport placemark extraction

use std::fmt;
use std::str::FromStr;

use log::debug;
use roxmltree::Node;

use super::namespaces::{find_last, Namespaces};
use super::Draft;
use crate::TrackLogError;

/// Which end of the flight an airport placemark describes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AirportRole {
    Origin,
    Destination,
}

impl FromStr for AirportRole {
    type Err = TrackLogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "origin" => Ok(Self::Origin),
            "dest" | "destination" => Ok(Self::Destination),
            other => Err(TrackLogError::InvalidRole(other.to_string())),
        }
    }
}

impl fmt::Display for AirportRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Origin => write!(f, "origin"),
            Self::Destination => write!(f, "dest"),
        }
    }
}

/// Pull the airport code and coordinates out of `placemark` into the
/// slot picked by `role`
pub(super) fn extract(
    draft: &mut Draft,
    placemark: Node,
    ns: &Namespaces,
    role: AirportRole,
) -> Result<(), TrackLogError> {
    // Eg.: `KMRY Monterey Regional`, only the code is kept
    let name = find_last(placemark, "default:name", ns)?
        .and_then(|n| n.text())
        .ok_or_else(|| TrackLogError::Structure(format!("{} placemark without name", role)))?;
    let code = name
        .split_whitespace()
        .next()
        .ok_or_else(|| TrackLogError::Structure(format!("{} placemark name is blank", role)))?
        .to_string();

    let point = find_last(placemark, "default:Point", ns)?
        .ok_or_else(|| TrackLogError::Structure(format!("{} placemark without Point", role)))?;
    let coordinates = find_last(point, "default:coordinates", ns)?
        .ok_or_else(|| {
            TrackLogError::Structure(format!("{} Point without coordinates", role))
        })?
        .text()
        .unwrap_or_default()
        .to_string();

    debug!("{} airport {} at {}", role, code, coordinates);

    match role {
        AirportRole::Origin => draft.origin = Some((code, coordinates)),
        AirportRole::Destination => draft.destination = Some((code, coordinates)),
    }

    Ok(())
}
