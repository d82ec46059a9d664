//! Flight track placemark extraction

use log::debug;
use roxmltree::Node;

use super::namespaces::{find_last, texts, Namespaces};
use super::Draft;
use crate::TrackLogError;

/// Pull the flight identifier and the `gx:Track` samples out of the
/// third placemark, then derive the flight date
pub(super) fn extract(
    draft: &mut Draft,
    placemark: Node,
    ns: &Namespaces,
) -> Result<(), TrackLogError> {
    let flight = find_last(placemark, "default:name", ns)?
        .and_then(|n| n.text())
        .ok_or_else(|| TrackLogError::structure("track placemark without name"))?;
    draft.flight_identifier = Some(flight.to_string());

    let track = find_last(placemark, "google:Track", ns)?
        .ok_or_else(|| TrackLogError::structure("track placemark without gx:Track"))?;

    if let Some(mode) = find_last(track, "default:altitudeMode", ns)? {
        draft.altitude_reference_mode = Some(mode.text().unwrap_or_default().to_string());
    }

    draft.timestamps = texts(track, "default:when", ns)?;
    draft.track_coordinates = texts(track, "google:coord", ns)?;

    if draft.timestamps.len() != draft.track_coordinates.len() {
        return Err(TrackLogError::Structure(format!(
            "{} when entries but {} gx:coord entries",
            draft.timestamps.len(),
            draft.track_coordinates.len()
        )));
    }

    let first = draft.timestamps.first().ok_or(TrackLogError::EmptyTrack)?;
    let date = first.split('T').next().unwrap_or_default();
    draft.flight_date = Some(date.to_string());

    debug!(
        "flight {} on {}, {} samples",
        flight,
        date,
        draft.timestamps.len()
    );

    Ok(())
}
