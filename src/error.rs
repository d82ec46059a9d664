//! Track log errors

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while reading a track log
#[derive(Debug, Error)]
pub enum TrackLogError {
    #[error("File does not exist {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed on read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed XML: {0}")]
    Xml(#[from] roxmltree::Error),
    #[error("Unexpected document structure: {0}")]
    Structure(String),
    #[error("Invalid placemark role `{0}`, expected `origin` or `dest`")]
    InvalidRole(String),
    #[error("Track has no samples, the flight date can not be derived")]
    EmptyTrack,
    #[error("Unknown namespace prefix in `{0}`")]
    Namespace(String),
    #[error("Invalid coordinates `{0}`")]
    Coordinates(String),
    #[error("Invalid timestamp `{value}`: {source}")]
    Timestamp {
        value: String,
        #[source]
        source: time::error::Parse,
    },
}

impl TrackLogError {
    pub(crate) fn structure<S: Into<String>>(msg: S) -> Self {
        Self::Structure(msg.into())
    }
}
