use std::path::PathBuf;

pub type RouteResult<T> = Result<T, RouteError>;

/// Failures while turning a GPX document into a [`crate::types::Track`].
/// All of them abort the run before anything is written.
#[derive(thiserror::Error, Debug)]
pub enum ParseError {
    #[error("could not read {}: {source}", .path.display())]
    Unreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed gpx: {0}")]
    Malformed(#[from] gpx::errors::GpxError),

    #[error("trackpoint {index} has an invalid coordinate (lon {lon}, lat {lat})")]
    InvalidCoordinate { index: usize, lon: f64, lat: f64 },

    #[error("gpx contains no trackpoints")]
    NoTrackPoints,
}

#[derive(thiserror::Error, Debug)]
pub enum RouteError {
    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("track has no points to project")]
    EmptyTrack,

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("conversion task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
