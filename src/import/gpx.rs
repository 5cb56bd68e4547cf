use std::{
    fs::File,
    io::{BufReader, Read},
    path::Path,
};

use gpx::Gpx;
use tracing::{info, instrument};

use crate::error::ParseError;
use crate::types::Track;

/// Read every trackpoint of a GPX file, in document order.
#[instrument]
pub fn load_track(path: &Path) -> Result<Track, ParseError> {
    let file = File::open(path).map_err(|source| ParseError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;
    parse_track(BufReader::new(file))
}

pub fn parse_track<R: Read>(reader: R) -> Result<Track, ParseError> {
    let gpx_data = gpx::read(reader)?;
    gpx_data.into_track()
}

/// Conversion of an already parsed document. Documents read by `gpx::read`
/// never carry non-finite coordinates; a `Gpx` built in code can, and is
/// rejected with [`ParseError::InvalidCoordinate`].
pub trait IntoTrack {
    fn into_track(self) -> Result<Track, ParseError>;
}

impl IntoTrack for Gpx {
    fn into_track(self) -> Result<Track, ParseError> {
        info!("number of tracks in gpx: {}", self.tracks.len());
        let name = self
            .tracks
            .iter()
            .filter_map(|track| track.name.as_deref())
            .find(|name| !name.trim().is_empty())
            .map(str::to_string);

        // Segments of every track are concatenated, only lat/lon is kept
        let points = self
            .tracks
            .iter()
            .flat_map(|track| &track.segments)
            .flat_map(|segment| &segment.points)
            .map(|waypoint| waypoint.point())
            .enumerate()
            .map(|(index, point)| {
                if point.x().is_finite() && point.y().is_finite() {
                    Ok(point)
                } else {
                    Err(ParseError::InvalidCoordinate {
                        index,
                        lon: point.x(),
                        lat: point.y(),
                    })
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        if points.is_empty() {
            return Err(ParseError::NoTrackPoints);
        }
        info!("number of trackpoints: {}", points.len());
        Ok(Track::new(points).with_name(name))
    }
}
