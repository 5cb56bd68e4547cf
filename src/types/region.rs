use geo::BoundingRect;
use serde::{Deserialize, Serialize};

use super::track::Track;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// Min/max latitude and longitude of a whole track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingRegion {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
}

impl BoundingRegion {
    /// `None` for an empty track.
    pub fn from_track(track: &Track) -> Option<Self> {
        let rect = track.as_line_string().bounding_rect()?;
        Some(Self {
            min_lat: rect.min().y,
            max_lat: rect.max().y,
            min_lon: rect.min().x,
            max_lon: rect.max().x,
        })
    }

    pub fn lat_span(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn lon_span(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Midpoint of the box on each axis. This is not the centroid of the
    /// track itself.
    pub fn center(&self) -> LatLon {
        LatLon {
            lat: (self.min_lat + self.max_lat) / 2.0,
            lon: (self.min_lon + self.max_lon) / 2.0,
        }
    }
}

/// Size of the drawing surface in output units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
}
