use geo_types::{Coord, LineString, Point};

/// A recorded position, `x` is longitude and `y` is latitude (degrees).
pub type GeoPoint = Point<f64>;

/// Ordered geographic points in recording order.
#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub name: Option<String>,
    line: LineString<f64>,
}

impl Default for Track {
    fn default() -> Self {
        Self {
            name: None,
            line: LineString::new(vec![]),
        }
    }
}

impl Track {
    pub fn new(points: impl IntoIterator<Item = GeoPoint>) -> Self {
        Self {
            name: None,
            line: points.into_iter().map(|p| p.0).collect(),
        }
    }

    /// Build a track from `(longitude, latitude)` pairs.
    pub fn from_lon_lat(pairs: &[(f64, f64)]) -> Self {
        Self::new(pairs.iter().map(|&(lon, lat)| Point::new(lon, lat)))
    }

    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = name;
        self
    }

    pub fn points(&self) -> impl Iterator<Item = GeoPoint> + '_ {
        self.line.points()
    }

    pub fn len(&self) -> usize {
        self.line.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.line.0.is_empty()
    }

    pub fn as_line_string(&self) -> &LineString<f64> {
        &self.line
    }
}

/// Track positions in drawing-surface units. `y` grows southwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PlanarPath(LineString<f64>);

impl Default for PlanarPath {
    fn default() -> Self {
        Self(LineString::new(vec![]))
    }
}

impl PlanarPath {
    pub fn new(line: LineString<f64>) -> Self {
        Self(line)
    }

    pub fn coords(&self) -> impl Iterator<Item = &Coord<f64>> + '_ {
        self.0.coords()
    }

    pub fn len(&self) -> usize {
        self.0 .0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0 .0.is_empty()
    }

    pub fn as_line_string(&self) -> &LineString<f64> {
        &self.0
    }
}
