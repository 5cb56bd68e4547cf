use geo::{BoundingRect, EuclideanLength};
use geo_types::{CoordNum, LineString, Point, Rect};

use crate::types::{PlanarPath, Track};

pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// `[min_lon, min_lat, max_lon, max_lat]` of a geometry, the order GeoJSON
/// expects in a `bbox` member. `None` for an empty geometry.
pub trait GeoJsonBbox<N> {
    fn geojson_bbox(&self) -> Option<Vec<N>>;
}

impl<G, N> GeoJsonBbox<N> for G
where
    G: BoundingRect<N>,
    N: CoordNum,
{
    fn geojson_bbox(&self) -> Option<Vec<N>> {
        let rect: Option<Rect<N>> = self.bounding_rect().into();
        rect.map(|rect| {
            let (min, max) = (rect.min(), rect.max());
            vec![min.x, min.y, max.x, max.y]
        })
    }
}

/// Great-circle distance in kilometres between two lon/lat points.
pub fn haversine_km(a: Point<f64>, b: Point<f64>) -> f64 {
    let (lat1, lat2) = (a.y().to_radians(), b.y().to_radians());
    let dlat = lat2 - lat1;
    let dlon = (b.x() - a.x()).to_radians();
    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Geodesic length in kilometres, summed over consecutive points
pub trait Distance {
    fn distance(&self) -> f64;
}

impl Distance for LineString<f64> {
    fn distance(&self) -> f64 {
        self.0
            .windows(2)
            .map(|pair| haversine_km(pair[0].into(), pair[1].into()))
            .fold(0.0, |total, leg| total + leg)
    }
}

impl Distance for Track {
    fn distance(&self) -> f64 {
        self.as_line_string().distance()
    }
}

/// Length of a path in its own planar units.
pub trait PathLength {
    fn path_length(&self) -> f64;
}

impl PathLength for PlanarPath {
    fn path_length(&self) -> f64 {
        // Folded from +0.0 so a path without segments has length 0, not -0.
        self.as_line_string()
            .lines()
            .map(|line| line.euclidean_length())
            .fold(0.0, |total, segment| total + segment)
    }
}
