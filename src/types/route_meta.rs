use serde::{Deserialize, Serialize};

use super::region::{BoundingRegion, LatLon};

/// Everything a viewer needs besides the drawable path: bounds, centering
/// and the mapping from drawn length to real distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteMetadata {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lon: f64,
    pub max_lon: f64,
    pub center: LatLon,
    /// Kilometres along the track.
    pub total_distance: f64,
    /// Length of the drawn path in canvas units.
    pub real_path_length: f64,
}

impl RouteMetadata {
    pub fn new(region: &BoundingRegion, total_distance: f64, path_length: f64) -> Self {
        Self {
            min_lat: region.min_lat,
            max_lat: region.max_lat,
            min_lon: region.min_lon,
            max_lon: region.max_lon,
            center: region.center(),
            total_distance,
            real_path_length: path_length,
        }
    }

    pub fn region(&self) -> BoundingRegion {
        BoundingRegion {
            min_lat: self.min_lat,
            max_lat: self.max_lat,
            min_lon: self.min_lon,
            max_lon: self.max_lon,
        }
    }

    /// Real distance covered once `drawn_length` of the path is visible.
    pub fn distance_at(&self, drawn_length: f64) -> f64 {
        if self.real_path_length <= 0.0 {
            return 0.0;
        }
        let progress = (drawn_length / self.real_path_length).clamp(0.0, 1.0);
        progress * self.total_distance
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> RouteMetadata {
        let region = BoundingRegion {
            min_lat: 57.5,
            max_lat: 57.75,
            min_lon: 11.75,
            max_lon: 12.25,
        };
        RouteMetadata::new(&region, 90.0, 4500.0)
    }

    #[test]
    fn serializes_with_viewer_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        let mut keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "center",
                "maxLat",
                "maxLon",
                "minLat",
                "minLon",
                "realPathLength",
                "totalDistance"
            ]
        );
        assert_eq!(value["center"]["lat"], 57.625);
        assert_eq!(value["center"]["lon"], 12.0);
    }

    #[test]
    fn distance_follows_drawn_fraction() {
        let meta = sample();
        assert_eq!(meta.distance_at(0.0), 0.0);
        assert_eq!(meta.distance_at(2250.0), 45.0);
        assert_eq!(meta.distance_at(4500.0), 90.0);
        assert_eq!(meta.distance_at(9000.0), 90.0);
    }

    #[test]
    fn zero_length_path_maps_to_zero_distance() {
        let region = BoundingRegion {
            min_lat: 1.0,
            max_lat: 1.0,
            min_lon: 2.0,
            max_lon: 2.0,
        };
        let meta = RouteMetadata::new(&region, 0.0, 0.0);
        assert_eq!(meta.distance_at(10.0), 0.0);
    }
}
