use geojson::{Feature, GeoJson, Geometry, JsonObject};

use crate::error::RouteResult;
use crate::route_geo::{Distance, GeoJsonBbox};
use crate::types::{feature::FeatureProperties, Track};

pub trait IntoRouteFeature {
    fn into_route_feature(&self) -> Feature;
}

impl IntoRouteFeature for Track {
    fn into_route_feature(&self) -> Feature {
        let line = self.as_line_string();
        let bbox = line.geojson_bbox();
        Feature {
            bbox: bbox.clone(),
            geometry: Some(Geometry {
                bbox,
                value: line.into(),
                foreign_members: None,
            }),
            properties: Some(JsonObject::from(FeatureProperties {
                distance: self.distance(),
                name: self.name.clone(),
            })),
            ..Default::default()
        }
    }
}

pub fn to_geojson_string(track: &Track) -> RouteResult<String> {
    let geo_json = GeoJson::Feature(track.into_route_feature());
    Ok(serde_json::to_string_pretty(&geo_json)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_has_bbox_and_distance() {
        let track = Track::from_lon_lat(&[(10.0, 59.0), (10.0, 59.001), (10.5, 59.002)])
            .with_name(Some("Ridge".into()));
        let feature = track.into_route_feature();
        assert_eq!(feature.bbox, Some(vec![10.0, 59.0, 10.5, 59.002]));
        let distance = feature.property("distance").and_then(|d| d.as_f64()).unwrap();
        assert!((distance - track.distance()).abs() < 1e-12);
        assert_eq!(
            feature.property("name").and_then(|n| n.as_str()),
            Some("Ridge")
        );
        match feature.geometry.map(|g| g.value) {
            Some(geojson::Value::LineString(coords)) => assert_eq!(coords.len(), 3),
            other => panic!("unexpected geometry {other:?}"),
        }
    }

    #[test]
    fn serializes_as_feature() {
        let track = Track::from_lon_lat(&[(1.0, 2.0), (3.0, 4.0)]);
        let json = to_geojson_string(&track).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["type"], "Feature");
        assert_eq!(value["geometry"]["type"], "LineString");
        assert!(value["properties"]["name"].is_null());
    }
}
