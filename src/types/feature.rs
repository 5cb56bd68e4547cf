use geojson::JsonObject;
use serde_json::Value;

/// Properties that are attached to a geojson feature
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureProperties {
    /// Kilometres
    pub distance: f64,
    pub name: Option<String>,
}

/// For converting FeatureProperties to geojson properties
impl From<FeatureProperties> for JsonObject {
    fn from(properties: FeatureProperties) -> Self {
        let mut object = JsonObject::new();
        object.insert("distance".to_string(), Value::from(properties.distance));
        object.insert(
            "name".to_string(),
            properties.name.map_or(Value::Null, Value::from),
        );
        object
    }
}
