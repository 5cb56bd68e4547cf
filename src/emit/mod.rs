//! Turns a projected route into the drawable artifact and the metadata
//! record, plus the serializers that write them out.

pub mod geojson;
pub mod meta;
pub mod svg;

use crate::anim::AnimationDescriptor;
use crate::config::EmitConfig;
use crate::projection::size_km;
use crate::types::{BoundingRegion, CanvasSpec, PlanarPath, RouteMetadata};

pub const MIN_STROKE_WIDTH: f64 = 0.1;
pub const MAX_STROKE_WIDTH: f64 = 5.0;

/// The route as something to draw: a polyline on a canvas and how to
/// reveal it.
#[derive(Debug, Clone, PartialEq)]
pub struct PathArtifact {
    pub canvas: CanvasSpec,
    pub path: PlanarPath,
    pub path_length: f64,
    pub stroke_width: f64,
    pub animation: AnimationDescriptor,
}

impl PathArtifact {
    /// Absolute move/line commands through every point.
    pub fn path_data(&self) -> String {
        self.path
            .coords()
            .enumerate()
            .map(|(i, c)| {
                let command = if i == 0 { 'M' } else { 'L' };
                format!("{command} {} {}", c.x, c.y)
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Thinner strokes for larger areas so long routes stay readable.
pub fn stroke_width_for(region: &BoundingRegion) -> f64 {
    let (width_km, height_km) = size_km(region);
    let area_km2 = width_km * height_km;
    (100.0 / area_km2.sqrt()).clamp(MIN_STROKE_WIDTH, MAX_STROKE_WIDTH)
}

pub fn emit(
    canvas: CanvasSpec,
    path: PlanarPath,
    path_length: f64,
    region: &BoundingRegion,
    total_distance: f64,
    config: &EmitConfig,
) -> (PathArtifact, RouteMetadata) {
    let animation = AnimationDescriptor::draw_path(
        path_length,
        config.duration_secs,
        config.easing,
        config.repeat,
    );
    let artifact = PathArtifact {
        canvas,
        path,
        path_length,
        stroke_width: config
            .stroke_width
            .unwrap_or_else(|| stroke_width_for(region)),
        animation,
    };
    let metadata = RouteMetadata::new(region, total_distance, path_length);
    (artifact, metadata)
}

#[cfg(test)]
mod tests {
    use geo_types::LineString;

    use super::*;
    use crate::anim::{Easing, Repeat};

    fn region() -> BoundingRegion {
        BoundingRegion {
            min_lat: 57.5,
            max_lat: 57.7,
            min_lon: 11.0,
            max_lon: 13.0,
        }
    }

    #[test]
    fn path_data_moves_then_lines() {
        let (artifact, _) = emit(
            CanvasSpec {
                width: 100,
                height: 50,
            },
            PlanarPath::new(LineString::from(vec![(0.0, 50.0), (25.5, 10.0), (100.0, 0.0)])),
            1.0,
            &region(),
            1.0,
            &EmitConfig::default(),
        );
        assert_eq!(artifact.path_data(), "M 0 50 L 25.5 10 L 100 0");
    }

    #[test]
    fn metadata_carries_region_and_metrics_verbatim() {
        let (artifact, meta) = emit(
            CanvasSpec {
                width: 3840,
                height: 1000,
            },
            PlanarPath::default(),
            4321.5,
            &region(),
            123.4,
            &EmitConfig::default(),
        );
        assert_eq!(meta.region(), region());
        assert_eq!(meta.center.lat, (57.5 + 57.7) / 2.0);
        assert_eq!(meta.center.lon, 12.0);
        assert_eq!(meta.total_distance, 123.4);
        assert_eq!(meta.real_path_length, 4321.5);
        assert_eq!(artifact.animation.from, 0.0);
        assert_eq!(artifact.animation.to, 4321.5);
        assert_eq!(artifact.animation.duration_secs, 60.0);
    }

    #[test]
    fn animation_follows_config() {
        let config = EmitConfig {
            duration_secs: 12.5,
            easing: Easing::EaseInOut,
            repeat: Repeat::Once,
            ..EmitConfig::default()
        };
        let (artifact, _) = emit(
            CanvasSpec {
                width: 10,
                height: 10,
            },
            PlanarPath::default(),
            7.0,
            &region(),
            1.0,
            &config,
        );
        assert_eq!(artifact.animation.duration_secs, 12.5);
        assert_eq!(artifact.animation.easing, Easing::EaseInOut);
        assert_eq!(artifact.animation.repeat, Repeat::Once);
    }

    #[test]
    fn stroke_width_is_clamped() {
        let tiny = BoundingRegion {
            min_lat: 57.0,
            max_lat: 57.0,
            min_lon: 12.0,
            max_lon: 12.0,
        };
        assert_eq!(stroke_width_for(&tiny), MAX_STROKE_WIDTH);
        let huge = BoundingRegion {
            min_lat: -60.0,
            max_lat: 60.0,
            min_lon: -170.0,
            max_lon: 170.0,
        };
        assert_eq!(stroke_width_for(&huge), MIN_STROKE_WIDTH);
        let medium = stroke_width_for(&region());
        assert!(medium > MIN_STROKE_WIDTH && medium < MAX_STROKE_WIDTH);
    }

    #[test]
    fn configured_stroke_width_wins() {
        let config = EmitConfig {
            stroke_width: Some(2.5),
            ..EmitConfig::default()
        };
        let (artifact, _) = emit(
            CanvasSpec {
                width: 10,
                height: 10,
            },
            PlanarPath::default(),
            0.0,
            &region(),
            0.0,
            &config,
        );
        assert_eq!(artifact.stroke_width, 2.5);
    }
}
