use crate::anim::{Easing, Repeat};

pub const DEFAULT_SIMPLIFY_THRESHOLD: f64 = 0.0001;
pub const DEFAULT_BASE_WIDTH: u32 = 3840;
pub const DEFAULT_PORTRAIT_HEIGHT: u32 = 800;
pub const DEFAULT_MIN_EXTENT_DEGREES: f64 = 1e-6;
pub const DEFAULT_DURATION_SECS: f64 = 60.0;
pub const DEFAULT_STROKE_COLOR: &str = "red";
pub const DEFAULT_PADDING: u32 = 20;

#[derive(Debug, Clone, PartialEq)]
pub struct SimplifyConfig {
    /// Minimum distance in degrees between two kept points.
    pub threshold: f64,
    /// Always finish on the last recorded point.
    pub keep_endpoint: bool,
}

impl Default for SimplifyConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMPLIFY_THRESHOLD,
            keep_endpoint: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionConfig {
    /// Canvas width for landscape routes.
    pub base_width: u32,
    /// Canvas height for portrait routes.
    pub portrait_height: u32,
    /// Extent substituted for an axis on which every point has the same value.
    pub min_extent_degrees: f64,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            base_width: DEFAULT_BASE_WIDTH,
            portrait_height: DEFAULT_PORTRAIT_HEIGHT,
            min_extent_degrees: DEFAULT_MIN_EXTENT_DEGREES,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub stroke_color: String,
    /// Margin around the canvas in the viewBox, in canvas units.
    pub padding: u32,
}

impl Default for SvgStyle {
    fn default() -> Self {
        Self {
            stroke_color: DEFAULT_STROKE_COLOR.to_string(),
            padding: DEFAULT_PADDING,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EmitConfig {
    pub duration_secs: f64,
    pub easing: Easing,
    pub repeat: Repeat,
    /// Fixed stroke width; derived from the route's area when unset.
    pub stroke_width: Option<f64>,
    pub style: SvgStyle,
}

impl Default for EmitConfig {
    fn default() -> Self {
        Self {
            duration_secs: DEFAULT_DURATION_SECS,
            easing: Easing::default(),
            repeat: Repeat::default(),
            stroke_width: None,
            style: SvgStyle::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineConfig {
    pub simplify: SimplifyConfig,
    pub projection: ProjectionConfig,
    pub emit: EmitConfig,
    /// Also write the simplified track as GeoJSON.
    pub write_geojson: bool,
}
