//! Mercator projection of a track onto a canvas with real-world proportions.
//!
//! Projection is done in two passes: the whole track is measured first
//! ([`BoundingRegion::from_track`] and [`Projection::fit`]), then every
//! point is placed with the resulting fixed scale ([`Projection::apply`]).
//! Moving a single point can change the scale and so the position of all
//! the others.

use std::f64::consts::{FRAC_PI_4, PI};

use geo::MapCoords;
use geo_types::Coord;
use tracing::{info, instrument, warn};

use crate::config::ProjectionConfig;
use crate::error::{RouteError, RouteResult};
use crate::types::{BoundingRegion, CanvasSpec, PlanarPath, Track};

/// Kilometres per degree of latitude.
pub const LAT_KM_PER_DEGREE: f64 = 111.0;

/// Highest latitude the Mercator projection is evaluated at. Beyond it
/// `mercator_y` diverges to infinity at the poles.
pub const MAX_MERCATOR_LAT: f64 = 85.051_128_78;

/// Mercator `y` for a latitude in degrees, clamped to [`MAX_MERCATOR_LAT`].
pub fn mercator_y(lat: f64) -> f64 {
    let lat = lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
    (FRAC_PI_4 + lat * PI / 360.0).tan().ln()
}

/// Equirectangular estimate of a region's width and height in kilometres.
pub fn size_km(region: &BoundingRegion) -> (f64, f64) {
    let avg_lat = (region.min_lat + region.max_lat) / 2.0;
    let lon_km_per_degree = LAT_KM_PER_DEGREE * avg_lat.to_radians().cos();
    (
        region.lon_span() * lon_km_per_degree,
        region.lat_span() * LAT_KM_PER_DEGREE,
    )
}

/// Axes on which every point of the track had the same value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Degeneracy {
    pub longitude: bool,
    pub latitude: bool,
}

impl Degeneracy {
    pub fn any(&self) -> bool {
        self.longitude || self.latitude
    }

    /// Every point of the track coincides.
    pub fn is_single_point(&self) -> bool {
        self.longitude && self.latitude
    }
}

/// Fixed mapping from lon/lat to canvas coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Region actually mapped onto the canvas; equals the track's region
    /// unless an axis had to be widened.
    pub extent: BoundingRegion,
    pub canvas: CanvasSpec,
    pub width_km: f64,
    pub height_km: f64,
    pub degenerate: Degeneracy,
    lon_scale: f64,
    lat_scale: f64,
    min_mercator_y: f64,
}

impl Projection {
    pub fn fit(region: &BoundingRegion, config: &ProjectionConfig) -> Self {
        let mut clamped = *region;
        clamped.min_lat = clamped.min_lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
        clamped.max_lat = clamped.max_lat.clamp(-MAX_MERCATOR_LAT, MAX_MERCATOR_LAT);
        let (extent, degenerate) = widen_flat_axes(&clamped, config.min_extent_degrees);

        let min_mercator_y = mercator_y(extent.min_lat);
        let max_mercator_y = mercator_y(extent.max_lat);

        let (width_km, height_km) = size_km(&extent);
        let canvas = canvas_for(width_km / height_km, config);

        Self {
            extent,
            canvas,
            width_km,
            height_km,
            degenerate,
            lon_scale: f64::from(canvas.width) / extent.lon_span(),
            lat_scale: f64::from(canvas.height) / (max_mercator_y - min_mercator_y),
            min_mercator_y,
        }
    }

    /// Canvas position of a lon/lat coordinate, north up.
    pub fn apply(&self, coord: Coord<f64>) -> Coord<f64> {
        let x = (coord.x - self.extent.min_lon) * self.lon_scale;
        let y = f64::from(self.canvas.height)
            - (mercator_y(coord.y) - self.min_mercator_y) * self.lat_scale;
        Coord { x, y }
    }
}

/// Landscape routes get the base width, portrait routes the fixed height;
/// the other side follows the real-world aspect ratio.
fn canvas_for(aspect_ratio: f64, config: &ProjectionConfig) -> CanvasSpec {
    let (width, height) = if aspect_ratio > 1.0 {
        let width = config.base_width;
        (width, (f64::from(width) / aspect_ratio).floor() as u32)
    } else {
        let height = config.portrait_height;
        ((f64::from(height) * aspect_ratio).floor() as u32, height)
    };
    CanvasSpec {
        width: width.max(1),
        height: height.max(1),
    }
}

fn widen_flat_axes(region: &BoundingRegion, min_extent: f64) -> (BoundingRegion, Degeneracy) {
    let mut extent = *region;
    let degenerate = Degeneracy {
        longitude: region.lon_span() <= 0.0,
        latitude: region.lat_span() <= 0.0,
    };
    let half = min_extent / 2.0;
    if degenerate.longitude {
        extent.min_lon -= half;
        extent.max_lon += half;
    }
    if degenerate.latitude {
        extent.min_lat -= half;
        extent.max_lat += half;
    }
    (extent, degenerate)
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedRoute {
    pub canvas: CanvasSpec,
    pub path: PlanarPath,
    /// Region of the track itself, without any widening.
    pub region: BoundingRegion,
    pub width_km: f64,
    pub height_km: f64,
    pub degenerate: Degeneracy,
}

#[instrument(skip_all, fields(points = track.len()))]
pub fn project(track: &Track, config: &ProjectionConfig) -> RouteResult<ProjectedRoute> {
    let region = BoundingRegion::from_track(track).ok_or(RouteError::EmptyTrack)?;
    let projection = Projection::fit(&region, config);
    if projection.degenerate.is_single_point() {
        warn!("all trackpoints coincide, drawing a single point");
    } else if projection.degenerate.any() {
        warn!(
            "track has no extent along one axis: {:?}",
            projection.degenerate
        );
    }

    let path = PlanarPath::new(
        track
            .as_line_string()
            .map_coords(|coord| projection.apply(coord)),
    );
    info!(
        "projected onto {}x{} canvas ({:.3} x {:.3} km)",
        projection.canvas.width, projection.canvas.height, projection.width_km, projection.height_km
    );

    Ok(ProjectedRoute {
        canvas: projection.canvas,
        path,
        region,
        width_km: projection.width_km,
        height_km: projection.height_km,
        degenerate: projection.degenerate,
    })
}
