pub mod feature;
pub mod region;
pub mod route_meta;
pub mod track;

pub use region::{BoundingRegion, CanvasSpec, LatLon};
pub use route_meta::RouteMetadata;
pub use track::{GeoPoint, PlanarPath, Track};
