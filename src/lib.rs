//! Turn a recorded GPX track into an animated SVG route plus the metadata a
//! map viewer needs to place and follow it.
//!
//! Pipeline: [`import::load_track`] → [`simplify::simplify`] →
//! [`projection::project`] → [`route_geo`] metrics → [`emit::emit`].

pub mod anim;
pub mod config;
pub mod emit;
pub mod error;
pub mod import;
pub mod pipeline;
pub mod projection;
pub mod route_geo;
pub mod simplify;
pub mod types;

pub use config::PipelineConfig;
pub use error::{ParseError, RouteError, RouteResult};
pub use pipeline::{build_route, convert, convert_all, ConversionJob, RouteOutput};
