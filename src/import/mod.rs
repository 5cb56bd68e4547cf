pub mod gpx;

pub use self::gpx::{load_track, parse_track};
