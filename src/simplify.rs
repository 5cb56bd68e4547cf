use geo::EuclideanDistance;
use tracing::debug;

use crate::config::SimplifyConfig;
use crate::types::Track;

/// Drop points that lie within `threshold` degrees of the last kept point.
///
/// Single greedy pass: the first point is always kept, every later point is
/// kept only when it is strictly farther than `threshold` from the previous
/// kept one. Distances are measured in raw lon/lat degrees.
pub fn simplify(track: &Track, threshold: f64) -> Track {
    simplify_with(
        track,
        &SimplifyConfig {
            threshold,
            keep_endpoint: false,
        },
    )
}

pub fn simplify_with(track: &Track, config: &SimplifyConfig) -> Track {
    let mut points = track.points().enumerate();
    let Some((_, first)) = points.next() else {
        return track.clone();
    };

    let mut kept = vec![first];
    let mut last_kept = (0, first);
    for (index, point) in points {
        if last_kept.1.euclidean_distance(&point) > config.threshold {
            kept.push(point);
            last_kept = (index, point);
        }
    }

    if config.keep_endpoint && last_kept.0 + 1 < track.len() {
        if let Some(end) = track.points().last() {
            kept.push(end);
        }
    }

    debug!(
        "simplified track from {} to {} points",
        track.len(),
        kept.len()
    );
    Track::new(kept).with_name(track.name.clone())
}
