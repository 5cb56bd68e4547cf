use std::{
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
    sync::Arc,
};

use futures::{stream, StreamExt};
use tracing::{info, instrument};

use crate::config::PipelineConfig;
use crate::emit::{self, meta, svg, PathArtifact};
use crate::error::{RouteError, RouteResult};
use crate::import::load_track;
use crate::projection::{project, Degeneracy};
use crate::route_geo::{Distance, PathLength};
use crate::simplify::simplify_with;
use crate::types::{RouteMetadata, Track};

/// One GPX file and where its artifacts go.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionJob {
    pub gpx_path: PathBuf,
    pub svg_path: PathBuf,
}

impl ConversionJob {
    /// Artifacts are named after the GPX file, in `out_dir` or beside the input.
    pub fn new(gpx_path: &Path, out_dir: Option<&Path>) -> Self {
        let file_name = gpx_path
            .file_stem()
            .map(|stem| Path::new(stem).with_extension("svg"))
            .unwrap_or_else(|| PathBuf::from("route.svg"));
        let dir = out_dir
            .map(Path::to_path_buf)
            .or_else(|| gpx_path.parent().map(Path::to_path_buf))
            .unwrap_or_default();
        Self {
            gpx_path: gpx_path.to_path_buf(),
            svg_path: dir.join(file_name),
        }
    }

    pub fn metadata_path(&self) -> PathBuf {
        meta::metadata_path(&self.svg_path)
    }

    pub fn geojson_path(&self) -> PathBuf {
        self.svg_path.with_extension("geojson")
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RouteOutput {
    /// The simplified track that was drawn.
    pub track: Track,
    pub artifact: PathArtifact,
    pub metadata: RouteMetadata,
    pub degenerate: Degeneracy,
}

/// Simplify, project, measure and emit a loaded track. No I/O.
pub fn build_route(track: &Track, config: &PipelineConfig) -> RouteResult<RouteOutput> {
    let simplified = simplify_with(track, &config.simplify);
    let projected = project(&simplified, &config.projection)?;

    let path_length = projected.path.path_length();
    let total_distance = simplified.distance();

    let (artifact, metadata) = emit::emit(
        projected.canvas,
        projected.path,
        path_length,
        &projected.region,
        total_distance,
        &config.emit,
    );
    Ok(RouteOutput {
        track: simplified,
        artifact,
        metadata,
        degenerate: projected.degenerate,
    })
}

/// Run the whole pipeline for one file and write its artifacts.
///
/// Everything is rendered before the first file is created, so a bad
/// input never leaves partial output behind.
#[instrument(skip(config), fields(gpx = %job.gpx_path.display()))]
pub fn convert(job: &ConversionJob, config: &PipelineConfig) -> RouteResult<RouteOutput> {
    let track = load_track(&job.gpx_path)?;
    let route = build_route(&track, config)?;

    let svg_document = svg::render(
        &route.artifact,
        &config.emit.style,
        route.track.name.as_deref(),
    );
    let metadata_json = meta::to_json(&route.metadata)?;
    let geojson = if config.write_geojson {
        Some(emit::geojson::to_geojson_string(&route.track)?)
    } else {
        None
    };

    write_artifact(&job.svg_path, &svg_document)?;
    write_artifact(&job.metadata_path(), &metadata_json)?;
    if let Some(geojson) = geojson {
        write_artifact(&job.geojson_path(), &geojson)?;
    }

    info!(
        "wrote {} ({} points, {:.2} km)",
        job.svg_path.display(),
        route.artifact.path.len(),
        route.metadata.total_distance
    );
    Ok(route)
}

fn write_artifact(path: &Path, contents: &str) -> RouteResult<()> {
    let write = || -> std::io::Result<()> {
        let mut writer = BufWriter::new(File::create(path)?);
        writer.write_all(contents.as_bytes())?;
        writer.flush()
    };
    write().map_err(|source| RouteError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Convert independent tracks concurrently, at most `concurrency` at a
/// time. Results come back in job order.
pub async fn convert_all(
    jobs: Vec<ConversionJob>,
    config: Arc<PipelineConfig>,
    concurrency: usize,
) -> Vec<RouteResult<RouteOutput>> {
    stream::iter(jobs)
        .map(|job| {
            let config = config.clone();
            async move {
                match tokio::task::spawn_blocking(move || convert(&job, &config)).await {
                    Ok(result) => result,
                    Err(err) => Err(err.into()),
                }
            }
        })
        .buffered(concurrency.max(1))
        .collect()
        .await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn job_names_artifacts_after_input() {
        let job = ConversionJob::new(Path::new("data/Sandsjobacka_Trail.gpx"), None);
        assert_eq!(job.svg_path, PathBuf::from("data/Sandsjobacka_Trail.svg"));
        assert_eq!(job.metadata_path(), PathBuf::from("data/Sandsjobacka_Trail.json"));
        assert_eq!(job.geojson_path(), PathBuf::from("data/Sandsjobacka_Trail.geojson"));

        let job = ConversionJob::new(Path::new("data/loop.gpx"), Some(Path::new("public")));
        assert_eq!(job.svg_path, PathBuf::from("public/loop.svg"));
    }

    #[test]
    fn path_has_one_point_per_simplified_point() {
        let track = Track::from_lon_lat(&[
            (11.95, 57.60),
            (11.95001, 57.60001),
            (11.96, 57.61),
            (11.97, 57.605),
            (11.97, 57.605),
            (11.98, 57.62),
        ]);
        let config = PipelineConfig::default();
        let route = build_route(&track, &config).unwrap();
        let simplified = simplify_with(&track, &config.simplify);
        assert_eq!(route.artifact.path.len(), simplified.len());
        assert_eq!(route.track, simplified);
        assert_eq!(route.artifact.path.len(), 4);
    }

    #[test]
    fn meridian_scenario() {
        let track = Track::from_lon_lat(&[(10.0, 59.0), (10.0, 59.001), (10.0, 59.002)]);
        let route = build_route(&track, &PipelineConfig::default()).unwrap();
        assert_eq!(route.artifact.canvas.height, 800);
        assert!(route.artifact.canvas.width < route.artifact.canvas.height);
        let distance = route.metadata.total_distance;
        assert!((distance - 0.222).abs() < 0.222 * 0.01, "{distance}");
        assert!(route.artifact.path_length > 0.0);
    }

    #[test]
    fn single_point_scenario() {
        let track = Track::from_lon_lat(&[(12.0, 57.0)]);
        let route = build_route(&track, &PipelineConfig::default()).unwrap();
        assert_eq!(route.artifact.path.len(), 1);
        assert_eq!(route.artifact.path_length, 0.0);
        assert_eq!(route.metadata.total_distance, 0.0);
        assert!(route.degenerate.is_single_point());
        assert!(route.artifact.canvas.width >= 1 && route.artifact.canvas.height >= 1);
    }

    #[test]
    fn path_length_is_zero_only_for_coincident_points() {
        let still = Track::from_lon_lat(&[(12.0, 57.0), (12.0, 57.0), (12.0, 57.0)]);
        let route = build_route(&still, &PipelineConfig::default()).unwrap();
        assert_eq!(route.artifact.path_length, 0.0);

        let moving = Track::from_lon_lat(&[(12.0, 57.0), (12.001, 57.0)]);
        let route = build_route(&moving, &PipelineConfig::default()).unwrap();
        assert!(route.artifact.path_length > 0.0);
    }
}
