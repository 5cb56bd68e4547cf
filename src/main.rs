use std::{path::PathBuf, sync::Arc};

use clap::Parser;
use color_eyre::eyre::{eyre, WrapErr};
use route_sketch::{
    anim::{Easing, Repeat},
    config::{
        EmitConfig, PipelineConfig, ProjectionConfig, SimplifyConfig, SvgStyle,
        DEFAULT_BASE_WIDTH, DEFAULT_DURATION_SECS, DEFAULT_MIN_EXTENT_DEGREES, DEFAULT_PADDING,
        DEFAULT_PORTRAIT_HEIGHT, DEFAULT_SIMPLIFY_THRESHOLD, DEFAULT_STROKE_COLOR,
    },
    convert_all, ConversionJob,
};
use tracing::{error, info};

/// Convert GPX tracks into animated SVG routes with viewer metadata.
#[derive(Parser, Debug)]
#[command(name = "route-sketch", version)]
struct Cli {
    /// GPX files to convert.
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Directory for the artifacts; defaults to each input's directory.
    #[arg(long, env = "ROUTE_SKETCH_OUT_DIR")]
    out_dir: Option<PathBuf>,

    /// Animation length in seconds.
    #[arg(long, env = "ROUTE_SKETCH_DURATION", default_value_t = DEFAULT_DURATION_SECS)]
    duration: f64,

    /// Minimum distance in degrees between kept trackpoints.
    #[arg(long, env = "ROUTE_SKETCH_THRESHOLD", default_value_t = DEFAULT_SIMPLIFY_THRESHOLD)]
    threshold: f64,

    /// Always keep the last recorded point.
    #[arg(long, env = "ROUTE_SKETCH_KEEP_ENDPOINT")]
    keep_endpoint: bool,

    /// Ease the drawing in and out instead of a constant speed.
    #[arg(long, env = "ROUTE_SKETCH_EASE")]
    ease: bool,

    /// Play the animation once and hold the last frame.
    #[arg(long, env = "ROUTE_SKETCH_ONCE")]
    once: bool,

    #[arg(long, env = "ROUTE_SKETCH_STROKE_COLOR", default_value = DEFAULT_STROKE_COLOR)]
    stroke_color: String,

    /// Fixed stroke width; derived from the route's area when omitted.
    #[arg(long, env = "ROUTE_SKETCH_STROKE_WIDTH")]
    stroke_width: Option<f64>,

    /// Margin around the canvas in the SVG viewBox.
    #[arg(long, env = "ROUTE_SKETCH_PADDING", default_value_t = DEFAULT_PADDING)]
    padding: u32,

    /// Canvas width for landscape routes.
    #[arg(long, env = "ROUTE_SKETCH_BASE_WIDTH", default_value_t = DEFAULT_BASE_WIDTH)]
    base_width: u32,

    /// Canvas height for portrait routes.
    #[arg(long, env = "ROUTE_SKETCH_PORTRAIT_HEIGHT", default_value_t = DEFAULT_PORTRAIT_HEIGHT)]
    portrait_height: u32,

    /// Also write the simplified track as GeoJSON.
    #[arg(long, env = "ROUTE_SKETCH_GEOJSON")]
    geojson: bool,

    /// Number of tracks converted at the same time.
    #[arg(long, env = "ROUTE_SKETCH_JOBS", default_value_t = 4)]
    jobs: usize,
}

impl Cli {
    fn pipeline_config(&self) -> PipelineConfig {
        PipelineConfig {
            simplify: SimplifyConfig {
                threshold: self.threshold,
                keep_endpoint: self.keep_endpoint,
            },
            projection: ProjectionConfig {
                base_width: self.base_width,
                portrait_height: self.portrait_height,
                min_extent_degrees: DEFAULT_MIN_EXTENT_DEGREES,
            },
            emit: EmitConfig {
                duration_secs: self.duration,
                easing: if self.ease {
                    Easing::EaseInOut
                } else {
                    Easing::Linear
                },
                repeat: if self.once {
                    Repeat::Once
                } else {
                    Repeat::Indefinite
                },
                stroke_width: self.stroke_width,
                style: SvgStyle {
                    stroke_color: self.stroke_color.clone(),
                    padding: self.padding,
                },
            },
            write_geojson: self.geojson,
        }
    }
}

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    // initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = Arc::new(cli.pipeline_config());

    if let Some(out_dir) = &cli.out_dir {
        std::fs::create_dir_all(out_dir)
            .wrap_err_with(|| format!("creating {}", out_dir.display()))?;
    }

    let jobs: Vec<ConversionJob> = cli
        .inputs
        .iter()
        .map(|input| ConversionJob::new(input, cli.out_dir.as_deref()))
        .collect();
    info!("converting {} track(s)", jobs.len());

    let results = convert_all(jobs.clone(), config, cli.jobs).await;

    let mut failed = 0;
    for (job, result) in jobs.iter().zip(results) {
        match result {
            Ok(route) => info!(
                "{} -> {} ({:.2} km, path length {:.1})",
                job.gpx_path.display(),
                job.svg_path.display(),
                route.metadata.total_distance,
                route.metadata.real_path_length
            ),
            Err(err) => {
                error!("{}: {err}", job.gpx_path.display());
                failed += 1;
            }
        }
    }

    if failed > 0 {
        return Err(eyre!("{failed} of {} track(s) failed", jobs.len()));
    }
    Ok(())
}
