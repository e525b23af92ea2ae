use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use tracing::{error, info};

use tof_depth_rs::depth_pipeline::{
    AxisCalibration, DepthPipeline, FrameLayout, PixelFormat, ProcessingConfig, SensorKind,
    TiffCompression, capture_stem, create_session_dir,
};
use tof_depth_rs::depth_pipeline::session::DEFAULT_SESSION_ROOT;
use tof_depth_rs::logger;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Encoding {
    /// Coord3D_ABCY16
    Unsigned,
    /// Coord3D_ABCY16s
    Signed,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Compression {
    None,
    Lzw,
    Deflate,
}

#[derive(Parser)]
#[command(name = "tof-depth")]
#[command(about = "Colorize raw time-of-flight depth dumps into heatmaps and point clouds")]
#[command(version)]
struct Cli {
    /// Raw depth dump: little-endian x, y, z, intensity samples
    input: PathBuf,

    #[arg(long)]
    width: usize,

    #[arg(long)]
    height: usize,

    #[arg(short, long, value_enum, default_value = "unsigned")]
    format: Encoding,

    #[arg(long, default_value = "0.25")]
    scale_x: f64,

    #[arg(long, default_value = "0.25")]
    scale_y: f64,

    #[arg(long, default_value = "0.25")]
    scale_z: f64,

    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    offset_x: f64,

    #[arg(long, default_value = "0.0", allow_hyphen_values = true)]
    offset_y: f64,

    /// Output stem; `.tiff` and `.ply` are appended (default: new session directory)
    #[arg(short, long)]
    output: Option<PathBuf>,

    #[arg(long, value_enum, default_value = "none")]
    compression: Compression,

    /// Skip the colored point cloud
    #[arg(long)]
    no_point_cloud: bool,

    /// Keep vertices without depth in the point cloud
    #[arg(long)]
    keep_invalid_points: bool,

    /// Log per-step durations
    #[arg(long)]
    timings: bool,
}

fn main() -> anyhow::Result<()> {
    logger::init();

    let cli = Cli::parse();
    info!("Starting tof-depth...");

    let config = ProcessingConfig::builder()
        .compression(match cli.compression {
            Compression::None => TiffCompression::None,
            Compression::Lzw => TiffCompression::Lzw,
            Compression::Deflate => TiffCompression::Deflate,
        })
        .write_point_cloud(!cli.no_point_cloud)
        .filter_points(!cli.keep_invalid_points)
        .build();
    let pipeline = DepthPipeline::new(config);

    let pixel_format = match cli.format {
        Encoding::Unsigned => PixelFormat::Coord3dAbcy16,
        Encoding::Signed => PixelFormat::Coord3dAbcy16s,
    };
    let layout = FrameLayout::abcy16(cli.width, cli.height, pixel_format);
    let calib = AxisCalibration {
        scale_x: cli.scale_x,
        scale_y: cli.scale_y,
        scale_z: cli.scale_z,
        offset_x: cli.offset_x,
        offset_y: cli.offset_y,
    };
    info!("Calibration: {:?}", calib);

    let output_stem = match cli.output {
        Some(stem) => stem,
        None => {
            let dir = create_session_dir(Path::new(DEFAULT_SESSION_ROOT))?;
            dir.join(capture_stem(SensorKind::Tof, 1, 0))
        }
    };

    match pipeline.process_file_with_timings(&cli.input, &layout, &calib, &output_stem) {
        Ok((report, timings)) => {
            if cli.timings {
                timings.log_summary();
            }
            info!(
                "Processing successful: {} of {} points valid",
                report.valid_points,
                report.width * report.height
            );
        }
        Err(e) => {
            error!("Processing failed: {}", e);
            return Err(e.into());
        }
    }

    Ok(())
}
