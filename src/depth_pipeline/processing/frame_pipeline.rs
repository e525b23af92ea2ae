use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{info, instrument, warn};

use crate::depth_pipeline::{
    colorize::{HeatmapBuilder, PointColorBuilder},
    common::error::{DepthError, Result},
    extrema::{DepthExtremes, ExtremaFinder, PointReport},
    frame::{AxisCalibration, FrameDecoder, FrameLayout, FrameReader, PixelEncoding, RawDumpReader},
    output::{
        HeatmapWriter, PlyPointCloudWriter, PointCloudWriter, ProcessingConfig, TiffHeatmapWriter,
    },
    processing::timing::PipelineTimings,
};

/// Summary of one processed frame.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameReport {
    pub width: usize,
    pub height: usize,
    pub encoding: PixelEncoding,
    pub extremes: DepthExtremes,
    /// Pixels that carried a depth measurement.
    pub valid_points: usize,
}

/// Paths written by [`DepthPipeline::process_file`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub heatmap: PathBuf,
    pub point_cloud: Option<PathBuf>,
}

impl OutputPaths {
    /// `<stem>.tiff` and, if requested, `<stem>.ply`.
    pub fn for_stem(stem: &Path, point_cloud: bool) -> Self {
        Self {
            heatmap: with_suffix(stem, ".tiff"),
            point_cloud: point_cloud.then(|| with_suffix(stem, ".ply")),
        }
    }
}

fn with_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut path: OsString = stem.as_os_str().to_owned();
    path.push(suffix);
    PathBuf::from(path)
}

pub struct DepthPipeline<R: FrameReader, H: HeatmapWriter, P: PointCloudWriter> {
    reader: R,
    heatmap_writer: H,
    cloud_writer: P,
    config: ProcessingConfig,
}

impl DepthPipeline<RawDumpReader, TiffHeatmapWriter, PlyPointCloudWriter> {
    pub fn new(config: ProcessingConfig) -> Self {
        Self {
            reader: RawDumpReader,
            heatmap_writer: TiffHeatmapWriter,
            cloud_writer: PlyPointCloudWriter,
            config,
        }
    }
}

impl<R: FrameReader, H: HeatmapWriter, P: PointCloudWriter> DepthPipeline<R, H, P> {
    pub fn with_custom(reader: R, heatmap_writer: H, cloud_writer: P, config: ProcessingConfig) -> Self {
        Self {
            reader,
            heatmap_writer,
            cloud_writer,
            config,
        }
    }

    fn validate_dimensions(&self, width: usize, height: usize) -> Result<()> {
        if !self.config.validate_dimensions {
            return Ok(());
        }

        if width == 0 || height == 0 {
            return Err(DepthError::InvalidDimensions(width, height));
        }

        if let Some(max) = self.config.max_dimension {
            if width > max || height > max {
                warn!("Frame dimensions {}x{} exceed maximum {}", width, height, max);
                return Err(DepthError::InvalidDimensions(width, height));
            }
        }

        Ok(())
    }

    /// Decodes one raw frame and writes its heatmap and, when enabled, its
    /// colored point cloud.
    pub fn process(
        &self,
        input_data: &[u8],
        layout: &FrameLayout,
        calib: &AxisCalibration,
        heatmap_out: &mut dyn Write,
        cloud_out: &mut dyn Write,
    ) -> Result<FrameReport> {
        self.process_with_timings(input_data, layout, calib, heatmap_out, cloud_out)
            .map(|(report, _)| report)
    }

    #[instrument(skip_all, fields(input_size = input_data.len(), width = layout.width, height = layout.height))]
    pub fn process_with_timings(
        &self,
        input_data: &[u8],
        layout: &FrameLayout,
        calib: &AxisCalibration,
        heatmap_out: &mut dyn Write,
        cloud_out: &mut dyn Write,
    ) -> Result<(FrameReport, PipelineTimings)> {
        let mut timings = PipelineTimings::new();
        info!("Starting depth frame processing");

        timings.time("validate_dimensions", || {
            self.validate_dimensions(layout.width, layout.height)
        })?;

        let frame = timings.time("read_frame", || self.reader.read_frame(input_data, layout))?;
        if (frame.layout.width, frame.layout.height) != (layout.width, layout.height) {
            self.validate_dimensions(frame.layout.width, frame.layout.height)?;
        }
        let encoding = frame.encoding()?;
        let calib = *calib;
        let raw = frame.as_raw_frame()?;

        let (extremes, valid_points) = timings.time("find_extremes", || {
            let extremes = ExtremaFinder::find_extremes(raw, encoding, calib);
            let valid = FrameDecoder::new(raw, encoding, calib)
                .points()
                .filter(|p| p.valid)
                .count();
            (extremes, valid)
        });

        let heatmap = timings.time("build_heatmap", || HeatmapBuilder::build(raw, encoding, calib));
        timings.time("write_heatmap", || {
            self.heatmap_writer
                .write_heatmap(&heatmap, heatmap_out, &self.config)
        })?;

        if self.config.write_point_cloud {
            let colors = timings.time("build_point_colors", || {
                PointColorBuilder::build(raw, encoding, calib)
            });
            timings.time("write_point_cloud", || {
                self.cloud_writer
                    .write_point_cloud(raw, encoding, calib, &colors, cloud_out, &self.config)
            })?;
        }

        log_extremes(&extremes);
        info!(
            "Processing complete: {}x{}, {} valid points in {:.3}ms",
            raw.width(),
            raw.height(),
            valid_points,
            timings.total_duration().as_secs_f64() * 1000.0
        );

        let report = FrameReport {
            width: raw.width(),
            height: raw.height(),
            encoding,
            extremes,
            valid_points,
        };
        Ok((report, timings))
    }

    /// Reads a raw dump from `input_path` and writes `<stem>.tiff` and, when
    /// enabled, `<stem>.ply`.
    pub fn process_file<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input_path: P1,
        layout: &FrameLayout,
        calib: &AxisCalibration,
        output_stem: P2,
    ) -> Result<FrameReport> {
        self.process_file_with_timings(input_path, layout, calib, output_stem)
            .map(|(report, _)| report)
    }

    /// Like [`process_file`](Self::process_file), also returning per-step
    /// timings.
    ///
    /// Output files are only created once the frame has been fully processed,
    /// so a rejected frame leaves nothing behind.
    #[instrument(skip_all)]
    pub fn process_file_with_timings<P1: AsRef<Path>, P2: AsRef<Path>>(
        &self,
        input_path: P1,
        layout: &FrameLayout,
        calib: &AxisCalibration,
        output_stem: P2,
    ) -> Result<(FrameReport, PipelineTimings)> {
        let input_path = input_path.as_ref();
        let outputs = OutputPaths::for_stem(output_stem.as_ref(), self.config.write_point_cloud);

        info!(
            input = %input_path.display(),
            heatmap = %outputs.heatmap.display(),
            "Processing file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            std::fs::read(input_path).map_err(|e| {
                DepthError::InputReadError(format!("{}: {}", input_path.display(), e))
            })?
        };

        let mut heatmap_bytes = Vec::<u8>::new();
        let mut cloud_bytes = Vec::<u8>::new();
        let (report, mut timings) =
            self.process_with_timings(&input_data, layout, calib, &mut heatmap_bytes, &mut cloud_bytes)?;

        timings.time("write_files", || {
            write_output(&outputs.heatmap, &heatmap_bytes)?;
            if let Some(path) = &outputs.point_cloud {
                write_output(path, &cloud_bytes)?;
            }
            Ok::<_, DepthError>(())
        })?;

        Ok((report, timings))
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    let _span = tracing::info_span!("write_output_file", path = %path.display()).entered();
    std::fs::write(path, bytes)
        .map_err(|e| DepthError::OutputWriteError(format!("{}: {}", path.display(), e)))
}

fn log_extremes(extremes: &DepthExtremes) {
    if extremes.has_nearest() {
        info!("Minimum depth point found with {}", PointReport(&extremes.nearest));
    } else {
        info!("No valid minimum depth point in frame");
    }

    if extremes.has_farthest() {
        info!("Maximum depth point found with {}", PointReport(&extremes.farthest));
    } else {
        info!("No valid maximum depth point in frame");
    }
}
