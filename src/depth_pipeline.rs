//! Depth processing pipeline module
//!
//! Decodes raw time-of-flight point-cloud buffers to millimeters, colorizes
//! them by depth, finds their nearest and farthest points, and writes the
//! results as heatmap images and colored point clouds.

pub mod colorize;
pub mod common;
pub mod extrema;
pub mod frame;
pub mod output;
pub mod processing;
pub mod session;

pub use common::{DepthError, Result};

pub use frame::{
    AxisCalibration, DecodedPoint, FrameBuffer, FrameDecoder, FrameLayout, FrameReader,
    PixelEncoding, PixelFormat, RawDumpReader, RawFrame,
};

pub use colorize::{
    HeatmapBuilder, HeatmapImage, PointColorBuffer, PointColorBuilder, color_for_depth,
};

pub use extrema::{DepthExtremes, ExtremaFinder};

pub use output::{
    HeatmapWriter, PlyPointCloudWriter, PointCloudWriter, ProcessingConfig,
    ProcessingConfigBuilder, TiffCompression, TiffHeatmapWriter,
};

pub use processing::{DepthPipeline, FrameReport, PipelineTimings};

pub use session::{SensorKind, capture_stem, create_session_dir};
