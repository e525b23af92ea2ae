//! Output writing module
//!
//! Writers that persist the colorized buffers: heatmaps as TIFF images and
//! colored point clouds as PLY files. Both sit behind traits so the pipeline
//! can be driven with other encoders.

mod heatmap_writer;
mod ply_point_cloud_writer;
mod point_cloud_writer;
mod tiff_heatmap_writer;
pub mod types;

pub use heatmap_writer::HeatmapWriter;
pub use ply_point_cloud_writer::PlyPointCloudWriter;
pub use point_cloud_writer::PointCloudWriter;
pub use tiff_heatmap_writer::TiffHeatmapWriter;
pub use types::{ProcessingConfig, ProcessingConfigBuilder, TiffCompression};
