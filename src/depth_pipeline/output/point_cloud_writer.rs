use std::io::Write;

use crate::depth_pipeline::colorize::PointColorBuffer;
use crate::depth_pipeline::common::error::Result;
use crate::depth_pipeline::frame::{AxisCalibration, PixelEncoding, RawFrame};
use crate::depth_pipeline::output::types::ProcessingConfig;

pub trait PointCloudWriter {
    fn write_point_cloud(
        &self,
        raw: RawFrame<'_>,
        encoding: PixelEncoding,
        calib: AxisCalibration,
        colors: &PointColorBuffer,
        output: &mut dyn Write,
        config: &ProcessingConfig,
    ) -> Result<()>;
}
