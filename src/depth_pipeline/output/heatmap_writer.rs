use std::io::Write;

use crate::depth_pipeline::colorize::HeatmapImage;
use crate::depth_pipeline::common::error::Result;
use crate::depth_pipeline::output::types::ProcessingConfig;

pub trait HeatmapWriter {
    fn write_heatmap(
        &self,
        image: &HeatmapImage,
        output: &mut dyn Write,
        config: &ProcessingConfig,
    ) -> Result<()>;
}
