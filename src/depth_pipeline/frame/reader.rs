use crate::depth_pipeline::common::error::Result;
use crate::depth_pipeline::frame::types::{FrameBuffer, FrameLayout};

pub trait FrameReader {
    fn read_frame(&self, data: &[u8], layout: &FrameLayout) -> Result<FrameBuffer>;
}
