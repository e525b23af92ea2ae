//! Depth frame module
//!
//! Raw 4-channel depth buffers, their calibration, and per-pixel decoding to
//! millimeter coordinates.

pub mod convert;
mod decoder;
mod raw_dump_reader;
mod reader;
pub mod types;

pub use convert::convert;
pub use decoder::{FrameDecoder, decode};
pub use raw_dump_reader::RawDumpReader;
pub use reader::FrameReader;
pub use types::{
    AxisCalibration, DecodedPoint, FrameBuffer, FrameLayout, PixelEncoding, PixelFormat,
    RawFrame,
};
