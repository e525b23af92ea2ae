//! Reader for raw depth buffer dumps.
//!
//! A dump is the sensor buffer's payload written out as-is: little-endian
//! 16-bit samples, four per pixel, in raster order. The dump carries no
//! header, so the shape and pixel format come from the [`FrameLayout`] the
//! sensor reported when the buffer was captured.

use tracing::debug;

use crate::depth_pipeline::common::error::{DepthError, Result};
use crate::depth_pipeline::frame::reader::FrameReader;
use crate::depth_pipeline::frame::types::{CHANNELS_PER_PIXEL, FrameBuffer, FrameLayout};

/// Reads headerless little-endian sample dumps.
pub struct RawDumpReader;

/// Size of one sample in bytes.
const SAMPLE_BYTES: usize = 2;

impl FrameReader for RawDumpReader {
    /// Decodes a dump into an owned [`FrameBuffer`].
    ///
    /// # Errors
    ///
    /// * `InvalidDimensions` if the layout has a zero width or height, or one
    ///   too large to address
    /// * `UnsupportedChannels` if the layout is not 4 channels of 16 bits
    /// * `DecodeError` if the byte count is odd
    /// * `SampleCountMismatch` if the sample count does not fit the layout
    fn read_frame(&self, data: &[u8], layout: &FrameLayout) -> Result<FrameBuffer> {
        debug!("Reading depth dump, {} bytes", data.len());

        if layout.width == 0 || layout.height == 0 {
            return Err(DepthError::InvalidDimensions(layout.width, layout.height));
        }

        let channels = layout.channels_per_pixel();
        if channels as usize != CHANNELS_PER_PIXEL {
            return Err(DepthError::UnsupportedChannels(channels));
        }

        if data.len() % SAMPLE_BYTES != 0 {
            return Err(DepthError::DecodeError(format!(
                "dump length {} is not a whole number of 16-bit samples",
                data.len()
            )));
        }

        let expected = layout.sample_count()?;
        let actual = data.len() / SAMPLE_BYTES;
        if actual != expected {
            return Err(DepthError::SampleCountMismatch { expected, actual });
        }

        let samples: Vec<u16> = data
            .chunks_exact(SAMPLE_BYTES)
            .map(|b| u16::from_le_bytes([b[0], b[1]]))
            .collect();

        debug!(
            "Read {}x{} frame, format {}",
            layout.width,
            layout.height,
            layout.pixel_format.name()
        );

        Ok(FrameBuffer {
            layout: layout.clone(),
            samples,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::depth_pipeline::frame::types::PixelFormat;

    fn dump(samples: &[u16]) -> Vec<u8> {
        samples.iter().flat_map(|s| s.to_le_bytes()).collect()
    }

    #[test]
    fn test_reads_little_endian_samples() {
        let layout = FrameLayout::abcy16(1, 1, PixelFormat::Coord3dAbcy16s);
        let frame = RawDumpReader
            .read_frame(&dump(&[1, 0x0102, 0xFFFB, 42]), &layout)
            .unwrap();
        assert_eq!(frame.samples, vec![1, 0x0102, 0xFFFB, 42]);
        assert_eq!(frame.layout, layout);
    }

    #[test]
    fn test_rejects_zero_dimensions() {
        let layout = FrameLayout::abcy16(0, 4, PixelFormat::Coord3dAbcy16);
        let result = RawDumpReader.read_frame(&[], &layout);
        assert!(matches!(result, Err(DepthError::InvalidDimensions(0, 4))));
    }

    #[test]
    fn test_rejects_wrong_channel_count() {
        let mut layout = FrameLayout::abcy16(1, 1, PixelFormat::Coord3dAbcy16);
        layout.bits_per_pixel = 48;
        let result = RawDumpReader.read_frame(&dump(&[0, 0, 0]), &layout);
        assert!(matches!(result, Err(DepthError::UnsupportedChannels(3))));
    }

    #[test]
    fn test_rejects_odd_byte_count() {
        let layout = FrameLayout::abcy16(1, 1, PixelFormat::Coord3dAbcy16);
        let result = RawDumpReader.read_frame(&[0u8; 7], &layout);
        assert!(matches!(result, Err(DepthError::DecodeError(_))));
    }

    #[test]
    fn test_rejects_short_dump() {
        let layout = FrameLayout::abcy16(2, 1, PixelFormat::Coord3dAbcy16);
        let result = RawDumpReader.read_frame(&dump(&[0; 4]), &layout);
        assert!(matches!(
            result,
            Err(DepthError::SampleCountMismatch { expected: 8, actual: 4 })
        ));
    }

    #[test]
    fn test_rejects_overflowing_layout() {
        let layout = FrameLayout::abcy16(usize::MAX / 2, 4, PixelFormat::Coord3dAbcy16);
        let result = RawDumpReader.read_frame(&[], &layout);
        assert!(matches!(result, Err(DepthError::InvalidDimensions(_, 4))));
    }
}
