//! Depth frame data types

use crate::depth_pipeline::common::error::{DepthError, Result};

/// Number of 16-bit channels per pixel: x, y, z, intensity.
pub const CHANNELS_PER_PIXEL: usize = 4;

/// Size of one channel in bits.
pub const CHANNEL_BITS: u32 = 16;

/// Raw z value the sensor writes when a pixel had no return (unsigned encoding).
pub const UNSIGNED_16BIT_MAX: u16 = u16::MAX;

/// Largest signed depth value, used to seed the nearest-point search.
pub const SIGNED_16BIT_MAX: i16 = i16::MAX;

/// How the 16-bit samples of a frame are to be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelEncoding {
    /// Two's complement samples, no offsets, every point valid.
    Signed16,
    /// Unsigned samples with x/y offsets and a 65535 "no return" z sentinel.
    Unsigned16,
}

/// Pixel format tag reported by the sensor for a buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PixelFormat {
    /// `Coord3D_ABCY16`: unsigned x, y, z, intensity.
    Coord3dAbcy16,
    /// `Coord3D_ABCY16s`: signed x, y, z, intensity.
    Coord3dAbcy16s,
    /// Any other format the sensor may be configured with.
    Other(String),
}

impl PixelFormat {
    /// Parses the sensor's format name.
    pub fn from_name(name: &str) -> Self {
        match name {
            "Coord3D_ABCY16" => PixelFormat::Coord3dAbcy16,
            "Coord3D_ABCY16s" => PixelFormat::Coord3dAbcy16s,
            other => PixelFormat::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            PixelFormat::Coord3dAbcy16 => "Coord3D_ABCY16",
            PixelFormat::Coord3dAbcy16s => "Coord3D_ABCY16s",
            PixelFormat::Other(name) => name,
        }
    }

    /// Maps the tag to the encoding used for decoding.
    ///
    /// Only the two 4-channel depth formats can be decoded; anything else is
    /// rejected here so the decoder never sees it.
    pub fn encoding(&self) -> Result<PixelEncoding> {
        match self {
            PixelFormat::Coord3dAbcy16 => Ok(PixelEncoding::Unsigned16),
            PixelFormat::Coord3dAbcy16s => Ok(PixelEncoding::Signed16),
            PixelFormat::Other(name) => Err(DepthError::UnsupportedFormat(name.clone())),
        }
    }
}

/// Per-axis conversion factors from raw units to millimeters.
///
/// Read once per session from the sensor configuration and held constant while
/// a frame is processed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisCalibration {
    pub scale_x: f64,
    pub scale_y: f64,
    pub scale_z: f64,
    /// Only applied under [`PixelEncoding::Unsigned16`].
    pub offset_x: f64,
    /// Only applied under [`PixelEncoding::Unsigned16`].
    pub offset_y: f64,
}

/// Scale the sensor SDK assumes when none is configured.
pub const DEFAULT_AXIS_SCALE: f64 = 0.25;

impl Default for AxisCalibration {
    fn default() -> Self {
        Self::uniform(DEFAULT_AXIS_SCALE)
    }
}

impl AxisCalibration {
    /// Same scale on every axis, no offsets.
    pub fn uniform(scale: f64) -> Self {
        Self {
            scale_x: scale,
            scale_y: scale,
            scale_z: scale,
            offset_x: 0.0,
            offset_y: 0.0,
        }
    }

    pub fn with_offsets(mut self, offset_x: f64, offset_y: f64) -> Self {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self
    }
}

/// One pixel of a depth frame converted to millimeters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecodedPoint {
    pub x_mm: f64,
    pub y_mm: f64,
    pub z_mm: f64,
    /// Raw intensity channel.
    pub intensity: i32,
    /// False for samples the sensor marked as having no depth.
    pub valid: bool,
}

impl DecodedPoint {
    pub(crate) fn invalid(intensity: i32) -> Self {
        Self {
            x_mm: 0.0,
            y_mm: 0.0,
            z_mm: 0.0,
            intensity,
            valid: false,
        }
    }
}

/// Shape and format of a depth buffer as reported by the sensor.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameLayout {
    pub width: usize,
    pub height: usize,
    pub bits_per_pixel: u32,
    pub pixel_format: PixelFormat,
}

impl FrameLayout {
    /// Layout of a 4-channel, 64 bits per pixel depth buffer.
    pub fn abcy16(width: usize, height: usize, pixel_format: PixelFormat) -> Self {
        Self {
            width,
            height,
            bits_per_pixel: CHANNEL_BITS * CHANNELS_PER_PIXEL as u32,
            pixel_format,
        }
    }

    pub fn channels_per_pixel(&self) -> u32 {
        self.bits_per_pixel / CHANNEL_BITS
    }

    /// Fails with `InvalidDimensions` when `width * height` overflows.
    pub fn pixel_count(&self) -> Result<usize> {
        self.width
            .checked_mul(self.height)
            .ok_or(DepthError::InvalidDimensions(self.width, self.height))
    }

    /// Number of 16-bit samples a buffer of this layout holds.
    pub fn sample_count(&self) -> Result<usize> {
        self.pixel_count()?
            .checked_mul(self.channels_per_pixel() as usize)
            .ok_or(DepthError::InvalidDimensions(self.width, self.height))
    }
}

/// Owned depth buffer, as handed over by a [`FrameReader`](super::FrameReader).
#[derive(Debug, Clone)]
pub struct FrameBuffer {
    pub layout: FrameLayout,
    /// Interleaved x, y, z, intensity samples, raster order.
    pub samples: Vec<u16>,
}

impl FrameBuffer {
    pub fn encoding(&self) -> Result<PixelEncoding> {
        self.layout.pixel_format.encoding()
    }

    /// Borrowed view for the decoding stages.
    pub fn as_raw_frame(&self) -> Result<RawFrame<'_>> {
        RawFrame::new(self.layout.width, self.layout.height, &self.samples)
    }
}

/// Immutable view over the 16-bit samples of one depth frame.
#[derive(Debug, Clone, Copy)]
pub struct RawFrame<'a> {
    width: usize,
    height: usize,
    samples: &'a [u16],
}

impl<'a> RawFrame<'a> {
    pub fn new(width: usize, height: usize, samples: &'a [u16]) -> Result<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|pixels| pixels.checked_mul(CHANNELS_PER_PIXEL))
            .ok_or(DepthError::InvalidDimensions(width, height))?;
        if samples.len() != expected {
            return Err(DepthError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            width,
            height,
            samples,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn pixel_count(&self) -> usize {
        self.samples.len() / CHANNELS_PER_PIXEL
    }

    /// Samples grouped per pixel as `[x, y, z, intensity]`.
    pub fn pixels(&self) -> std::slice::ChunksExact<'a, u16> {
        self.samples.chunks_exact(CHANNELS_PER_PIXEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raw_frame_rejects_wrong_length() {
        let samples = vec![0u16; 7];
        let result = RawFrame::new(1, 2, &samples);
        assert!(matches!(
            result,
            Err(DepthError::SampleCountMismatch { expected: 8, actual: 7 })
        ));
    }

    #[test]
    fn test_pixel_format_mapping() {
        assert_eq!(
            PixelFormat::from_name("Coord3D_ABCY16").encoding().unwrap(),
            PixelEncoding::Unsigned16
        );
        assert_eq!(
            PixelFormat::from_name("Coord3D_ABCY16s").encoding().unwrap(),
            PixelEncoding::Signed16
        );
        let other = PixelFormat::from_name("Mono8");
        assert_eq!(other.name(), "Mono8");
        assert!(matches!(other.encoding(), Err(DepthError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_layout_channels() {
        let layout = FrameLayout::abcy16(640, 480, PixelFormat::Coord3dAbcy16);
        assert_eq!(layout.bits_per_pixel, 64);
        assert_eq!(layout.channels_per_pixel(), 4);
        assert_eq!(layout.sample_count().unwrap(), 640 * 480 * 4);
    }

    #[test]
    fn test_overflowing_layout_is_rejected() {
        let layout = FrameLayout::abcy16(usize::MAX / 2, 4, PixelFormat::Coord3dAbcy16);
        assert!(matches!(
            layout.pixel_count(),
            Err(DepthError::InvalidDimensions(_, 4))
        ));
        assert!(matches!(
            layout.sample_count(),
            Err(DepthError::InvalidDimensions(_, 4))
        ));

        // Pixel count fits, sample count does not.
        let wide = FrameLayout::abcy16(usize::MAX / 4 + 1, 1, PixelFormat::Coord3dAbcy16);
        assert!(wide.pixel_count().is_ok());
        assert!(matches!(
            wide.sample_count(),
            Err(DepthError::InvalidDimensions(_, 1))
        ));
    }

    #[test]
    fn test_raw_frame_rejects_overflowing_dimensions() {
        let result = RawFrame::new(usize::MAX, 2, &[]);
        assert!(matches!(result, Err(DepthError::InvalidDimensions(usize::MAX, 2))));
    }
}
