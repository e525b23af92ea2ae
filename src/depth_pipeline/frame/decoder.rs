//! Per-pixel decoding of interleaved x, y, z, intensity samples.

use crate::depth_pipeline::frame::convert::convert;
use crate::depth_pipeline::frame::types::{
    AxisCalibration, DecodedPoint, PixelEncoding, RawFrame, UNSIGNED_16BIT_MAX,
};

type DecodeFn = fn(&[u16], &AxisCalibration) -> DecodedPoint;

/// Decodes the pixels of a [`RawFrame`] under a fixed encoding and calibration.
///
/// The decoder is a cheap value: it borrows the frame, copies the calibration
/// and picks the per-pixel strategy once. [`FrameDecoder::points`] can be
/// called any number of times and always yields the same sequence.
#[derive(Debug, Clone, Copy)]
pub struct FrameDecoder<'a> {
    raw: RawFrame<'a>,
    calib: AxisCalibration,
    decode_pixel: DecodeFn,
}

impl<'a> FrameDecoder<'a> {
    pub fn new(raw: RawFrame<'a>, encoding: PixelEncoding, calib: AxisCalibration) -> Self {
        let decode_pixel: DecodeFn = match encoding {
            PixelEncoding::Signed16 => decode_signed,
            PixelEncoding::Unsigned16 => decode_unsigned,
        };
        Self {
            raw,
            calib,
            decode_pixel,
        }
    }

    /// Decoded points in raster order, one per pixel.
    pub fn points(self) -> impl ExactSizeIterator<Item = DecodedPoint> + 'a {
        let Self {
            raw,
            calib,
            decode_pixel,
        } = self;
        raw.pixels().map(move |pixel| decode_pixel(pixel, &calib))
    }
}

/// Convenience wrapper building a [`FrameDecoder`] and returning its points.
pub fn decode<'a>(
    raw: RawFrame<'a>,
    encoding: PixelEncoding,
    calib: AxisCalibration,
) -> impl ExactSizeIterator<Item = DecodedPoint> + 'a {
    FrameDecoder::new(raw, encoding, calib).points()
}

fn decode_signed(pixel: &[u16], calib: &AxisCalibration) -> DecodedPoint {
    let x = pixel[0] as i16 as i32;
    let y = pixel[1] as i16 as i32;
    let z = pixel[2] as i16 as i32;
    let intensity = pixel[3] as i16 as i32;

    DecodedPoint {
        x_mm: convert(x, calib.scale_x, 0.0, false),
        y_mm: convert(y, calib.scale_y, 0.0, false),
        z_mm: convert(z, calib.scale_z, 0.0, false),
        intensity,
        valid: true,
    }
}

fn decode_unsigned(pixel: &[u16], calib: &AxisCalibration) -> DecodedPoint {
    let intensity = pixel[3] as i32;
    if pixel[2] == UNSIGNED_16BIT_MAX {
        return DecodedPoint::invalid(intensity);
    }

    // z is scaled with scale_y, not scale_z.
    DecodedPoint {
        x_mm: convert(pixel[0] as i32, calib.scale_x, calib.offset_x, true),
        y_mm: convert(pixel[1] as i32, calib.scale_y, calib.offset_y, true),
        z_mm: convert(pixel[2] as i32, calib.scale_y, 0.0, false),
        intensity,
        valid: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calib() -> AxisCalibration {
        AxisCalibration {
            scale_x: 0.5,
            scale_y: 0.25,
            scale_z: 1.0,
            offset_x: -100.0,
            offset_y: 20.0,
        }
    }

    #[test]
    fn test_signed_decoding_ignores_offsets() {
        let samples = [(-40i16) as u16, 8, 750, 42];
        let raw = RawFrame::new(1, 1, &samples).unwrap();
        let points: Vec<_> = decode(raw, PixelEncoding::Signed16, calib()).collect();

        assert_eq!(points.len(), 1);
        let p = points[0];
        assert_eq!(p.x_mm, -20.0);
        assert_eq!(p.y_mm, 2.0);
        assert_eq!(p.z_mm, 750.0);
        assert_eq!(p.intensity, 42);
        assert!(p.valid);
    }

    #[test]
    fn test_signed_max_unsigned_value_is_negative_one() {
        let samples = [0, 0, u16::MAX, 0];
        let raw = RawFrame::new(1, 1, &samples).unwrap();
        let p = decode(raw, PixelEncoding::Signed16, AxisCalibration::uniform(1.0))
            .next()
            .unwrap();
        assert!(p.valid);
        assert_eq!(p.z_mm, -1.0);
    }

    #[test]
    fn test_unsigned_uses_offsets_and_scale_y_for_z() {
        let samples = [400, 40, 1000, 7];
        let raw = RawFrame::new(1, 1, &samples).unwrap();
        let p = decode(raw, PixelEncoding::Unsigned16, calib()).next().unwrap();

        assert_eq!(p.x_mm, 100.0);
        assert_eq!(p.y_mm, 30.0);
        // scale_y (0.25), not scale_z (1.0)
        assert_eq!(p.z_mm, 250.0);
        assert_eq!(p.intensity, 7);
        assert!(p.valid);
    }

    #[test]
    fn test_unsigned_no_return_sentinel() {
        let samples = [400, 40, u16::MAX, 9];
        let raw = RawFrame::new(1, 1, &samples).unwrap();
        let p = decode(raw, PixelEncoding::Unsigned16, calib()).next().unwrap();
        assert!(!p.valid);
        assert_eq!(p.intensity, 9);
    }

    #[test]
    fn test_points_are_restartable_and_in_raster_order() {
        let samples = [0, 0, 10, 1, 0, 0, 20, 2, 0, 0, 30, 3, 0, 0, 40, 4];
        let raw = RawFrame::new(2, 2, &samples).unwrap();
        let decoder = FrameDecoder::new(raw, PixelEncoding::Signed16, AxisCalibration::uniform(1.0));

        let first: Vec<_> = decoder.points().map(|p| p.z_mm).collect();
        let second: Vec<_> = decoder.points().map(|p| p.z_mm).collect();
        assert_eq!(first, vec![10.0, 20.0, 30.0, 40.0]);
        assert_eq!(first, second);
        assert_eq!(decoder.points().len(), 4);
    }
}
