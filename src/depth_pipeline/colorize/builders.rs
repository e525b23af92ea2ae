use crate::depth_pipeline::colorize::ramp::color_for_depth;
use crate::depth_pipeline::colorize::types::{COLOR_CHANNELS, HeatmapImage, PointColorBuffer};
use crate::depth_pipeline::frame::{AxisCalibration, FrameDecoder, PixelEncoding, RawFrame};

#[derive(Debug, Clone, Copy)]
enum ChannelOrder {
    Bgr,
    Rgb,
}

/// Builds the BGR heatmap handed to image writers.
pub struct HeatmapBuilder;

impl HeatmapBuilder {
    pub fn build(raw: RawFrame<'_>, encoding: PixelEncoding, calib: AxisCalibration) -> HeatmapImage {
        HeatmapImage {
            width: raw.width(),
            height: raw.height(),
            data: colorize(raw, encoding, calib, ChannelOrder::Bgr),
        }
    }
}

/// Builds the RGB vertex colors handed to point-cloud writers.
pub struct PointColorBuilder;

impl PointColorBuilder {
    pub fn build(
        raw: RawFrame<'_>,
        encoding: PixelEncoding,
        calib: AxisCalibration,
    ) -> PointColorBuffer {
        PointColorBuffer {
            width: raw.width(),
            height: raw.height(),
            data: colorize(raw, encoding, calib, ChannelOrder::Rgb),
        }
    }
}

// Shared by both builders.
fn colorize(
    raw: RawFrame<'_>,
    encoding: PixelEncoding,
    calib: AxisCalibration,
    order: ChannelOrder,
) -> Vec<u8> {
    let mut data = Vec::with_capacity(raw.pixel_count() * COLOR_CHANNELS);

    for point in FrameDecoder::new(raw, encoding, calib).points() {
        let (red, green, blue) = if point.valid {
            color_for_depth(point.z_mm)
        } else {
            (0, 0, 0)
        };

        match order {
            ChannelOrder::Bgr => data.extend_from_slice(&[blue, green, red]),
            ChannelOrder::Rgb => data.extend_from_slice(&[red, green, blue]),
        }
    }

    data
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_green_boundary_pixel() {
        let samples = [0, 0, 750, 42];
        let raw = RawFrame::new(1, 1, &samples).unwrap();
        let calib = AxisCalibration::uniform(1.0);

        let heatmap = HeatmapBuilder::build(raw, PixelEncoding::Signed16, calib);
        assert_eq!((heatmap.width, heatmap.height), (1, 1));
        assert_eq!(heatmap.data, vec![0, 255, 0]);
    }

    #[test]
    fn test_heatmap_is_bgr_and_point_colors_rgb() {
        // z = 0 -> pure red
        let samples = [0, 0, 0, 0, 0, 0, 1125, 0];
        let raw = RawFrame::new(2, 1, &samples).unwrap();
        let calib = AxisCalibration::uniform(1.0);

        let heatmap = HeatmapBuilder::build(raw, PixelEncoding::Signed16, calib);
        let colors = PointColorBuilder::build(raw, PixelEncoding::Signed16, calib);

        assert_eq!(heatmap.data, vec![0, 0, 255, 255, 255, 0]);
        assert_eq!(colors.data, vec![255, 0, 0, 0, 255, 255]);
        assert_eq!(heatmap.to_rgb(), colors.data);
        assert_eq!(colors.color(1), Some((0, 255, 255)));
        assert_eq!(colors.color(2), None);
    }

    #[test]
    fn test_invalid_unsigned_pixel_is_black() {
        let samples = [10, 10, u16::MAX, 5];
        let raw = RawFrame::new(1, 1, &samples).unwrap();
        let heatmap = HeatmapBuilder::build(raw, PixelEncoding::Unsigned16, AxisCalibration::uniform(1.0));
        assert_eq!(heatmap.data, vec![0, 0, 0]);
    }

    #[test]
    fn test_negative_and_far_depth_are_black() {
        let samples = [0, 0, (-5i16) as u16, 0, 0, 0, 1600, 0];
        let raw = RawFrame::new(2, 1, &samples).unwrap();
        let heatmap = HeatmapBuilder::build(raw, PixelEncoding::Signed16, AxisCalibration::uniform(1.0));
        assert_eq!(heatmap.data, vec![0; 6]);
    }

    #[test]
    fn test_build_is_idempotent() {
        let samples: Vec<u16> = (0..64u16).flat_map(|i| [i, i, i * 23, i]).collect();
        let raw = RawFrame::new(8, 8, &samples).unwrap();
        let calib = AxisCalibration::default().with_offsets(-10.0, 4.0);

        let first = HeatmapBuilder::build(raw, PixelEncoding::Unsigned16, calib);
        let second = HeatmapBuilder::build(raw, PixelEncoding::Unsigned16, calib);
        assert_eq!(first, second);
        assert_eq!(first.data.len(), 8 * 8 * 3);
    }
}
