//! ASCII PLY export of colored depth frames.
//!
//! Every decoded pixel becomes one vertex with its millimeter position and
//! the matching color from the [`PointColorBuffer`]. With filtering enabled,
//! pixels without depth are left out: invalid points of the unsigned
//! encoding, and signed pixels whose x, y and z all hold `-32768`, which the
//! sensor uses as its "not a number" marker.

use std::io::{BufWriter, Write};

use tracing::debug;

use crate::depth_pipeline::colorize::PointColorBuffer;
use crate::depth_pipeline::common::error::{DepthError, Result};
use crate::depth_pipeline::frame::{AxisCalibration, FrameDecoder, PixelEncoding, RawFrame};
use crate::depth_pipeline::output::point_cloud_writer::PointCloudWriter;
use crate::depth_pipeline::output::types::ProcessingConfig;

const SIGNED_NAN_MARKER: u16 = i16::MIN as u16;

pub struct PlyPointCloudWriter;

fn is_signed_nan(pixel: &[u16]) -> bool {
    pixel[..3].iter().all(|&s| s == SIGNED_NAN_MARKER)
}

impl PointCloudWriter for PlyPointCloudWriter {
    fn write_point_cloud(
        &self,
        raw: RawFrame<'_>,
        encoding: PixelEncoding,
        calib: AxisCalibration,
        colors: &PointColorBuffer,
        output: &mut dyn Write,
        config: &ProcessingConfig,
    ) -> Result<()> {
        if colors.width != raw.width() || colors.height != raw.height() {
            return Err(DepthError::InvalidDimensions(colors.width, colors.height));
        }

        let vertices: Vec<_> = FrameDecoder::new(raw, encoding, calib)
            .points()
            .zip(raw.pixels())
            .zip(colors.data.chunks_exact(3))
            .filter(|((point, pixel), _)| {
                !config.filter_points
                    || (point.valid
                        && !(encoding == PixelEncoding::Signed16 && is_signed_nan(pixel)))
            })
            .map(|((point, _), rgb)| (point, rgb))
            .collect();

        debug!(
            "Writing PLY with {} of {} vertices",
            vertices.len(),
            raw.pixel_count()
        );

        let mut out = BufWriter::new(output);
        writeln!(out, "ply")?;
        writeln!(out, "format ascii 1.0")?;
        writeln!(out, "element vertex {}", vertices.len())?;
        writeln!(out, "property float x")?;
        writeln!(out, "property float y")?;
        writeln!(out, "property float z")?;
        writeln!(out, "property uchar red")?;
        writeln!(out, "property uchar green")?;
        writeln!(out, "property uchar blue")?;
        writeln!(out, "end_header")?;

        for (point, rgb) in vertices {
            writeln!(
                out,
                "{} {} {} {} {} {}",
                point.x_mm, point.y_mm, point.z_mm, rgb[0], rgb[1], rgb[2]
            )?;
        }
        out.flush()?;

        Ok(())
    }
}
