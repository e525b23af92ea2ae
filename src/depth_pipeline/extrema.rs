//! Nearest and farthest point search over a depth frame.

use std::fmt;

use crate::depth_pipeline::frame::types::SIGNED_16BIT_MAX;
use crate::depth_pipeline::frame::{
    AxisCalibration, DecodedPoint, FrameDecoder, PixelEncoding, RawFrame,
};

/// Closest and farthest valid points of a frame.
///
/// Until a frame point replaces them, `nearest` sits at `z_mm = 32767` and
/// `farthest` at `z_mm = 0`, both with `valid = false`. Those values mean "no
/// data" and must not be reported as measurements; use [`is_empty`].
///
/// [`is_empty`]: DepthExtremes::is_empty
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DepthExtremes {
    pub nearest: DecodedPoint,
    pub farthest: DecodedPoint,
}

impl Default for DepthExtremes {
    fn default() -> Self {
        Self {
            nearest: sentinel(SIGNED_16BIT_MAX as f64),
            farthest: sentinel(0.0),
        }
    }
}

fn sentinel(z_mm: f64) -> DecodedPoint {
    DecodedPoint {
        x_mm: 0.0,
        y_mm: 0.0,
        z_mm,
        intensity: 0,
        valid: false,
    }
}

impl DepthExtremes {
    /// True when no frame point was recorded as either extreme.
    pub fn is_empty(&self) -> bool {
        !self.nearest.valid && !self.farthest.valid
    }

    pub fn has_nearest(&self) -> bool {
        self.nearest.valid
    }

    pub fn has_farthest(&self) -> bool {
        self.farthest.valid
    }
}

/// Formats a point the way capture logs report it: whole millimeters and raw
/// intensity.
pub struct PointReport<'a>(pub &'a DecodedPoint);

impl fmt::Display for PointReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let p = self.0;
        write!(
            f,
            "z distance of {} mm and intensity {} at coordinates ( {} mm, {} mm )",
            p.z_mm as i64, p.intensity, p.x_mm as i64, p.y_mm as i64
        )
    }
}

pub struct ExtremaFinder;

impl ExtremaFinder {
    /// Single pass over the valid points of `raw`.
    ///
    /// A point becomes `nearest` when `0 < z < nearest.z`; only if that test
    /// fails is it compared against `farthest`. A point therefore never
    /// updates both, and the first valid positive point always lands in
    /// `nearest`.
    pub fn find_extremes(
        raw: RawFrame<'_>,
        encoding: PixelEncoding,
        calib: AxisCalibration,
    ) -> DepthExtremes {
        let mut extremes = DepthExtremes::default();

        for point in FrameDecoder::new(raw, encoding, calib).points() {
            if !point.valid {
                continue;
            }

            if 0.0 < point.z_mm && point.z_mm < extremes.nearest.z_mm {
                extremes.nearest = point;
            } else if point.z_mm > extremes.farthest.z_mm {
                extremes.farthest = point;
            }
        }

        extremes
    }
}
