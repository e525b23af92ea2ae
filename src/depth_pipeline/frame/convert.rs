//! Raw sample to millimeter conversion.

/// Converts one raw axis sample to millimeters.
///
/// The offset is added only when `apply_offset` is set (x and y of the
/// unsigned encoding). The result is truncated toward zero, matching the
/// sensor's integer millimeter unit.
#[inline]
pub fn convert(raw_sample: i32, axis_scale: f64, axis_offset: f64, apply_offset: bool) -> f64 {
    let scaled = raw_sample as f64 * axis_scale;
    if apply_offset {
        (scaled + axis_offset).trunc()
    } else {
        scaled.trunc()
    }
}
