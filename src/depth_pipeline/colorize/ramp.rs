//! Depth to color ramp.
//!
//! Depth from 0 to 1500 mm runs red -> yellow -> green -> cyan -> blue in four
//! 375 mm bands. Anything outside that range is black. The breakpoints and
//! the per-band arithmetic are fixed: heatmaps from earlier capture sessions
//! were produced with exactly these values.

const RGB_MIN: f64 = 0.0;
const RGB_MAX: f64 = 255.0;

const BORDER_RED: f64 = 0.0;
const BORDER_YELLOW: f64 = 375.0;
const BORDER_GREEN: f64 = 750.0;
const BORDER_CYAN: f64 = 1125.0;
const BORDER_BLUE: f64 = 1500.0;

/// Width of one band.
const BAND_WIDTH: f64 = BORDER_YELLOW - BORDER_RED;

/// Maps a depth in millimeters to `(red, green, blue)`.
///
/// Bands are closed on the lower edge and open on the upper one, except the
/// last band which includes 1500. Channels are truncated.
pub fn color_for_depth(z_mm: f64) -> (u8, u8, u8) {
    let (red, green, blue) = if (BORDER_RED..BORDER_YELLOW).contains(&z_mm) {
        let fraction = z_mm / BAND_WIDTH;
        (RGB_MAX, RGB_MAX * fraction, RGB_MIN)
    } else if (BORDER_YELLOW..BORDER_GREEN).contains(&z_mm) {
        let fraction = (z_mm - BORDER_YELLOW) / BAND_WIDTH;
        (RGB_MAX - (RGB_MAX * fraction), RGB_MAX, RGB_MIN)
    } else if (BORDER_GREEN..BORDER_CYAN).contains(&z_mm) {
        let fraction = (z_mm - BORDER_GREEN) / BAND_WIDTH;
        (RGB_MIN, RGB_MAX, RGB_MAX * fraction)
    } else if (BORDER_CYAN..=BORDER_BLUE).contains(&z_mm) {
        let fraction = (z_mm - BORDER_CYAN) / BAND_WIDTH;
        (RGB_MIN, RGB_MAX - (RGB_MAX * fraction), RGB_MAX)
    } else {
        (RGB_MIN, RGB_MIN, RGB_MIN)
    };

    (red as u8, green as u8, blue as u8)
}
