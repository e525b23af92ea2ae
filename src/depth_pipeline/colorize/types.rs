//! Colorized output buffers

/// Bytes per pixel of both color buffers.
pub const COLOR_CHANNELS: usize = 3;

/// False-color depth image, 8 bits per channel, interleaved `[B, G, R, ...]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeatmapImage {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

/// Per-vertex color for a point cloud, interleaved `[R, G, B, ...]`.
///
/// Pixel `i` colors the vertex decoded from pixel `i` of the same frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointColorBuffer {
    pub width: usize,
    pub height: usize,
    pub data: Vec<u8>,
}

impl HeatmapImage {
    /// Same image with channels swapped to `[R, G, B, ...]`.
    pub fn to_rgb(&self) -> Vec<u8> {
        self.data
            .chunks_exact(COLOR_CHANNELS)
            .flat_map(|bgr| [bgr[2], bgr[1], bgr[0]])
            .collect()
    }
}

impl PointColorBuffer {
    /// Color of the vertex at `index`, if in range.
    pub fn color(&self, index: usize) -> Option<(u8, u8, u8)> {
        let start = index * COLOR_CHANNELS;
        self.data
            .get(start..start + COLOR_CHANNELS)
            .map(|rgb| (rgb[0], rgb[1], rgb[2]))
    }
}
