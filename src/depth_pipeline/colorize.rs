//! Depth colorization module
//!
//! Turns decoded depth frames into false-color buffers: a BGR heatmap for
//! image writers and a parallel RGB buffer for point-cloud vertex color.

mod builders;
pub mod ramp;
pub mod types;

pub use builders::{HeatmapBuilder, PointColorBuilder};
pub use ramp::color_for_depth;
pub use types::{HeatmapImage, PointColorBuffer};
