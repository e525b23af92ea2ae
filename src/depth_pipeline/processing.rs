//! Frame processing module
//!
//! Orchestrates reading a raw depth frame, decoding it, and handing the
//! colorized results to the output writers.

mod frame_pipeline;
mod timing;


pub use frame_pipeline::{DepthPipeline, FrameReport, OutputPaths};
pub use timing::{PipelineTimings, StepTiming, Timer};
