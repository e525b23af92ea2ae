use thiserror::Error;

#[derive(Error, Debug)]
pub enum DepthError {
    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to decode depth frame: {0}")]
    DecodeError(String),

    #[error("Failed to encode heatmap image: {0}")]
    EncodeError(String),

    #[error("Invalid frame dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("Sample count mismatch: expected {expected}, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },

    #[error("Unsupported channel count: {0} channels per pixel (expected 4)")]
    UnsupportedChannels(u32),

    #[error("Unsupported pixel format: {0}")]
    UnsupportedFormat(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DepthError>;
