//! Depth processing configuration types

/// TIFF compression methods for heatmap output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TiffCompression {
    /// No compression (fastest, largest file)
    None,
    /// LZW compression
    Lzw,
    /// Deflate compression, balanced level
    Deflate,
}

/// Configuration for processing one depth frame into its outputs
#[derive(Debug, Clone)]
pub struct ProcessingConfig {
    /// Compression of the heatmap TIFF
    pub compression: TiffCompression,
    /// Predictor value for compression (2 for horizontal differencing)
    pub predictor: Option<u16>,
    /// Whether to validate frame dimensions before processing
    pub validate_dimensions: bool,
    /// Largest accepted width or height when validating
    pub max_dimension: Option<usize>,
    /// Whether to write the colored point cloud next to the heatmap
    pub write_point_cloud: bool,
    /// Whether the point-cloud writer drops vertices without depth
    pub filter_points: bool,
}

impl Default for ProcessingConfig {
    fn default() -> Self {
        Self {
            compression: TiffCompression::None,
            predictor: None,
            validate_dimensions: true,
            max_dimension: Some(4096),
            write_point_cloud: true,
            filter_points: true,
        }
    }
}

impl ProcessingConfig {
    pub fn builder() -> ProcessingConfigBuilder {
        ProcessingConfigBuilder::default()
    }
}

/// Builder for ProcessingConfig
#[derive(Default)]
pub struct ProcessingConfigBuilder {
    compression: Option<TiffCompression>,
    predictor: Option<Option<u16>>,
    validate_dimensions: Option<bool>,
    max_dimension: Option<Option<usize>>,
    write_point_cloud: Option<bool>,
    filter_points: Option<bool>,
}

impl ProcessingConfigBuilder {
    pub fn compression(mut self, compression: TiffCompression) -> Self {
        self.compression = Some(compression);
        self
    }

    pub fn predictor(mut self, predictor: Option<u16>) -> Self {
        self.predictor = Some(predictor);
        self
    }

    pub fn validate_dimensions(mut self, validate: bool) -> Self {
        self.validate_dimensions = Some(validate);
        self
    }

    pub fn max_dimension(mut self, max: Option<usize>) -> Self {
        self.max_dimension = Some(max);
        self
    }

    pub fn write_point_cloud(mut self, enable: bool) -> Self {
        self.write_point_cloud = Some(enable);
        self
    }

    pub fn filter_points(mut self, enable: bool) -> Self {
        self.filter_points = Some(enable);
        self
    }

    pub fn build(self) -> ProcessingConfig {
        let default = ProcessingConfig::default();
        ProcessingConfig {
            compression: self.compression.unwrap_or(default.compression),
            predictor: self.predictor.unwrap_or(default.predictor),
            validate_dimensions: self
                .validate_dimensions
                .unwrap_or(default.validate_dimensions),
            max_dimension: self.max_dimension.unwrap_or(default.max_dimension),
            write_point_cloud: self.write_point_cloud.unwrap_or(default.write_point_cloud),
            filter_points: self.filter_points.unwrap_or(default.filter_points),
        }
    }
}
