use std::io::Write;

use tracing::debug;

use crate::depth_pipeline::colorize::HeatmapImage;
use crate::depth_pipeline::common::error::{DepthError, Result};
use crate::depth_pipeline::output::heatmap_writer::HeatmapWriter;
use crate::depth_pipeline::output::types::{ProcessingConfig, TiffCompression};

/// Writes heatmaps as 8-bit RGB TIFF images.
pub struct TiffHeatmapWriter;

impl HeatmapWriter for TiffHeatmapWriter {
    fn write_heatmap(
        &self,
        image: &HeatmapImage,
        output: &mut dyn Write,
        config: &ProcessingConfig,
    ) -> Result<()> {
        debug!("Encoding heatmap TIFF: {}x{}", image.width, image.height);

        let mut buffer = Vec::<u8>::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::Deflate => tiff::encoder::Compression::Deflate(
                tiff::encoder::compression::DeflateLevel::Balanced,
            ),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| DepthError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        // TIFF stores RGB; the heatmap is kept in BGR for the image pipeline.
        let rgb = image.to_rgb();
        encoder
            .write_image::<tiff::encoder::colortype::RGB8>(
                image.width as u32,
                image.height as u32,
                &rgb,
            )
            .map_err(|e| DepthError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("Heatmap TIFF encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_heatmap() -> HeatmapImage {
        HeatmapImage {
            width: 2,
            height: 1,
            data: vec![0, 0, 255, 255, 255, 0],
        }
    }

    fn decode_rgb(bytes: Vec<u8>) -> (u32, u32, Vec<u8>) {
        let mut decoder = tiff::decoder::Decoder::new(std::io::Cursor::new(bytes)).unwrap();
        let (width, height) = decoder.dimensions().unwrap();
        match decoder.read_image().unwrap() {
            tiff::decoder::DecodingResult::U8(data) => (width, height, data),
            _ => panic!("expected 8-bit image"),
        }
    }

    #[test]
    fn test_writes_rgb_channel_order() {
        let mut out = Vec::<u8>::new();
        TiffHeatmapWriter
            .write_heatmap(&sample_heatmap(), &mut out, &ProcessingConfig::default())
            .unwrap();

        let (width, height, data) = decode_rgb(out);
        assert_eq!((width, height), (2, 1));
        assert_eq!(data, vec![255, 0, 0, 0, 255, 255]);
    }

    #[test]
    fn test_compressed_output_decodes_identically() {
        for compression in [TiffCompression::Lzw, TiffCompression::Deflate] {
            let config = ProcessingConfig::builder().compression(compression).build();
            let mut out = Vec::<u8>::new();
            TiffHeatmapWriter
                .write_heatmap(&sample_heatmap(), &mut out, &config)
                .unwrap();

            let (_, _, data) = decode_rgb(out);
            assert_eq!(data, sample_heatmap().to_rgb());
        }
    }
}
