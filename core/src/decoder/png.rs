use image::DynamicImage;

use crate::decoder::FormatDecoder;
use crate::error::ThumbnailError;
use crate::format::SourceFormat;

pub struct PngDecoder;

impl FormatDecoder for PngDecoder {
    fn supported_formats(&self) -> &[SourceFormat] {
        &[SourceFormat::Png]
    }

    fn decode(&self, input: &[u8]) -> Result<DynamicImage, ThumbnailError> {
        image::load_from_memory_with_format(input, image::ImageFormat::Png)
            .map_err(|e| ThumbnailError::Decode(format!("PNG: {}", e)))
    }
}
