use image::DynamicImage;

use crate::decoder::FormatDecoder;
use crate::error::ThumbnailError;
use crate::format::SourceFormat;

pub struct WebpDecoder;

impl FormatDecoder for WebpDecoder {
    fn supported_formats(&self) -> &[SourceFormat] {
        &[SourceFormat::Webp]
    }

    fn decode(&self, input: &[u8]) -> Result<DynamicImage, ThumbnailError> {
        image::load_from_memory_with_format(input, image::ImageFormat::WebP)
            .map_err(|e| ThumbnailError::Decode(format!("WebP: {}", e)))
    }
}
