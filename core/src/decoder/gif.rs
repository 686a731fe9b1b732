use image::DynamicImage;

use crate::decoder::FormatDecoder;
use crate::error::ThumbnailError;
use crate::format::SourceFormat;

/// Decodes the first frame of a GIF.
pub struct GifDecoder;

impl FormatDecoder for GifDecoder {
    fn supported_formats(&self) -> &[SourceFormat] {
        &[SourceFormat::Gif]
    }

    fn decode(&self, input: &[u8]) -> Result<DynamicImage, ThumbnailError> {
        image::load_from_memory_with_format(input, image::ImageFormat::Gif)
            .map_err(|e| ThumbnailError::Decode(format!("GIF: {}", e)))
    }
}
