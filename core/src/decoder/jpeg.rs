use image::DynamicImage;

use crate::decoder::FormatDecoder;
use crate::error::ThumbnailError;
use crate::format::SourceFormat;

pub struct JpegDecoder;

impl FormatDecoder for JpegDecoder {
    fn supported_formats(&self) -> &[SourceFormat] {
        &[SourceFormat::Jpeg]
    }

    fn decode(&self, input: &[u8]) -> Result<DynamicImage, ThumbnailError> {
        image::load_from_memory_with_format(input, image::ImageFormat::Jpeg)
            .map_err(|e| ThumbnailError::Decode(format!("JPEG: {}", e)))
    }
}
