use std::io::Cursor;

use image::codecs::jpeg::JpegEncoder;
use image::DynamicImage;

use crate::config::ThumbnailConfig;
use crate::error::ThumbnailError;

/// Serialize a pixel grid as JPEG at the configured quality.
///
/// Pixels are converted to RGB first; JPEG has no alpha channel.
pub fn encode_jpeg(img: &DynamicImage, config: &ThumbnailConfig) -> Result<Vec<u8>, ThumbnailError> {
    let rgb = img.to_rgb8();

    let mut output = Vec::new();
    let mut cursor = Cursor::new(&mut output);
    let mut encoder = JpegEncoder::new_with_quality(&mut cursor, config.quality);

    encoder
        .encode(
            rgb.as_raw(),
            rgb.width(),
            rgb.height(),
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ThumbnailError::Encode(e.to_string()))?;

    Ok(output)
}
