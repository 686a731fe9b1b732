use image::imageops::FilterType;
use image::DynamicImage;

use crate::config::ThumbnailConfig;

/// Resize a decoded image to exactly the configured thumbnail dimensions
/// using Lanczos3 resampling.
///
/// The source aspect ratio is not preserved: the image is stretched to the
/// exact target size, whatever its original proportions.
pub fn resize_to_thumbnail(img: &DynamicImage, config: &ThumbnailConfig) -> DynamicImage {
    img.resize_exact(config.width, config.height, FilterType::Lanczos3)
}
