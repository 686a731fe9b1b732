/// Thumbnail generation settings.
#[derive(Debug, Clone)]
pub struct ThumbnailConfig {
    /// Output width in pixels
    pub width: u32,
    /// Output height in pixels
    pub height: u32,
    /// JPEG quality 0-100
    pub quality: u8,
}

impl Default for ThumbnailConfig {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            quality: 75,
        }
    }
}
