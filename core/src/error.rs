use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum ThumbnailError {
    #[error("failed to fetch image: {0}")]
    Fetch(String),

    #[error("unsupported image format: {0}")]
    UnsupportedFormat(String),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode thumbnail: {0}")]
    Encode(String),

    #[error("failed to publish thumbnail {key}: {reason}")]
    Publish { key: String, reason: String },
}
