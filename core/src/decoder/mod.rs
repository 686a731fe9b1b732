pub mod gif;
pub mod jpeg;
pub mod png;
pub mod webp;

use image::DynamicImage;

use crate::error::ThumbnailError;
use crate::format::SourceFormat;

/// A decoder for one or more encoded image formats.
pub trait FormatDecoder: Send + Sync {
    fn supported_formats(&self) -> &[SourceFormat];
    fn decode(&self, input: &[u8]) -> Result<DynamicImage, ThumbnailError>;
}

/// Registry of format decoders, dispatched on sniffed magic bytes.
///
/// Supporting another format means registering another decoder.
pub struct DecoderRegistry {
    decoders: Vec<Box<dyn FormatDecoder>>,
}

impl DecoderRegistry {
    pub fn new() -> Self {
        Self {
            decoders: Vec::new(),
        }
    }

    /// Registry with all built-in decoders registered.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(Box::new(jpeg::JpegDecoder));
        registry.register(Box::new(png::PngDecoder));
        registry.register(Box::new(gif::GifDecoder));
        registry.register(Box::new(webp::WebpDecoder));
        registry
    }

    pub fn register(&mut self, decoder: Box<dyn FormatDecoder>) {
        self.decoders.push(decoder);
    }

    /// Find a decoder that supports the given format.
    fn find_decoder(&self, format: SourceFormat) -> Option<&dyn FormatDecoder> {
        self.decoders
            .iter()
            .find(|d| d.supported_formats().contains(&format))
            .map(|d| d.as_ref())
    }

    /// Sniff the payload's format and decode it to a pixel grid.
    ///
    /// No partial decode: truncated or corrupt input fails outright.
    pub fn decode(&self, input: &[u8]) -> Result<DynamicImage, ThumbnailError> {
        let format = SourceFormat::from_magic(input).ok_or_else(|| {
            ThumbnailError::UnsupportedFormat("unrecognized magic bytes".to_string())
        })?;

        let decoder = self
            .find_decoder(format)
            .ok_or_else(|| ThumbnailError::UnsupportedFormat(format.as_str().to_string()))?;

        decoder.decode(input)
    }
}
