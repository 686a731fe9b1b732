use std::fmt;
use std::sync::Arc;

use crate::config::ThumbnailConfig;
use crate::decoder::DecoderRegistry;
use crate::encode::encode_jpeg;
use crate::error::ThumbnailError;
use crate::fetch::HttpClient;
use crate::product::Product;
use crate::publish::publish_thumbnail;
use crate::resize::resize_to_thumbnail;
use crate::storage::BlobStore;

/// Pipeline steps, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PipelineStep {
    Fetch,
    Decode,
    Resize,
    Encode,
    Publish,
}

impl fmt::Display for PipelineStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PipelineStep::Fetch => "fetch",
            PipelineStep::Decode => "decode",
            PipelineStep::Resize => "resize",
            PipelineStep::Encode => "encode",
            PipelineStep::Publish => "publish",
        };
        write!(f, "{}", name)
    }
}

/// Successful terminal state of a pipeline run.
#[derive(Debug, Clone)]
pub struct PublishedThumbnail {
    pub key: String,
    pub size: usize,
}

/// Failed terminal state of a pipeline run.
///
/// Not a caller error: the run is over, the failure is already logged, and
/// the product record stays untouched. Callers may inspect it but must not
/// raise it past the operation that triggered the run.
#[derive(Debug)]
pub struct ContainedFailure {
    pub step: PipelineStep,
    pub product_id: String,
    pub error: ThumbnailError,
}

/// Sequences fetch, decode, resize, encode, and publish for one product.
///
/// Holds the process-wide clients by reference; runs share no mutable state,
/// so independent invocations can proceed in parallel.
pub struct ThumbnailPipeline {
    http: Arc<dyn HttpClient>,
    decoders: DecoderRegistry,
    store: Arc<dyn BlobStore>,
    config: ThumbnailConfig,
}

impl ThumbnailPipeline {
    pub fn new(
        http: Arc<dyn HttpClient>,
        store: Arc<dyn BlobStore>,
        config: ThumbnailConfig,
    ) -> Self {
        Self {
            http,
            decoders: DecoderRegistry::with_defaults(),
            store,
            config,
        }
    }

    /// Replace the default decoder registry.
    pub fn with_decoders(mut self, decoders: DecoderRegistry) -> Self {
        self.decoders = decoders;
        self
    }

    /// Run the full pipeline for one product.
    ///
    /// The product must carry a non-empty image URL; callers skip products
    /// without one. Steps run strictly in order and the first failure is
    /// terminal: it is logged with the step name, product id, and cause,
    /// and returned as a [`ContainedFailure`]. Nothing is retried and the
    /// product record is never rolled back.
    pub async fn run(&self, product: &Product) -> Result<PublishedThumbnail, ContainedFailure> {
        let url = product.source_url().unwrap_or_default();

        let raw = self
            .http
            .get(url)
            .await
            .map_err(|e| self.fail(PipelineStep::Fetch, product, e))?;
        log::debug!("fetched {} bytes for product {}", raw.len(), product.id);

        let img = self
            .decoders
            .decode(&raw)
            .map_err(|e| self.fail(PipelineStep::Decode, product, e))?;

        let thumb = resize_to_thumbnail(&img, &self.config);

        let encoded = encode_jpeg(&thumb, &self.config)
            .map_err(|e| self.fail(PipelineStep::Encode, product, e))?;
        let size = encoded.len();

        let key = publish_thumbnail(self.store.as_ref(), &product.id, encoded)
            .await
            .map_err(|e| self.fail(PipelineStep::Publish, product, e))?;

        log::debug!("published thumbnail {} ({} bytes)", key, size);
        Ok(PublishedThumbnail { key, size })
    }

    fn fail(
        &self,
        step: PipelineStep,
        product: &Product,
        error: ThumbnailError,
    ) -> ContainedFailure {
        log::error!(
            "thumbnail {} failed for product {}: {}",
            step,
            product.id,
            error
        );
        ContainedFailure {
            step,
            product_id: product.id.clone(),
            error,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use image::GenericImageView;

    use crate::fetch::tests::MockHttpClient;
    use crate::storage::memory::MemoryBlobStore;

    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::DynamicImage::ImageRgb8(image::RgbImage::from_pixel(
            width,
            height,
            image::Rgb([80, 140, 20]),
        ));
        let mut bytes = Vec::new();
        img.write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    fn product(id: &str, image_url: &str) -> Product {
        Product {
            id: id.to_string(),
            name: "test product".to_string(),
            description: None,
            price: 1500,
            image_url: Some(image_url.to_string()),
        }
    }

    fn pipeline_with(
        response: Result<Vec<u8>, ThumbnailError>,
        store: Arc<MemoryBlobStore>,
    ) -> ThumbnailPipeline {
        ThumbnailPipeline::new(
            Arc::new(MockHttpClient { response }),
            store,
            ThumbnailConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_end_to_end_publishes_100x100_jpeg() {
        let store = Arc::new(MemoryBlobStore::new());
        let pipeline = pipeline_with(Ok(png_bytes(400, 300)), store.clone());

        let published = pipeline
            .run(&product("p1", "http://example/cat.png"))
            .await
            .unwrap();

        assert_eq!(published.key, "thumbnails/p1_thumbnail.jpg");
        assert!(published.size > 0);

        let object = store.get(&published.key).unwrap();
        assert_eq!(object.content_type, "image/jpeg");
        assert!(object.public);
        assert!(!object.bytes.is_empty());

        let thumb = image::load_from_memory(&object.bytes).unwrap();
        assert_eq!(thumb.dimensions(), (100, 100));
    }

    #[tokio::test]
    async fn test_fetch_failure_is_contained() {
        let store = Arc::new(MemoryBlobStore::new());
        let pipeline = pipeline_with(
            Err(ThumbnailError::Fetch(
                "HTTP 404 Not Found from http://example/missing.png".to_string(),
            )),
            store.clone(),
        );

        let failure = pipeline
            .run(&product("p1", "http://example/missing.png"))
            .await
            .unwrap_err();

        assert_eq!(failure.step, PipelineStep::Fetch);
        assert_eq!(failure.product_id, "p1");
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_decode_failure_is_contained() {
        let store = Arc::new(MemoryBlobStore::new());
        let pipeline = pipeline_with(Ok(b"this is not an image".to_vec()), store.clone());

        let failure = pipeline
            .run(&product("p2", "http://example/broken.png"))
            .await
            .unwrap_err();

        assert_eq!(failure.step, PipelineStep::Decode);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_degenerate_source_still_published() {
        let store = Arc::new(MemoryBlobStore::new());
        let pipeline = pipeline_with(Ok(png_bytes(1, 1)), store.clone());

        let published = pipeline
            .run(&product("p3", "http://example/dot.png"))
            .await
            .unwrap();

        let object = store.get(&published.key).unwrap();
        let thumb = image::load_from_memory(&object.bytes).unwrap();
        assert_eq!(thumb.dimensions(), (100, 100));
    }

    #[tokio::test]
    async fn test_unregistered_format_fails_at_decode() {
        let store = Arc::new(MemoryBlobStore::new());
        let pipeline = pipeline_with(Ok(png_bytes(10, 10)), store.clone())
            .with_decoders(DecoderRegistry::new());

        let failure = pipeline
            .run(&product("p5", "http://example/x.png"))
            .await
            .unwrap_err();

        assert_eq!(failure.step, PipelineStep::Decode);
        assert!(store.is_empty());
    }

    #[tokio::test]
    async fn test_rerun_overwrites_previous_thumbnail() {
        let store = Arc::new(MemoryBlobStore::new());

        let first = pipeline_with(Ok(png_bytes(400, 300)), store.clone());
        let wide = first.run(&product("p4", "http://example/a.png")).await.unwrap();

        let second = pipeline_with(Ok(png_bytes(30, 400)), store.clone());
        let tall = second.run(&product("p4", "http://example/b.png")).await.unwrap();

        assert_eq!(wide.key, tall.key);
        assert_eq!(store.len(), 1);
    }
}
