use serde::{Deserialize, Serialize};

/// A catalog product record.
///
/// Created once and immutable afterwards except for whole-record deletion.
/// The thumbnail pipeline reads only `id` and `image_url`, never mutates
/// the record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Assigned by the server at creation time, never client-supplied.
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Price in currency minor units. Must be positive.
    pub price: i64,
    #[serde(default)]
    pub image_url: Option<String>,
}

impl Product {
    /// The source image URL, when present and non-empty.
    /// Products without one skip the thumbnail pipeline entirely.
    pub fn source_url(&self) -> Option<&str> {
        self.image_url.as_deref().filter(|url| !url.is_empty())
    }
}
