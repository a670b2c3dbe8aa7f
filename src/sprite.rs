//! Sprite download and base64 re-encoding.

use std::future::Future;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use schema::SPRITE_CONTENT_TYPE;

use crate::errors::SpriteResult;

/// Something that can download the raw bytes behind a sprite URL.
///
/// [`crate::fetcher::PokeApiClient`] is the production implementation.
pub trait SpriteSource {
    fn fetch_sprite(&self, url: &str) -> impl Future<Output = SpriteResult<Vec<u8>>> + Send;
}

/// A downloaded sprite, ready to embed in a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteAsset {
    pub raw_bytes: Vec<u8>,
    pub encoded_base64: String,
    pub content_type: &'static str,
}

impl SpriteAsset {
    pub fn from_bytes(raw_bytes: Vec<u8>) -> Self {
        let encoded_base64 = STANDARD.encode(&raw_bytes);
        Self {
            raw_bytes,
            encoded_base64,
            content_type: SPRITE_CONTENT_TYPE,
        }
    }

    pub async fn download<S: SpriteSource>(source: &S, url: &str) -> SpriteResult<Self> {
        let bytes = source.fetch_sprite(url).await?;
        Ok(Self::from_bytes(bytes))
    }

    pub fn data_uri(&self) -> String {
        format!("data:{};base64,{}", self.content_type, self.encoded_base64)
    }

    /// Inline markdown image using `alt` as the alt text.
    pub fn markdown(&self, alt: &str) -> String {
        format!("![{}]({})", alt, self.data_uri())
    }
}
