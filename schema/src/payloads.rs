use serde::Serialize;

/// MIME type reported for every sprite. PokeAPI only serves PNG sprites.
pub const SPRITE_CONTENT_TYPE: &str = "image/png";

/// Successful `pokemon_sprite` response. Field order is the wire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SpritePayload {
    pub name: String,
    pub id: u32,
    pub url: String,
    pub base64_data: String,
    pub content_type: String,
    pub markdown: String,
}

/// Error response carrying only an `error` key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorPayload {
    pub error: String,
}

impl ErrorPayload {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
