//! Turns fetched records into the strings the tools and resources return.
//!
//! Each function takes the outcome of the record fetch and short-circuits on
//! failure. Sprite download problems never hide the textual fields: the text
//! block degrades to an `Image Error:` line and the JSON view becomes an
//! error payload.

use schema::{ErrorPayload, PokemonRecord, SpritePayload};
use serde::Serialize;

use crate::errors::FetchResult;
use crate::sprite::{SpriteAsset, SpriteSource};

/// Five labelled lines plus an optional inline image line.
pub async fn format_text<S: SpriteSource>(
    result: &FetchResult<PokemonRecord>,
    sprites: &S,
) -> String {
    let record = match result {
        Ok(record) => record,
        Err(err) => return err.to_string(),
    };

    let mut text = format!(
        "ID: {}\nName: {}\nHeight: {}\nWeight: {}\nTypes: {}",
        record.id,
        record.display_name(),
        record.height,
        record.weight,
        record.types_display()
    );

    if let Some(url) = &record.sprite_url {
        match SpriteAsset::download(sprites, url).await {
            Ok(asset) => {
                text.push('\n');
                text.push_str(&asset.markdown(&record.name));
            }
            Err(err) => {
                tracing::warn!(pokemon = %record.name, error = %err, "sprite download failed");
                text.push_str(&format!("\nImage Error: {}", err));
            }
        }
    }

    text.push('\n');
    text
}

/// JSON sprite payload, or a JSON object with a single `error` key.
pub async fn format_sprite_json<S: SpriteSource>(
    result: &FetchResult<PokemonRecord>,
    name_or_id: &str,
    sprites: &S,
) -> String {
    let record = match result {
        Ok(record) => record,
        Err(err) => return error_json(format!("Pokemon data not found: {}", err)),
    };

    let Some(url) = &record.sprite_url else {
        return error_json(format!("Sprite not available for {}", name_or_id));
    };

    match SpriteAsset::download(sprites, url).await {
        Ok(asset) => to_json(&SpritePayload {
            name: record.name.clone(),
            id: record.id,
            url: url.clone(),
            markdown: asset.markdown(&record.name),
            content_type: asset.content_type.to_string(),
            base64_data: asset.encoded_base64,
        }),
        Err(err) => {
            tracing::warn!(pokemon = %record.name, error = %err, "sprite download failed");
            error_json(format!("Failed to encode sprite: {}", err))
        }
    }
}

/// The raw sprite URL. Never downloads the image.
pub fn sprite_url_only(result: &FetchResult<PokemonRecord>, name_or_id: &str) -> String {
    match result {
        Ok(PokemonRecord {
            sprite_url: Some(url),
            ..
        }) => url.clone(),
        Ok(_) => format!("Sprite not available for {}", name_or_id),
        Err(err) => format!("Error fetching Pokemon data: {}", err),
    }
}

fn error_json(message: String) -> String {
    to_json(&ErrorPayload::new(message))
}

fn to_json<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|e| {
        serde_json::json!({ "error": format!("Failed to serialize response: {}", e) }).to_string()
    })
}
