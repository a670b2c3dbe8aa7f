//! Entry points behind the MCP tools and resources.
//!
//! Each function is one fetch → (optional sprite download) → format pass and
//! always returns a string; errors are part of the text, never propagated.

use rand::Rng;

use crate::fetcher::PokeApiClient;
use crate::presenter::{format_sprite_json, format_text, sprite_url_only};

/// Text block for a Pokémon, with its sprite inlined when one exists.
pub async fn pokemon_info(client: &PokeApiClient, name_or_id: &str) -> String {
    let result = client.fetch_pokemon(name_or_id).await;
    format_text(&result, client).await
}

/// JSON sprite payload (base64 image plus markdown) or a JSON error object.
pub async fn pokemon_sprite(client: &PokeApiClient, name_or_id: &str) -> String {
    let result = client.fetch_pokemon(name_or_id).await;
    format_sprite_json(&result, name_or_id, client).await
}

/// Raw sprite URL, without downloading the image.
pub async fn pokemon_sprite_url(client: &PokeApiClient, name_or_id: &str) -> String {
    let result = client.fetch_pokemon(name_or_id).await;
    sprite_url_only(&result, name_or_id)
}

/// Text block for a uniformly random Pokémon in `1..=max_pokemon_id`.
pub async fn random_pokemon_info(client: &PokeApiClient) -> String {
    let id = random_pokemon_id(&mut rand::rng(), client.config().max_pokemon_id);
    tracing::debug!(id, "picked random pokemon");
    pokemon_info(client, &id.to_string()).await
}

/// Uniform pick in `1..=max_id`. `max_id` must be at least 1.
pub fn random_pokemon_id<R: Rng + ?Sized>(rng: &mut R, max_id: u32) -> u32 {
    rng.random_range(1..=max_id)
}
