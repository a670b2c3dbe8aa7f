// In: src/lib.rs

//! PokeAPI MCP Server
//!
//! Exposes PokeAPI Pokémon lookups to LLM clients as Model Context Protocol
//! tools and resources. Every call is a single stateless pipeline: fetch the
//! Pokémon document, optionally download its sprite, and format a text or
//! JSON response.

// --- MODULE DECLARATIONS ---
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod mcp_interface;
pub mod presenter;
pub mod resources;
pub mod server;
pub mod sprite;

// --- PUBLIC API RE-EXPORTS ---

// --- From the `schema` crate ---
pub use schema::{ApiPokemon, ErrorPayload, PokemonRecord, SpritePayload};

// --- From this crate's modules (`src/`) ---
pub use config::PokeApiConfig;
pub use fetcher::PokeApiClient;
pub use server::PokeApiService;
pub use sprite::{SpriteAsset, SpriteSource};

// Crate-specific error and result types.
pub use errors::{ConfigError, FaultKind, FetchError, FetchResult, SpriteError, SpriteResult};
