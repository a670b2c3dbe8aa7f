// poke-api-mcp Schema - Shared type definitions
// This crate holds the PokeAPI wire types the fetcher deserializes, the
// trimmed record the presenter works from, and the JSON payloads the MCP
// tools hand back to clients.

// Re-export the main types
pub use payloads::*;
pub use pokemon_record::*;
pub use remote_api::*;

pub mod payloads;
pub mod pokemon_record;
pub mod remote_api;
