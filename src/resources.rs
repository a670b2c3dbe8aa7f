//! MCP resources: `pokemon://random` and the `pokemon://{name_or_id}` template.

use rmcp::model::{
    AnnotateAble, ErrorData as McpError, RawResource, RawResourceTemplate, ReadResourceResult,
    Resource, ResourceContents, ResourceTemplate,
};

use crate::fetcher::PokeApiClient;
use crate::mcp_interface::{pokemon_info, random_pokemon_info};

pub const URI_SCHEME: &str = "pokemon://";
pub const URI_RANDOM: &str = "pokemon://random";
pub const URI_TEMPLATE_BY_NAME_OR_ID: &str = "pokemon://{name_or_id}";

const TEXT_MIME: &str = "text/plain";

/// A resource URI this server knows how to read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PokemonResource<'a> {
    Random,
    ByNameOrId(&'a str),
}

impl<'a> PokemonResource<'a> {
    /// Matches `pokemon://random` or `pokemon://<name_or_id>`.
    pub fn parse(uri: &'a str) -> Option<Self> {
        if uri == URI_RANDOM {
            return Some(PokemonResource::Random);
        }
        match uri.strip_prefix(URI_SCHEME) {
            Some(name_or_id) if !name_or_id.is_empty() => {
                Some(PokemonResource::ByNameOrId(name_or_id))
            }
            _ => None,
        }
    }
}

pub fn list_pokemon_resources() -> Vec<Resource> {
    let mut random = RawResource::new(URI_RANDOM, "Random Pokémon");
    random.description = Some("Return basic information about a random Pokémon".to_string());
    random.mime_type = Some(TEXT_MIME.to_string());
    vec![random.no_annotation()]
}

pub fn list_pokemon_resource_templates() -> Vec<ResourceTemplate> {
    vec![RawResourceTemplate {
        uri_template: URI_TEMPLATE_BY_NAME_OR_ID.to_string(),
        name: "Pokémon basic information".to_string(),
        title: None,
        description: Some(
            "Basic data (id, name, height, weight, types) for a given Pokémon".to_string(),
        ),
        mime_type: Some(TEXT_MIME.to_string()),
        icons: None,
    }
    .no_annotation()]
}

/// Resolves a resource URI to its text block.
///
/// Unknown URIs are a protocol error; upstream failures are returned as the
/// resource text, same as the `pokemon_info` tool.
pub async fn read_pokemon_resource(
    client: &PokeApiClient,
    uri: &str,
) -> Result<ReadResourceResult, McpError> {
    let text = match PokemonResource::parse(uri) {
        Some(PokemonResource::Random) => random_pokemon_info(client).await,
        Some(PokemonResource::ByNameOrId(name_or_id)) => pokemon_info(client, name_or_id).await,
        None => {
            return Err(McpError::resource_not_found(
                format!("Unknown resource URI: {}", uri),
                None,
            ))
        }
    };
    Ok(ReadResourceResult {
        contents: vec![ResourceContents::text(text, uri)],
    })
}
