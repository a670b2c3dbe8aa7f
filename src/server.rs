//! MCP `ServerHandler` exposing PokeAPI lookups.
//!
//! Tools: `pokemon_info`, `pokemon_sprite`, `pokemon_sprite_url`.
//! Resources: `pokemon://random` and the `pokemon://{name_or_id}` template.

use std::future::Future;

use rmcp::handler::server::router::tool::ToolRouter;
use rmcp::handler::server::wrapper::Parameters;
use rmcp::model::{
    ErrorData as McpError, Implementation, ListResourceTemplatesResult, ListResourcesResult,
    PaginatedRequestParams, ProtocolVersion, ReadResourceRequestParams, ReadResourceResult,
    ServerCapabilities, ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{schemars, tool, tool_handler, tool_router, RoleServer, ServerHandler};
use serde::Deserialize;

use crate::fetcher::PokeApiClient;
use crate::mcp_interface;
use crate::resources::{
    list_pokemon_resource_templates, list_pokemon_resources, read_pokemon_resource,
};

#[derive(Debug, Clone)]
pub struct PokeApiService {
    tool_router: ToolRouter<PokeApiService>,
    client: PokeApiClient,
}

#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct NameOrIdRequest {
    #[schemars(description = "Pokémon name or ID")]
    pub name_or_id: String,
}

#[tool_router(router = tool_router)]
impl PokeApiService {
    pub fn new(client: PokeApiClient) -> Self {
        Self {
            tool_router: Self::tool_router(),
            client,
        }
    }

    #[tool(
        name = "pokemon_info",
        description = "Retrieve basic information (id, name, height, weight, types) of a Pokémon."
    )]
    pub async fn pokemon_info(&self, Parameters(request): Parameters<NameOrIdRequest>) -> String {
        tracing::info!(name_or_id = %request.name_or_id, "pokemon_info");
        mcp_interface::pokemon_info(&self.client, &request.name_or_id).await
    }

    #[tool(
        name = "pokemon_sprite",
        description = "Get the front-default sprite image URL of a Pokémon, potentially formatted for display."
    )]
    pub async fn pokemon_sprite(&self, Parameters(request): Parameters<NameOrIdRequest>) -> String {
        tracing::info!(name_or_id = %request.name_or_id, "pokemon_sprite");
        mcp_interface::pokemon_sprite(&self.client, &request.name_or_id).await
    }

    #[tool(
        name = "pokemon_sprite_url",
        description = "Get only the raw URL of a Pokémon sprite without encoding."
    )]
    pub async fn pokemon_sprite_url(
        &self,
        Parameters(request): Parameters<NameOrIdRequest>,
    ) -> String {
        tracing::info!(name_or_id = %request.name_or_id, "pokemon_sprite_url");
        mcp_interface::pokemon_sprite_url(&self.client, &request.name_or_id).await
    }
}

#[tool_handler(router = self.tool_router)]
impl ServerHandler for PokeApiService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2025_03_26,
            capabilities: ServerCapabilities::builder()
                .enable_tools()
                .enable_resources()
                .build(),
            server_info: Implementation {
                name: "poke-api".to_string(),
                title: Some("PokeAPI MCP Server".to_string()),
                version: env!("CARGO_PKG_VERSION").to_string(),
                description: Some(
                    "Pokémon lookups backed by PokeAPI: basic data, sprites and sprite URLs"
                        .to_string(),
                ),
                icons: None,
                website_url: None,
            },
            instructions: Some(
                "Look up Pokémon by name or national dex number.\n\
                 pokemon_info returns id, name, height, weight and types with the sprite inlined.\n\
                 pokemon_sprite returns the sprite as base64 JSON; pokemon_sprite_url returns only its URL.\n\
                 Resources: pokemon://{name_or_id} and pokemon://random."
                    .to_string(),
            ),
        }
    }

    fn list_resources(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourcesResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListResourcesResult::with_all_items(
            list_pokemon_resources(),
        )))
    }

    fn list_resource_templates(
        &self,
        _request: Option<PaginatedRequestParams>,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ListResourceTemplatesResult, McpError>> + Send + '_ {
        std::future::ready(Ok(ListResourceTemplatesResult::with_all_items(
            list_pokemon_resource_templates(),
        )))
    }

    fn read_resource(
        &self,
        request: ReadResourceRequestParams,
        _context: RequestContext<RoleServer>,
    ) -> impl Future<Output = Result<ReadResourceResult, McpError>> + Send + '_ {
        async move {
            tracing::info!(uri = %request.uri, "read_resource");
            read_pokemon_resource(&self.client, &request.uri).await
        }
    }
}
