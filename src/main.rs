//! PokeAPI MCP Server
//!
//! Serves the PokeAPI tools and resources over the MCP stdio transport.
//! Logs go to stderr; stdout belongs to the protocol.

use std::path::PathBuf;

use clap::Parser;
use poke_api_mcp::{PokeApiClient, PokeApiConfig, PokeApiService};
use rmcp::ServiceExt;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "poke-api-mcp", version, about = "MCP server for PokeAPI lookups")]
struct Cli {
    /// RON file with `base_url`, `max_pokemon_id` and/or `user_agent`.
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// PokeAPI base URL, e.g. https://pokeapi.co/api/v2
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Highest id `pokemon://random` may pick.
    #[arg(long, value_name = "N")]
    max_pokemon_id: Option<u32>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("poke_api_mcp=info".parse()?))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = PokeApiConfig::resolve(cli.config.as_deref(), cli.base_url, cli.max_pokemon_id)?;

    tracing::info!(
        base_url = %config.base_url,
        max_pokemon_id = config.max_pokemon_id,
        "poke-api-mcp starting (stdio transport)"
    );

    let client = PokeApiClient::new(config)?;
    let service = PokeApiService::new(client)
        .serve(rmcp::transport::io::stdio())
        .await?;

    let quit_reason = service.waiting().await?;
    tracing::info!(?quit_reason, "poke-api-mcp exiting");
    Ok(())
}
