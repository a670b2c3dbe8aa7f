//! HTTP access to PokeAPI.
//!
//! One GET per call, no retries. Every failure is classified into a
//! [`FetchError`] (record documents) or a [`SpriteError`] (image bytes) so
//! callers can turn it into a response string instead of propagating it.

use std::sync::Arc;

use reqwest::StatusCode;
use schema::{ApiPokemon, PokemonRecord};
use serde::de::DeserializeOwned;

use crate::config::PokeApiConfig;
use crate::errors::{ConfigError, FetchError, FetchResult, SpriteError, SpriteResult};
use crate::sprite::SpriteSource;

#[derive(Debug, Clone)]
pub struct PokeApiClient {
    http: reqwest::Client,
    config: Arc<PokeApiConfig>,
}

impl PokeApiClient {
    /// Builds the shared HTTP client. The config is validated here as well,
    /// so hand-built configs get the same checks as loaded ones.
    pub fn new(config: PokeApiConfig) -> Result<Self, ConfigError> {
        let config = config.validated()?;
        let http = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(ConfigError::HttpClient)?;
        Ok(Self {
            http,
            config: Arc::new(config),
        })
    }

    pub fn config(&self) -> &PokeApiConfig {
        &self.config
    }

    /// GETs `{base_url}/{path}` and deserializes the body as `T`.
    pub async fn fetch_json<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let result = self.fetch_json_inner(path).await;
        if let Err(err) = &result {
            tracing::warn!(path, status = ?err.status(), error = %err, "PokeAPI request failed");
        }
        result
    }

    async fn fetch_json_inner<T: DeserializeOwned>(&self, path: &str) -> FetchResult<T> {
        let url = self.config.endpoint(path);
        tracing::debug!(%url, "GET");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::NotFound {
                path: path.to_string(),
            });
        }
        if !status.is_success() {
            return Err(FetchError::Upstream {
                status: status.as_u16(),
                reason: reason_phrase(status),
            });
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| FetchError::Parse(e.to_string()))
    }

    /// Looks up a Pokémon by name or national dex number.
    pub async fn fetch_pokemon(&self, name_or_id: &str) -> FetchResult<PokemonRecord> {
        self.fetch_json::<ApiPokemon>(&format!("pokemon/{}", name_or_id))
            .await
            .map(PokemonRecord::from)
    }

    /// Downloads raw sprite bytes from an absolute URL.
    pub async fn fetch_sprite_bytes(&self, url: &str) -> SpriteResult<Vec<u8>> {
        tracing::debug!(%url, "GET sprite");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(SpriteError::Status {
                status: status.as_u16(),
                reason: reason_phrase(status),
                url: url.to_string(),
            });
        }
        Ok(response.bytes().await?.to_vec())
    }
}

impl SpriteSource for PokeApiClient {
    async fn fetch_sprite(&self, url: &str) -> SpriteResult<Vec<u8>> {
        self.fetch_sprite_bytes(url).await
    }
}

fn reason_phrase(status: StatusCode) -> String {
    status.canonical_reason().unwrap_or("Unknown").to_string()
}
