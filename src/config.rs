//! Startup configuration for the PokeAPI client.
//!
//! Values are resolved once, in order: built-in defaults, an optional RON
//! file, then command-line overrides. The result is validated and shared
//! read-only for the lifetime of the server.

use std::path::Path;

use serde::Deserialize;

use crate::errors::ConfigError;

pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";
/// Highest national dex number served by PokeAPI (as of April 2025).
pub const DEFAULT_MAX_POKEMON_ID: u32 = 1025;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PokeApiConfig {
    pub base_url: String,
    pub max_pokemon_id: u32,
    pub user_agent: String,
}

impl Default for PokeApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            max_pokemon_id: DEFAULT_MAX_POKEMON_ID,
            user_agent: format!("poke-api-mcp/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl PokeApiConfig {
    /// Parses a RON document. Missing fields keep their defaults.
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: PokeApiConfig = ron::from_str(source)?;
        config.validated()
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&source)
    }

    /// Loads `path` when given, otherwise starts from the defaults, then
    /// applies command-line overrides.
    pub fn resolve(
        path: Option<&Path>,
        base_url: Option<String>,
        max_pokemon_id: Option<u32>,
    ) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        if let Some(base_url) = base_url {
            config.base_url = base_url;
        }
        if let Some(max_pokemon_id) = max_pokemon_id {
            config.max_pokemon_id = max_pokemon_id;
        }
        config.validated()
    }

    /// Checks invariants and normalizes the base URL (no trailing slash).
    pub fn validated(mut self) -> Result<Self, ConfigError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "base_url must be an http(s) URL, got '{}'",
                self.base_url
            )));
        }
        self.base_url = trimmed.to_string();

        if self.max_pokemon_id == 0 {
            return Err(ConfigError::Invalid(
                "max_pokemon_id must be at least 1".to_string(),
            ));
        }
        Ok(self)
    }

    /// Absolute URL for an API path such as `pokemon/25`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }
}
