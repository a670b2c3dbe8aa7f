//! Subset of the PokeAPI `pokemon/{name_or_id}` response.
//!
//! Only the fields the presenter reads are modelled; everything else in the
//! upstream document is ignored during deserialization.

use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiPokemon {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<ApiPokemonType>,
    #[serde(default)]
    pub sprites: ApiPokemonSprites,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ApiPokemonType {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub type_ref: NamedApiResource,
}

/// A `{name, url}` link to another PokeAPI resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ApiPokemonSprites {
    #[serde(default)]
    pub front_default: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_deserializes_upstream_shape_and_ignores_extra_fields() {
        let body = r#"{
            "id": 25,
            "name": "pikachu",
            "height": 4,
            "weight": 60,
            "base_experience": 112,
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": "https://pokeapi.co/api/v2/type/13/"}}
            ],
            "sprites": {
                "front_default": "https://example.test/25.png",
                "back_default": null
            }
        }"#;

        let pokemon: ApiPokemon = serde_json::from_str(body).unwrap();

        assert_eq!(pokemon.id, 25);
        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.types.len(), 1);
        assert_eq!(pokemon.types[0].type_ref.name, "electric");
        assert_eq!(
            pokemon.sprites.front_default.as_deref(),
            Some("https://example.test/25.png")
        );
    }

    #[test]
    fn test_missing_sprites_block_means_no_sprite() {
        let body = r#"{"id": 1, "name": "bulbasaur", "height": 7, "weight": 69, "types": []}"#;

        let pokemon: ApiPokemon = serde_json::from_str(body).unwrap();

        assert_eq!(pokemon.sprites.front_default, None);
    }

    #[test]
    fn test_missing_required_field_is_an_error() {
        let body = r#"{"id": 1, "name": "bulbasaur", "weight": 69}"#;
        assert!(serde_json::from_str::<ApiPokemon>(body).is_err());
    }
}
