use crate::ApiPokemon;

/// The fields of an upstream Pokémon document that the tools present.
///
/// Built once from an [`ApiPokemon`] at the parse boundary and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PokemonRecord {
    pub id: u32,
    pub name: String,
    pub height: u32,
    pub weight: u32,
    /// Type names in upstream slot order.
    pub types: Vec<String>,
    pub sprite_url: Option<String>,
}

impl PokemonRecord {
    /// Type names joined the way the text block shows them.
    pub fn types_display(&self) -> String {
        self.types.join(", ")
    }

    /// Name with the first letter upper-cased and the rest lower-cased.
    ///
    /// Hyphenated or multi-word names are left as they are past the first
    /// character, so `mr-mime` becomes `Mr-mime`.
    pub fn display_name(&self) -> String {
        let mut chars = self.name.chars();
        match chars.next() {
            Some(first) => first
                .to_uppercase()
                .chain(chars.flat_map(char::to_lowercase))
                .collect(),
            None => String::new(),
        }
    }
}

impl From<ApiPokemon> for PokemonRecord {
    fn from(value: ApiPokemon) -> Self {
        Self {
            id: value.id,
            name: value.name,
            height: value.height,
            weight: value.weight,
            types: value
                .types
                .into_iter()
                .map(|slot| slot.type_ref.name)
                .collect(),
            sprite_url: value.sprites.front_default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn record_named(name: &str) -> PokemonRecord {
        PokemonRecord {
            id: 1,
            name: name.to_string(),
            height: 1,
            weight: 1,
            types: vec![],
            sprite_url: None,
        }
    }

    #[test]
    fn test_display_name_capitalizes_first_letter_only() {
        assert_eq!(record_named("pikachu").display_name(), "Pikachu");
        assert_eq!(record_named("mr-mime").display_name(), "Mr-mime");
        assert_eq!(record_named("TAPU-KOKO").display_name(), "Tapu-koko");
        assert_eq!(record_named("").display_name(), "");
    }

    #[test]
    fn test_from_api_pokemon_keeps_type_order() {
        let body = r#"{
            "id": 6, "name": "charizard", "height": 17, "weight": 905,
            "types": [
                {"slot": 1, "type": {"name": "fire"}},
                {"slot": 2, "type": {"name": "flying"}}
            ],
            "sprites": {"front_default": null}
        }"#;
        let api: ApiPokemon = serde_json::from_str(body).unwrap();

        let record = PokemonRecord::from(api);

        assert_eq!(record.types, vec!["fire".to_string(), "flying".to_string()]);
        assert_eq!(record.types_display(), "fire, flying");
        assert_eq!(record.sprite_url, None);
    }
}
