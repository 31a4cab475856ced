//! Pokemon records
//!
//! Decoded body of `GET /pokemon/{name}`, limited to the fields the explorer
//! shows or uses.

use serde::Deserialize;

use super::NamedResource;

#[derive(Debug, Clone, Deserialize)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    /// Null for some alternate forms
    pub base_experience: Option<u32>,
    pub height: u32,
    pub weight: u32,
    #[serde(default)]
    pub stats: Vec<PokemonStat>,
    #[serde(default)]
    pub types: Vec<PokemonType>,
}

impl Pokemon {
    /// Base experience, with a missing value counted as zero.
    pub fn base_experience(&self) -> u32 {
        self.base_experience.unwrap_or_default()
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PokemonType {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pokemon_deserialize() {
        let json = r#"{
            "id": 25,
            "name": "pikachu",
            "base_experience": 112,
            "height": 4,
            "weight": 60,
            "abilities": [],
            "stats": [
                {"base_stat": 35, "effort": 0, "stat": {"name": "hp", "url": ""}},
                {"base_stat": 55, "effort": 0, "stat": {"name": "attack", "url": ""}}
            ],
            "types": [
                {"slot": 1, "type": {"name": "electric", "url": ""}}
            ]
        }"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.name, "pikachu");
        assert_eq!(pokemon.base_experience(), 112);
        assert_eq!(pokemon.stats[1].stat.name, "attack");
        assert_eq!(pokemon.stats[1].base_stat, 55);
        assert_eq!(pokemon.types[0].kind.name, "electric");
    }

    #[test]
    fn test_null_base_experience() {
        let json = r#"{"id": 10001, "name": "deoxys-attack", "base_experience": null,
                       "height": 17, "weight": 608}"#;
        let pokemon: Pokemon = serde_json::from_str(json).unwrap();

        assert_eq!(pokemon.base_experience(), 0);
        assert!(pokemon.stats.is_empty());
        assert!(pokemon.types.is_empty());
    }
}
