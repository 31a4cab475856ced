//! Location area records
//!
//! Decoded bodies of the `location-area` listing and detail endpoints.

use serde::Deserialize;

/// A name plus the API URL describing the named resource.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

/// One page of `GET /location-area`.
///
/// `next` and `previous` are absolute URLs of the neighbouring pages, null at
/// either end of the listing.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaPage {
    /// Total number of location areas
    #[serde(default)]
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<NamedResource>,
}

/// Body of `GET /location-area/{name}`.
#[derive(Debug, Clone, Deserialize)]
pub struct LocationAreaDetail {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pokemon_encounters: Vec<PokemonEncounter>,
}

/// A Pokemon that can be encountered in an area.
#[derive(Debug, Clone, Deserialize)]
pub struct PokemonEncounter {
    pub pokemon: NamedResource,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_deserialize() {
        let json = r#"{
            "count": 1054,
            "next": "https://pokeapi.co/api/v2/location-area?offset=20&limit=20",
            "previous": null,
            "results": [
                {"name": "canalave-city-area", "url": "https://pokeapi.co/api/v2/location-area/1/"},
                {"name": "eterna-city-area", "url": "https://pokeapi.co/api/v2/location-area/2/"}
            ]
        }"#;
        let page: LocationAreaPage = serde_json::from_str(json).unwrap();

        assert_eq!(page.count, 1054);
        assert!(page.next.as_deref().unwrap().contains("offset=20"));
        assert!(page.previous.is_none());
        assert_eq!(page.results.len(), 2);
        assert_eq!(page.results[0].name, "canalave-city-area");
    }

    #[test]
    fn test_detail_ignores_unknown_fields() {
        let json = r#"{
            "id": 1,
            "name": "canalave-city-area",
            "encounter_method_rates": [],
            "pokemon_encounters": [
                {"pokemon": {"name": "tentacool", "url": "https://pokeapi.co/api/v2/pokemon/72/"},
                 "version_details": []}
            ]
        }"#;
        let detail: LocationAreaDetail = serde_json::from_str(json).unwrap();

        assert_eq!(detail.name, "canalave-city-area");
        assert_eq!(detail.pokemon_encounters.len(), 1);
        assert_eq!(detail.pokemon_encounters[0].pokemon.name, "tentacool");
    }

    #[test]
    fn test_page_missing_results_is_error() {
        let json = r#"{"count": 0, "next": null, "previous": null}"#;
        assert!(serde_json::from_str::<LocationAreaPage>(json).is_err());
    }
}
