//! Pokedex
//!
//! In-memory collection of caught Pokemon for the current session.

use std::collections::BTreeMap;

use crate::models::Pokemon;

/// Caught Pokemon keyed by name, listed in name order.
#[derive(Debug, Clone, Default)]
pub struct Pokedex {
    caught: BTreeMap<String, Pokemon>,
}

impl Pokedex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a catch, replacing an earlier catch of the same name.
    pub fn record(&mut self, pokemon: Pokemon) {
        self.caught.insert(pokemon.name.clone(), pokemon);
    }

    pub fn get(&self, name: &str) -> Option<&Pokemon> {
        self.caught.get(name)
    }

    /// Names of every caught Pokemon, in name order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.caught.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.caught.len()
    }

    pub fn is_empty(&self) -> bool {
        self.caught.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pokemon(id: u32, name: &str, height: u32) -> Pokemon {
        Pokemon {
            id,
            name: name.to_string(),
            base_experience: Some(64),
            height,
            weight: 10,
            stats: Vec::new(),
            types: Vec::new(),
        }
    }

    #[test]
    fn test_record_and_get() {
        let mut pokedex = Pokedex::new();
        assert!(pokedex.is_empty());

        pokedex.record(pokemon(1, "bulbasaur", 7));

        assert_eq!(pokedex.len(), 1);
        assert_eq!(pokedex.get("bulbasaur").unwrap().id, 1);
        assert!(pokedex.get("ivysaur").is_none());
    }

    #[test]
    fn test_recatch_replaces() {
        let mut pokedex = Pokedex::new();
        pokedex.record(pokemon(1, "bulbasaur", 7));
        pokedex.record(pokemon(1, "bulbasaur", 8));

        assert_eq!(pokedex.len(), 1);
        assert_eq!(pokedex.get("bulbasaur").unwrap().height, 8);
    }

    #[test]
    fn test_names_sorted() {
        let mut pokedex = Pokedex::new();
        pokedex.record(pokemon(7, "squirtle", 5));
        pokedex.record(pokemon(1, "bulbasaur", 7));
        pokedex.record(pokemon(4, "charmander", 6));

        let names: Vec<&str> = pokedex.names().collect();
        assert_eq!(names, vec!["bulbasaur", "charmander", "squirtle"]);
    }
}
