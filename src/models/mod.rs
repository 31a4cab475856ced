//! PokeAPI response models
//!
//! Serde records for the response bodies the explorer decodes. Only the
//! fields in use are modelled; everything else in the payload is ignored.

pub mod location;
pub mod pokemon;

// Re-export commonly used types
pub use location::{LocationAreaDetail, LocationAreaPage, NamedResource, PokemonEncounter};
pub use pokemon::{Pokemon, PokemonStat, PokemonType};
