//! Game Module
//!
//! Catch simulation and the collection of caught Pokemon.

pub mod catch;
pub mod pokedex;

pub use catch::{attempt_catch, catch_rate};
pub use pokedex::Pokedex;
