//! Pokedex - A command-line PokeAPI explorer
//!
//! Browses location areas, explores encounters and simulates catching
//! Pokemon. Every API response goes through an expiring in-memory cache.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod game;
pub mod models;
pub mod repl;
mod tasks;

pub use api::PokeApiClient;
pub use cache::ResponseCache;
pub use config::Config;
pub use error::{CacheError, PokedexError, Result};
pub use repl::Session;
