//! Error types for the Pokedex explorer
//!
//! Provides unified error handling using thiserror.

use std::time::Duration;

use thiserror::Error;

// == Cache Error Enum ==
/// Errors raised while constructing the response cache.
///
/// Cache reads and writes are total; only construction can fail.
#[derive(Error, Debug)]
pub enum CacheError {
    /// The TTL must be a positive duration
    #[error("Invalid cache TTL: {0:?} (must be greater than zero)")]
    InvalidTtl(Duration),

    /// The reaper needs a Tokio runtime to run on
    #[error("No Tokio runtime available to run the cache reaper")]
    NoRuntime,
}

// == Pokedex Error Enum ==
/// Unified error type for the explorer.
#[derive(Error, Debug)]
pub enum PokedexError {
    /// Cache could not be created
    #[error(transparent)]
    Cache(#[from] CacheError),

    /// HTTP request failed or returned a non-success status
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Input did not name a known command
    #[error("Unknown command")]
    UnknownCommand,

    /// Command was given without its required argument
    #[error("{0}")]
    MissingArgument(&'static str),

    /// `mapb` was used before any previous page exists
    #[error("you're on the first page")]
    FirstPage,

    /// The named Pokemon is not in the Pokedex
    #[error("you haven't caught {0} yet")]
    NotCaught(String),
}

// == Result Type Alias ==
/// Convenience Result type for the explorer.
pub type Result<T> = std::result::Result<T, PokedexError>;
