//! API Module
//!
//! Cached HTTP access to the PokeAPI.
//!
//! # Endpoints used
//! - `GET /location-area` - Paginated list of location areas
//! - `GET /location-area/{name}` - Pokemon encounters in one area
//! - `GET /pokemon/{name}` - A single Pokemon

pub mod client;

pub use client::PokeApiClient;
