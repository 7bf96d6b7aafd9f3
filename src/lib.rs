//! Appliance Catalog Search Library
//!
//! This library crate defines the modules behind the catalog search service.
//! It serves as the foundation for the binary executable (`main.rs`).
//!
//! ## Architecture Modules
//! - **`extraction`**: Mines labeled facts (capacity, screen size, origin, release year,
//!   household size) out of free-text Vietnamese product descriptions.
//! - **`search`**: Price parsing, the additive relevance scorer and the ranking engine.
//! - **`catalog`**: Loading, validating and publishing the in-memory product snapshot.
//! - **`config`**: Command-line and environment configuration of the server.
//! - **`server`**: The Axum router exposing `/api/products` and `/api/search`.

pub mod catalog;
pub mod config;
pub mod extraction;
pub mod search;
pub mod server;
