//! Catalog Module
//!
//! Owns the in-memory product catalog: how listings get in and how the serving
//! layer reads them back out.
//!
//! ## Workflow
//! 1. **Load**: Reads the JSON catalog file into raw listings.
//! 2. **Build**: Validates each listing, fills defaults and synthesizes missing names.
//! 3. **Publish**: Stores the finished records as one immutable snapshot.
//! 4. **Serve**: Lists or reloads the snapshot over HTTP.

pub mod builder;
pub mod handlers;
pub mod loader;
pub mod store;
pub mod types;

#[cfg(test)]
mod tests;
