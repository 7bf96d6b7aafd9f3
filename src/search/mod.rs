//! Search Service Module
//!
//! Ranks catalog records against free-text Vietnamese queries.
//!
//! ## Overview
//! The catalog is small, so every query is a linear scan: each record is scored
//! independently, records without any signal are dropped, and the best matches
//! are returned in order.
//!
//! ## Responsibilities
//! - **Tokenization**: Case-folding and splitting queries into words.
//! - **Price parsing**: Reading display prices and price limits embedded in queries
//!   (`"dưới 5 triệu"`, `"trên 500k"`).
//! - **Scoring**: Summing keyword, price, household-size and origin signals.
//! - **Ranking**: Stable ordering by score and truncation to the top results.
//! - **API**: Exposing search via the `/api/search` endpoint.
//!
//! ## Submodules
//! - **`engine`**: Filtering, ordering and truncating scored records.
//! - **`handlers`**: HTTP request handlers for the Axum web server.
//! - **`price`**: Display-price and query-amount parsing, price formatting.
//! - **`scorer`**: The additive scoring rules.
//! - **`tokenizer`**: Query and record text normalization.
//! - **`types`**: Request and debug DTOs.

pub mod engine;
pub mod handlers;
pub mod price;
pub mod scorer;
pub mod tokenizer;
pub mod types;
