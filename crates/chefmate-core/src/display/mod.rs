//! Display formatting for domain models and collections.
//!
//! Domain models implement `Display` producing Markdown, which the terminal
//! renderer turns into rich output. Collection newtypes keep empty-collection
//! handling in one place.

pub mod collections;
pub mod datetime;
pub mod models;

pub use collections::{BasketItems, Completions, Favorites, FrequencyTable, RecipeListings};
pub use datetime::LocalDateTime;
