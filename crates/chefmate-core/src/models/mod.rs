//! Data models for recipes, cooking sessions, and the user stores.
//!
//! This module contains the core domain models of the ChefMate companion:
//! the recipe/step hierarchy that drives a cooking session, the completion
//! record appended when a session finishes, and the user-owned stores
//! (favorites, shopping basket, settings). Display implementations for these
//! models live in [`crate::display`] to keep data structures and presentation
//! logic separate.

pub mod basket;
pub mod completion;
pub mod favorite;
pub mod recipe;
pub mod settings;


// Re-export all public types at the models level
pub use basket::BasketItem;
pub use completion::CompletionRecord;
pub use favorite::FavoriteRecipe;
pub use recipe::{CookingStep, Recipe, RecipeListing, SubStep};
pub use settings::UserSettings;
