//! Core library for the ChefMate voice-assisted cooking companion.
//!
//! This crate provides the business logic of the companion: loading recipes
//! into an ordered step/sub-step hierarchy, walking that hierarchy through a
//! cooking session, classifying transcribed voice commands, forwarding open
//! questions to the conversational assistant, and persisting completions and
//! user stores in SQLite.
//!
//! # Architecture
//!
//! - [`recipe`]: recipe sources and step-structure derivation
//! - [`session`]: the cooking session state machine (the only owner of the
//!   current position)
//! - [`voice`]: intent classification and the voice command dispatcher
//! - [`speech`]: the WebSocket transcription channel and playback queue
//! - [`store`] / [`companion`]: SQLite persistence behind an async facade
//! - [`display`]: Markdown `Display` implementations rendered by the CLI
//!
//! # Quick Start
//!
//! ```rust
//! use chefmate_core::{recipe::load_recipe, CompanionBuilder, CookingSession};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let companion = CompanionBuilder::new()
//!     .with_database_path(Some("chefmate.db"))
//!     .build()
//!     .await?;
//!
//! let source = companion.recipe_source();
//! let recipe = load_recipe(&source, "tomato-egg").await?;
//! let mut session = CookingSession::new(recipe);
//! session.advance();
//! # Ok(())
//! # }
//! ```

pub mod companion;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod recipe;
pub mod session;
pub mod speech;
pub mod store;
pub mod voice;

// Re-export commonly used types
pub use companion::{Companion, CompanionBuilder};
pub use display::{
    BasketItems, Completions, Favorites, FrequencyTable, LocalDateTime, RecipeListings,
};
pub use error::{CompanionError, Result};
pub use models::{
    BasketItem, CompletionRecord, CookingStep, FavoriteRecipe, Recipe, RecipeListing, SubStep,
    UserSettings,
};
pub use params::{AddBasketItem, AddFavorite, RecipeId, UpdateSettings};
pub use recipe::{load_recipe, HttpRecipeSource, RecipeSource};
pub use session::{CookingSession, NavOutcome, SessionState};
pub use speech::{PlaybackQueue, ServerEvent, SpeechEvent, SpeechHandle};
pub use store::Database;
pub use voice::{
    AssistantBackend, AssistantReply, Feedback, HttpAssistant, Intent, VoiceDispatcher,
};
