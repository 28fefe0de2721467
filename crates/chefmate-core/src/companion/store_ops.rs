//! Async store operations for the Companion.
//!
//! Every method opens the database on a blocking task; SQLite work never
//! runs on the async executor threads.

use tokio::task;

use super::Companion;
use crate::{
    error::{CompanionError, Result},
    models::{BasketItem, CompletionRecord, FavoriteRecipe, UserSettings},
    store::Database,
};

impl Companion {
    /// Appends a completion record to the log and bumps the day's count.
    pub async fn append_completion(&self, record: CompletionRecord) -> Result<u64> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.append_completion(&record)
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Lists all completion records, newest first.
    pub async fn list_completions(&self) -> Result<Vec<CompletionRecord>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.list_completions()
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Per-day completion counts, newest day first.
    pub async fn cooking_frequency(&self) -> Result<Vec<(String, u64)>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.cooking_frequency()
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// All favorited recipes.
    pub async fn favorites(&self) -> Result<Vec<FavoriteRecipe>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.favorites()
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Adds a favorite. Returns false if the recipe was already favorited.
    pub async fn add_favorite(&self, favorite: FavoriteRecipe) -> Result<bool> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_favorite(favorite)
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes a favorite by recipe id. Returns false if it was not present.
    pub async fn remove_favorite(&self, recipe_id: String) -> Result<bool> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.remove_favorite(&recipe_id)
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// All basket items.
    pub async fn basket_items(&self) -> Result<Vec<BasketItem>> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.basket_items()
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Adds a basket item.
    pub async fn add_basket_item(&self, item: BasketItem) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.add_basket_item(item)
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Removes basket items by name. Returns how many were removed.
    pub async fn remove_basket_item(&self, name: String) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.remove_basket_item(&name)
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Drops every checked-off basket item. Returns how many were dropped.
    pub async fn clear_checked_items(&self) -> Result<usize> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.clear_checked_items()
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// User settings, defaults when none were saved yet.
    pub async fn settings(&self) -> Result<UserSettings> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let db = Database::new(&db_path)?;
            db.settings()
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }

    /// Persists user settings.
    pub async fn save_settings(&self, settings: UserSettings) -> Result<()> {
        let db_path = self.db_path.clone();

        task::spawn_blocking(move || {
            let mut db = Database::new(&db_path)?;
            db.save_settings(&settings)
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })?
    }
}
