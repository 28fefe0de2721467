//! String-keyed JSON document queries.
//!
//! Favorites, the shopping basket, and user settings each live under one key
//! as a JSON document. The key names are part of the stored-data contract and
//! must not change.

use jiff::Timestamp;
use rusqlite::{params, OptionalExtension};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    error::{CompanionError, DatabaseResultExt, Result},
    models::{BasketItem, FavoriteRecipe, UserSettings},
};

pub(crate) const FAVORITES_KEY: &str = "chefmate_favorites";
pub(crate) const BASKET_KEY: &str = "basketItems";
pub(crate) const SETTINGS_KEY: &str = "chefmate_settings";

const SELECT_VALUE_SQL: &str = "SELECT value FROM kv_store WHERE key = ?1";
const UPSERT_VALUE_SQL: &str = "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3) ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

impl super::Database {
    /// Reads and decodes the JSON document under a key.
    pub fn get_value<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let raw: Option<String> = self
            .connection
            .query_row(SELECT_VALUE_SQL, params![key], |row| row.get(0))
            .optional()
            .map_err(|e| CompanionError::database_error("Failed to query kv_store", e))?;

        match raw {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    /// Encodes and writes the JSON document under a key.
    pub fn put_value<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string(value)?;
        self.connection
            .execute(
                UPSERT_VALUE_SQL,
                params![key, &json, Timestamp::now().to_string()],
            )
            .db_context("Failed to write kv_store value")?;
        Ok(())
    }

    /// All favorited recipes.
    pub fn favorites(&self) -> Result<Vec<FavoriteRecipe>> {
        Ok(self.get_value(FAVORITES_KEY)?.unwrap_or_default())
    }

    /// Adds a favorite. Returns false if the recipe was already favorited.
    pub fn add_favorite(&mut self, favorite: FavoriteRecipe) -> Result<bool> {
        let mut favorites = self.favorites()?;
        if favorites.iter().any(|f| f.id == favorite.id) {
            return Ok(false);
        }
        favorites.push(favorite);
        self.put_value(FAVORITES_KEY, &favorites)?;
        Ok(true)
    }

    /// Removes a favorite by recipe id. Returns false if it was not present.
    pub fn remove_favorite(&mut self, recipe_id: &str) -> Result<bool> {
        let mut favorites = self.favorites()?;
        let before = favorites.len();
        favorites.retain(|f| f.id != recipe_id);
        if favorites.len() == before {
            return Ok(false);
        }
        self.put_value(FAVORITES_KEY, &favorites)?;
        Ok(true)
    }

    /// All basket items.
    pub fn basket_items(&self) -> Result<Vec<BasketItem>> {
        Ok(self.get_value(BASKET_KEY)?.unwrap_or_default())
    }

    /// Adds a basket item.
    pub fn add_basket_item(&mut self, item: BasketItem) -> Result<()> {
        let mut items = self.basket_items()?;
        items.push(item);
        self.put_value(BASKET_KEY, &items)
    }

    /// Removes basket items by name. Returns how many were removed.
    pub fn remove_basket_item(&mut self, name: &str) -> Result<usize> {
        let mut items = self.basket_items()?;
        let before = items.len();
        items.retain(|item| item.name != name);
        let removed = before - items.len();
        if removed > 0 {
            self.put_value(BASKET_KEY, &items)?;
        }
        Ok(removed)
    }

    /// Drops every checked-off basket item. Returns how many were dropped.
    pub fn clear_checked_items(&mut self) -> Result<usize> {
        let mut items = self.basket_items()?;
        let before = items.len();
        items.retain(|item| !item.checked);
        let removed = before - items.len();
        if removed > 0 {
            self.put_value(BASKET_KEY, &items)?;
        }
        Ok(removed)
    }

    /// User settings, defaults when none were saved yet.
    pub fn settings(&self) -> Result<UserSettings> {
        Ok(self.get_value(SETTINGS_KEY)?.unwrap_or_default())
    }

    /// Persists user settings.
    pub fn save_settings(&mut self, settings: &UserSettings) -> Result<()> {
        self.put_value(SETTINGS_KEY, settings)
    }
}
