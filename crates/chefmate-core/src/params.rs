//! Parameter structures for companion operations.
//!
//! Shared parameter structures usable across interfaces (CLI today, others
//! later) without framework-specific derives. Interface layers define their
//! own argument structs with the framework derives they need and convert into
//! these via `From`/`Into`.

use serde::{Deserialize, Serialize};

/// Generic parameters for operations requiring just a recipe identifier.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RecipeId {
    /// The identifier of the recipe to operate on
    pub id: String,
}

/// Parameters for adding a recipe to the favorites list.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddFavorite {
    /// Recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Category label
    pub category: Option<String>,
    /// Preparation time label
    pub time: Option<String>,
    /// Popularity label
    pub likes: Option<String>,
    /// Image URL
    pub image: Option<String>,
}

/// Parameters for adding a shopping basket item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AddBasketItem {
    /// Ingredient or product name
    pub name: String,
    /// Quantity label
    pub quantity: Option<String>,
    /// Free-form note
    pub description: Option<String>,
}

/// Parameters for a partial settings update; `None` fields stay unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSettings {
    /// Playback volume, 0 to 100
    pub volume: Option<u8>,
    /// Speech playback rate multiplier
    pub speech_rate: Option<f64>,
    /// Whether push notifications are enabled
    pub push_notification: Option<bool>,
    /// Whether sound alerts are enabled
    pub sound_alert: Option<bool>,
}

impl UpdateSettings {
    /// True when no field is set.
    pub fn is_empty(&self) -> bool {
        self.volume.is_none()
            && self.speech_rate.is_none()
            && self.push_notification.is_none()
            && self.sound_alert.is_none()
    }
}
