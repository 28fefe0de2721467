//! Favorite recipe model.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A recipe the user has marked as a favorite.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FavoriteRecipe {
    /// Identifier of the favorited recipe
    pub id: String,

    /// Recipe name
    pub name: String,

    /// Image URL
    #[serde(default)]
    pub image: String,

    /// Preparation time label
    #[serde(default)]
    pub time: String,

    /// Popularity label ("500+")
    #[serde(default)]
    pub likes: String,

    /// Category label
    #[serde(default)]
    pub category: String,

    /// When the recipe was added to favorites (UTC)
    pub added_at: Timestamp,
}
