//! Shopping basket item model.

use serde::{Deserialize, Serialize};

/// One entry in the shopping basket.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BasketItem {
    /// Ingredient or product name
    pub name: String,

    /// Free-form note ("for the dumpling filling")
    #[serde(default)]
    pub description: String,

    /// Quantity label ("500g", "2")
    #[serde(default)]
    pub quantity: String,

    /// Whether the item has been ticked off
    #[serde(default)]
    pub checked: bool,
}

impl BasketItem {
    /// Build an unchecked item with a name and quantity.
    pub fn new(name: impl Into<String>, quantity: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            quantity: quantity.into(),
            checked: false,
        }
    }
}
