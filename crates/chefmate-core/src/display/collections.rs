//! Collection wrapper types for displaying groups of domain objects.
//!
//! Newtype wrappers provide Display implementations for collections with
//! consistent empty-collection handling.

use std::fmt;

use crate::models::{BasketItem, CompletionRecord, FavoriteRecipe, RecipeListing};

/// Newtype wrapper for displaying the completion log.
pub struct Completions(pub Vec<CompletionRecord>);

impl Completions {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Completions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No cooking sessions completed yet.");
        }
        for record in &self.0 {
            writeln!(f, "{record}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying favorite recipes.
pub struct Favorites(pub Vec<FavoriteRecipe>);

impl Favorites {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for Favorites {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No favorite recipes yet.");
        }
        for favorite in &self.0 {
            writeln!(f, "{favorite}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the shopping basket.
pub struct BasketItems(pub Vec<BasketItem>);

impl BasketItems {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for BasketItems {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "The shopping basket is empty.");
        }
        for item in &self.0 {
            writeln!(f, "{item}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for displaying the recipe catalogue.
pub struct RecipeListings(pub Vec<RecipeListing>);

impl RecipeListings {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl fmt::Display for RecipeListings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No recipes available.");
        }
        for listing in &self.0 {
            writeln!(f, "{listing}")?;
        }
        Ok(())
    }
}

/// Newtype wrapper for the per-day completion counts.
pub struct FrequencyTable(pub Vec<(String, u64)>);

impl fmt::Display for FrequencyTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return write!(f, "No cooking activity recorded yet.");
        }
        for (date_key, count) in &self.0 {
            let unit = if *count == 1 { "session" } else { "sessions" };
            writeln!(f, "- {date_key}: {count} {unit}")?;
        }
        Ok(())
    }
}
