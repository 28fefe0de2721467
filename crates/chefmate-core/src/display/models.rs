//! Display implementations for domain models.
//!
//! Separated from the model definitions to keep data structures and
//! presentation apart. All output is Markdown for the terminal renderer.

use std::fmt;

use super::datetime::LocalDateTime;
use crate::models::{
    BasketItem, CompletionRecord, CookingStep, FavoriteRecipe, Recipe, RecipeListing, SubStep,
    UserSettings,
};

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "# {}", self.title)?;
        writeln!(f)?;
        writeln!(f, "- Recipe: {} ({})", self.name, self.id)?;
        writeln!(f, "- Steps: {}", self.total_steps())?;
        if let Some(image) = &self.image {
            writeln!(f, "- Image: {image}")?;
        }

        for step in &self.steps {
            writeln!(f)?;
            write!(f, "{step}")?;
        }

        Ok(())
    }
}

impl fmt::Display for CookingStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "## {}: {}", self.name, self.subtitle)?;
        for sub_step in &self.sub_steps {
            writeln!(f)?;
            write!(f, "{sub_step}")?;
        }
        Ok(())
    }
}

impl fmt::Display for SubStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "### {}", self.name)?;
        for line in &self.instructions {
            writeln!(f, "- {line}")?;
        }
        Ok(())
    }
}

impl fmt::Display for CompletionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} cooked at {}",
            self.recipe_name,
            LocalDateTime(&self.completed_at)
        )
    }
}

impl fmt::Display for RecipeListing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** ({})", self.title, self.id)?;
        if !self.category.is_empty() {
            write!(f, ": {}", self.category)?;
        }
        if !self.time.is_empty() {
            write!(f, ", {}", self.time)?;
        }
        Ok(())
    }
}

impl fmt::Display for FavoriteRecipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- **{}** ({})", self.name, self.id)?;
        if !self.category.is_empty() {
            write!(f, ": {}", self.category)?;
        }
        write!(f, ", added {}", LocalDateTime(&self.added_at))
    }
}

impl fmt::Display for BasketItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mark = if self.checked { "x" } else { " " };
        write!(f, "- [{mark}] {}", self.name)?;
        if !self.quantity.is_empty() {
            write!(f, " ({})", self.quantity)?;
        }
        if !self.description.is_empty() {
            write!(f, ": {}", self.description)?;
        }
        Ok(())
    }
}

impl fmt::Display for UserSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "- Volume: {}", self.volume)?;
        writeln!(f, "- Speech rate: {}", self.speech_rate)?;
        writeln!(
            f,
            "- Push notifications: {}",
            if self.push_notification { "on" } else { "off" }
        )?;
        write!(
            f,
            "- Sound alerts: {}",
            if self.sound_alert { "on" } else { "off" }
        )
    }
}
