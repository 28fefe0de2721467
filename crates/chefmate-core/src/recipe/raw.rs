//! Wire shapes for raw recipe documents.
//!
//! The recipe endpoint returns a JSON object keyed by the recipe name. The
//! value either carries a pre-structured `cookingSteps` array, used verbatim,
//! or a flat `steps` array that [`crate::recipe::derive`] turns into grouped
//! steps.

use serde::Deserialize;

use crate::models::CookingStep;

/// Top-level recipe document: a single-entry object keyed by recipe name.
pub type RawRecipeDocument = serde_json::Map<String, serde_json::Value>;

/// Payload stored under the recipe-name key.
#[derive(Debug, Clone, Deserialize)]
pub struct RawRecipe {
    /// Display title; falls back to the recipe name when absent
    pub title: Option<String>,

    /// Optional hero image URL
    pub image: Option<String>,

    /// Pre-structured steps, used verbatim when present and non-empty
    #[serde(rename = "cookingSteps")]
    pub cooking_steps: Option<Vec<CookingStep>>,

    /// Flat instruction list used when no pre-structured steps exist
    #[serde(default)]
    pub steps: Vec<RawInstruction>,
}

/// One entry of a flat instruction list.
///
/// Older documents store bare strings; newer ones store objects with a short
/// name and a longer description.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum RawInstruction {
    Text(String),
    Detailed {
        name: String,
        #[serde(default)]
        description: String,
    },
}

impl RawInstruction {
    /// The instruction line to display, preferring the long description.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(text) => text,
            Self::Detailed { name, description } => {
                if description.is_empty() {
                    name
                } else {
                    description
                }
            }
        }
    }
}
