//! Recipe loading.
//!
//! A [`RecipeSource`] yields raw recipe documents; [`load_recipe`] turns one
//! into a [`Recipe`] ready for a cooking session, deriving step structure
//! from a flat instruction list when the document has no pre-built steps.

pub mod derive;
pub mod http;
pub mod raw;

use async_trait::async_trait;
use serde::de::Error as _;

use crate::error::{CompanionError, Result};
use crate::models::{Recipe, RecipeListing};
use raw::{RawRecipe, RawRecipeDocument};

pub use http::HttpRecipeSource;

/// Where recipe documents come from.
///
/// The HTTP backend is the production implementation; tests swap in
/// in-memory fakes.
#[async_trait]
pub trait RecipeSource: Send + Sync {
    /// Fetch the raw document for one recipe, `None` if the source has no
    /// usable data for the identifier.
    async fn fetch(&self, recipe_id: &str) -> Result<Option<RawRecipeDocument>>;

    /// List all available recipes.
    async fn list(&self) -> Result<Vec<RecipeListing>>;
}

/// Load a recipe by identifier.
///
/// Missing or unusable documents yield [`CompanionError::RecipeUnavailable`];
/// a cooking session is never started without a loaded recipe.
pub async fn load_recipe(source: &dyn RecipeSource, recipe_id: &str) -> Result<Recipe> {
    let document = source
        .fetch(recipe_id)
        .await?
        .ok_or_else(|| CompanionError::RecipeUnavailable {
            id: recipe_id.to_string(),
        })?;
    build_recipe(recipe_id, document)
}

/// Turn a raw document into a [`Recipe`].
///
/// The document is an object keyed by recipe name; only the first entry is
/// used. Pre-structured `cookingSteps` are taken verbatim, otherwise the flat
/// instruction list is grouped by [`derive::structure_flat_instructions`].
pub fn build_recipe(recipe_id: &str, document: RawRecipeDocument) -> Result<Recipe> {
    let unavailable = || CompanionError::RecipeUnavailable {
        id: recipe_id.to_string(),
    };

    let (name, value) = document.into_iter().next().ok_or_else(unavailable)?;
    let raw: RawRecipe = serde_json::from_value(value)
        .map_err(|e| serde_json::Error::custom(format!("recipe '{recipe_id}': {e}")))?;

    let steps = match raw.cooking_steps {
        Some(steps) if !steps.is_empty() => steps,
        _ => {
            let lines: Vec<String> = raw.steps.iter().map(|i| i.text().to_string()).collect();
            derive::structure_flat_instructions(&lines)
        }
    };
    // Navigation assumes every step has at least one sub-step and every
    // sub-step at least one instruction; a document violating that is unusable.
    let usable = !steps.is_empty()
        && steps.iter().all(|step| {
            !step.sub_steps.is_empty()
                && step.sub_steps.iter().all(|s| !s.instructions.is_empty())
        });
    if !usable {
        return Err(unavailable());
    }

    let title = raw.title.unwrap_or_else(|| name.clone());
    Ok(Recipe {
        id: recipe_id.to_string(),
        name,
        title,
        image: raw.image,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(json: &str) -> RawRecipeDocument {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn prebuilt_steps_are_used_verbatim() {
        let doc = document(
            r#"{"Braised Pork": {
                "title": "Braised Pork Belly",
                "cookingSteps": [
                    {"name": "Step 1", "subtitle": "Preparation", "subSteps": [
                        {"name": "Action 1", "steps": ["Cube the pork belly"]}
                    ]}
                ]
            }}"#,
        );
        let recipe = build_recipe("braised-pork", doc).unwrap();
        assert_eq!(recipe.name, "Braised Pork");
        assert_eq!(recipe.title, "Braised Pork Belly");
        assert_eq!(recipe.total_steps(), 1);
        assert_eq!(
            recipe.steps[0].sub_steps[0].instructions[0],
            "Cube the pork belly"
        );
    }

    #[test]
    fn flat_string_steps_are_derived() {
        let doc = document(
            r#"{"Fried Rice": {"steps": ["Cook rice", "Beat eggs", "Fry rice", "Season"]}}"#,
        );
        let recipe = build_recipe("fried-rice", doc).unwrap();
        // ceil(4/3) = 2, so chunks of 2
        assert_eq!(recipe.total_steps(), 2);
        assert_eq!(recipe.steps[0].subtitle, "Preparation");
        assert_eq!(recipe.steps[0].sub_steps[0].instructions[0], "Cook rice");
    }

    #[test]
    fn detailed_flat_steps_prefer_descriptions() {
        let doc = document(
            r#"{"Soup": {"steps": [
                {"name": "Prep", "description": "Slice the ginger thin"},
                {"name": "Boil"}
            ]}}"#,
        );
        let recipe = build_recipe("soup", doc).unwrap();
        assert_eq!(
            recipe.steps[0].sub_steps[0].instructions[0],
            "Slice the ginger thin"
        );
        assert_eq!(recipe.steps[1].sub_steps[0].instructions[0], "Boil");
    }

    #[test]
    fn title_falls_back_to_recipe_name() {
        let doc = document(r#"{"Dumplings": {"steps": ["Fold", "Boil"]}}"#);
        let recipe = build_recipe("dumplings", doc).unwrap();
        assert_eq!(recipe.title, "Dumplings");
    }

    #[test]
    fn empty_document_is_unavailable() {
        let err = build_recipe("ghost", document("{}")).unwrap_err();
        assert!(matches!(
            err,
            CompanionError::RecipeUnavailable { id } if id == "ghost"
        ));
    }

    #[test]
    fn recipe_without_any_steps_is_unavailable() {
        let doc = document(r#"{"Empty": {"title": "Empty", "steps": []}}"#);
        let err = build_recipe("empty", doc).unwrap_err();
        assert!(matches!(err, CompanionError::RecipeUnavailable { .. }));
    }

    #[test]
    fn prebuilt_step_without_sub_steps_is_unavailable() {
        let doc = document(
            r#"{"Hollow": {"cookingSteps": [
                {"name": "Step 1", "subtitle": "Preparation", "subSteps": []},
                {"name": "Step 2", "subtitle": "Cooking process", "subSteps": [
                    {"name": "Action 1", "steps": ["Stir"]}
                ]}
            ]}}"#,
        );
        let err = build_recipe("hollow", doc).unwrap_err();
        assert!(matches!(err, CompanionError::RecipeUnavailable { .. }));
    }

    #[test]
    fn prebuilt_sub_step_without_instructions_is_unavailable() {
        let doc = document(
            r#"{"Hollow": {"cookingSteps": [
                {"name": "Step 1", "subtitle": "Preparation", "subSteps": [
                    {"name": "Action 1", "steps": []}
                ]}
            ]}}"#,
        );
        let err = build_recipe("hollow", doc).unwrap_err();
        assert!(matches!(err, CompanionError::RecipeUnavailable { .. }));
    }
}
