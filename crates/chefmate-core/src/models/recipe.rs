//! Recipe model definitions.
//!
//! A [`Recipe`] is an ordered sequence of [`CookingStep`]s, each holding an
//! ordered sequence of [`SubStep`]s. The hierarchy is immutable once loaded;
//! a cooking session only ever reads it.

use serde::{Deserialize, Serialize};

/// A complete recipe ready to be cooked through.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    /// Identifier used by the recipe source (file stem on the backend)
    pub id: String,

    /// Recipe name (the key of the source JSON object)
    pub name: String,

    /// Display title
    pub title: String,

    /// Optional hero image URL
    pub image: Option<String>,

    /// Ordered cooking steps. Always non-empty for a loaded recipe.
    pub steps: Vec<CookingStep>,
}

impl Recipe {
    /// Total number of steps.
    pub fn total_steps(&self) -> usize {
        self.steps.len()
    }

    /// Number of sub-steps in the given step, or `None` if out of range.
    pub fn sub_steps_in(&self, step: usize) -> Option<usize> {
        self.steps.get(step).map(|s| s.sub_steps.len())
    }
}

/// A phase of the recipe ("Preparation", "Cooking process", ...).
///
/// Invariant: holds at least one sub-step.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CookingStep {
    /// Ordinal label ("Step 1")
    pub name: String,

    /// Phase description shown alongside the name
    pub subtitle: String,

    /// Ordered sub-steps
    #[serde(rename = "subSteps")]
    pub sub_steps: Vec<SubStep>,
}

/// A single action within a step.
///
/// Invariant: holds at least one instruction line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubStep {
    /// Ordinal label ("Action 1")
    pub name: String,

    /// Instruction lines displayed for this action
    #[serde(rename = "steps")]
    pub instructions: Vec<String>,
}

/// Summary row returned by the recipe list endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeListing {
    /// Recipe identifier
    pub id: String,
    /// Recipe name
    pub name: String,
    /// Display title
    pub title: String,
    /// Category label
    #[serde(default)]
    pub category: String,
    /// Preparation time label ("40min")
    #[serde(default)]
    pub time: String,
    /// Popularity indicator
    #[serde(default)]
    pub likes: serde_json::Value,
    /// Image URL
    #[serde(default)]
    pub image: String,
}
