//! Completion record model.

use jiff::{tz::TimeZone, Timestamp};
use serde::{Deserialize, Serialize};

/// A record of one finished cooking session.
///
/// Appended to the completion log when the final sub-step of the final step
/// is advanced past. Never mutated after creation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletionRecord {
    /// Day the session finished, in the system timezone ("2026-08-29")
    pub date_key: String,

    /// Identifier of the cooked recipe
    pub recipe_id: String,

    /// Display name of the cooked recipe
    pub recipe_name: String,

    /// Exact completion instant (UTC)
    pub completed_at: Timestamp,
}

impl CompletionRecord {
    /// Build a record for a session finishing now.
    pub fn now(recipe_id: impl Into<String>, recipe_name: impl Into<String>) -> Self {
        let completed_at = Timestamp::now();
        Self {
            date_key: day_key(completed_at),
            recipe_id: recipe_id.into(),
            recipe_name: recipe_name.into(),
            completed_at,
        }
    }
}

/// Format a timestamp as a day-granularity key in the system timezone.
pub fn day_key(at: Timestamp) -> String {
    at.to_zoned(TimeZone::system())
        .strftime("%Y-%m-%d")
        .to_string()
}
