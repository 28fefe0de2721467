//! User settings model.

use serde::{Deserialize, Serialize};

/// User preferences for audio playback and alerts.
///
/// Stored as a single JSON document. Missing fields fall back to the
/// defaults so older stored documents keep loading after new fields land.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase", default)]
pub struct UserSettings {
    /// Playback volume, 0 to 100
    pub volume: u8,

    /// Speech playback rate multiplier
    pub speech_rate: f64,

    /// Whether push notifications are enabled
    pub push_notification: bool,

    /// Whether sound alerts are enabled
    pub sound_alert: bool,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            volume: 70,
            speech_rate: 1.0,
            push_notification: true,
            sound_alert: true,
        }
    }
}
