//! High-level companion API.
//!
//! [`Companion`] is the async facade the application surface talks to. It
//! owns the database path and the backend base URL, hands out the HTTP
//! recipe source and assistant, and wraps all blocking store work in
//! [`tokio::task::spawn_blocking`].
//!
//! # Usage
//!
//! ```rust
//! use chefmate_core::CompanionBuilder;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let companion = CompanionBuilder::new()
//!     .with_database_path(Some("/tmp/chefmate.db"))
//!     .with_api_url(Some("http://localhost:8000".to_string()))
//!     .build()
//!     .await?;
//!
//! let log = companion.list_completions().await?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod builder;
pub mod store_ops;

pub use builder::CompanionBuilder;

use crate::recipe::HttpRecipeSource;
use crate::voice::HttpAssistant;

/// Main companion interface for stores and backend wiring.
pub struct Companion {
    pub(crate) db_path: PathBuf,
    pub(crate) api_url: String,
}

impl Companion {
    pub(crate) fn new(db_path: PathBuf, api_url: String) -> Self {
        Self { db_path, api_url }
    }

    /// The backend base URL in use.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Recipe source talking to the configured backend.
    pub fn recipe_source(&self) -> HttpRecipeSource {
        HttpRecipeSource::new(self.api_url.clone())
    }

    /// Assistant backend talking to the configured backend.
    pub fn assistant(&self) -> HttpAssistant {
        HttpAssistant::new(self.api_url.clone())
    }

    /// WebSocket URL of the transcription endpoint.
    pub fn speech_url(&self) -> String {
        let ws_base = if let Some(rest) = self.api_url.strip_prefix("https://") {
            format!("wss://{rest}")
        } else if let Some(rest) = self.api_url.strip_prefix("http://") {
            format!("ws://{rest}")
        } else {
            format!("ws://{}", self.api_url)
        };
        format!("{ws_base}/ws/transcribe")
    }
}
