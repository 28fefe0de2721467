//! Builder for creating and configuring Companion instances.

use std::path::{Path, PathBuf};

use tokio::task;

use super::Companion;
use crate::{
    error::{CompanionError, Result},
    store::Database,
};

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Builder for creating and configuring Companion instances.
#[derive(Debug, Clone)]
pub struct CompanionBuilder {
    database_path: Option<PathBuf>,
    api_url: Option<String>,
}

impl CompanionBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
            api_url: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/chefmate/chefmate.db` or
    /// `~/.local/share/chefmate/chefmate.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the backend base URL for recipes, assistant, and speech.
    pub fn with_api_url(mut self, url: Option<String>) -> Self {
        if let Some(url) = url {
            self.api_url = Some(url);
        }
        self
    }

    /// Builds the configured companion instance.
    ///
    /// # Errors
    ///
    /// Returns `CompanionError::FileSystem` if the database path is invalid
    /// Returns `CompanionError::Database` if database initialization fails
    pub async fn build(self) -> Result<Companion> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| CompanionError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let db_path_clone = db_path.clone();
        task::spawn_blocking(move || {
            let _db = Database::new(&db_path_clone)?;
            Ok::<(), CompanionError>(())
        })
        .await
        .map_err(|e| CompanionError::Configuration {
            message: format!("Task join error: {e}"),
        })??;

        let api_url = self
            .api_url
            .unwrap_or_else(|| DEFAULT_API_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        Ok(Companion::new(db_path, api_url))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("chefmate")
            .place_data_file("chefmate.db")
            .map_err(|e| CompanionError::XdgDirectory(e.to_string()))
    }
}

impl Default for CompanionBuilder {
    fn default() -> Self {
        Self::new()
    }
}
