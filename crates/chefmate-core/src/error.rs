//! Error types for the companion library.

use std::path::PathBuf;

use thiserror::Error;

/// Comprehensive error type for all companion operations.
#[derive(Error, Debug)]
pub enum CompanionError {
    /// Database connection or query errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// No usable recipe data could be obtained for the given identifier
    #[error("Recipe '{id}' is unavailable")]
    RecipeUnavailable { id: String },
    /// Recipe source request failed
    #[error("Recipe source error: {message}")]
    RecipeSource { message: String },
    /// Assistant endpoint request failed
    #[error("Assistant service error: {message}")]
    Assistant { message: String },
    /// Speech channel connection or protocol errors
    #[error("Speech channel error: {message}")]
    Speech { message: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// Serialization/deserialization errors
    #[error("Serialization error: {source}")]
    Serialization {
        #[from]
        source: serde_json::Error,
    },
    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

/// Builder for creating database errors with optional context.
pub struct DatabaseErrorBuilder {
    message: String,
}

impl DatabaseErrorBuilder {
    /// Create a new database error builder with a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Build the error with the given source.
    pub fn with_source(self, source: rusqlite::Error) -> CompanionError {
        CompanionError::Database {
            message: self.message,
            source,
        }
    }
}

impl CompanionError {
    /// Creates a builder for database errors.
    pub fn database(message: impl Into<String>) -> DatabaseErrorBuilder {
        DatabaseErrorBuilder::new(message)
    }

    /// Creates a new database error with additional context.
    pub fn database_error(message: &str, source: rusqlite::Error) -> Self {
        Self::database(message).with_source(source)
    }

    /// Creates an assistant error from any displayable cause.
    pub fn assistant(message: impl Into<String>) -> Self {
        Self::Assistant {
            message: message.into(),
        }
    }

    /// Creates a speech channel error from any displayable cause.
    pub fn speech(message: impl Into<String>) -> Self {
        Self::Speech {
            message: message.into(),
        }
    }
}

/// Specialized extension trait for database-related Results.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CompanionError::database(message).with_source(e))
    }
}

/// Specialized extension trait for configuration-related Results.
pub trait ConfigResultExt<T> {
    /// Map configuration errors with a message.
    fn config_context(self, message: &str) -> Result<T>;
}

impl<T, E> ConfigResultExt<T> for std::result::Result<T, E>
where
    E: std::error::Error + Send + Sync + 'static,
{
    fn config_context(self, message: &str) -> Result<T> {
        self.map_err(|e| CompanionError::Configuration {
            message: format!("{message}: {e}"),
        })
    }
}

/// Result type alias for companion operations
pub type Result<T> = std::result::Result<T, CompanionError>;
