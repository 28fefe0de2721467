//! SQLite persistence for the cooking companion.
//!
//! This module provides low-level database operations for the companion's
//! stores. It handles the SQLite connection, schema management, the
//! append-only completion log with its per-day frequency counts, and the
//! string-keyed JSON documents used by favorites, basket, and settings.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, Result};

pub mod completion_queries;
pub mod kv_queries;
pub mod migrations;

/// Database connection and operations handler.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Creates a new database connection and initializes the schema.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = Connection::open(path).db_context("Failed to open database connection")?;

        let db = Self { connection };
        db.initialize_schema()?;
        Ok(db)
    }
}
