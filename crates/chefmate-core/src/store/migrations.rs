//! Database schema initialization and migrations.

use crate::error::{CompanionError, DatabaseResultExt, Result};

impl super::Database {
    /// Initializes the database schema using the embedded SQL file.
    pub(super) fn initialize_schema(&self) -> Result<()> {
        // Enable foreign keys for this connection
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        // Execute the schema SQL
        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        // Apply migrations for existing databases
        self.apply_migrations()?;

        Ok(())
    }

    /// Apply database migrations for existing databases
    fn apply_migrations(&self) -> Result<()> {
        // Check if recipe_name column exists in completions table
        let has_recipe_name_column: bool = self
            .connection
            .query_row(
                "SELECT COUNT(*) FROM pragma_table_info('completions') WHERE name = 'recipe_name'",
                [],
                |row| row.get(0),
            )
            .map(|count: i64| count > 0)
            .unwrap_or(false);

        // Add recipe_name column if it doesn't exist
        if !has_recipe_name_column {
            self.connection
                .execute(
                    "ALTER TABLE completions ADD COLUMN recipe_name TEXT NOT NULL DEFAULT ''",
                    [],
                )
                .map_err(|e| {
                    CompanionError::database_error(
                        "Failed to add recipe_name column to completions table",
                        e,
                    )
                })?;
        }

        Ok(())
    }
}
