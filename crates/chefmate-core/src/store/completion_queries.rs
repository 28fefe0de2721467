//! Completion log queries.

use jiff::Timestamp;
use rusqlite::{params, types::Type};

use crate::{
    error::{CompanionError, DatabaseResultExt, Result},
    models::CompletionRecord,
};

const INSERT_COMPLETION_SQL: &str = "INSERT INTO completions (date_key, recipe_id, recipe_name, completed_at) VALUES (?1, ?2, ?3, ?4)";
const UPSERT_FREQUENCY_SQL: &str = "INSERT INTO cooking_frequency (date_key, count) VALUES (?1, 1) ON CONFLICT(date_key) DO UPDATE SET count = count + 1";
const SELECT_COMPLETIONS_SQL: &str = "SELECT date_key, recipe_id, recipe_name, completed_at FROM completions ORDER BY completed_at DESC";
const SELECT_FREQUENCY_SQL: &str =
    "SELECT date_key, count FROM cooking_frequency ORDER BY date_key DESC";

impl super::Database {
    /// Appends a completion record and bumps the day's frequency count.
    ///
    /// Both writes happen in one transaction; the log row and the counter can
    /// never drift apart.
    pub fn append_completion(&mut self, record: &CompletionRecord) -> Result<u64> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_COMPLETION_SQL,
            params![
                &record.date_key,
                &record.recipe_id,
                &record.recipe_name,
                record.completed_at.to_string()
            ],
        )
        .map_err(|e| CompanionError::database_error("Failed to insert completion", e))?;

        let id = tx.last_insert_rowid() as u64;

        tx.execute(UPSERT_FREQUENCY_SQL, params![&record.date_key])
            .map_err(|e| CompanionError::database_error("Failed to update cooking frequency", e))?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(id)
    }

    /// Lists all completion records, newest first.
    pub fn list_completions(&self) -> Result<Vec<CompletionRecord>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_COMPLETIONS_SQL)
            .map_err(|e| CompanionError::database_error("Failed to prepare query", e))?;

        let records = stmt
            .query_map([], |row| {
                Ok(CompletionRecord {
                    date_key: row.get(0)?,
                    recipe_id: row.get(1)?,
                    recipe_name: row.get(2)?,
                    completed_at: row.get::<_, String>(3)?.parse::<Timestamp>().map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
                    })?,
                })
            })
            .map_err(|e| CompanionError::database_error("Failed to query completions", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CompanionError::database_error("Failed to fetch completions", e))?;

        Ok(records)
    }

    /// Per-day completion counts, newest day first.
    pub fn cooking_frequency(&self) -> Result<Vec<(String, u64)>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_FREQUENCY_SQL)
            .map_err(|e| CompanionError::database_error("Failed to prepare query", e))?;

        let rows = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get::<_, i64>(1)? as u64)))
            .map_err(|e| CompanionError::database_error("Failed to query cooking frequency", e))?
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| CompanionError::database_error("Failed to fetch cooking frequency", e))?;

        Ok(rows)
    }
}
