//! History Manager for PassForge.
//!
//! Implements `HistoryManagerTrait` — recording generated passwords,
//! listing them most recent first, deleting and clearing, backed by
//! SQLite via `rusqlite`. The list is bounded: recording the 51st entry
//! evicts the oldest.

use rusqlite::{params, Connection};
use std::time::{SystemTime, UNIX_EPOCH};
use uuid::Uuid;

use crate::types::errors::HistoryError;
use crate::types::history::{GenerationSnapshot, HistoryEntry};
use crate::types::strength::StrengthTier;

/// Maximum number of entries kept in history.
pub const MAX_HISTORY_ENTRIES: usize = 50;

/// Trait defining history management operations.
pub trait HistoryManagerTrait {
    fn record(
        &mut self,
        password: &str,
        snapshot: &GenerationSnapshot,
        tier: Option<StrengthTier>,
    ) -> Result<String, HistoryError>;
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError>;
    fn delete_entry(&mut self, id: &str) -> Result<(), HistoryError>;
    fn clear_all(&mut self) -> Result<(), HistoryError>;
    fn count(&self) -> Result<usize, HistoryError>;
}

/// History manager backed by a SQLite connection.
pub struct HistoryManager<'a> {
    conn: &'a Connection,
}

impl<'a> HistoryManager<'a> {
    /// Creates a new `HistoryManager` using the provided database connection.
    pub fn new(conn: &'a Connection) -> Self {
        Self { conn }
    }

    /// Returns the current UNIX timestamp in seconds.
    fn now() -> i64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs() as i64
    }

    /// Reads a single `HistoryEntry` row into a struct.
    fn row_to_entry(row: &rusqlite::Row) -> rusqlite::Result<HistoryEntry> {
        let snapshot_json: String = row.get(3)?;
        let snapshot: GenerationSnapshot = serde_json::from_str(&snapshot_json).map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(
                3,
                rusqlite::types::Type::Text,
                Box::new(e),
            )
        })?;
        let tier: Option<String> = row.get(4)?;

        Ok(HistoryEntry {
            id: row.get(0)?,
            password: row.get(1)?,
            created_at: row.get(2)?,
            snapshot,
            tier: tier.as_deref().and_then(StrengthTier::parse),
        })
    }
}

impl<'a> HistoryManagerTrait for HistoryManager<'a> {
    /// Records a generated password at the front of the history and evicts
    /// entries beyond the cap. Returns the new entry's ID.
    fn record(
        &mut self,
        password: &str,
        snapshot: &GenerationSnapshot,
        tier: Option<StrengthTier>,
    ) -> Result<String, HistoryError> {
        let id = Uuid::new_v4().to_string();
        let now = Self::now();
        let snapshot_json = serde_json::to_string(snapshot)
            .map_err(|e| HistoryError::DatabaseError(format!("Snapshot encoding: {}", e)))?;

        self.conn
            .execute(
                "INSERT INTO password_history (id, password, created_at, snapshot, tier)
                 VALUES (?1, ?2, ?3, ?4, ?5)",
                params![id, password, now, snapshot_json, tier.map(StrengthTier::as_str)],
            )
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        // Evict the oldest entries beyond the cap. rowid breaks ties for
        // entries created in the same second.
        self.conn
            .execute(
                "DELETE FROM password_history WHERE id NOT IN (
                     SELECT id FROM password_history
                     ORDER BY created_at DESC, rowid DESC
                     LIMIT ?1
                 )",
                params![MAX_HISTORY_ENTRIES as i64],
            )
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        Ok(id)
    }

    /// Returns all entries, most recent first.
    fn list(&self) -> Result<Vec<HistoryEntry>, HistoryError> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT id, password, created_at, snapshot, tier
                 FROM password_history
                 ORDER BY created_at DESC, rowid DESC",
            )
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        let entries = stmt
            .query_map([], Self::row_to_entry)
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        Ok(entries)
    }

    /// Deletes a single entry by ID.
    fn delete_entry(&mut self, id: &str) -> Result<(), HistoryError> {
        let affected = self
            .conn
            .execute("DELETE FROM password_history WHERE id = ?1", params![id])
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;

        if affected == 0 {
            return Err(HistoryError::NotFound(id.to_string()));
        }
        Ok(())
    }

    /// Removes all history entries.
    fn clear_all(&mut self) -> Result<(), HistoryError> {
        self.conn
            .execute("DELETE FROM password_history", [])
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        Ok(())
    }

    /// Returns the number of stored entries.
    fn count(&self) -> Result<usize, HistoryError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM password_history", [], |row| {
                row.get(0)
            })
            .map_err(|e| HistoryError::DatabaseError(e.to_string()))?;
        Ok(count as usize)
    }
}
