//! The flat game-result log: append, list newest-first, age out.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use thiserror::Error;
use tuvung_engine::DrillMode;

use crate::db::Database;

/// Results older than this are eligible for cleanup.
const RETENTION_DAYS: i64 = 7;

#[derive(Debug, Error)]
pub enum ResultError {
    #[error("unknown game type: {0}")]
    UnknownGameType(String),
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameResult {
    pub id: i64,
    /// Millisecond epoch the drill finished at; the retention cutoff key.
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub game_type: String,
    pub set_name: String,
    pub result: String,
    pub date_formatted: String,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateResultInput {
    /// Millisecond epoch supplied by the client; defaults to now.
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(rename = "type")]
    pub game_type: String,
    #[serde(default)]
    pub set_name: Option<String>,
    pub result: String,
    /// Display string shown in the history table.
    #[serde(default)]
    pub timestamp: Option<String>,
}

pub async fn save_result(db: &Database, input: CreateResultInput) -> Result<i64, ResultError> {
    if DrillMode::from_slug(&input.game_type).is_none() {
        return Err(ResultError::UnknownGameType(input.game_type));
    }

    let epoch_ms = input.id.unwrap_or_else(|| Utc::now().timestamp_millis());
    let date_formatted = input
        .timestamp
        .unwrap_or_else(|| Utc::now().format("%d/%m/%Y %H:%M:%S").to_string());

    let result = sqlx::query(
        "INSERT INTO game_results (timestamp, type, set_name, result, date_formatted) VALUES (?, ?, ?, ?, ?)",
    )
    .bind(epoch_ms)
    .bind(&input.game_type)
    .bind(input.set_name.as_deref().unwrap_or(""))
    .bind(&input.result)
    .bind(&date_formatted)
    .execute(db.pool())
    .await?;

    Ok(result.last_insert_rowid())
}

/// Reverse-chronological listing; callers show however many they want.
pub async fn list_results(db: &Database) -> Result<Vec<GameResult>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, timestamp, type, set_name, result, date_formatted, created_at \
         FROM game_results ORDER BY id DESC",
    )
    .fetch_all(db.pool())
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| GameResult {
            id: row.get("id"),
            timestamp: row.get("timestamp"),
            game_type: row.get("type"),
            set_name: row.get("set_name"),
            result: row.get("result"),
            date_formatted: row.get("date_formatted"),
            created_at: row.get("created_at"),
        })
        .collect())
}

/// Deletes results past the retention window; returns how many went.
pub async fn cleanup_results(db: &Database) -> Result<u64, sqlx::Error> {
    let cutoff = Utc::now().timestamp_millis() - RETENTION_DAYS * 24 * 60 * 60 * 1000;
    let result = sqlx::query("DELETE FROM game_results WHERE timestamp < ?")
        .bind(cutoff)
        .execute(db.pool())
        .await?;
    Ok(result.rows_affected())
}
