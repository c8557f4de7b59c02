//! Vocabulary-set CRUD over the `vocab_sets` and `words` tables.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::Row;
use thiserror::Error;
use tuvung_engine::VocabItem;
use uuid::Uuid;

use crate::db::Database;

#[derive(Debug, Error)]
pub enum SetError {
    #[error("every word needs a non-empty word and meaning")]
    InvalidWord,
    #[error(transparent)]
    Db(#[from] sqlx::Error),
}

/// A stored set with its full word list, in insertion order.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabSet {
    pub id: String,
    pub timestamp: String,
    pub word_count: i64,
    pub created_at: String,
    pub words: Vec<VocabItem>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSetInput {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub words: Vec<VocabItem>,
}

pub async fn list_sets(db: &Database) -> Result<Vec<VocabSet>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT id, timestamp, word_count, created_at FROM vocab_sets ORDER BY created_at DESC, id DESC",
    )
    .fetch_all(db.pool())
    .await?;

    let mut sets = Vec::with_capacity(rows.len());
    for row in rows {
        let id: String = row.get("id");
        let words = words_for_set(db, &id).await?;
        sets.push(VocabSet {
            timestamp: row.get("timestamp"),
            word_count: row.get("word_count"),
            created_at: row.get("created_at"),
            id,
            words,
        });
    }
    Ok(sets)
}

pub async fn create_set(db: &Database, input: CreateSetInput) -> Result<String, SetError> {
    if input
        .words
        .iter()
        .any(|w| w.word.is_empty() || w.meaning.is_empty())
    {
        return Err(SetError::InvalidWord);
    }

    let id = input.id.unwrap_or_else(|| Uuid::new_v4().to_string());
    let timestamp = input.timestamp.unwrap_or_else(|| Utc::now().to_rfc3339());

    let mut tx = db.pool().begin().await?;
    sqlx::query("INSERT INTO vocab_sets (id, timestamp, word_count) VALUES (?, ?, ?)")
        .bind(&id)
        .bind(&timestamp)
        .bind(input.words.len() as i64)
        .execute(&mut *tx)
        .await?;

    for word in &input.words {
        sqlx::query(
            "INSERT INTO words (set_id, word, ipa, type, meaning, example) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&word.word)
        .bind(word.ipa.as_deref().unwrap_or(""))
        .bind(word.part_of_speech.as_deref().unwrap_or(""))
        .bind(&word.meaning)
        .bind(word.example.as_deref().unwrap_or(""))
        .execute(&mut *tx)
        .await?;
    }
    tx.commit().await?;

    Ok(id)
}

/// Returns the number of deleted sets (0 or 1); word rows cascade.
pub async fn delete_set(db: &Database, id: &str) -> Result<u64, sqlx::Error> {
    let result = sqlx::query("DELETE FROM vocab_sets WHERE id = ?")
        .bind(id)
        .execute(db.pool())
        .await?;
    Ok(result.rows_affected())
}

async fn words_for_set(db: &Database, set_id: &str) -> Result<Vec<VocabItem>, sqlx::Error> {
    let rows = sqlx::query(
        "SELECT word, ipa, type, meaning, example FROM words WHERE set_id = ? ORDER BY id",
    )
    .bind(set_id)
    .fetch_all(db.pool())
    .await?;

    Ok(rows
        .into_iter()
        .map(|row| VocabItem {
            word: row.get("word"),
            ipa: none_if_empty(row.get("ipa")),
            part_of_speech: none_if_empty(row.get("type")),
            meaning: row.get("meaning"),
            example: none_if_empty(row.get("example")),
        })
        .collect())
}

fn none_if_empty(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
