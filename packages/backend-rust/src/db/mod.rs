//! SQLite storage for vocabulary sets and game results.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;

/// Applied statement-by-statement at startup; every statement is idempotent.
pub const SCHEMA_SQL: &str = include_str!("../../sql/schema.sql");

#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Opens (creating if missing) the database at `url` and applies the
    /// schema. Foreign keys are enabled so deleting a set cascades to its
    /// words.
    pub async fn connect(url: &str) -> Result<Self, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        // an in-memory database lives inside its single connection; a pool
        // of more than one would hand out empty databases
        let in_memory = url.contains(":memory:");
        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(if in_memory { 1 } else { 5 })
            .acquire_timeout(Duration::from_secs(5));
        if in_memory {
            pool_options = pool_options
                .idle_timeout(None::<Duration>)
                .max_lifetime(None::<Duration>);
        }

        let pool = pool_options.connect_with(options).await?;

        let db = Self { pool };
        db.apply_schema().await?;
        Ok(db)
    }

    async fn apply_schema(&self) -> Result<(), sqlx::Error> {
        for statement in SCHEMA_SQL.split(';') {
            let statement = statement.trim();
            if statement.is_empty() {
                continue;
            }
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}
