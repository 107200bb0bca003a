pub mod accounts;
pub mod games;
pub mod models;
pub mod words;

use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::path::{Path, PathBuf};

/// Get the path to the database file using platform-specific data directory
pub fn get_db_path() -> Result<PathBuf> {
    let mut path = dirs::data_dir()
        .context("Unable to determine data directory for your platform")?;

    path.push("hangman");

    // Create directory if it doesn't exist
    std::fs::create_dir_all(&path)
        .context("Failed to create hangman data directory")?;

    path.push("hangman.db");
    Ok(path)
}

/// Create a connection pool to the SQLite database at `db_path`, running
/// migrations before returning it
pub async fn create_pool_at(db_path: &Path) -> Result<SqlitePool> {
    if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    let options = SqliteConnectOptions::new()
        .filename(db_path)
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to connect to database at {}", db_path.display()))?;

    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;

    tracing::debug!(path = %db_path.display(), "database ready");

    Ok(pool)
}


#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_pool_creates_schema() {
        let (_dir, pool) = test_support::test_pool().await;

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('accounts', 'words', 'games') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<_> = tables.into_iter().map(|(n,)| n).collect();
        assert_eq!(names, vec!["accounts", "games", "words"]);
    }

    #[tokio::test]
    async fn test_reopen_keeps_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("hangman.db");

        let pool = create_pool_at(&path).await.unwrap();
        accounts::register(&pool, "alice", "secret").await.unwrap();
        pool.close().await;

        let pool = create_pool_at(&path).await.unwrap();
        assert!(accounts::authenticate(&pool, "alice", "secret").await.is_ok());
    }
}
