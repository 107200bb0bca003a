use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use tracing::info;

use super::models::{GameRecord, GameStats};
use crate::error::StoreError;

/// Append a finished game to the account's history
pub async fn record(
    pool: &SqlitePool,
    account_id: i64,
    word: &str,
    mistakes: u32,
    won: bool,
    played_at: DateTime<Utc>,
) -> Result<i64, StoreError> {
    let played_at_str = played_at.to_rfc3339();

    let result = sqlx::query(
        r#"
        INSERT INTO games (account_id, word, mistakes, won, played_at)
        VALUES (?, ?, ?, ?, ?)
        "#,
    )
    .bind(account_id)
    .bind(word)
    .bind(i64::from(mistakes))
    .bind(won)
    .bind(played_at_str)
    .execute(pool)
    .await;

    match result {
        Ok(done) => {
            let id = done.last_insert_rowid();
            info!(game_id = id, account_id, word, mistakes, won, "game recorded");
            Ok(id)
        }
        Err(sqlx::Error::Database(e)) if e.is_foreign_key_violation() => {
            Err(StoreError::UnknownAccount(account_id))
        }
        Err(e) => Err(e.into()),
    }
}

/// Totals for one account. The average is 0.0 when there are no games.
pub async fn aggregate(pool: &SqlitePool, account_id: i64) -> Result<GameStats, StoreError> {
    let (total_games, total_wins, average): (i64, i64, Option<f64>) = sqlx::query_as(
        r#"
        SELECT
            COUNT(*),
            COALESCE(SUM(CASE WHEN won THEN 1 ELSE 0 END), 0),
            AVG(mistakes)
        FROM games
        WHERE account_id = ?
        "#,
    )
    .bind(account_id)
    .fetch_one(pool)
    .await?;

    Ok(GameStats {
        total_games,
        total_wins,
        average_mistakes: average.unwrap_or(0.0),
    })
}

/// Every game of one account, most recent first
pub async fn history(pool: &SqlitePool, account_id: i64) -> Result<Vec<GameRecord>, StoreError> {
    let rows: Vec<(i64, i64, String, i64, bool, String)> = sqlx::query_as(
        r#"
        SELECT id, account_id, word, mistakes, won, played_at
        FROM games
        WHERE account_id = ?
        ORDER BY id DESC
        "#,
    )
    .bind(account_id)
    .fetch_all(pool)
    .await?;

    let records = rows
        .into_iter()
        .map(|(id, account_id, word, mistakes, won, played_at)| {
            let played_at = DateTime::parse_from_rfc3339(&played_at)
                .map(|dt| dt.with_timezone(&Utc))
                .unwrap_or_else(|_| Utc::now());

            GameRecord {
                id,
                account_id,
                word,
                mistakes: u32::try_from(mistakes).unwrap_or(0),
                won,
                played_at,
            }
        })
        .collect();

    Ok(records)
}
