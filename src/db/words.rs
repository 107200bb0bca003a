use anyhow::Context;
use rand::{Rng, seq::IndexedRandom};
use sqlx::SqlitePool;
use tracing::{debug, info};

use super::models::WordEntry;
use crate::{error::StoreError, wordlist::WordCatalog};

/// Pick a word uniformly at random from `category` (exact match) and return
/// it uppercased.
pub async fn random_word<R: Rng + ?Sized>(
    pool: &SqlitePool,
    category: &str,
    rng: &mut R,
) -> Result<String, StoreError> {
    let rows: Vec<(i64, String, String)> = sqlx::query_as(
        r#"
        SELECT id, word, category FROM words
        WHERE category = ?
        ORDER BY id ASC
        "#,
    )
    .bind(category)
    .fetch_all(pool)
    .await?;

    let candidates: Vec<WordEntry> = rows
        .into_iter()
        .map(|(id, word, category)| WordEntry { id, word, category })
        .collect();

    let entry = candidates
        .choose(rng)
        .ok_or_else(|| StoreError::NotFound(category.to_string()))?;

    debug!(category, word_id = entry.id, candidates = candidates.len(), "picked random word");
    Ok(entry.word.to_uppercase())
}

/// Distinct categories, alphabetically
pub async fn list_categories(pool: &SqlitePool) -> Result<Vec<String>, StoreError> {
    let rows: Vec<(String,)> = sqlx::query_as(
        r#"
        SELECT DISTINCT category FROM words
        ORDER BY category ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(|(c,)| c).collect())
}

pub async fn count(pool: &SqlitePool) -> Result<i64, StoreError> {
    let (n,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM words")
        .fetch_one(pool)
        .await?;

    Ok(n)
}

/// Insert the catalog if the table holds no words yet. Returns how many
/// words were inserted, 0 when the store was already seeded.
pub async fn seed_if_empty(pool: &SqlitePool, catalog: &WordCatalog) -> Result<usize, StoreError> {
    let mut tx = pool.begin().await?;

    let (existing,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM words")
        .fetch_one(&mut *tx)
        .await?;

    if existing > 0 {
        debug!(existing, "word store already seeded");
        return Ok(0);
    }

    let mut inserted = 0;
    for (category, word) in catalog.entries() {
        sqlx::query(
            r#"
            INSERT INTO words (word, category)
            VALUES (?, ?)
            "#,
        )
        .bind(word)
        .bind(category)
        .execute(&mut *tx)
        .await?;

        inserted += 1;
    }

    tx.commit().await?;

    info!(inserted, categories = catalog.categories().count(), "seeded word store");
    Ok(inserted)
}

/// Seed the store on first start. The catalog is only loaded when the store
/// is empty, so later launches never touch the seed file.
pub async fn ensure_seeded<F>(pool: &SqlitePool, load_catalog: F) -> anyhow::Result<usize>
where
    F: FnOnce() -> anyhow::Result<WordCatalog>,
{
    if count(pool).await? > 0 {
        return Ok(0);
    }

    let catalog = load_catalog()?;
    let inserted = seed_if_empty(pool, &catalog)
        .await
        .context("Failed to seed word store")?;

    Ok(inserted)
}
