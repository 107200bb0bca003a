use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use tracing::{info, warn};

use super::models::Account;
use crate::error::StoreError;

/// Digest a plaintext password for storage. SHA-256, lowercase hex.
pub fn hash_password(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    hex::encode(hasher.finalize())
}

/// Create a new account. Fails with [`StoreError::AlreadyExists`] when the
/// username is taken; the UNIQUE constraint makes the check atomic.
pub async fn register(
    pool: &SqlitePool,
    username: &str,
    plaintext_password: &str,
) -> Result<Account, StoreError> {
    let password_hash = hash_password(plaintext_password);

    let result = sqlx::query(
        r#"
        INSERT INTO accounts (username, password_hash)
        VALUES (?, ?)
        "#,
    )
    .bind(username)
    .bind(&password_hash)
    .execute(pool)
    .await;

    match result {
        Ok(done) => {
            let id = done.last_insert_rowid();
            info!(account_id = id, username, "account registered");
            Ok(Account {
                id,
                username: username.to_string(),
                password_hash,
            })
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            warn!(username, "registration rejected: username taken");
            Err(StoreError::AlreadyExists(username.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Check credentials. Unknown usernames and wrong passwords both produce
/// [`StoreError::InvalidCredentials`].
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    plaintext_password: &str,
) -> Result<Account, StoreError> {
    let row: Option<(i64, String, String)> = sqlx::query_as(
        r#"
        SELECT id, username, password_hash
        FROM accounts
        WHERE username = ?
        "#,
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;

    let supplied = hash_password(plaintext_password);

    match row {
        Some((id, username, password_hash)) if password_hash == supplied => {
            info!(account_id = id, %username, "signed in");
            Ok(Account {
                id,
                username,
                password_hash,
            })
        }
        _ => {
            warn!(username, "sign-in failed");
            Err(StoreError::InvalidCredentials)
        }
    }
}
