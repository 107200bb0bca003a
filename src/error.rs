//! Error types surfaced by the stores.
//!
//! Game session errors live next to the state machine in [`crate::game`].

use thiserror::Error;

/// Errors returned by the account, word and game history stores.
///
/// Everything except [`StoreError::Database`] is an expected outcome that the
/// presentation layer reports to the player.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The requested category has no words.
    #[error("no words in category {0:?}, pick a different category")]
    NotFound(String),

    /// Registration attempted with a username that is already taken.
    #[error("username {0:?} is already taken")]
    AlreadyExists(String),

    /// Unknown username or wrong password. The two cases are deliberately
    /// reported the same way.
    #[error("invalid username or password")]
    InvalidCredentials,

    /// A game record referenced an account that does not exist.
    #[error("account {0} does not exist")]
    UnknownAccount(i64),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl StoreError {
    /// Returns true for errors the player can act on, as opposed to storage
    /// failures.
    pub fn is_user_facing(&self) -> bool {
        !matches!(self, StoreError::Database(_))
    }
}
