//! The hangman state machine.

use std::{collections::BTreeSet, fmt};

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::{debug, info};

use crate::{db, error::StoreError};

/// Wrong guesses allowed before the game is lost.
pub const MAX_MISTAKES: u32 = 6;

/// Placeholder shown for letters that have not been revealed yet.
pub const PLACEHOLDER: char = '_';

/// How a game is drawn. Has no effect on the rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Gallows gaining a body part per mistake.
    #[default]
    Classic,
    /// An arrow creeping towards the figure per mistake.
    Arrow,
}

impl GameMode {
    pub const ALL: [GameMode; 2] = [GameMode::Classic, GameMode::Arrow];

    pub fn title(&self) -> &'static str {
        match self {
            GameMode::Classic => "Classic Hangman",
            GameMode::Arrow => "Save the Hangman",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            GameMode::Classic => "Traditional gallows drawing with 6 allowed mistakes.",
            GameMode::Arrow => "An arrow moves closer to the figure with every mistake.",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Won,
    Lost,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionState::InProgress => "in progress",
            SessionState::Won => "won",
            SessionState::Lost => "lost",
        };
        write!(f, "{}", s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    /// A guess arrived after the game ended. This is a caller bug.
    #[error("game is already {0}, no more guesses accepted")]
    InvalidState(SessionState),

    #[error("{0:?} is not a letter")]
    InvalidLetter(char),

    #[error("target word has no letters to guess")]
    EmptyWord,
}

/// Summary of a game that just ended, ready to be written to history.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedGame {
    pub word: String,
    pub mistakes: u32,
    pub won: bool,
}

/// Result of a single accepted guess.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The letter was guessed before; nothing changed.
    Repeated,
    /// The letter occurs in the word; `revealed` positions were uncovered.
    Hit { revealed: usize },
    /// The letter does not occur; one more mistake.
    Miss,
    /// This guess ended the game.
    Finished(FinishedGame),
}

/// A single round of hangman over one target word.
#[derive(Debug, Clone)]
pub struct GameSession {
    word: Vec<char>,
    pattern: Vec<Option<char>>,
    guessed: BTreeSet<char>,
    mistakes: u32,
    mode: GameMode,
    state: SessionState,
}

impl GameSession {
    /// Start a session. The word is uppercased; characters that are not
    /// letters (spaces, hyphens) are shown from the start.
    pub fn new(word: &str, mode: GameMode) -> Result<Self, SessionError> {
        let word: Vec<char> = word.trim().to_uppercase().chars().collect();

        if !word.iter().any(|c| c.is_alphabetic()) {
            return Err(SessionError::EmptyWord);
        }

        let pattern = word
            .iter()
            .map(|&c| if c.is_alphabetic() { None } else { Some(c) })
            .collect();

        Ok(Self {
            word,
            pattern,
            guessed: BTreeSet::new(),
            mistakes: 0,
            mode,
            state: SessionState::InProgress,
        })
    }

    pub fn guess(&mut self, letter: char) -> Result<GuessOutcome, SessionError> {
        if self.state != SessionState::InProgress {
            return Err(SessionError::InvalidState(self.state));
        }

        let letter = normalize_letter(letter)?;

        if !self.guessed.insert(letter) {
            debug!(%letter, "repeated guess ignored");
            return Ok(GuessOutcome::Repeated);
        }

        let mut revealed = 0;
        for (slot, &c) in self.pattern.iter_mut().zip(&self.word) {
            if c == letter {
                *slot = Some(c);
                revealed += 1;
            }
        }

        if revealed > 0 {
            debug!(%letter, revealed, "letter hit");
            if self.pattern.iter().all(Option::is_some) {
                return Ok(self.finish(SessionState::Won));
            }
            return Ok(GuessOutcome::Hit { revealed });
        }

        self.mistakes += 1;
        debug!(%letter, mistakes = self.mistakes, "letter missed");

        if self.mistakes >= MAX_MISTAKES {
            return Ok(self.finish(SessionState::Lost));
        }

        Ok(GuessOutcome::Miss)
    }

    fn finish(&mut self, state: SessionState) -> GuessOutcome {
        self.state = state;
        info!(word = %self.word(), mistakes = self.mistakes, %state, "game finished");

        GuessOutcome::Finished(FinishedGame {
            word: self.word(),
            mistakes: self.mistakes,
            won: state == SessionState::Won,
        })
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_finished(&self) -> bool {
        self.state != SessionState::InProgress
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn mistakes(&self) -> u32 {
        self.mistakes
    }

    pub fn max_mistakes(&self) -> u32 {
        MAX_MISTAKES
    }

    pub fn remaining(&self) -> u32 {
        MAX_MISTAKES - self.mistakes
    }

    pub fn word(&self) -> String {
        self.word.iter().collect()
    }

    /// Per-position view of the word; `None` marks an unrevealed letter.
    pub fn pattern(&self) -> &[Option<char>] {
        &self.pattern
    }

    /// The pattern as display text, e.g. `P _ T _ O _`.
    pub fn masked(&self) -> String {
        spaced(self.pattern.iter().map(|slot| slot.unwrap_or(PLACEHOLDER)))
    }

    /// The whole word spaced like [`GameSession::masked`], e.g. `P Y T H O N`.
    pub fn revealed(&self) -> String {
        spaced(self.word.iter().copied())
    }

    /// Letters guessed so far, alphabetically.
    pub fn guessed(&self) -> impl Iterator<Item = char> + '_ {
        self.guessed.iter().copied()
    }

    pub fn has_guessed(&self, letter: char) -> bool {
        normalize_letter(letter).is_ok_and(|l| self.guessed.contains(&l))
    }

    /// Wrong letters so far, alphabetically.
    pub fn misses(&self) -> Vec<char> {
        self.guessed
            .iter()
            .copied()
            .filter(|c| !self.word.contains(c))
            .collect()
    }
}

fn spaced(chars: impl Iterator<Item = char>) -> String {
    chars.map(String::from).collect::<Vec<_>>().join(" ")
}

fn normalize_letter(letter: char) -> Result<char, SessionError> {
    if !letter.is_alphabetic() {
        return Err(SessionError::InvalidLetter(letter));
    }

    let mut upper = letter.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(c), None) => Ok(c),
        // Letters like 'ß' expand to several characters when uppercased
        _ => Ok(letter),
    }
}

/// Either side of a guess that went through [`PlaySession::guess`].
#[derive(Debug, Error)]
pub enum PlayError {
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error("failed to record finished game: {0}")]
    Store(#[from] StoreError),
}

/// A game being played by a signed-in account.
///
/// Writes the game to history exactly once, on the guess that ends it. When
/// that write fails the result is kept until [`PlaySession::retry_record`]
/// gets it stored.
#[derive(Debug, Clone)]
pub struct PlaySession {
    account_id: i64,
    category: String,
    session: GameSession,
    record_id: Option<i64>,
    pending: Option<(FinishedGame, DateTime<Utc>)>,
}

impl PlaySession {
    pub fn new(account_id: i64, category: impl Into<String>, session: GameSession) -> Self {
        Self {
            account_id,
            category: category.into(),
            session,
            record_id: None,
            pending: None,
        }
    }

    /// Pick a random word from `category` and start a game with it.
    pub async fn start<R: rand::Rng + ?Sized>(
        pool: &SqlitePool,
        account_id: i64,
        category: &str,
        mode: GameMode,
        rng: &mut R,
    ) -> Result<Self, PlayError> {
        let word = db::words::random_word(pool, category, rng).await?;
        let session = GameSession::new(&word, mode)?;
        info!(account_id, category, ?mode, "game started");
        Ok(Self::new(account_id, category, session))
    }

    pub async fn guess(&mut self, pool: &SqlitePool, letter: char) -> Result<GuessOutcome, PlayError> {
        let outcome = self.session.guess(letter)?;

        if let GuessOutcome::Finished(ref finished) = outcome {
            self.pending = Some((finished.clone(), Utc::now()));
            self.retry_record(pool).await?;
        }

        Ok(outcome)
    }

    /// Store a finished game whose history write has not gone through yet.
    /// Does nothing once the record exists, or while the game is running.
    pub async fn retry_record(&mut self, pool: &SqlitePool) -> Result<Option<i64>, StoreError> {
        let Some((ref finished, played_at)) = self.pending else {
            return Ok(self.record_id);
        };

        let id = db::games::record(
            pool,
            self.account_id,
            &finished.word,
            finished.mistakes,
            finished.won,
            played_at,
        )
        .await?;

        self.pending = None;
        self.record_id = Some(id);
        Ok(self.record_id)
    }

    /// True while the game has ended but its history row is not written.
    pub fn is_unsaved(&self) -> bool {
        self.pending.is_some()
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// History row written for this game, once it has ended.
    pub fn record_id(&self) -> Option<i64> {
        self.record_id
    }
}
