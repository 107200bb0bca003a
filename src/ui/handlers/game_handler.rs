//! Game screen state management.

use crate::{
    error::StoreError,
    game::{GuessOutcome, PlayError, PlaySession, SessionError},
};

use super::super::{
    app::App,
    types::{CategoryView, Notice, PlayView, Screen},
};
use super::MenuHandler;

/// Helper struct for starting games and feeding them guesses.
pub struct GameHandler<'a> {
    app: &'a mut App,
}

impl<'a> GameHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Start a game in the category highlighted on the category screen.
    pub fn start_selected(&mut self) {
        let category = match self.app.screen {
            Screen::CategorySelect(ref view) => view.selected_category().map(str::to_string),
            _ => return,
        };

        match category {
            Some(category) => self.start_new_game(&category),
            None => self.set_category_notice(Notice::Error(
                "Choose a category to start the game!".to_string(),
            )),
        }
    }

    pub fn start_new_game(&mut self, category: &str) {
        let Some(account_id) = self.app.account.as_ref().map(|a| a.id) else {
            tracing::error!("tried to start a game without a signed-in account");
            return;
        };

        let pool = self.app.db_pool.clone();
        let mode = self.app.mode;
        let started = App::run_db_operation(PlaySession::start(
            &pool,
            account_id,
            category,
            mode,
            &mut self.app.rng,
        ));

        match started {
            Ok(play) => {
                tracing::info!(
                    "New game started in {} with a {}-letter word",
                    category,
                    play.session().pattern().len()
                );
                self.app.log(format!("New game: {} ({})", category, mode.title()));
                self.app.screen = Screen::Playing(PlayView { play, notice: None });
            }
            Err(PlayError::Store(e @ StoreError::NotFound(_))) => {
                self.app.log(format!("Cannot start game: {}", e));
                self.set_category_notice(Notice::Error(e.to_string()));
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to start game");
                self.set_category_notice(Notice::Error(format!("Failed to start game: {}", e)));
            }
        }
    }

    pub fn guess(&mut self, letter: char) {
        let pool = self.app.db_pool.clone();
        let Screen::Playing(ref mut view) = self.app.screen else {
            return;
        };

        // Finished games take no more letters; the screen waits for Enter
        if view.play.session().is_finished() {
            return;
        }

        let result = App::run_db_operation(view.play.guess(&pool, letter));
        let word = view.play.session().word();

        let message = match result {
            Ok(GuessOutcome::Repeated) => {
                view.notice = Some(Notice::Info(format!(
                    "{} was already used",
                    letter.to_uppercase()
                )));
                None
            }
            Ok(GuessOutcome::Hit { .. } | GuessOutcome::Miss) => {
                view.notice = None;
                None
            }
            Ok(GuessOutcome::Finished(finished)) => {
                let text = if finished.won {
                    format!("You guessed the word {}!", finished.word)
                } else {
                    format!("You lost! The word was {}", finished.word)
                };
                view.notice = Some(Notice::Info(format!("{} Press Enter to continue", text)));
                Some(format!(
                    "Game {}: {} with {} mistake(s)",
                    if finished.won { "won" } else { "lost" },
                    word,
                    finished.mistakes
                ))
            }
            Err(PlayError::Session(SessionError::InvalidLetter(_))) => None,
            Err(PlayError::Session(e @ SessionError::InvalidState(_))) => {
                tracing::error!(error = %e, "guess submitted after the game ended");
                None
            }
            Err(e) => {
                tracing::error!(error = %e, "guess failed");
                view.notice = Some(Notice::Error(format!("{}. Press Enter to retry", e)));
                Some(format!("Failed to save game: {}", e))
            }
        };

        if let Some(message) = message {
            self.app.log(message);
        }
    }

    /// Enter on a finished game: retry an unsaved result, otherwise go back
    /// to the categories.
    pub fn confirm_finished(&mut self) {
        let unsaved = matches!(
            self.app.screen,
            Screen::Playing(ref view) if view.play.is_unsaved()
        );

        if unsaved {
            self.retry_save();
        } else {
            self.leave_game();
        }
    }

    /// Try again to write a finished game that failed to save.
    pub fn retry_save(&mut self) {
        let pool = self.app.db_pool.clone();
        let Screen::Playing(ref mut view) = self.app.screen else {
            return;
        };

        let message = match App::run_db_operation(view.play.retry_record(&pool)) {
            Ok(_) => {
                view.notice = Some(Notice::Info(
                    "Game saved. Press Enter to continue".to_string(),
                ));
                "Game saved after retry".to_string()
            }
            Err(e) => {
                tracing::error!(error = %e, "retrying history write failed");
                view.notice = Some(Notice::Error(format!("{}. Press Enter to retry", e)));
                format!("Failed to save game: {}", e)
            }
        };

        self.app.log(message);
    }

    /// Leave the game screen. An unfinished game is abandoned and not recorded.
    /// A finished game that failed to save gets one last write attempt.
    pub fn leave_game(&mut self) {
        let (finished, unsaved) = match self.app.screen {
            Screen::Playing(ref view) => (view.play.session().is_finished(), view.play.is_unsaved()),
            _ => (true, false),
        };

        if !finished {
            self.app.log("Game abandoned");
        } else if unsaved {
            self.retry_save();
            if matches!(self.app.screen, Screen::Playing(ref view) if view.play.is_unsaved()) {
                tracing::warn!("leaving a finished game that was never saved");
                self.app.log("Finished game left unsaved");
            }
        }

        MenuHandler::new(self.app).enter_category_select();
    }

    fn set_category_notice(&mut self, notice: Notice) {
        if let Screen::CategorySelect(CategoryView {
            notice: ref mut slot,
            ..
        }) = self.app.screen
        {
            *slot = Some(notice);
        }
    }
}
