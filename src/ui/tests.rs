//! UI module tests.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rand::{SeedableRng, rngs::StdRng};
use sqlx::SqlitePool;
use tempfile::TempDir;

use super::{
    app::App,
    handlers::{GameHandler, InputHandler, LoginHandler, MenuHandler, StatsHandler},
    rendering::{arrow_lines, gallows_lines, letter_row},
    types::{LogBuffer, LoginField, Notice, Screen},
};
use crate::{
    db::{self, test_support::test_pool},
    game::{GameMode, GameSession, SessionState},
    wordlist::WordCatalog,
};

/// Helper function to create a test app over a seeded database.
async fn create_test_app() -> (TempDir, App) {
    let (dir, pool) = test_pool().await;
    let catalog = WordCatalog::from_json(
        r#"{"animals": ["cat"], "languages": ["python"], "empty": []}"#,
    )
    .unwrap();
    db::words::seed_if_empty(&pool, &catalog).await.unwrap();

    let app = App::with_rng(pool, LogBuffer::new(), StdRng::seed_from_u64(3));
    (dir, app)
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}

fn type_text(app: &mut App, text: &str) {
    for c in text.chars() {
        InputHandler::new(app).handle_key(key(KeyCode::Char(c)));
    }
}

/// Register `alice` and sign in, ending on the mode selection screen.
fn sign_in(app: &mut App) {
    type_text(app, "alice");
    InputHandler::new(app).handle_key(key(KeyCode::Tab));
    type_text(app, "secret");
    InputHandler::new(app).handle_key(ctrl('n'));
    InputHandler::new(app).handle_key(key(KeyCode::Enter));
}

/// Sign in, choose a mode and start a game in `category`.
fn start_game(app: &mut App, mode: GameMode, category: &str) {
    sign_in(app);
    MenuHandler::new(app).choose_mode(mode);
    GameHandler::new(app).start_new_game(category);
}

fn pool(app: &App) -> SqlitePool {
    app.db_pool.clone()
}

#[cfg(test)]
mod app_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_app_initialization() {
        let (_dir, app) = create_test_app().await;

        assert!(matches!(app.screen, Screen::Login(_)));
        assert!(app.account.is_none());
        assert_eq!(app.mode, GameMode::Classic);
    }

    #[test]
    fn test_log_buffer() {
        let logs = LogBuffer::new();

        logs.push("Test message 1".to_string());
        logs.push("Test message 2".to_string());

        let lines = logs.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], "Test message 1");
        assert_eq!(lines[1], "Test message 2");
    }

    #[test]
    fn test_log_buffer_max_capacity() {
        let logs = LogBuffer::new();

        for i in 0..350 {
            logs.push(format!("Message {}", i));
        }

        let lines = logs.lines();
        assert_eq!(lines.len(), super::super::types::MAX_LOG_LINES);
        assert_eq!(lines.last().map(String::as_str), Some("Message 349"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_ctrl_q_exits_from_any_screen() {
        let (_dir, mut app) = create_test_app().await;
        assert!(InputHandler::new(&mut app).handle_key(ctrl('q')));

        sign_in(&mut app);
        assert!(InputHandler::new(&mut app).handle_key(ctrl('q')));
        assert!(!InputHandler::new(&mut app).handle_key(key(KeyCode::Down)));
    }
}

#[cfg(test)]
mod login_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_typing_goes_to_focused_field() {
        let (_dir, mut app) = create_test_app().await;

        type_text(&mut app, "bob");
        InputHandler::new(&mut app).handle_key(key(KeyCode::Tab));
        type_text(&mut app, "pw1");
        InputHandler::new(&mut app).handle_key(key(KeyCode::Backspace));

        let Screen::Login(ref view) = app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(view.username, "bob");
        assert_eq!(view.password, "pw");
        assert_eq!(view.focus, LoginField::Password);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_register_then_login() {
        let (_dir, mut app) = create_test_app().await;

        sign_in(&mut app);

        assert!(matches!(app.screen, Screen::ModeSelect(_)));
        assert_eq!(app.account.as_ref().map(|a| a.username.as_str()), Some("alice"));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_duplicate_registration_shows_error() {
        let (_dir, mut app) = create_test_app().await;
        db::accounts::register(&pool(&app), "alice", "other").await.unwrap();

        type_text(&mut app, "alice");
        InputHandler::new(&mut app).handle_key(ctrl('n'));

        let Screen::Login(ref view) = app.screen else {
            panic!("expected login screen");
        };
        assert!(matches!(view.notice, Some(Notice::Error(ref m)) if m.contains("already taken")));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_wrong_password_stays_on_login() {
        let (_dir, mut app) = create_test_app().await;
        db::accounts::register(&pool(&app), "alice", "secret").await.unwrap();

        type_text(&mut app, "alice");
        InputHandler::new(&mut app).handle_key(key(KeyCode::Tab));
        type_text(&mut app, "wrong");
        InputHandler::new(&mut app).handle_key(key(KeyCode::Enter));

        let Screen::Login(ref view) = app.screen else {
            panic!("expected login screen");
        };
        assert_eq!(
            view.notice,
            Some(Notice::Error("invalid username or password".to_string()))
        );
        assert!(view.password.is_empty());
        assert!(app.account.is_none());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_logout_returns_to_empty_login() {
        let (_dir, mut app) = create_test_app().await;
        sign_in(&mut app);

        InputHandler::new(&mut app).handle_key(key(KeyCode::Esc));

        assert!(app.account.is_none());
        assert!(matches!(app.screen, Screen::Login(ref v) if v.username.is_empty()));
    }
}

#[cfg(test)]
mod menu_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_mode_selection_by_keys() {
        let (_dir, mut app) = create_test_app().await;
        sign_in(&mut app);

        InputHandler::new(&mut app).handle_key(key(KeyCode::Down));
        InputHandler::new(&mut app).handle_key(key(KeyCode::Enter));

        assert_eq!(app.mode, GameMode::Arrow);
        let Screen::CategorySelect(ref view) = app.screen else {
            panic!("expected category screen");
        };
        assert_eq!(view.categories, vec!["animals", "languages"]);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_mode_shortcut_digit() {
        let (_dir, mut app) = create_test_app().await;
        sign_in(&mut app);

        InputHandler::new(&mut app).handle_key(key(KeyCode::Char('2')));
        assert_eq!(app.mode, GameMode::Arrow);

        InputHandler::new(&mut app).handle_key(key(KeyCode::Esc));
        InputHandler::new(&mut app).handle_key(key(KeyCode::Char('1')));
        assert_eq!(app.mode, GameMode::Classic);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_enter_starts_highlighted_category() {
        let (_dir, mut app) = create_test_app().await;
        sign_in(&mut app);
        MenuHandler::new(&mut app).choose_mode(GameMode::Classic);

        InputHandler::new(&mut app).handle_key(key(KeyCode::Down));
        InputHandler::new(&mut app).handle_key(key(KeyCode::Enter));

        let Screen::Playing(ref view) = app.screen else {
            panic!("expected game screen");
        };
        assert_eq!(view.play.category(), "languages");
        assert_eq!(view.play.session().word(), "PYTHON");
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unknown_category_reports_not_found() {
        let (_dir, mut app) = create_test_app().await;
        sign_in(&mut app);
        MenuHandler::new(&mut app).choose_mode(GameMode::Classic);

        GameHandler::new(&mut app).start_new_game("empty");

        let Screen::CategorySelect(ref view) = app.screen else {
            panic!("expected category screen");
        };
        assert!(matches!(
            view.notice,
            Some(Notice::Error(ref m)) if m.contains("pick a different category")
        ));
    }
}

#[cfg(test)]
mod game_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_winning_game_is_recorded_once() {
        let (_dir, mut app) = create_test_app().await;
        start_game(&mut app, GameMode::Classic, "languages");

        type_text(&mut app, "pytho");
        // A repeated letter changes nothing
        type_text(&mut app, "p");
        type_text(&mut app, "n");

        let Screen::Playing(ref view) = app.screen else {
            panic!("expected game screen");
        };
        assert_eq!(view.play.session().state(), SessionState::Won);
        assert_eq!(view.play.session().mistakes(), 0);
        assert!(view.play.record_id().is_some());

        // Letters after the end are ignored by the screen
        type_text(&mut app, "xyz");

        let account_id = app.account.as_ref().unwrap().id;
        let games = db::games::history(&pool(&app), account_id).await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].word, "PYTHON");
        assert_eq!(games[0].mistakes, 0);
        assert!(games[0].won);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_losing_game_is_recorded() {
        let (_dir, mut app) = create_test_app().await;
        start_game(&mut app, GameMode::Arrow, "animals");

        type_text(&mut app, "xqzwvb");

        let Screen::Playing(ref view) = app.screen else {
            panic!("expected game screen");
        };
        assert_eq!(view.play.session().state(), SessionState::Lost);
        assert_eq!(view.play.session().mistakes(), 6);

        let account_id = app.account.as_ref().unwrap().id;
        let stats = db::games::aggregate(&pool(&app), account_id).await.unwrap();
        assert_eq!(stats.total_games, 1);
        assert_eq!(stats.total_wins, 0);
        assert_eq!(stats.average_mistakes, 6.0);

        let games = db::games::history(&pool(&app), account_id).await.unwrap();
        assert_eq!(games[0].word, "CAT");
        assert!(!games[0].won);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_repeated_guess_shows_notice() {
        let (_dir, mut app) = create_test_app().await;
        start_game(&mut app, GameMode::Classic, "animals");

        type_text(&mut app, "xx");

        let Screen::Playing(ref view) = app.screen else {
            panic!("expected game screen");
        };
        assert_eq!(view.play.session().mistakes(), 1);
        assert_eq!(view.notice, Some(Notice::Info("X was already used".to_string())));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_abandoned_game_is_not_recorded() {
        let (_dir, mut app) = create_test_app().await;
        start_game(&mut app, GameMode::Classic, "animals");

        type_text(&mut app, "c");
        InputHandler::new(&mut app).handle_key(key(KeyCode::Esc));

        assert!(matches!(app.screen, Screen::CategorySelect(_)));
        let account_id = app.account.as_ref().unwrap().id;
        let games = db::games::history(&pool(&app), account_id).await.unwrap();
        assert!(games.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_enter_after_finish_returns_to_categories() {
        let (_dir, mut app) = create_test_app().await;
        start_game(&mut app, GameMode::Classic, "animals");

        // Enter does nothing while the game runs
        InputHandler::new(&mut app).handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, Screen::Playing(_)));

        type_text(&mut app, "cat");
        InputHandler::new(&mut app).handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, Screen::CategorySelect(_)));
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_unsaved_game_is_saved_on_enter() {
        let (_dir, mut app) = create_test_app().await;
        sign_in(&mut app);
        if let Some(ref mut account) = app.account {
            account.id = 999;
        }
        MenuHandler::new(&mut app).choose_mode(GameMode::Classic);
        GameHandler::new(&mut app).start_new_game("animals");

        type_text(&mut app, "cat");
        let Screen::Playing(ref view) = app.screen else {
            panic!("expected game screen");
        };
        assert_eq!(view.play.session().state(), SessionState::Won);
        assert!(view.play.is_unsaved());
        assert!(matches!(view.notice, Some(Notice::Error(_))));

        // Write still failing: stay on the game screen
        InputHandler::new(&mut app).handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, Screen::Playing(ref view) if view.play.is_unsaved()));

        sqlx::query("INSERT INTO accounts (id, username, password_hash) VALUES (999, 'bob', 'x')")
            .execute(&pool(&app))
            .await
            .unwrap();

        InputHandler::new(&mut app).handle_key(key(KeyCode::Enter));
        let Screen::Playing(ref view) = app.screen else {
            panic!("expected game screen");
        };
        assert!(!view.play.is_unsaved());
        assert_eq!(
            view.notice,
            Some(Notice::Info("Game saved. Press Enter to continue".to_string()))
        );

        InputHandler::new(&mut app).handle_key(key(KeyCode::Enter));
        assert!(matches!(app.screen, Screen::CategorySelect(_)));

        let games = db::games::history(&pool(&app), 999).await.unwrap();
        assert_eq!(games.len(), 1);
        assert_eq!(games[0].word, "CAT");
        assert!(games[0].won);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_digits_are_not_guesses() {
        let (_dir, mut app) = create_test_app().await;
        start_game(&mut app, GameMode::Classic, "animals");

        type_text(&mut app, "123");

        let Screen::Playing(ref view) = app.screen else {
            panic!("expected game screen");
        };
        assert_eq!(view.play.session().guessed().count(), 0);
    }
}

#[cfg(test)]
mod stats_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_stats_screen_loads_history() {
        let (_dir, mut app) = create_test_app().await;
        start_game(&mut app, GameMode::Classic, "animals");
        type_text(&mut app, "cat");
        InputHandler::new(&mut app).handle_key(key(KeyCode::Enter));

        InputHandler::new(&mut app).handle_key(ctrl('s'));

        let Screen::Stats(ref view) = app.screen else {
            panic!("expected stats screen");
        };
        assert_eq!(view.stats.total_games, 1);
        assert_eq!(view.stats.win_rate(), 100.0);
        assert_eq!(view.games.len(), 1);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_stats_with_no_games() {
        let (_dir, mut app) = create_test_app().await;
        sign_in(&mut app);
        MenuHandler::new(&mut app).choose_mode(GameMode::Classic);

        StatsHandler::new(&mut app).enter_stats();

        let Screen::Stats(ref view) = app.screen else {
            panic!("expected stats screen");
        };
        assert_eq!(view.stats.total_games, 0);
        assert_eq!(view.stats.average_mistakes, 0.0);
        assert!(view.games.is_empty());
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn test_scroll_is_clamped() {
        let (_dir, mut app) = create_test_app().await;
        sign_in(&mut app);
        MenuHandler::new(&mut app).choose_mode(GameMode::Classic);

        let account_id = app.account.as_ref().unwrap().id;
        for i in 0..3 {
            db::games::record(&pool(&app), account_id, "CAT", i, true, chrono::Utc::now())
                .await
                .unwrap();
        }

        StatsHandler::new(&mut app).enter_stats();
        StatsHandler::new(&mut app).scroll(10);
        assert!(matches!(app.screen, Screen::Stats(ref v) if v.scroll == 2));

        StatsHandler::new(&mut app).scroll(-10);
        assert!(matches!(app.screen, Screen::Stats(ref v) if v.scroll == 0));

        InputHandler::new(&mut app).handle_key(key(KeyCode::Esc));
        assert!(matches!(app.screen, Screen::CategorySelect(_)));
    }
}

#[cfg(test)]
mod drawing_tests {
    use super::*;

    #[test]
    fn test_letter_row_lists_non_ascii_guesses() {
        let mut session = GameSession::new("żółw", GameMode::Classic).unwrap();
        assert_eq!(letter_row(&session).len(), 26);

        session.guess('ż').unwrap();
        session.guess('x').unwrap();
        session.guess('ą').unwrap();

        let row = letter_row(&session);
        assert_eq!(row.len(), 28);
        assert_eq!(row[..26], ('A'..='Z').collect::<Vec<_>>()[..]);
        assert_eq!(row[26..], ['Ą', 'Ż']);
        assert_eq!(session.misses(), vec!['X', 'Ą']);
    }

    #[test]
    fn test_gallows_grows_with_mistakes() {
        assert_eq!(gallows_lines(0)[2], "      |");
        assert_eq!(gallows_lines(1)[2], "  O   |");
        assert_eq!(gallows_lines(4)[3], " /|\\  |");
        assert_eq!(gallows_lines(6)[4], " / \\  |");
    }

    #[test]
    fn test_arrow_moves_towards_figure() {
        let start = arrow_lines(0);
        let end = arrow_lines(6);

        assert!(start[1].starts_with("--->"));
        assert!(end[1].starts_with(&" ".repeat(18)));
        assert!(end[1].ends_with("---> /|\\"));
        assert!(end[0].ends_with('X'));
        assert!(start[0].ends_with('O'));
    }
}

#[cfg(test)]
mod login_handler_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn test_handlers_ignore_wrong_screen() {
        let (_dir, mut app) = create_test_app().await;

        // Game and stats actions need a signed-in account
        GameHandler::new(&mut app).start_new_game("animals");
        StatsHandler::new(&mut app).enter_stats();
        assert!(matches!(app.screen, Screen::Login(_)));

        sign_in(&mut app);
        LoginHandler::new(&mut app).type_char('x');
        assert!(matches!(app.screen, Screen::ModeSelect(_)));
    }
}
