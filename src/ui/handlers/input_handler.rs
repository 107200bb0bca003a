//! Keyboard dispatch per screen.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::GameMode;

use super::super::{app::App, types::Screen};
use super::{
    GameHandler, LoginHandler, MenuHandler, StatsHandler, stats_handler::PAGE_SIZE,
};

/// Helper struct for routing keyboard input to the active screen.
pub struct InputHandler<'a> {
    app: &'a mut App,
}

impl<'a> InputHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Handle one key press. Returns true when the application should exit.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if let (KeyCode::Char('q' | 'Q'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.app.log("Exit requested");
            return true;
        }

        match self.app.screen {
            Screen::Login(_) => self.handle_login_key(key),
            Screen::ModeSelect(_) => self.handle_mode_key(key),
            Screen::CategorySelect(_) => self.handle_category_key(key),
            Screen::Playing(_) => self.handle_game_key(key),
            Screen::Stats(_) => self.handle_stats_key(key),
        }

        false
    }

    fn handle_login_key(&mut self, key: KeyEvent) {
        let mut handler = LoginHandler::new(self.app);

        match (key.code, key.modifiers) {
            (KeyCode::Char('n' | 'N'), KeyModifiers::CONTROL) => handler.register(),
            (KeyCode::Enter, _) => handler.login(),
            (KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down, _) => {
                handler.toggle_focus()
            }
            (KeyCode::Backspace, _) => handler.backspace(),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) => handler.type_char(c),
            _ => {}
        }
    }

    fn handle_mode_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => MenuHandler::new(self.app).move_selection(-1),
            KeyCode::Down | KeyCode::Tab => MenuHandler::new(self.app).move_selection(1),
            KeyCode::Char('1') => MenuHandler::new(self.app).choose_mode(GameMode::Classic),
            KeyCode::Char('2') => MenuHandler::new(self.app).choose_mode(GameMode::Arrow),
            KeyCode::Enter => MenuHandler::new(self.app).confirm_mode(),
            KeyCode::Esc => LoginHandler::new(self.app).logout(),
            _ => {}
        }
    }

    fn handle_category_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Char('s' | 'S'), KeyModifiers::CONTROL) => {
                self.app.log("Opening statistics");
                StatsHandler::new(self.app).enter_stats();
            }
            (KeyCode::Up, _) => MenuHandler::new(self.app).move_selection(-1),
            (KeyCode::Down | KeyCode::Tab, _) => MenuHandler::new(self.app).move_selection(1),
            (KeyCode::Enter, _) => GameHandler::new(self.app).start_selected(),
            (KeyCode::Esc, _) => MenuHandler::new(self.app).enter_mode_select(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        let finished = matches!(
            self.app.screen,
            Screen::Playing(ref view) if view.play.session().is_finished()
        );

        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => GameHandler::new(self.app).leave_game(),
            (KeyCode::Enter, _) if finished => GameHandler::new(self.app).confirm_finished(),
            (KeyCode::Char(c), m) if !m.contains(KeyModifiers::CONTROL) && c.is_alphabetic() => {
                GameHandler::new(self.app).guess(c)
            }
            _ => {}
        }
    }

    fn handle_stats_key(&mut self, key: KeyEvent) {
        let page = PAGE_SIZE as isize;

        match key.code {
            KeyCode::Up => StatsHandler::new(self.app).scroll(-1),
            KeyCode::Down => StatsHandler::new(self.app).scroll(1),
            KeyCode::PageUp => StatsHandler::new(self.app).scroll(-page),
            KeyCode::PageDown => StatsHandler::new(self.app).scroll(page),
            KeyCode::Esc | KeyCode::Enter => MenuHandler::new(self.app).enter_category_select(),
            _ => {}
        }
    }
}
