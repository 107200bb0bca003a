use std::sync::{Arc, Mutex};

use crate::{
    db::models::{GameRecord, GameStats},
    game::{GameMode, PlaySession},
};

pub const MAX_LOG_LINES: usize = 300;

/// Thread-safe circular log buffer with a maximum capacity.
#[derive(Clone)]
pub struct LogBuffer {
    inner: Arc<Mutex<Vec<String>>>,
}

impl LogBuffer {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn push(&self, msg: String) {
        let mut buf = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        buf.push(msg);
        if buf.len() > MAX_LOG_LINES {
            buf.remove(0);
        }
    }

    pub fn lines(&self) -> Vec<String> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Default for LogBuffer {
    fn default() -> Self {
        Self::new()
    }
}

/// A line of feedback shown on the current screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Info(String),
    Error(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Info(s) | Notice::Error(s) => s,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoginField {
    #[default]
    Username,
    Password,
}

#[derive(Debug, Clone, Default)]
pub struct LoginView {
    pub username: String,
    pub password: String,
    pub focus: LoginField,
    pub notice: Option<Notice>,
}

impl LoginView {
    pub fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            LoginField::Username => &mut self.username,
            LoginField::Password => &mut self.password,
        }
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            LoginField::Username => LoginField::Password,
            LoginField::Password => LoginField::Username,
        };
    }
}

#[derive(Debug, Clone, Default)]
pub struct ModeView {
    pub selected: usize,
}

impl ModeView {
    pub fn for_mode(mode: GameMode) -> Self {
        let selected = GameMode::ALL.iter().position(|m| *m == mode).unwrap_or(0);
        Self { selected }
    }

    pub fn selected_mode(&self) -> GameMode {
        GameMode::ALL[self.selected.min(GameMode::ALL.len() - 1)]
    }
}

#[derive(Debug, Clone, Default)]
pub struct CategoryView {
    pub categories: Vec<String>,
    pub selected: usize,
    pub notice: Option<Notice>,
}

impl CategoryView {
    pub fn selected_category(&self) -> Option<&str> {
        self.categories.get(self.selected).map(String::as_str)
    }
}

#[derive(Debug, Clone)]
pub struct PlayView {
    pub play: PlaySession,
    pub notice: Option<Notice>,
}

#[derive(Debug, Clone, Default)]
pub struct StatsView {
    pub stats: GameStats,
    pub games: Vec<GameRecord>,
    pub scroll: usize,
}

/// The screen currently shown. Each variant owns only its own view-model,
/// which is rebuilt whenever the screen changes.
#[derive(Debug, Clone)]
pub enum Screen {
    Login(LoginView),
    ModeSelect(ModeView),
    CategorySelect(CategoryView),
    Playing(PlayView),
    Stats(StatsView),
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Login(_) => "Sign in",
            Screen::ModeSelect(_) => "Game mode",
            Screen::CategorySelect(_) => "Category",
            Screen::Playing(_) => "Playing",
            Screen::Stats(_) => "Statistics",
        }
    }
}
