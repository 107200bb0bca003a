use std::{fmt::Display, io::Stdout};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use rand::{SeedableRng, rngs::StdRng};
use ratatui::{Terminal, backend::CrosstermBackend};
use sqlx::SqlitePool;
use tracing::info;

use crate::{db::models::Account, game::GameMode};

use super::types::{LogBuffer, LoginView, Screen};

/// Main application state container.
pub struct App {
    pub(in crate::ui) db_pool: SqlitePool,
    pub(in crate::ui) account: Option<Account>,
    pub(in crate::ui) mode: GameMode,
    pub(in crate::ui) screen: Screen,
    pub(in crate::ui) rng: StdRng,
    pub(in crate::ui) logs: LogBuffer,
}

impl App {
    pub fn new(db_pool: SqlitePool, logs: LogBuffer) -> Self {
        Self::with_rng(db_pool, logs, StdRng::from_os_rng())
    }

    /// Build an app with a fixed random generator, for reproducible word picks.
    pub fn with_rng(db_pool: SqlitePool, logs: LogBuffer, rng: StdRng) -> Self {
        Self {
            db_pool,
            account: None,
            mode: GameMode::default(),
            screen: Screen::Login(LoginView::default()),
            rng,
            logs,
        }
    }

    pub fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
        info!("UI started");
        self.log("Welcome! Sign in or register to play");

        loop {
            terminal.draw(|f| self.draw(f))?;

            if let Event::Key(key) = event::read()?
                && key.kind == KeyEventKind::Press
                && super::handlers::InputHandler::new(self).handle_key(key)
            {
                return Ok(());
            }
        }
    }

    pub(in crate::ui) fn log(&self, msg: impl Into<String> + Display) {
        tracing::info!("{}", &msg);
        self.logs.push(msg.into());
    }

    /// Execute an async database operation from sync context
    pub(in crate::ui) fn run_db_operation<F, T>(future: F) -> T
    where
        F: std::future::Future<Output = T>,
    {
        tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
    }
}
