//! Statistics screen.

use crate::db;

use super::super::{
    app::App,
    types::{Notice, Screen, StatsView},
};

/// Rows moved by PageUp/PageDown.
pub const PAGE_SIZE: usize = 10;

/// Helper struct for loading and scrolling the statistics screen.
pub struct StatsHandler<'a> {
    app: &'a mut App,
}

impl<'a> StatsHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    /// Load totals and history for the signed-in account.
    pub fn enter_stats(&mut self) {
        let Some(account_id) = self.app.account.as_ref().map(|a| a.id) else {
            return;
        };

        let pool = self.app.db_pool.clone();
        let loaded = App::run_db_operation(async {
            let stats = db::games::aggregate(&pool, account_id).await?;
            let games = db::games::history(&pool, account_id).await?;
            Ok::<_, crate::error::StoreError>((stats, games))
        });

        match loaded {
            Ok((stats, games)) => {
                self.app.log(format!("Loaded {} game(s) from history", games.len()));
                self.app.screen = Screen::Stats(StatsView {
                    stats,
                    games,
                    scroll: 0,
                });
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load statistics");
                if let Screen::CategorySelect(ref mut view) = self.app.screen {
                    view.notice = Some(Notice::Error(format!("Failed to load statistics: {}", e)));
                }
            }
        }
    }

    pub fn scroll(&mut self, delta: isize) {
        if let Screen::Stats(ref mut view) = self.app.screen {
            let max = view.games.len().saturating_sub(1);
            view.scroll = view.scroll.saturating_add_signed(delta).min(max);
        }
    }
}
