//! Mode and category selection.

use crate::{db, game::GameMode};

use super::super::{
    app::App,
    types::{CategoryView, ModeView, Notice, Screen},
};

/// Helper struct for the mode and category menus.
pub struct MenuHandler<'a> {
    app: &'a mut App,
}

impl<'a> MenuHandler<'a> {
    pub fn new(app: &'a mut App) -> Self {
        Self { app }
    }

    pub fn enter_mode_select(&mut self) {
        self.app.screen = Screen::ModeSelect(ModeView::for_mode(self.app.mode));
    }

    pub fn choose_mode(&mut self, mode: GameMode) {
        self.app.mode = mode;
        self.app.log(format!("Mode: {}", mode.title()));
        self.enter_category_select();
    }

    pub fn confirm_mode(&mut self) {
        if let Screen::ModeSelect(ref view) = self.app.screen {
            let mode = view.selected_mode();
            self.choose_mode(mode);
        }
    }

    /// Load the categories and show the category list.
    pub fn enter_category_select(&mut self) {
        let pool = self.app.db_pool.clone();
        let view = match App::run_db_operation(db::words::list_categories(&pool)) {
            Ok(categories) if categories.is_empty() => CategoryView {
                notice: Some(Notice::Error("No categories available".to_string())),
                ..CategoryView::default()
            },
            Ok(categories) => CategoryView {
                categories,
                ..CategoryView::default()
            },
            Err(e) => {
                tracing::error!(error = %e, "failed to load categories");
                CategoryView {
                    notice: Some(Notice::Error(format!("Failed to load categories: {}", e))),
                    ..CategoryView::default()
                }
            }
        };

        self.app.screen = Screen::CategorySelect(view);
    }

    /// Move the highlight on whichever menu is shown.
    pub fn move_selection(&mut self, delta: isize) {
        match self.app.screen {
            Screen::ModeSelect(ref mut view) => {
                view.selected = step(view.selected, delta, GameMode::ALL.len());
            }
            Screen::CategorySelect(ref mut view) => {
                view.selected = step(view.selected, delta, view.categories.len());
            }
            _ => {}
        }
    }
}

/// Move `current` by `delta`, wrapping around a list of `len` entries.
fn step(current: usize, delta: isize, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let len = len as isize;
    (current as isize + delta).rem_euclid(len) as usize
}
