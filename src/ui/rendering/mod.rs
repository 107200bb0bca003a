mod drawing;
mod game;
mod input_field;
mod logs;
mod login;
mod menu;
mod stats;
mod status;

pub(in crate::ui) use drawing::{arrow_lines, gallows_lines};
pub(in crate::ui) use game::letter_row;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw(&self, f: &mut Frame) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Status bar
                Constraint::Min(12),   // Screen content
                Constraint::Length(6), // Logs
            ])
            .split(f.area());

        self.draw_status(f, layout[0]);

        match self.screen {
            Screen::Login(ref view) => self.draw_login(f, layout[1], view),
            Screen::ModeSelect(ref view) => self.draw_mode_select(f, layout[1], view),
            Screen::CategorySelect(ref view) => self.draw_category_select(f, layout[1], view),
            Screen::Playing(ref view) => self.draw_game(f, layout[1], view),
            Screen::Stats(ref view) => self.draw_stats(f, layout[1], view),
        }

        self.draw_logs(f, layout[2]);
    }
}
