use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::{app::App, types::Screen};

impl App {
    pub(in crate::ui) fn draw_status(&self, f: &mut Frame, area: Rect) {
        let player = self
            .account
            .as_ref()
            .map(|a| a.username.as_str())
            .unwrap_or("not signed in");

        let help = match self.screen {
            Screen::Login(_) => "Enter: sign in | Ctrl+N: register | Tab: switch field",
            Screen::ModeSelect(_) => "↑/↓ or 1/2: choose | Enter: confirm | Esc: sign out",
            Screen::CategorySelect(_) => "↑/↓: choose | Enter: play | Ctrl+S: statistics | Esc: mode",
            Screen::Playing(_) => "A-Z: guess | Esc: back to categories",
            Screen::Stats(_) => "↑/↓ PgUp/PgDn: scroll | Esc: back",
        };

        let text = format!(
            "{} | Player: {} | Mode: {} | {} | Ctrl+Q: quit",
            self.screen.name(),
            player,
            self.mode.title(),
            help
        );

        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().fg(Color::White))
                .block(Block::default().borders(Borders::ALL).title("Hangman")),
            area,
        );
    }
}
