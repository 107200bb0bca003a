use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::{input_field::draw_field, menu::notice_line};
use crate::ui::{
    app::App,
    types::{LoginField, LoginView},
};

impl App {
    pub(in crate::ui) fn draw_login(&self, f: &mut Frame, area: Rect, view: &LoginView) {
        let block = Block::default().borders(Borders::ALL).title("Sign in");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(3), // Username
                Constraint::Length(3), // Password
                Constraint::Length(2), // Notice
                Constraint::Min(0),
            ])
            .split(inner);

        draw_field(
            f,
            rows[1],
            "Username",
            &view.username,
            view.focus == LoginField::Username,
            false,
        );
        draw_field(
            f,
            rows[2],
            "Password",
            &view.password,
            view.focus == LoginField::Password,
            true,
        );

        let notice = match view.notice {
            Some(ref notice) => Paragraph::new(notice_line(notice)),
            None => Paragraph::new("Enter to sign in, Ctrl+N to register a new account")
                .style(Style::default().fg(Color::DarkGray)),
        };
        f.render_widget(notice, rows[3]);
    }
}
