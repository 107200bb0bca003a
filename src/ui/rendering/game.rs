//! Play screen: drawing, masked word, used letters.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{arrow_lines, gallows_lines, menu::notice_line};
use crate::{
    game::{GameMode, GameSession, SessionState},
    ui::{app::App, types::PlayView},
};

impl App {
    pub(in crate::ui) fn draw_game(&self, f: &mut Frame, area: Rect, view: &PlayView) {
        let session = view.play.session();

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(9), // Drawing
                Constraint::Length(3), // Word
                Constraint::Length(4), // Letters and mistakes
                Constraint::Min(1),    // Notice
            ])
            .split(area);

        let art = match session.mode() {
            GameMode::Classic => gallows_lines(session.mistakes()),
            GameMode::Arrow => arrow_lines(session.mistakes()),
        };

        // Danger color once most of the allowed mistakes are used
        let art_color = if session.mistakes() >= 4 {
            Color::Red
        } else {
            Color::White
        };

        let art_lines: Vec<Line> = art.into_iter().map(Line::from).collect();
        f.render_widget(
            Paragraph::new(art_lines)
                .style(Style::default().fg(art_color))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title(format!("Category: {}", view.play.category())),
                ),
            layout[0],
        );

        let word_color = match session.state() {
            SessionState::InProgress => Color::White,
            SessionState::Won => Color::Green,
            SessionState::Lost => Color::Red,
        };

        // Reveal the answer once the game is lost
        let word_text = if session.state() == SessionState::Lost {
            session.revealed()
        } else {
            session.masked()
        };

        f.render_widget(
            Paragraph::new(Span::styled(
                word_text,
                Style::default().fg(word_color).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Word")),
            layout[1],
        );

        let misses = session.misses();

        let used: Vec<Span> = letter_row(session)
            .into_iter()
            .map(|c| {
                let style = if misses.contains(&c) {
                    Style::default().fg(Color::DarkGray).add_modifier(Modifier::CROSSED_OUT)
                } else if session.has_guessed(c) {
                    Style::default().fg(Color::Green)
                } else {
                    Style::default().fg(Color::White)
                };
                Span::styled(format!("{} ", c), style)
            })
            .collect();

        let wrong: String = misses.iter().map(char::to_string).collect::<Vec<_>>().join(" ");

        let info = vec![
            Line::from(used),
            Line::from(format!(
                "Mistakes: {}/{}  Wrong: {}",
                session.mistakes(),
                session.max_mistakes(),
                wrong
            )),
        ];

        f.render_widget(
            Paragraph::new(info).block(Block::default().borders(Borders::ALL).title("Letters")),
            layout[2],
        );

        if let Some(ref notice) = view.notice {
            f.render_widget(Paragraph::new(notice_line(notice)), layout[3]);
        }
    }
}

/// A-Z, then any guessed letters outside it (accented, Polish) in order.
pub(in crate::ui) fn letter_row(session: &GameSession) -> Vec<char> {
    ('A'..='Z')
        .chain(session.guessed().filter(|c| !c.is_ascii_uppercase()))
        .collect()
}
