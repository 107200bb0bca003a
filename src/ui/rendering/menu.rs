//! Mode and category menus.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use crate::{
    game::GameMode,
    ui::{
        app::App,
        types::{CategoryView, ModeView, Notice},
    },
};

pub(super) fn notice_line(notice: &Notice) -> Line<'_> {
    let color = match notice {
        Notice::Info(_) => Color::Green,
        Notice::Error(_) => Color::Red,
    };
    Line::from(Span::styled(notice.text(), Style::default().fg(color)))
}

fn highlight(selected: bool) -> Style {
    if selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    }
}

impl App {
    pub(in crate::ui) fn draw_mode_select(&self, f: &mut Frame, area: Rect, view: &ModeView) {
        let items: Vec<ListItem> = GameMode::ALL
            .iter()
            .enumerate()
            .map(|(i, mode)| {
                let selected = i == view.selected;
                ListItem::new(vec![
                    Line::from(Span::styled(
                        format!(" {}. {} ", i + 1, mode.title()),
                        highlight(selected),
                    )),
                    Line::from(format!("    {}", mode.description())),
                    Line::from(""),
                ])
            })
            .collect();

        f.render_widget(
            List::new(items).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("Choose a game mode"),
            ),
            area,
        );
    }

    pub(in crate::ui) fn draw_category_select(
        &self,
        f: &mut Frame,
        area: Rect,
        view: &CategoryView,
    ) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let items: Vec<ListItem> = view
            .categories
            .iter()
            .enumerate()
            .map(|(i, category)| {
                ListItem::new(Line::from(Span::styled(
                    format!(" {} ", category),
                    highlight(i == view.selected),
                )))
            })
            .collect();

        let title = format!("Choose a category ({})", self.mode.title());
        f.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(title)),
            layout[0],
        );

        if let Some(ref notice) = view.notice {
            f.render_widget(Paragraph::new(notice_line(notice)), layout[1]);
        }
    }
}
