//! Statistics dashboard and history table.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table},
};

use crate::{
    db::models::{GameOutcome, GameStats},
    ui::{app::App, types::StatsView},
};

impl App {
    pub(in crate::ui) fn draw_stats(&self, f: &mut Frame, area: Rect, view: &StatsView) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(6), // Overall stats
                Constraint::Min(5),    // Game history
            ])
            .split(area);

        draw_overall_stats(f, chunks[0], &view.stats);

        if view.games.is_empty() {
            let text = vec![
                Line::from(""),
                Line::from(Span::styled(
                    "No games played yet",
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD),
                )),
            ];

            f.render_widget(
                Paragraph::new(text)
                    .block(Block::default().borders(Borders::ALL).title("Recent games")),
                chunks[1],
            );
            return;
        }

        // Header and borders take four rows
        let visible = chunks[1].height.saturating_sub(4).max(1) as usize;

        let rows: Vec<Row> = view
            .games
            .iter()
            .skip(view.scroll)
            .take(visible)
            .map(|game| {
                let outcome = game.outcome();
                let style = match outcome {
                    GameOutcome::Won => Style::default().fg(Color::Green),
                    GameOutcome::Lost => Style::default().fg(Color::Red),
                };

                Row::new(vec![
                    game.played_at.format("%Y-%m-%d %H:%M").to_string(),
                    game.word.clone(),
                    game.mistakes.to_string(),
                    outcome.to_string(),
                ])
                .style(style)
            })
            .collect();

        let title = format!(
            "Recent games ({}-{} of {})",
            view.scroll + 1,
            (view.scroll + visible).min(view.games.len()),
            view.games.len()
        );

        let table = Table::new(
            rows,
            [
                Constraint::Length(17), // Date
                Constraint::Length(16), // Word
                Constraint::Length(9),  // Mistakes
                Constraint::Length(8),  // Result
            ],
        )
        .header(
            Row::new(vec!["Date", "Word", "Mistakes", "Result"])
                .style(Style::default().add_modifier(Modifier::BOLD))
                .bottom_margin(1),
        )
        .block(Block::default().borders(Borders::ALL).title(title));

        f.render_widget(table, chunks[1]);
    }
}

fn draw_overall_stats(f: &mut Frame, area: Rect, stats: &GameStats) {
    let lines = vec![
        Line::from(vec![
            Span::raw("  Games played: "),
            Span::styled(
                stats.total_games.to_string(),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  |  Wins: "),
            Span::styled(
                stats.total_wins.to_string(),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  |  Losses: "),
            Span::styled(
                stats.losses().to_string(),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("  Win rate: "),
            Span::styled(
                format!("{:.1}%", stats.win_rate()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  |  Average mistakes: "),
            Span::styled(
                format!("{:.1}", stats.average_mistakes),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title("Your statistics")),
        area,
    );
}
