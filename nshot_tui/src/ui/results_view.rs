//! Results tab: casts-to-kill histogram

use super::{bar, info_line, section};
use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(result) = &app.result else {
        let paragraph = Paragraph::new(Line::from(Span::styled(
            "No results yet. Set up the fight and press Enter.",
            Style::default().fg(Color::DarkGray),
        )))
        .block(Block::default().borders(Borders::ALL).title(" Results "));
        f.render_widget(paragraph, area);
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(7), Constraint::Min(0)])
        .split(area);

    let expected = result
        .expected_casts()
        .map(|e| format!("{:.2}", e))
        .unwrap_or_else(|| "never killed".to_string());
    let mut summary = vec![
        Line::from(vec![
            Span::styled("Expected casts  ", Style::default().fg(Color::Gray)),
            Span::styled(expected, Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        ]),
        info_line("Trials", result.trial_count.to_string()),
    ];
    if let (Some(min), Some(max)) = (result.min_casts(), result.max_casts()) {
        summary.push(info_line("Range", format!("{} ~ {} casts", min, max)));
    }
    let inconclusive = result.inconclusive_trials();
    if inconclusive > 0 {
        summary.push(Line::from(Span::styled(
            format!(
                "{} fights ({:.2}%) hit the event limit without a kill",
                inconclusive,
                result.inconclusive_rate() * 100.0
            ),
            Style::default().fg(Color::Red),
        )));
    }
    f.render_widget(
        Paragraph::new(summary).block(Block::default().borders(Borders::ALL).title(" Summary ")),
        chunks[0],
    );

    let width = chunks[1].width.saturating_sub(32) as usize;
    let mut lines = vec![section("Casts to kill")];
    lines.extend(
        result
            .rows()
            .iter()
            .skip(app.results_scroll)
            .take(chunks[1].height.saturating_sub(3) as usize)
            .map(|row| {
                Line::from(vec![
                    Span::styled(format!("{:>5} ", row.casts), Style::default().fg(Color::Cyan)),
                    Span::styled(bar(row.relative, width), Style::default().fg(Color::Green)),
                    Span::styled(
                        format!(" {:>7} {:>6.2}%", row.count, row.percent),
                        Style::default().fg(Color::White),
                    ),
                ])
            }),
    );

    f.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Distribution ")),
        chunks[1],
    );
}
