//! Help tab view

use super::section;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let constants = app.simulator.constants();
    let lines = vec![
        section("Navigation"),
        key_line("1-4", "Jump to tab (Setup/Results/Trace/Help)"),
        key_line("Tab / Shift+Tab", "Next/previous tab"),
        key_line("↑/k  ↓/j", "Select field / scroll"),
        key_line("q / Ctrl+C", "Quit"),
        Line::from(""),
        section("Setup"),
        key_line("←/h  →/l", "Change value by 1 (cycle lists)"),
        key_line("- / +", "Change value by 10"),
        key_line("PgDn / PgUp", "Change value by 100"),
        key_line("Enter", "Run simulation"),
        key_line("s", "Save inputs"),
        key_line("r", "Reset inputs"),
        Line::from(""),
        section("Mechanics"),
        Line::from(""),
        Line::from(Span::styled("Hit damage:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  max(1, floor((roll - {} × weapon DEF) × skill% / 100))",
            constants.defense_factor
        )),
        Line::from("  roll is uniform between attack min and max"),
        Line::from(""),
        Line::from(Span::styled("Venom:", Style::default().fg(Color::Yellow))),
        Line::from("  Each hit may add a stack; a full stack list drops the oldest"),
        Line::from("  Every tick deals max(1, floor(roll × live stacks))"),
        Line::from("  A cast and a tick at the same moment: the cast goes first"),
        Line::from(""),
        Line::from(Span::styled("Batch:", Style::default().fg(Color::Yellow))),
        Line::from(format!(
            "  {} fights per run, each capped at {} events",
            app.trial_count, constants.max_events
        )),
        Line::from("  Fights that hit the cap are reported separately"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Help & Mechanics "));

    f.render_widget(paragraph, area);
}

fn key_line(key: &str, desc: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("  {:20}", key), Style::default().fg(Color::Yellow)),
        Span::styled(desc.to_string(), Style::default().fg(Color::White)),
    ])
}
