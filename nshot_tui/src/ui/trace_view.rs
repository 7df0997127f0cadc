//! Trace tab: event log of one sampled fight

use crate::app::App;
use nshot_core::{FightEvent, FightOutcome};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let Some(sample) = &app.sample else {
        let list = List::new(vec![ListItem::new(Span::styled(
            "Run a simulation to sample one fight.",
            Style::default().fg(Color::DarkGray),
        ))])
        .block(Block::default().borders(Borders::ALL).title(" Sample Fight "));
        f.render_widget(list, area);
        return;
    };

    let title = match sample.outcome {
        FightOutcome::Dead { casts } => format!(" Sample Fight: killed in {} casts ", casts),
        FightOutcome::Inconclusive { casts } => {
            format!(" Sample Fight: still alive after {} casts ", casts)
        }
    };

    let mut cast_no = 0;
    let mut items: Vec<ListItem> = Vec::with_capacity(sample.events.len());
    for event in &sample.events {
        let line = match event {
            FightEvent::Cast { at_ms, hits, damage, stacks_after, hp_after } => {
                cast_no += 1;
                Line::from(vec![
                    Span::styled(format!("{:>7.2}s ", *at_ms as f64 / 1000.0), Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("Cast #{:<4}", cast_no),
                        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(format!(" {} hits  -{:<8}", hits, damage), Style::default().fg(Color::White)),
                    Span::styled(format!(" stacks {}", stacks_after), Style::default().fg(Color::Green)),
                    Span::styled(format!("  HP {}", hp_after.max(&0)), hp_style(*hp_after)),
                ])
            }
            FightEvent::Tick { at_ms, stacks, damage, hp_after } => Line::from(vec![
                Span::styled(format!("{:>7.2}s ", *at_ms as f64 / 1000.0), Style::default().fg(Color::DarkGray)),
                Span::styled(format!("{:<10}", "  Tick"), Style::default().fg(Color::Magenta)),
                Span::styled(format!(" {} stk   -{:<8}", stacks, damage), Style::default().fg(Color::Gray)),
                Span::styled(format!("  HP {}", hp_after.max(&0)), hp_style(*hp_after)),
            ]),
        };
        items.push(ListItem::new(line));
    }

    let visible: Vec<ListItem> = items
        .into_iter()
        .skip(app.trace_scroll)
        .take(area.height.saturating_sub(2) as usize)
        .collect();

    let list = List::new(visible).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn hp_style(hp: i64) -> Style {
    if hp <= 0 {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}
