//! Setup tab: input form and derived values

use super::{info_line, section};
use crate::app::{App, Field};
use nshot_core::{AttackBuff, DotEffect};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

pub fn draw(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    draw_form(f, app, chunks[0]);
    draw_details(f, app, chunks[1]);
}

fn draw_form(f: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .fields()
        .into_iter()
        .enumerate()
        .map(|(i, field)| {
            let selected = i == app.selected_field;
            let marker = if selected { "▶ " } else { "  " };
            let label_style = if selected {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            ListItem::new(Line::from(vec![
                Span::styled(format!("{}{:14}", marker, field.label()), label_style),
                Span::styled(field_value(app, field), Style::default().fg(Color::White)),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Inputs "));
    f.render_widget(list, area);
}

fn field_value(app: &App, field: Field) -> String {
    let inputs = &app.inputs;
    let catalog = &app.catalog;
    match field {
        Field::Job => inputs
            .job(catalog)
            .map(|j| format!("{} ({})", j.name_en, j.name))
            .unwrap_or_else(|| inputs.job.clone()),
        Field::Weapon => inputs
            .weapon(catalog)
            .map(|w| w.name_en.clone())
            .unwrap_or_else(|| "-".to_string()),
        Field::Stat(stat) => inputs.stats.get(stat).to_string(),
        Field::AttackMin => inputs.attack_min.to_string(),
        Field::AttackMax => inputs.attack_max.to_string(),
        Field::Buff => match inputs.buff {
            AttackBuff::None => "None".to_string(),
            buff => format!("{} (+{} WATK)", buff.name(), buff.watk()),
        },
        Field::CustomWatk => inputs.custom_watk.to_string(),
        Field::Monster => catalog
            .monster(&inputs.monster)
            .map(|m| format!("{} · {}", m.label(), m.area))
            .unwrap_or_else(|| "-".to_string()),
        Field::Skill => catalog
            .skill(&inputs.skill)
            .map(|s| s.name_en.clone())
            .unwrap_or_else(|| "(none)".to_string()),
        Field::SkillLevel => catalog
            .skill(&inputs.skill)
            .map(|s| {
                format!("{} / {}", s.clamp_level(inputs.skill_level), s.max_level)
            })
            .unwrap_or_else(|| "-".to_string()),
        Field::Venom => (if inputs.venom_enabled { "On" } else { "Off" }).to_string(),
        Field::VenomLevel => inputs.venom_level.to_string(),
    }
}

fn draw_details(f: &mut Frame, app: &App, area: Rect) {
    let inputs = &app.inputs;
    let catalog = &app.catalog;
    let mut lines = vec![section("Attack")];

    let range = inputs.buffed_range(catalog);
    lines.push(info_line("Base range", format!("{} ~ {}", inputs.attack_min, inputs.attack_max)));
    if inputs.buff.watk() > 0 {
        lines.push(info_line("Buffed range", range.to_string()));
    }

    if let (Some(job), Some(weapon)) = (inputs.job(catalog), inputs.weapon(catalog)) {
        let (main, secondary) = job.stat_values(&inputs.stats);
        lines.push(info_line(
            "Main / second",
            format!("{} {} / {} {}", job.main_stat.label(), main, job.secondary_stat.label(), secondary),
        ));
        let watk = inputs
            .estimated_watk(catalog)
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(info_line("Est. WATK", watk));
        let buffed = inputs
            .buffed_watk(catalog)
            .map(|w| w.to_string())
            .unwrap_or_else(|| "-".to_string());
        let buffed_style = if inputs.buff.watk() > 0 {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{:16}", "Buffed WATK"), Style::default().fg(Color::Gray)),
            Span::styled(buffed, buffed_style),
        ]));
        for hint in job.formula_hint(weapon) {
            lines.push(Line::from(Span::styled(
                format!("  {}", hint),
                Style::default().fg(Color::DarkGray),
            )));
        }
    }

    lines.push(Line::from(""));
    lines.push(section("Monster"));
    if let Some(monster) = catalog.monster(&inputs.monster) {
        lines.push(info_line("HP", monster.hp.to_string()));
        lines.push(info_line("Weapon DEF", monster.weapon_def.to_string()));
        lines.push(info_line("Magic DEF", monster.magic_def.to_string()));
    }
    if let Some((area, members)) = app.area_roster() {
        lines.push(info_line("Area", area.to_string()));
        for member in members {
            let style = if member.id == inputs.monster {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            lines.push(Line::from(Span::styled(format!("  {}", member.label()), style)));
        }
    }

    lines.push(Line::from(""));
    lines.push(section("Skill"));
    if let Some(skill) = catalog.skill(&inputs.skill) {
        let level = skill.clamp_level(inputs.skill_level);
        let percent = skill
            .damage_percent_at(level)
            .map(|p| format!("{}%", p))
            .unwrap_or_else(|| "-".to_string());
        lines.push(info_line("Damage", format!("{} × {} hits", percent, skill.hits)));
        lines.push(info_line("Latency", format!("{} ms", skill.latency_ms)));
    } else {
        lines.push(Line::from(Span::styled(
            "  No attack skills for this job yet",
            Style::default().fg(Color::DarkGray),
        )));
    }

    if let Some(dot) = inputs.venom_effect(catalog) {
        lines.push(Line::from(""));
        lines.push(section("Venom"));
        lines.push(info_line("Proc chance", format!("{:.0}%", dot.success_rate * 100.0)));
        lines.push(info_line("Duration", format!("{} ms", dot.duration_ms)));
        lines.push(info_line("Max stacks", dot.max_stack.to_string()));
        lines.push(info_line("Per stack", per_stack(&dot)));
    }

    lines.push(Line::from(""));
    match &app.last_error {
        Some(err) => lines.push(Line::from(Span::styled(
            format!("✗ {}", err),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        ))),
        None => lines.push(Line::from(Span::styled(
            app.status.clone(),
            Style::default().fg(Color::Green),
        ))),
    }

    let paragraph = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Details "))
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

/// Per-stack tick damage, floored like the tick roll itself
fn per_stack(dot: &DotEffect) -> String {
    format!(
        "{} ~ {} / {} ms",
        dot.damage_min.floor(),
        dot.damage_max.floor(),
        dot.tick_interval_ms
    )
}
