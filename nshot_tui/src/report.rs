//! Plain-text report for headless runs

use crate::inputs::Prepared;
use nshot_core::SimulationResult;

const BAR_WIDTH: usize = 40;

/// One line describing what was simulated
pub fn describe(prepared: &Prepared<'_>, trial_count: u32) -> String {
    let mut line = format!(
        "{} Lv.{} ({}) vs {}, attack {}",
        prepared.skill.name_en,
        prepared.skill_level,
        prepared.job.name_en,
        prepared.monster.label(),
        prepared.actor.attack_range,
    );
    if let Some(dot) = &prepared.dot {
        line.push_str(&format!(
            ", venom {:.0}% x{} ({}~{})",
            dot.success_rate * 100.0,
            dot.max_stack,
            dot.damage_min.floor(),
            dot.damage_max.floor()
        ));
    }
    line.push_str(&format!(", {} trials", trial_count));
    line
}

/// Histogram with one row per cast count, then the summary
pub fn render(result: &SimulationResult) -> String {
    let mut lines: Vec<String> = result
        .rows()
        .iter()
        .map(|row| {
            let filled = ((row.relative * BAR_WIDTH as f64).round() as usize).min(BAR_WIDTH);
            format!(
                "{:>5} | {:<width$} {:>7} {:>6.2}%",
                row.casts,
                "#".repeat(filled),
                row.count,
                row.percent,
                width = BAR_WIDTH
            )
        })
        .collect();
    if !result.inconclusive.is_empty() {
        lines.push(format!(
            "{} fights hit the event limit without a kill",
            result.inconclusive_trials()
        ));
    }
    lines.push(result.summary());

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inputs::Inputs;
    use nshot_core::{default_catalog, DotEffect, FightOutcome};

    #[test]
    fn test_render_rows_and_summary() {
        let mut result = SimulationResult::new();
        for _ in 0..3 {
            result.record(FightOutcome::Dead { casts: 4 });
        }
        result.record(FightOutcome::Dead { casts: 5 });

        let text = render(&result);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("    4 | ########################################"));
        assert!(lines[0].ends_with("75.00%"));
        assert!(lines[1].contains("25.00%"));
        assert!(lines[2].contains("expected 4.25 casts to kill"));
    }

    #[test]
    fn test_render_mentions_inconclusive() {
        let mut result = SimulationResult::new();
        result.record(FightOutcome::Dead { casts: 2 });
        result.record(FightOutcome::Inconclusive { casts: 9 });

        let text = render(&result);
        assert!(text.contains("1 fights hit the event limit"));
    }

    #[test]
    fn test_describe_floors_venom_range() {
        let catalog = default_catalog().unwrap();
        let mut inputs = Inputs::default();
        inputs.normalize(&catalog);
        let mut prepared = inputs.prepare(&catalog).unwrap();
        prepared.dot = Some(DotEffect {
            success_rate: 0.4,
            duration_ms: 4000,
            max_stack: 3,
            tick_interval_ms: 1000,
            damage_min: 2449.8,
            damage_max: 5624.6,
        });

        let line = describe(&prepared, 500);
        assert!(line.contains("venom 40% x3 (2449~5624)"));
        assert!(line.ends_with(", 500 trials"));
    }
}
