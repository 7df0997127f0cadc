//! SimulationResult - Casts-to-kill distribution of one batch

use super::FightOutcome;
use std::collections::BTreeMap;

/// Outcome counts of a batch of independent fights
///
/// Kills and inconclusive fights are kept apart so a batch that can't
/// reliably kill the target is visible instead of blending into the
/// cast-count buckets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SimulationResult {
    /// Fights run
    pub trial_count: u32,
    /// Cast count -> fights that killed the monster with that many casts
    pub distribution: BTreeMap<u32, u32>,
    /// Cast count -> fights that hit the event budget after that many casts
    pub inconclusive: BTreeMap<u32, u32>,
}

/// One histogram bar
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramRow {
    pub casts: u32,
    pub count: u32,
    /// Share of all trials (0.0 to 100.0)
    pub percent: f64,
    /// Bar length relative to the tallest bar (0.0 to 1.0)
    pub relative: f64,
}

impl SimulationResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one fight to the tallies
    pub fn record(&mut self, outcome: FightOutcome) {
        self.trial_count += 1;
        let bucket = match outcome {
            FightOutcome::Dead { .. } => &mut self.distribution,
            FightOutcome::Inconclusive { .. } => &mut self.inconclusive,
        };
        *bucket.entry(outcome.casts()).or_insert(0) += 1;
    }

    /// Combine the tallies of two partial batches
    pub fn merge(mut self, other: SimulationResult) -> Self {
        self.trial_count += other.trial_count;
        for (casts, count) in other.distribution {
            *self.distribution.entry(casts).or_insert(0) += count;
        }
        for (casts, count) in other.inconclusive {
            *self.inconclusive.entry(casts).or_insert(0) += count;
        }
        self
    }

    /// Fights that ended in a kill
    pub fn kills(&self) -> u32 {
        self.distribution.values().sum()
    }

    /// Fights abandoned at the event budget
    pub fn inconclusive_trials(&self) -> u32 {
        self.inconclusive.values().sum()
    }

    /// Share of fights that never killed (0.0 to 1.0)
    pub fn inconclusive_rate(&self) -> f64 {
        if self.trial_count == 0 {
            return 0.0;
        }
        self.inconclusive_trials() as f64 / self.trial_count as f64
    }

    /// Mean casts-to-kill over the fights that killed
    ///
    /// `None` when no fight killed the monster.
    pub fn expected_casts(&self) -> Option<f64> {
        let kills = self.kills();
        if kills == 0 {
            return None;
        }
        let weighted: f64 = self
            .distribution
            .iter()
            .map(|(casts, count)| *casts as f64 * *count as f64)
            .sum();
        Some(weighted / kills as f64)
    }

    pub fn min_casts(&self) -> Option<u32> {
        self.distribution.keys().next().copied()
    }

    pub fn max_casts(&self) -> Option<u32> {
        self.distribution.keys().next_back().copied()
    }

    /// Kills and inconclusive fights in one map, each counted at its cast count
    pub fn folded_distribution(&self) -> BTreeMap<u32, u32> {
        let mut folded = self.distribution.clone();
        for (casts, count) in &self.inconclusive {
            *folded.entry(*casts).or_insert(0) += *count;
        }
        folded
    }

    /// Histogram bars for the kill distribution, smallest cast count first
    pub fn rows(&self) -> Vec<HistogramRow> {
        let tallest = self.distribution.values().copied().max().unwrap_or(0);
        self.distribution
            .iter()
            .map(|(&casts, &count)| HistogramRow {
                casts,
                count,
                percent: percent_of(count, self.trial_count),
                relative: if tallest == 0 {
                    0.0
                } else {
                    count as f64 / tallest as f64
                },
            })
            .collect()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        let mut parts = Vec::new();

        match self.expected_casts() {
            Some(expected) => parts.push(format!("expected {:.2} casts to kill", expected)),
            None => parts.push("never killed".to_string()),
        }

        if let (Some(min), Some(max)) = (self.min_casts(), self.max_casts()) {
            if min == max {
                parts.push(format!("always {}", min));
            } else {
                parts.push(format!("range {}~{}", min, max));
            }
        }

        let inconclusive = self.inconclusive_trials();
        if inconclusive > 0 {
            parts.push(format!(
                "{} inconclusive ({:.2}%)",
                inconclusive,
                self.inconclusive_rate() * 100.0
            ));
        }

        parts.push(format!("{} trials", self.trial_count));
        parts.join(", ")
    }
}

fn percent_of(count: u32, total: u32) -> f64 {
    if total == 0 {
        0.0
    } else {
        count as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> SimulationResult {
        let mut result = SimulationResult::new();
        for casts in [3, 4, 4, 4, 5] {
            result.record(FightOutcome::Dead { casts });
        }
        result
    }

    #[test]
    fn test_record_and_totals() {
        let result = sample();
        assert_eq!(result.trial_count, 5);
        assert_eq!(result.kills(), 5);
        assert_eq!(result.distribution.get(&4), Some(&3));
        assert_eq!(result.min_casts(), Some(3));
        assert_eq!(result.max_casts(), Some(5));
    }

    #[test]
    fn test_expected_casts() {
        // (3 + 4 * 3 + 5) / 5 = 4.0
        assert!((sample().expected_casts().unwrap() - 4.0).abs() < f64::EPSILON);
        assert_eq!(SimulationResult::new().expected_casts(), None);
    }

    #[test]
    fn test_inconclusive_kept_separate() {
        let mut result = sample();
        result.record(FightOutcome::Inconclusive { casts: 10_000 });

        assert_eq!(result.trial_count, 6);
        assert_eq!(result.kills(), 5);
        assert_eq!(result.inconclusive_trials(), 1);
        assert!((result.expected_casts().unwrap() - 4.0).abs() < f64::EPSILON);
        assert_eq!(result.max_casts(), Some(5));
        assert_eq!(result.folded_distribution().get(&10_000), Some(&1));
        assert!(result.summary().contains("1 inconclusive"));
    }

    #[test]
    fn test_merge() {
        let merged = sample().merge(sample());
        assert_eq!(merged.trial_count, 10);
        assert_eq!(merged.distribution.get(&4), Some(&6));
    }

    #[test]
    fn test_rows() {
        let rows = sample().rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1].casts, 4);
        assert!((rows[1].percent - 60.0).abs() < 1e-9);
        assert!((rows[1].relative - 1.0).abs() < 1e-9);
        assert!((rows[0].relative - 1.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary() {
        let summary = sample().summary();
        assert!(summary.contains("expected 4.00 casts"));
        assert!(summary.contains("range 3~5"));
        assert!(summary.contains("5 trials"));
    }
}
