//! StackTracker - Active DoT stacks, each tracked by its expiry time

use super::DotEffect;
use rand::Rng;
use std::collections::VecDeque;

/// Bounded set of active stacks on the target
///
/// A stack is only its expiry timestamp on the fight clock. Call
/// [`StackTracker::prune`] at the current time before reading the count
/// or inserting, so expired stacks are never counted.
#[derive(Debug, Clone, Default)]
pub struct StackTracker {
    expiries: VecDeque<u64>,
}

impl StackTracker {
    pub fn new() -> Self {
        StackTracker {
            expiries: VecDeque::new(),
        }
    }

    /// Drop every stack whose expiry is at or before `now`
    pub fn prune(&mut self, now: u64) {
        self.expiries.retain(|&expiry| expiry > now);
    }

    /// Roll a proc and, on success, add a stack expiring at `now + duration`
    ///
    /// Returns whether a stack was added.
    pub fn try_apply(&mut self, now: u64, dot: &DotEffect, rng: &mut impl Rng) -> bool {
        if !dot.roll_proc(rng) {
            return false;
        }
        self.insert(now, dot);
        true
    }

    /// Add a stack unconditionally, evicting the earliest-expiring stack at capacity
    pub fn insert(&mut self, now: u64, dot: &DotEffect) {
        let capacity = dot.max_stack.max(1) as usize;
        while self.expiries.len() >= capacity {
            self.evict_oldest();
        }
        self.expiries.push_back(now.saturating_add(dot.duration_ms));
    }

    /// Number of stacks currently held
    pub fn count(&self) -> usize {
        self.expiries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expiries.is_empty()
    }

    /// Expiry timestamps in insertion order
    pub fn expiries(&self) -> impl Iterator<Item = u64> + '_ {
        self.expiries.iter().copied()
    }

    fn evict_oldest(&mut self) {
        let oldest = self
            .expiries
            .iter()
            .enumerate()
            .min_by_key(|(_, expiry)| **expiry)
            .map(|(index, _)| index);
        if let Some(index) = oldest {
            self.expiries.remove(index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn dot(max_stack: u32, duration_ms: u64) -> DotEffect {
        DotEffect {
            success_rate: 1.0,
            duration_ms,
            max_stack,
            tick_interval_ms: 1000,
            damage_min: 10.0,
            damage_max: 20.0,
        }
    }

    #[test]
    fn test_prune_removes_expiry_at_now() {
        let dot = dot(3, 1000);
        let mut tracker = StackTracker::new();
        tracker.insert(0, &dot);
        tracker.insert(500, &dot);

        tracker.prune(999);
        assert_eq!(tracker.count(), 2);

        // Expiry == now counts as expired
        tracker.prune(1000);
        assert_eq!(tracker.count(), 1);
        assert_eq!(tracker.expiries().collect::<Vec<_>>(), vec![1500]);
    }

    #[test]
    fn test_overflow_evicts_earliest_expiry() {
        let dot = dot(3, 4000);
        let mut tracker = StackTracker::new();
        for t in [0, 720, 1440, 2160] {
            tracker.insert(t, &dot);
        }

        assert_eq!(tracker.count(), 3);
        assert_eq!(tracker.expiries().collect::<Vec<_>>(), vec![4720, 5440, 6160]);
    }

    #[test]
    fn test_try_apply_with_certain_proc() {
        let dot = dot(2, 1000);
        let mut tracker = StackTracker::new();
        let mut rng = StdRng::seed_from_u64(5);

        assert!(tracker.try_apply(0, &dot, &mut rng));
        assert!(tracker.try_apply(0, &dot, &mut rng));
        assert!(tracker.try_apply(0, &dot, &mut rng));
        assert_eq!(tracker.count(), 2);
    }

    #[test]
    fn test_try_apply_with_zero_rate() {
        let mut dot = dot(2, 1000);
        dot.success_rate = 0.0;
        let mut tracker = StackTracker::new();
        let mut rng = StdRng::seed_from_u64(5);

        assert!(!tracker.try_apply(0, &dot, &mut rng));
        assert!(tracker.is_empty());
    }

    proptest! {
        #[test]
        fn never_exceeds_max_stack(
            max_stack in 1u32..6,
            duration in 1u64..5000,
            times in proptest::collection::vec(0u64..200, 1..60),
        ) {
            let dot = dot(max_stack, duration);
            let mut tracker = StackTracker::new();
            let mut now = 0u64;
            for step in times {
                now += step;
                tracker.prune(now);
                tracker.insert(now, &dot);
                prop_assert!(tracker.count() <= max_stack as usize);
                prop_assert!(tracker.expiries().all(|e| e > now));
            }
        }

        #[test]
        fn newest_stack_survives_eviction(
            max_stack in 1u32..5,
            inserts in 1usize..20,
        ) {
            let dot = dot(max_stack, 10_000);
            let mut tracker = StackTracker::new();
            for i in 0..inserts {
                tracker.insert(i as u64 * 100, &dot);
            }
            let newest = (inserts as u64 - 1) * 100 + 10_000;
            prop_assert!(tracker.expiries().any(|e| e == newest));
            prop_assert_eq!(tracker.count(), inserts.min(max_stack as usize));
        }
    }
}
