// crates/trustybot-widget/src/reveal.rs
// Scroll-reveal planning: which elements to mark visible, and when

use std::collections::HashSet;
use std::hash::Hash;
use std::time::Duration;

/// Intersection observer settings plus the cascade step
#[derive(Debug, Clone, PartialEq)]
pub struct RevealConfig {
    /// Fraction of the element that must be visible
    pub threshold: f64,
    /// Bias so reveals trigger slightly before full entry
    pub root_margin: &'static str,
    /// Delay between consecutive reveals within one batch
    pub stagger: Duration,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin: "0px 0px -50px 0px",
            stagger: Duration::from_millis(100),
        }
    }
}

/// One observer entry as seen by the planner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sighting<K> {
    pub key: K,
    pub intersecting: bool,
}

/// A reveal to apply after `delay`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledReveal<K> {
    pub key: K,
    pub delay: Duration,
}

/// Tracks which elements were already revealed. Reveals are one-way.
#[derive(Debug)]
pub struct RevealTracker<K> {
    config: RevealConfig,
    revealed: HashSet<K>,
}

impl<K: Eq + Hash + Clone> RevealTracker<K> {
    pub fn new(config: RevealConfig) -> Self {
        Self {
            config,
            revealed: HashSet::new(),
        }
    }

    pub fn config(&self) -> &RevealConfig {
        &self.config
    }

    pub fn is_revealed(&self, key: &K) -> bool {
        self.revealed.contains(key)
    }

    /// Plan one observer batch. The nth newly intersecting element (0-based,
    /// batch order) is revealed after `n * stagger`. Elements are marked at
    /// planning time so an overlapping batch cannot schedule them twice.
    pub fn plan<I>(&mut self, batch: I) -> Vec<ScheduledReveal<K>>
    where
        I: IntoIterator<Item = Sighting<K>>,
    {
        let mut planned = Vec::new();
        for sighting in batch {
            if !sighting.intersecting || self.revealed.contains(&sighting.key) {
                continue;
            }
            let delay = self.config.stagger * planned.len() as u32;
            self.revealed.insert(sighting.key.clone());
            planned.push(ScheduledReveal {
                key: sighting.key,
                delay,
            });
        }
        planned
    }
}

impl<K: Eq + Hash + Clone> Default for RevealTracker<K> {
    fn default() -> Self {
        Self::new(RevealConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(key: u32, intersecting: bool) -> Sighting<u32> {
        Sighting { key, intersecting }
    }

    #[test]
    fn test_cascade_over_intersecting_entries() {
        let mut tracker = RevealTracker::default();
        let plan = tracker.plan([seen(1, true), seen(2, false), seen(3, true), seen(4, true)]);

        let delays: Vec<_> = plan.iter().map(|r| (r.key, r.delay.as_millis())).collect();
        assert_eq!(delays, [(1, 0), (3, 100), (4, 200)]);
    }

    #[test]
    fn test_each_element_reveals_once() {
        let mut tracker = RevealTracker::default();
        assert_eq!(tracker.plan([seen(7, true)]).len(), 1);

        // Leaving and re-entering the viewport does nothing
        assert!(tracker.plan([seen(7, false)]).is_empty());
        assert!(tracker.plan([seen(7, true)]).is_empty());
        assert!(tracker.is_revealed(&7));
    }

    #[test]
    fn test_already_revealed_do_not_consume_stagger_slots() {
        let mut tracker = RevealTracker::default();
        tracker.plan([seen(1, true)]);

        let plan = tracker.plan([seen(1, true), seen(2, true)]);
        assert_eq!(plan, [ScheduledReveal { key: 2, delay: Duration::ZERO }]);
    }

    #[test]
    fn test_default_observer_settings() {
        let config = RevealConfig::default();
        assert_eq!(config.threshold, 0.1);
        assert_eq!(config.root_margin, "0px 0px -50px 0px");
    }
}
