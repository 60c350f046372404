use std::time::Duration;

use bevy::log::info;

/// Lifecycle of one play session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    #[default]
    NotStarted,
    Running,
    Terminal,
}

/// Discrete end-of-session performance text, keyed by delivery count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PerformanceTier {
    KeepTrying,
    GoodStart,
    OnTrack,
    Excellent,
    Master,
}

/// Ordered threshold table: the last entry whose minimum is met wins.
const TIER_TABLE: [(u32, PerformanceTier); 5] = [
    (0, PerformanceTier::KeepTrying),
    (1, PerformanceTier::GoodStart),
    (2, PerformanceTier::OnTrack),
    (3, PerformanceTier::Excellent),
    (4, PerformanceTier::Master),
];

impl PerformanceTier {
    pub fn from_count(count: u32) -> Self {
        TIER_TABLE
            .iter()
            .rev()
            .find(|(min, _)| count >= *min)
            .map(|(_, tier)| *tier)
            .unwrap_or(PerformanceTier::KeepTrying)
    }

    pub fn message(self) -> &'static str {
        match self {
            PerformanceTier::KeepTrying => "Don't give up! Try again.",
            PerformanceTier::GoodStart => "Good start! You can do better.",
            PerformanceTier::OnTrack => "Well done! You're on the right track.",
            PerformanceTier::Excellent => "Excellent work!",
            PerformanceTier::Master => "INCREDIBLE! You're a master of deliveries!",
        }
    }
}

/// Statistics shown when a delivery session runs out of time.
#[derive(Debug, Clone, PartialEq)]
pub struct DeliverySummary {
    pub delivered: u32,
    pub time_used: Duration,
    /// `None` when nothing was delivered.
    pub average: Option<Duration>,
    pub tier: PerformanceTier,
}

impl DeliverySummary {
    pub fn new(delivered: u32, limit: Duration, remaining: Duration) -> Self {
        let time_used = limit.saturating_sub(remaining);
        let average = (delivered > 0).then(|| time_used / delivered);
        Self {
            delivered,
            time_used,
            average,
            tier: PerformanceTier::from_count(delivered),
        }
    }

    pub fn time_used_label(&self) -> String {
        format!("{:.1}s", self.time_used.as_secs_f32())
    }

    pub fn average_label(&self) -> String {
        match self.average {
            Some(average) => format!("{:.2}s", average.as_secs_f32()),
            None => "--".to_string(),
        }
    }
}

/// How a session ended.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Every collectible was gathered before the deadline.
    Victory { collected: u32 },
    TimeExpired { collected: u32, total: u32 },
    Delivery(DeliverySummary),
}

/// Decides whether a collection session is over this frame.
pub fn resolve_collection(collected: u32, total: u32, expired: bool) -> Option<Outcome> {
    if collected >= total {
        Some(Outcome::Victory { collected })
    } else if expired {
        Some(Outcome::TimeExpired { collected, total })
    } else {
        None
    }
}

/// Owns the score counter and the set-once terminal flag.
#[derive(Debug, Clone, Default)]
pub struct SessionTracker {
    phase: SessionPhase,
    count: u32,
    total: Option<u32>,
    outcome: Option<Outcome>,
}

impl SessionTracker {
    pub fn new(total: Option<u32>) -> Self {
        Self {
            total,
            ..Default::default()
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// Clears counters and enters `Running`.
    pub fn begin(&mut self) {
        self.reset();
        self.phase = SessionPhase::Running;
    }

    /// Counts one pickup or delivery. Returns the new count, or `None` when
    /// the session is not running or the total is already reached.
    pub fn record(&mut self) -> Option<u32> {
        if self.phase != SessionPhase::Running {
            return None;
        }
        if self.total.is_some_and(|total| self.count >= total) {
            return None;
        }
        self.count += 1;
        Some(self.count)
    }

    /// Sets the terminal flag. Only the first call per session has effect.
    pub fn finish(&mut self, outcome: Outcome) -> bool {
        if self.phase != SessionPhase::Running {
            return false;
        }
        info!(?outcome, count = self.count, "session finished");
        self.phase = SessionPhase::Terminal;
        self.outcome = Some(outcome);
        true
    }

    pub fn reset(&mut self) {
        self.phase = SessionPhase::NotStarted;
        self.count = 0;
        self.outcome = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tiers_follow_threshold_table() {
        assert_eq!(PerformanceTier::from_count(0), PerformanceTier::KeepTrying);
        assert_eq!(PerformanceTier::from_count(1), PerformanceTier::GoodStart);
        assert_eq!(PerformanceTier::from_count(2), PerformanceTier::OnTrack);
        assert_eq!(PerformanceTier::from_count(3), PerformanceTier::Excellent);
        assert_eq!(PerformanceTier::from_count(4), PerformanceTier::Master);
        assert_eq!(PerformanceTier::from_count(17), PerformanceTier::Master);
    }

    #[test]
    fn summary_with_three_deliveries() {
        let summary = DeliverySummary::new(3, Duration::from_secs(30), Duration::ZERO);
        assert_eq!(summary.tier, PerformanceTier::Excellent);
        assert_eq!(summary.tier.message(), "Excellent work!");
        assert_eq!(summary.time_used_label(), "30.0s");
        assert_eq!(summary.average, Some(Duration::from_secs(10)));
        assert_eq!(summary.average_label(), "10.00s");
    }

    #[test]
    fn summary_without_deliveries_has_no_average() {
        let summary = DeliverySummary::new(0, Duration::from_secs(30), Duration::ZERO);
        assert_eq!(summary.average, None);
        assert_eq!(summary.average_label(), "--");
        assert_eq!(summary.tier, PerformanceTier::KeepTrying);
    }

    #[test]
    fn collection_resolution_prefers_victory() {
        assert_eq!(resolve_collection(3, 12, false), None);
        assert_eq!(
            resolve_collection(3, 12, true),
            Some(Outcome::TimeExpired { collected: 3, total: 12 })
        );
        assert_eq!(
            resolve_collection(12, 12, true),
            Some(Outcome::Victory { collected: 12 })
        );
    }

    #[test]
    fn counter_is_bounded_and_frozen_after_finish() {
        let mut tracker = SessionTracker::new(Some(2));
        assert_eq!(tracker.record(), None);

        tracker.begin();
        assert_eq!(tracker.record(), Some(1));
        assert_eq!(tracker.record(), Some(2));
        assert_eq!(tracker.record(), None);

        assert!(tracker.finish(Outcome::Victory { collected: 2 }));
        assert!(!tracker.finish(Outcome::TimeExpired { collected: 2, total: 2 }));
        assert_eq!(tracker.outcome(), Some(&Outcome::Victory { collected: 2 }));
        assert_eq!(tracker.phase(), SessionPhase::Terminal);
    }

    #[test]
    fn reset_returns_to_not_started() {
        let mut tracker = SessionTracker::new(None);
        tracker.begin();
        tracker.record();
        tracker.finish(Outcome::Delivery(DeliverySummary::new(1, Duration::from_secs(5), Duration::ZERO)));

        tracker.reset();
        tracker.reset();
        assert_eq!(tracker.phase(), SessionPhase::NotStarted);
        assert_eq!(tracker.count(), 0);
        assert!(tracker.outcome().is_none());
    }
}
