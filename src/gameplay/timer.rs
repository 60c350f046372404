use std::time::Duration;

/// Countdown clock measured against the session clock.
///
/// Remaining time is always derived from the recorded start instant, never
/// decremented frame by frame, so it cannot drift with frame pacing.
#[derive(Debug, Clone)]
pub struct CountdownTimer {
    limit: Duration,
    started_at: Option<Duration>,
    /// Remaining time captured when the timer stopped (expiry or session end).
    frozen: Option<Duration>,
    expiry_signalled: bool,
}

impl CountdownTimer {
    pub fn new(limit: Duration) -> Self {
        Self {
            limit,
            started_at: None,
            frozen: None,
            expiry_signalled: false,
        }
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }

    /// Records `now` as the start instant and marks the timer running.
    pub fn start(&mut self, now: Duration) {
        self.started_at = Some(now);
        self.frozen = None;
        self.expiry_signalled = false;
    }

    /// Stops the timer and restores the full limit.
    pub fn reset(&mut self, limit: Duration) {
        self.limit = limit;
        self.started_at = None;
        self.frozen = None;
        self.expiry_signalled = false;
    }

    /// Freezes the remaining time at its value for `now`.
    pub fn stop(&mut self, now: Duration) {
        if self.is_running() {
            self.frozen = Some(self.remaining(now));
        }
    }

    pub fn is_running(&self) -> bool {
        self.started_at.is_some() && self.frozen.is_none()
    }

    pub fn remaining(&self, now: Duration) -> Duration {
        if let Some(frozen) = self.frozen {
            return frozen;
        }
        match self.started_at {
            Some(start) => self.limit.saturating_sub(now.saturating_sub(start)),
            None => self.limit,
        }
    }

    /// True once the timer has been started and has run down to zero.
    pub fn is_expired(&self, now: Duration) -> bool {
        self.started_at.is_some() && self.remaining(now).is_zero()
    }

    /// Returns `true` exactly once: on the first poll that observes the
    /// running timer at zero. The timer stays frozen at zero afterwards.
    pub fn poll_expiry(&mut self, now: Duration) -> bool {
        if self.expiry_signalled || !self.is_running() || !self.remaining(now).is_zero() {
            return false;
        }
        self.expiry_signalled = true;
        self.frozen = Some(Duration::ZERO);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: f32) -> Duration {
        Duration::from_secs_f32(s)
    }

    #[test]
    fn remaining_starts_at_limit_and_counts_down() {
        for limit in [0.0, 1.0, 30.0, 90.0] {
            let mut timer = CountdownTimer::new(secs(limit));
            let t0 = secs(5.0);
            timer.start(t0);
            assert_eq!(timer.remaining(t0), secs(limit));
            assert_eq!(timer.remaining(t0 + secs(0.5)), secs(limit).saturating_sub(secs(0.5)));
            assert_eq!(timer.remaining(t0 + secs(limit + 10.0)), Duration::ZERO);
        }
    }

    #[test]
    fn unstarted_timer_is_never_expired() {
        let timer = CountdownTimer::new(Duration::ZERO);
        assert_eq!(timer.remaining(secs(100.0)), Duration::ZERO);
        assert!(!timer.is_expired(secs(100.0)));
        assert!(!timer.is_running());
    }

    #[test]
    fn expiry_is_signalled_once() {
        let mut timer = CountdownTimer::new(secs(30.0));
        timer.start(Duration::ZERO);

        assert!(!timer.poll_expiry(secs(29.0)));
        assert!(timer.poll_expiry(secs(31.0)));
        assert!(!timer.poll_expiry(secs(32.0)));
        assert!(!timer.poll_expiry(secs(60.0)));
        assert!(timer.is_expired(secs(60.0)));
        assert!(!timer.is_running());
    }

    #[test]
    fn reset_restores_limit_and_allows_new_run() {
        let mut timer = CountdownTimer::new(secs(10.0));
        timer.start(Duration::ZERO);
        assert!(timer.poll_expiry(secs(11.0)));

        timer.reset(secs(20.0));
        assert!(!timer.is_running());
        assert_eq!(timer.remaining(secs(50.0)), secs(20.0));
        assert!(!timer.is_expired(secs(50.0)));

        timer.start(secs(50.0));
        assert_eq!(timer.remaining(secs(55.0)), secs(15.0));
        assert!(timer.poll_expiry(secs(70.0)));
    }

    #[test]
    fn stop_freezes_remaining_time() {
        let mut timer = CountdownTimer::new(secs(30.0));
        timer.start(Duration::ZERO);
        timer.stop(secs(12.0));
        assert_eq!(timer.remaining(secs(40.0)), secs(18.0));
        assert!(!timer.poll_expiry(secs(40.0)));
    }
}
