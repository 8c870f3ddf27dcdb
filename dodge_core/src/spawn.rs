//! Fixed-interval spawn timer.

/// Accumulates elapsed time and fires once the total strictly exceeds the
/// interval.  Firing resets the accumulator to zero; any excess in the
/// firing tick is dropped rather than carried into the next window.
#[derive(Clone, Debug, PartialEq)]
pub struct SpawnTimer {
    interval: f32,
    elapsed:  f32,
}

impl SpawnTimer {
    pub fn new(interval: f32) -> Self {
        SpawnTimer { interval, elapsed: 0.0 }
    }

    /// Advance by `dt` seconds.  Returns true if a spawn is due.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.elapsed += dt.max(0.0);
        if self.elapsed > self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn elapsed(&self) -> f32 { self.elapsed }
    pub fn interval(&self) -> f32 { self.interval }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_only_after_interval_is_exceeded() {
        let mut t = SpawnTimer::new(2.0);
        assert!(!t.advance(1.0));
        assert!(!t.advance(1.0)); // exactly 2.0 is not "more than" 2.0
        assert!(t.advance(0.5));
        assert_eq!(t.elapsed(), 0.0);
    }

    #[test]
    fn one_spawn_per_window_without_drift() {
        let mut t = SpawnTimer::new(2.0);
        let fired = (0..100).filter(|_| t.advance(0.25)).count();
        // 0.25 steps: fires on the 9th step (2.25), then every 9 steps.
        assert_eq!(fired, 100 / 9);
    }

    #[test]
    fn huge_step_fires_once() {
        let mut t = SpawnTimer::new(2.0);
        assert!(t.advance(10.0));
        assert!(!t.advance(0.0));
    }

    #[test]
    fn negative_dt_is_ignored() {
        let mut t = SpawnTimer::new(2.0);
        t.advance(1.0);
        t.advance(-5.0);
        assert_eq!(t.elapsed(), 1.0);
    }
}
