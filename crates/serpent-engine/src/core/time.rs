/// Frame clock fed by the host's per-frame timestamp.
///
/// The vision model rejects a frame whose timestamp is not strictly greater
/// than the previous one, and browsers can hand out the same
/// `requestAnimationFrame` time twice. The clock nudges repeats forward so
/// detector timestamps stay strictly increasing.
pub struct FrameClock {
    /// Last timestamp handed to the detector (ms).
    last_ms: Option<f64>,
    /// Smallest forward step used when the host repeats or rewinds time.
    min_step_ms: f64,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_ms: None,
            min_step_ms: 0.001,
        }
    }

    /// Record a host timestamp and return the monotonic one to use this frame.
    pub fn tick(&mut self, host_ms: f64) -> f64 {
        let now = match self.last_ms {
            Some(last) if host_ms <= last => last + self.min_step_ms,
            _ => host_ms,
        };
        self.last_ms = Some(now);
        now
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn passes_through_increasing_time() {
        let mut clock = FrameClock::new();
        assert_eq!(clock.tick(16.0), 16.0);
        assert_eq!(clock.tick(33.0), 33.0);
    }

    #[test]
    fn repeated_timestamp_is_nudged_forward() {
        let mut clock = FrameClock::new();
        let a = clock.tick(100.0);
        let b = clock.tick(100.0);
        assert!(b > a, "{} should be > {}", b, a);
    }

    #[test]
    fn rewound_timestamp_stays_monotonic() {
        let mut clock = FrameClock::new();
        clock.tick(500.0);
        let b = clock.tick(10.0);
        assert!(b > 500.0);
        let c = clock.tick(600.0);
        assert_eq!(c, 600.0);
    }
}
