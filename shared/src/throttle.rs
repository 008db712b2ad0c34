//! Rate limiting for high-frequency events.

/// Leading-edge rate gate: the first call passes, then every call inside the
/// following `interval_ms` window is dropped.
///
/// Time is passed in by the caller so the gate can be driven by
/// `performance.now()` in the browser and by plain numbers in tests.
#[derive(Debug, Clone)]
pub struct Throttle {
    interval_ms: f64,
    last_fired: Option<f64>,
}

impl Throttle {
    /// Gate allowing at most one call per `interval_ms`.
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms),
            last_fired: None,
        }
    }

    /// Returns `true` if a call at `now_ms` should run, and records it.
    pub fn ready(&mut self, now_ms: f64) -> bool {
        match self.last_fired {
            Some(last) if now_ms - last < self.interval_ms => false,
            _ => {
                self.last_fired = Some(now_ms);
                true
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Throttle;

    #[test]
    fn first_call_runs_immediately() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.ready(5_000.0));
    }

    #[test]
    fn suppresses_calls_inside_interval() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.ready(0.0));
        assert!(!throttle.ready(10.0));
        assert!(!throttle.ready(99.9));
        assert!(throttle.ready(100.0));
        assert!(!throttle.ready(150.0));
        assert!(throttle.ready(250.0));
    }

    #[test]
    fn suppressed_calls_do_not_extend_the_window() {
        let mut throttle = Throttle::new(100);
        assert!(throttle.ready(0.0));
        for t in [20.0, 40.0, 60.0, 80.0] {
            assert!(!throttle.ready(t));
        }
        assert!(throttle.ready(101.0));
    }
}
