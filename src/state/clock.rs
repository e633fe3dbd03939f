/// Fixed-timestep accumulator fed by animation-frame timestamps.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedStep {
    pub interval_ms: f64,
    /// Largest delta accepted from a single frame.
    pub max_frame_ms: f64,
    last: Option<f64>,
    acc: f64,
}

impl FixedStep {
    pub fn new(interval_ms: f64, max_frame_ms: f64) -> Self {
        Self {
            interval_ms,
            max_frame_ms,
            last: None,
            acc: 0.0,
        }
    }

    /// Returns how many steps are due at `now`.
    ///
    /// While not running the clock only tracks the timestamp, so time spent
    /// paused or counting down never turns into a burst of steps on resume.
    pub fn advance(&mut self, now: f64, running: bool) -> u32 {
        let last = self.last.replace(now);
        if !running {
            self.acc = 0.0;
            return 0;
        }
        let dt = last.map_or(0.0, |l| (now - l).clamp(0.0, self.max_frame_ms));
        self.acc += dt;
        let mut steps = 0;
        while self.acc >= self.interval_ms {
            self.acc -= self.interval_ms;
            steps += 1;
        }
        steps
    }

    pub fn reset(&mut self) {
        self.last = None;
        self.acc = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn steps_are_independent_of_frame_rate() {
        let mut at_60 = FixedStep::new(120.0, 250.0);
        let mut at_144 = FixedStep::new(120.0, 250.0);
        let total_60: u32 = (0..=60).map(|i| at_60.advance(i as f64 * 1000.0 / 60.0, true)).sum();
        let total_144: u32 = (0..=144)
            .map(|i| at_144.advance(i as f64 * 1000.0 / 144.0, true))
            .sum();
        assert_eq!(total_60, 8);
        assert_eq!(total_144, 8);
    }

    #[test]
    fn remainder_carries_over() {
        let mut clock = FixedStep::new(120.0, 250.0);
        assert_eq!(clock.advance(0.0, true), 0);
        assert_eq!(clock.advance(100.0, true), 0);
        assert_eq!(clock.advance(200.0, true), 1);
        assert_eq!(clock.acc, 80.0);
        assert_eq!(clock.advance(240.0, true), 1);
    }

    #[test]
    fn idle_time_is_discarded() {
        let mut clock = FixedStep::new(120.0, 250.0);
        clock.advance(0.0, true);
        clock.advance(100.0, true);
        assert_eq!(clock.advance(5_000.0, false), 0);
        assert_eq!(clock.acc, 0.0);
        // first running frame after a pause measures from the paused frame
        assert_eq!(clock.advance(5_016.0, true), 0);
        assert_eq!(clock.acc, 16.0);
    }

    #[test]
    fn long_frames_are_capped() {
        let mut clock = FixedStep::new(120.0, 250.0);
        clock.advance(0.0, true);
        assert_eq!(clock.advance(10_000.0, true), 2);
    }
}
