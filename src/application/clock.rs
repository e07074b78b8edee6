/// Frame-time accumulator that decides when the next generation is due.
///
/// The kernel has no timer of its own; the frame loop feeds elapsed time in
/// and calls `step()` whenever this says so.
#[derive(Clone, Debug)]
pub struct GenerationClock {
    delay: f32,
    elapsed: f32,
}

impl GenerationClock {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay: delay_ms as f32 / 1000.0,
            elapsed: 0.0,
        }
    }

    /// Seconds between generations
    pub fn delay(&self) -> f32 {
        self.delay
    }

    /// Adjust simulation speed, keeping the delay within 10ms..2s
    pub fn adjust(&mut self, delta_seconds: f32) {
        self.delay = (self.delay + delta_seconds).clamp(0.01, 2.0);
    }

    /// Add frame time; true when a generation is due.
    ///
    /// At most one generation fires per call, so a long frame does not
    /// trigger a burst of catch-up steps.
    pub fn tick(&mut self, delta_time: f32) -> bool {
        self.elapsed += delta_time;
        if self.elapsed >= self.delay {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    pub fn reset(&mut self) {
        self.elapsed = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_after_delay() {
        let mut clock = GenerationClock::new(100);
        assert!(!clock.tick(0.05));
        assert!(!clock.tick(0.04));
        assert!(clock.tick(0.02));
        assert!(!clock.tick(0.01));
    }

    #[test]
    fn test_long_frame_fires_once() {
        let mut clock = GenerationClock::new(100);
        assert!(clock.tick(1.0));
        assert!(!clock.tick(0.0));
    }

    #[test]
    fn test_adjust_clamps() {
        let mut clock = GenerationClock::new(100);
        clock.adjust(-5.0);
        assert_eq!(clock.delay(), 0.01);
        clock.adjust(10.0);
        assert_eq!(clock.delay(), 2.0);
    }

    #[test]
    fn test_reset() {
        let mut clock = GenerationClock::new(100);
        clock.tick(0.09);
        clock.reset();
        assert!(!clock.tick(0.05));
    }
}
