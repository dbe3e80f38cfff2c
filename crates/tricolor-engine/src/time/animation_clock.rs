/// Frame rate used when neither the caller nor the display reports one.
pub const DEFAULT_FRAME_RATE: u32 = 60;

/// Fixed-step animation clock.
///
/// Unlike a wall-clock timer, elapsed time advances by exactly `1 / frame_rate`
/// per `advance()` call, so animation is a function of the number of presented
/// frames only. A stalled or skipped display tick does not make the animation jump.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    elapsed: f32,
    step: f32,
    frame_index: u64,
}

impl AnimationClock {
    /// Creates a clock ticking at `frame_rate` frames per second.
    ///
    /// A frame rate of zero is treated as one frame per second.
    pub fn new(frame_rate: u32) -> Self {
        Self {
            elapsed: 0.0,
            step: 1.0 / frame_rate.max(1) as f32,
            frame_index: 0,
        }
    }

    /// Advances the clock by one frame and returns the new elapsed time.
    pub fn advance(&mut self) -> f32 {
        self.elapsed += self.step;
        self.frame_index = self.frame_index.wrapping_add(1);
        self.elapsed
    }

    /// Elapsed animation time in seconds.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    /// Seconds added per frame.
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Number of `advance()` calls so far.
    #[inline]
    pub fn frame_index(&self) -> u64 {
        self.frame_index
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::new(DEFAULT_FRAME_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_zero() {
        let clock = AnimationClock::new(60);
        assert_eq!(clock.elapsed(), 0.0);
        assert_eq!(clock.frame_index(), 0);
    }

    #[test]
    fn advance_adds_one_step() {
        let mut clock = AnimationClock::new(120);
        let t = clock.advance();
        assert!((t - 1.0 / 120.0).abs() < 1e-7);
        assert_eq!(clock.frame_index(), 1);
    }

    #[test]
    fn n_advances_reach_n_over_f() {
        for rate in [24u32, 30, 60, 120] {
            let mut clock = AnimationClock::new(rate);
            let mut last = clock.elapsed();
            for _ in 0..rate * 3 {
                let t = clock.advance();
                assert!(t > last, "clock must increase monotonically");
                last = t;
            }
            // f32 accumulation drifts slightly over a few hundred steps.
            assert!((clock.elapsed() - 3.0).abs() < 1e-3, "rate {rate}: {}", clock.elapsed());
        }
    }

    #[test]
    fn zero_rate_does_not_divide_by_zero() {
        let mut clock = AnimationClock::new(0);
        assert_eq!(clock.step(), 1.0);
        assert_eq!(clock.advance(), 1.0);
    }

    #[test]
    fn default_runs_at_sixty_hz() {
        let clock = AnimationClock::default();
        assert!((clock.step() - 1.0 / 60.0).abs() < 1e-7);
    }
}
