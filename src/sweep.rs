// Triangular sweep of the inter-step delay

/// Direction the delay is currently moving in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Triangle-wave generator for a bounded delay value
///
/// Each `step()` nudges the value toward the active bound by a fixed
/// amount, clamping at the bound. A step taken while already sitting on
/// the bound only flips the direction and leaves the value unchanged, so
/// ramps stay strictly monotonic between the two flip points.
pub struct DelaySweep {
    delay_ms: u32,
    direction: Direction,
    min_ms: u32,
    max_ms: u32,
    step_ms: u32,
}

impl DelaySweep {
    /// Create a new sweep
    ///
    /// # Arguments
    /// * `initial_ms` - Starting delay, clamped into `min_ms..=max_ms`
    /// * `direction` - Initial ramp direction
    /// * `min_ms` - Lower bound (inclusive)
    /// * `max_ms` - Upper bound (inclusive)
    /// * `step_ms` - Per-step increment/decrement
    pub fn new(
        initial_ms: u32,
        direction: Direction,
        min_ms: u32,
        max_ms: u32,
        step_ms: u32,
    ) -> Self {
        Self {
            delay_ms: initial_ms.clamp(min_ms, max_ms),
            direction,
            min_ms,
            max_ms,
            step_ms,
        }
    }

    /// Advance the triangle wave by one step and return the new delay
    ///
    /// The returned value never leaves `min_ms..=max_ms`.
    pub fn step(&mut self) -> u32 {
        match self.direction {
            Direction::Up => {
                if self.delay_ms >= self.max_ms {
                    self.direction = Direction::Down;
                } else {
                    self.delay_ms = (self.delay_ms + self.step_ms).min(self.max_ms);
                }
            }
            Direction::Down => {
                if self.delay_ms <= self.min_ms {
                    self.direction = Direction::Up;
                } else {
                    self.delay_ms = self.delay_ms.saturating_sub(self.step_ms).max(self.min_ms);
                }
            }
        }
        self.delay_ms
    }

    /// Current delay [ms]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }

    /// Current ramp direction
    pub fn direction(&self) -> Direction {
        self.direction
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_sweep(initial_ms: u32, direction: Direction) -> DelaySweep {
        DelaySweep::new(initial_ms, direction, 25, 300, 15)
    }

    #[test]
    fn test_flip_at_max_keeps_value() {
        // Starting at the upper bound going up: the first step must only
        // flip, not move
        let mut sweep = demo_sweep(300, Direction::Up);
        assert_eq!(sweep.step(), 300);
        assert_eq!(sweep.direction(), Direction::Down);
        // The next step starts the descent
        assert_eq!(sweep.step(), 285);
    }

    #[test]
    fn test_descent_clamps_at_min() {
        let mut sweep = demo_sweep(40, Direction::Down);
        assert_eq!(sweep.step(), 25); // 40 - 15
        assert_eq!(sweep.direction(), Direction::Down);
        assert_eq!(sweep.step(), 25); // flip only
        assert_eq!(sweep.direction(), Direction::Up);
    }

    #[test]
    fn test_ascent_clamps_at_max() {
        // 290 + 15 would overshoot; the value clamps to 300 first, then a
        // later step flips
        let mut sweep = demo_sweep(290, Direction::Up);
        assert_eq!(sweep.step(), 300);
        assert_eq!(sweep.direction(), Direction::Up);
        assert_eq!(sweep.step(), 300);
        assert_eq!(sweep.direction(), Direction::Down);
    }

    #[test]
    fn test_off_grid_descent_clamps() {
        // 30 is above min but closer than one step; the value lands on 25
        // instead of undershooting to 15
        let mut sweep = demo_sweep(30, Direction::Down);
        assert_eq!(sweep.step(), 25);
    }

    #[test]
    fn test_constructor_clamps_initial_value() {
        assert_eq!(demo_sweep(1000, Direction::Up).delay_ms(), 300);
        assert_eq!(demo_sweep(0, Direction::Down).delay_ms(), 25);
    }

    #[test]
    fn test_never_leaves_bounds() {
        for (initial, direction) in [
            (25, Direction::Up),
            (25, Direction::Down),
            (100, Direction::Up),
            (287, Direction::Down),
            (300, Direction::Up),
        ] {
            let mut sweep = demo_sweep(initial, direction);
            for _ in 0..200 {
                let delay = sweep.step();
                assert!((25..=300).contains(&delay));
            }
        }
    }

    #[test]
    fn test_waveform_is_monotonic_between_flips() {
        let mut sweep = demo_sweep(300, Direction::Up);
        sweep.step(); // flip to Down
        let mut prev = sweep.delay_ms();
        while sweep.direction() == Direction::Down {
            let delay = sweep.step();
            assert!(delay <= prev);
            prev = delay;
        }
        assert_eq!(prev, 25);
        prev = sweep.delay_ms();
        while sweep.direction() == Direction::Up {
            let delay = sweep.step();
            assert!(delay >= prev);
            prev = delay;
        }
        assert_eq!(prev, 300);
    }

    #[test]
    fn test_forty_steps_from_max_flip_twice() {
        let mut sweep = demo_sweep(300, Direction::Up);
        let mut flips = 0;
        let mut prev_direction = sweep.direction();
        let mut values = [0u32; 40];
        for value in values.iter_mut() {
            *value = sweep.step();
            if sweep.direction() != prev_direction {
                flips += 1;
                prev_direction = sweep.direction();
            }
        }
        assert_eq!(flips, 2);
        // Down ramp: flip-only step, then 285, 270, ... 30, clamped to 25
        assert_eq!(values[0], 300);
        for (i, value) in values[1..=18].iter().enumerate() {
            assert_eq!(*value, 300 - 15 * (i as u32 + 1));
        }
        assert_eq!(values[19], 25);
        // Up ramp: flip-only step, then 40, 55, ... 295, clamped to 300
        assert_eq!(values[20], 25);
        for (i, value) in values[21..=38].iter().enumerate() {
            assert_eq!(*value, 25 + 15 * (i as u32 + 1));
        }
        assert_eq!(values[39], 300);
    }
}
