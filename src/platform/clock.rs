//! Frame timing

use std::time::{Duration, Instant};

/// Longest frame the simulation will accept, in milliseconds. A stall
/// (debugger, window drag) otherwise produces one huge gravity step.
pub const MAX_FRAME_MS: u32 = 100;

/// Source of per-frame delta time
pub trait Clock {
    /// Wait for the next frame and return the elapsed milliseconds
    fn tick(&mut self) -> u32;
}

/// Wall clock with a frame-rate cap
#[derive(Debug)]
pub struct FrameClock {
    min_frame: Duration,
    last: Option<Instant>,
}

impl FrameClock {
    pub fn new(max_fps: u32) -> Self {
        Self {
            min_frame: Duration::from_secs(1) / max_fps.max(1),
            last: None,
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) -> u32 {
        let Some(last) = self.last else {
            self.last = Some(Instant::now());
            return 0;
        };

        let elapsed = last.elapsed();
        if elapsed < self.min_frame {
            std::thread::sleep(self.min_frame - elapsed);
        }

        let now = Instant::now();
        let dt = now.duration_since(last).as_millis();
        self.last = Some(now);
        dt.min(MAX_FRAME_MS as u128) as u32
    }
}

/// Constant dt without sleeping (tests, fast-forward runs)
#[derive(Debug, Clone, Copy)]
pub struct FixedClock {
    pub dt: u32,
}

impl FixedClock {
    pub fn new(dt: u32) -> Self {
        Self { dt }
    }
}

impl Clock for FixedClock {
    fn tick(&mut self) -> u32 {
        self.dt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_clock_respects_cap() {
        let mut clock = FrameClock::new(100);
        assert_eq!(clock.tick(), 0);
        let dt = clock.tick();
        assert!(dt >= 10, "frame shorter than the cap: {dt}ms");
        assert!(dt <= MAX_FRAME_MS);
    }

    #[test]
    fn test_fixed_clock() {
        let mut clock = FixedClock::new(16);
        assert_eq!(clock.tick(), 16);
        assert_eq!(clock.tick(), 16);
    }
}
