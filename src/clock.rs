//! Frame clock to fixed simulation steps
//!
//! Hosts report wall-clock frame time; the simulation always advances in
//! `SIM_DT` increments. Small steps keep the ball well under a paddle width
//! per tick, which is what stops it tunneling through paddles.

use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};

/// Accumulates frame time and hands out whole simulation steps
#[derive(Debug, Clone)]
pub struct FixedStep {
    step: f32,
    max_steps: u32,
    accumulator: f32,
}

impl Default for FixedStep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedStep {
    pub fn new(step: f32, max_steps: u32) -> Self {
        assert!(step > 0.0, "fixed step must be positive");
        Self {
            step,
            max_steps,
            accumulator: 0.0,
        }
    }

    /// Length of one simulation step (seconds)
    #[inline]
    pub fn step(&self) -> f32 {
        self.step
    }

    /// Unconsumed time, for render interpolation
    #[inline]
    pub fn alpha(&self) -> f32 {
        self.accumulator / self.step
    }

    /// Feed one frame's elapsed time, returning how many steps to run.
    ///
    /// Negative or non-finite frame times count as zero, long frames are
    /// capped, and time beyond `max_steps` is dropped rather than carried.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let frame_dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, MAX_FRAME_DT)
        } else {
            0.0
        };
        self.accumulator += frame_dt;

        let mut steps = 0;
        while self.accumulator >= self.step && steps < self.max_steps {
            self.accumulator -= self.step;
            steps += 1;
        }
        if steps == self.max_steps && self.accumulator >= self.step {
            log::debug!("Dropping {:.4}s of frame time", self.accumulator);
            self.accumulator %= self.step;
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStep::new(0.01, 8);
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.004), 0);
        assert_eq!(clock.advance(0.004), 1);
        assert!(clock.alpha() > 0.1 && clock.alpha() < 0.3);
    }

    #[test]
    fn test_caps_long_frames() {
        let mut clock = FixedStep::new(0.01, 4);
        assert_eq!(clock.advance(5.0), 4);
        assert!(clock.alpha() < 1.0);
        assert_eq!(clock.advance(0.0), 0);
    }

    #[test]
    fn test_bad_frame_times() {
        let mut clock = FixedStep::default();
        assert_eq!(clock.advance(-1.0), 0);
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);
        assert_eq!(clock.alpha(), 0.0);
    }

    #[test]
    fn test_sixty_hz_host() {
        let mut clock = FixedStep::default();
        let total: u32 = (0..60).map(|_| clock.advance(1.0 / 60.0)).sum();
        // 120 Hz simulation, give or take one step of float drift
        assert!((119..=120).contains(&total));
    }
}
