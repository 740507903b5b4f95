//! Fixed timestep accumulator

use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Turns variable frame deltas into a bounded number of fixed steps
#[derive(Debug, Clone, Default)]
pub struct FixedStep {
    accumulator: f32,
}

impl FixedStep {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed a frame delta (seconds) and get how many `SIM_DT` steps to run.
    ///
    /// Long frames (tab switch, tracking stall) are clamped to 0.1 s and at
    /// most `MAX_SUBSTEPS` steps are returned; any excess is dropped.
    /// Non-finite deltas count as zero.
    pub fn advance(&mut self, frame_dt: f32) -> u32 {
        let dt = if frame_dt.is_finite() {
            frame_dt.clamp(0.0, 0.1)
        } else {
            0.0
        };
        self.accumulator += dt;

        let mut steps = 0;
        while self.accumulator >= SIM_DT && steps < MAX_SUBSTEPS {
            self.accumulator -= SIM_DT;
            steps += 1;
        }
        if steps == MAX_SUBSTEPS {
            self.accumulator = self.accumulator.min(SIM_DT);
        }
        steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulates_partial_frames() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(SIM_DT * 0.6), 0);
        assert_eq!(clock.advance(SIM_DT * 0.6), 1);
    }

    #[test]
    fn test_long_frame_is_bounded() {
        let mut clock = FixedStep::new();
        assert!(clock.advance(5.0) <= MAX_SUBSTEPS);
    }

    #[test]
    fn test_negative_delta_ignored() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(-1.0), 0);
    }

    #[test]
    fn test_non_finite_delta_does_not_stall_clock() {
        let mut clock = FixedStep::new();
        assert_eq!(clock.advance(f32::NAN), 0);
        assert_eq!(clock.advance(f32::INFINITY), 0);

        let steps: u32 = (0..120).map(|_| clock.advance(SIM_DT)).sum();
        assert!(steps >= 119);
    }
}
