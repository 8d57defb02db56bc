//! Linear sweep animation for the second hand.

use std::f64::consts::PI;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default length of the second hand sweep.
pub const DEFAULT_SWEEP_DURATION: Duration = Duration::from_secs(10);

/// A linear rotation from `from` to `to` over `duration`.
///
/// Once the duration has passed the angle holds at `to`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    pub duration: Duration,
    pub from: f64,
    pub to: f64,
}

impl Default for Sweep {
    fn default() -> Self {
        Self::half_turn_from(0.0, DEFAULT_SWEEP_DURATION)
    }
}

impl Sweep {
    /// Half a turn clockwise starting at `start`.
    pub fn half_turn_from(start: f64, duration: Duration) -> Self {
        Self {
            duration,
            from: start,
            to: start + PI,
        }
    }

    /// Angle after `elapsed` time since the sweep started.
    pub fn angle_at(&self, elapsed: Duration) -> f64 {
        self.from + (self.to - self.from) * self.progress(elapsed)
    }

    /// Fraction of the sweep completed, in `[0, 1]`.
    pub fn progress(&self, elapsed: Duration) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        (elapsed.as_secs_f64() / self.duration.as_secs_f64()).min(1.0)
    }

    pub fn is_finished(&self, elapsed: Duration) -> bool {
        elapsed >= self.duration
    }
}

/// How the hands move between frames.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HandMotion {
    /// Read the wall clock on every frame.
    #[default]
    Tick,
    /// Read the wall clock once and sweep the second hand.
    Sweep,
}

impl HandMotion {
    pub fn toggle(&self) -> Self {
        match self {
            HandMotion::Tick => HandMotion::Sweep,
            HandMotion::Sweep => HandMotion::Tick,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sweep() {
        let sweep = Sweep::default();
        assert_eq!(sweep.duration, Duration::from_secs(10));
        assert_eq!(sweep.angle_at(Duration::ZERO), 0.0);
        assert!((sweep.angle_at(Duration::from_secs(5)) - PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_sweep_holds_final_angle() {
        let sweep = Sweep::half_turn_from(1.0, Duration::from_secs(2));
        assert_eq!(sweep.angle_at(Duration::from_secs(2)), 1.0 + PI);
        assert_eq!(sweep.angle_at(Duration::from_secs(60)), 1.0 + PI);
        assert!(sweep.is_finished(Duration::from_secs(3)));
        assert!(!sweep.is_finished(Duration::from_millis(1999)));
    }

    #[test]
    fn test_motion_toggle() {
        assert_eq!(HandMotion::Tick.toggle(), HandMotion::Sweep);
        assert_eq!(HandMotion::Sweep.toggle(), HandMotion::Tick);
    }

    #[test]
    fn test_zero_duration_jumps_to_end() {
        let sweep = Sweep::half_turn_from(0.5, Duration::ZERO);
        assert_eq!(sweep.angle_at(Duration::ZERO), 0.5 + PI);
        assert!(sweep.is_finished(Duration::ZERO));
    }
}
