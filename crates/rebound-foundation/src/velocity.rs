//! Release velocity estimation.
//!
//! Two modes are supported. Per-tick smoothing keeps an exponential moving
//! average of the instantaneous speed between consecutive ticks; averaging
//! divides the distance covered since the momentum window opened by the
//! time it took. Both report in distance units per millisecond and both
//! suppress residual drift by reporting anything below
//! [`VELOCITY_FLOOR`] as exactly zero.

use crate::gesture_constants::{SMOOTHING_WEIGHT, TICK_INTERVAL_MS, VELOCITY_FLOOR};

/// Smoothed velocity along one axis.
///
/// The moving average itself is kept unfloored; only reported values go
/// through the floor.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct VelocityEstimator {
    last_position: f32,
    velocity: f32,
}

impl VelocityEstimator {
    pub fn new(position: f32) -> Self {
        Self {
            last_position: position,
            velocity: 0.0,
        }
    }

    /// Restarts estimation at `position` with zero velocity.
    pub fn reset(&mut self, position: f32) {
        *self = Self::new(position);
    }

    /// Feeds the position observed on this tick and returns the reported
    /// velocity.
    ///
    /// The interval is assumed to be [`TICK_INTERVAL_MS`] regardless of how
    /// long the tick actually took.
    pub fn sample(&mut self, position: f32) -> f32 {
        let instant = (position - self.last_position) / TICK_INTERVAL_MS;
        self.velocity = SMOOTHING_WEIGHT * instant + (1.0 - SMOOTHING_WEIGHT) * self.velocity;
        self.last_position = position;
        apply_floor(self.velocity)
    }

    pub fn velocity(&self) -> f32 {
        apply_floor(self.velocity)
    }

    /// The moving average without the floor applied.
    pub fn raw_velocity(&self) -> f32 {
        self.velocity
    }

    pub fn last_position(&self) -> f32 {
        self.last_position
    }

    /// Average velocity over a whole window.
    pub fn average(current: f32, start: f32, elapsed_ms: u64) -> f32 {
        if elapsed_ms == 0 {
            return 0.0;
        }
        apply_floor((current - start) / elapsed_ms as f32)
    }
}

fn apply_floor(velocity: f32) -> f32 {
    if velocity.abs() < VELOCITY_FLOOR {
        0.0
    } else {
        velocity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_blends_instant_speed_with_history() {
        let mut estimator = VelocityEstimator::new(0.0);
        let interval = 1000.0 / 60.0;

        let first = estimator.sample(-50.0);
        let expected_first = 0.6 * (-50.0 / interval);
        assert!((first - expected_first).abs() < 1e-4);

        let second = estimator.sample(-80.0);
        let expected_second = 0.6 * (-30.0 / interval) + 0.4 * expected_first;
        assert!((second - expected_second).abs() < 1e-4);
        assert_eq!(estimator.last_position(), -80.0);
    }

    #[test]
    fn small_velocities_report_as_zero() {
        let mut estimator = VelocityEstimator::new(0.0);
        // 1 unit per tick is 0.06 units/ms, and the blend leaves 0.036.
        let reported = estimator.sample(1.0);
        assert_eq!(reported, 0.0);
        assert!(estimator.raw_velocity() > 0.0);
        assert_eq!(estimator.velocity(), 0.0);

        assert_eq!(VelocityEstimator::average(-9.0, 0.0, 100), 0.0);
        assert_eq!(VelocityEstimator::average(9.0, 0.0, 100), 0.0);
    }

    #[test]
    fn floor_keeps_raw_average_for_later_samples() {
        let mut estimator = VelocityEstimator::new(0.0);
        estimator.sample(2.0);
        let reported = estimator.sample(4.0);
        // 0.6 * 0.12 + 0.4 * 0.072 = 0.1008 only if the history was kept raw.
        assert!((reported - 0.1008).abs() < 1e-4);
    }

    #[test]
    fn averaging_divides_distance_by_elapsed_time() {
        assert!((VelocityEstimator::average(-50.0, 0.0, 100) + 0.5).abs() < 1e-6);
        assert_eq!(VelocityEstimator::average(-50.0, 0.0, 0), 0.0);
    }

    #[test]
    fn idle_ticks_decay_toward_zero() {
        let mut estimator = VelocityEstimator::new(0.0);
        estimator.sample(-40.0);
        let mut last = estimator.velocity().abs();
        for _ in 0..10 {
            let next = estimator.sample(-40.0).abs();
            assert!(next <= last);
            last = next;
        }
        assert_eq!(last, 0.0);
    }
}
