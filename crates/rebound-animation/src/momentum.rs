//! Release momentum under uniform deceleration.
//!
//! Given a release velocity (distance per millisecond) the content coasts for
//! `|v| / a` milliseconds and travels `v * |v| / 2a`. When that would carry it
//! past either edge, the coast is replaced by a short snap that overshoots
//! the exceeded edge in proportion to the wrapper size and the velocity; the
//! post-completion boundary check then brings it back.

use crate::easing::EasingKind;

/// Default deceleration in distance units per millisecond squared.
pub const DEFAULT_ACCELERATION: f32 = 0.0005;

/// The snap overshoot uses `wrapper_size / SNAP_WRAPPER_DIVISOR`.
pub const SNAP_WRAPPER_DIVISOR: f32 = 2.0;

/// The snap overshoot uses `velocity / SNAP_VELOCITY_DIVISOR`.
pub const SNAP_VELOCITY_DIVISOR: f32 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumResult {
    pub destination: f32,
    pub duration_ms: f32,
    pub easing: EasingKind,
}

impl MomentumResult {
    pub fn at_rest(position: f32) -> Self {
        Self {
            destination: position,
            duration_ms: 0.0,
            easing: EasingKind::Regular,
        }
    }

    pub fn duration_millis(&self) -> u64 {
        if self.duration_ms.is_finite() && self.duration_ms > 0.0 {
            self.duration_ms.round() as u64
        } else {
            0
        }
    }

    pub fn is_snap(&self) -> bool {
        self.easing == EasingKind::Bounce
    }
}

/// Solver parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MomentumSolver {
    pub acceleration: f32,
    /// When false, snap results stop exactly at the exceeded bound instead
    /// of overshooting it.
    pub bounce: bool,
}

impl Default for MomentumSolver {
    fn default() -> Self {
        Self {
            acceleration: DEFAULT_ACCELERATION,
            bounce: true,
        }
    }
}

impl MomentumSolver {
    pub fn new(acceleration: f32) -> Self {
        Self {
            acceleration,
            ..Self::default()
        }
    }

    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        self
    }

    /// Computes where a release at `velocity` from `current` comes to rest.
    ///
    /// `lower_bound` is the far edge (`<= 0`); the near edge is `0`.
    pub fn compute(
        &self,
        velocity: f32,
        current: f32,
        lower_bound: f32,
        wrapper_size: f32,
    ) -> MomentumResult {
        if velocity == 0.0 {
            return MomentumResult::at_rest(current);
        }

        let time = velocity.abs() / self.acceleration;
        let destination = current + velocity / 2.0 * time;

        let exceeded = if destination < lower_bound {
            Some(lower_bound)
        } else if destination > 0.0 {
            Some(0.0)
        } else {
            None
        };

        let Some(bound) = exceeded else {
            return MomentumResult {
                destination,
                duration_ms: time,
                easing: EasingKind::Regular,
            };
        };

        let snap_destination = if self.bounce {
            bound + (wrapper_size / SNAP_WRAPPER_DIVISOR) * (velocity / SNAP_VELOCITY_DIVISOR)
        } else {
            bound
        };
        let snap_time = (snap_destination - current).abs() / velocity.abs();
        log::debug!(
            "momentum {destination:.1} exceeds bound {bound:.1}; snapping to {snap_destination:.1} over {snap_time:.0}ms"
        );
        MomentumResult {
            destination: snap_destination,
            duration_ms: snap_time,
            easing: EasingKind::Bounce,
        }
    }
}

/// [`MomentumSolver::compute`] with the default bounce behaviour.
pub fn compute_momentum(
    velocity: f32,
    current: f32,
    lower_bound: f32,
    wrapper_size: f32,
    acceleration: f32,
) -> MomentumResult {
    MomentumSolver::new(acceleration).compute(velocity, current, lower_bound, wrapper_size)
}

#[cfg(test)]
#[path = "tests/momentum_tests.rs"]
mod tests;
