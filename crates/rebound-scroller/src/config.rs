//! Scroller configuration and the precedence rules between options.

use std::fmt;

use rebound_animation::MomentumSolver;
use rebound_core::Axis;
use rebound_foundation::gesture_constants::{
    MIN_DIRECTION_THRESHOLD, MIN_THRESHOLD, MOMENTUM_LIMIT_DISTANCE, MOMENTUM_LIMIT_TIME,
};
use rebound_foundation::GestureConfig;
use smallvec::SmallVec;

pub const DEFAULT_BOUNCE_TIME: u64 = 600;

#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ScrollerConfig {
    /// Gates all gesture handling.
    pub enabled: bool,
    pub scroll_x: bool,
    pub scroll_y: bool,
    pub start_x: f32,
    pub start_y: f32,
    /// Rubber-band past bounds and overshoot on snap. When off, drags and
    /// snaps stop at the bound.
    pub bounce: bool,
    /// Duration of corrective motion back into bounds, in ms.
    pub bounce_time: u64,
    pub min_threshold: f32,
    pub min_direction_threshold: f32,
    /// Drags resolving to this axis are handed to an enclosing scroller.
    pub lock_on_direction: Option<Axis>,
    pub acceleration: f32,
    pub momentum: bool,
    pub momentum_limit_time: u64,
    pub momentum_limit_distance: f32,
    /// Couple position updates and velocity sampling to the tick cadence.
    pub debounce: bool,
    /// Let the host animate motion declaratively.
    pub use_transition: bool,
}

impl Default for ScrollerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            scroll_x: false,
            scroll_y: true,
            start_x: 0.0,
            start_y: 0.0,
            bounce: true,
            bounce_time: DEFAULT_BOUNCE_TIME,
            min_threshold: MIN_THRESHOLD,
            min_direction_threshold: MIN_DIRECTION_THRESHOLD,
            lock_on_direction: None,
            acceleration: rebound_animation::DEFAULT_ACCELERATION,
            momentum: true,
            momentum_limit_time: MOMENTUM_LIMIT_TIME,
            momentum_limit_distance: MOMENTUM_LIMIT_DISTANCE,
            debounce: true,
            use_transition: false,
        }
    }
}

impl ScrollerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_axes(mut self, scroll_x: bool, scroll_y: bool) -> Self {
        self.scroll_x = scroll_x;
        self.scroll_y = scroll_y;
        self
    }

    pub fn with_start(mut self, x: f32, y: f32) -> Self {
        self.start_x = x;
        self.start_y = y;
        self
    }

    pub fn with_bounce(mut self, bounce: bool) -> Self {
        self.bounce = bounce;
        self
    }

    pub fn with_bounce_time(mut self, millis: u64) -> Self {
        self.bounce_time = millis;
        self
    }

    pub fn with_min_threshold(mut self, threshold: f32) -> Self {
        self.min_threshold = threshold;
        self
    }

    pub fn with_min_direction_threshold(mut self, threshold: f32) -> Self {
        self.min_direction_threshold = threshold;
        self
    }

    pub fn with_lock_on_direction(mut self, axis: Option<Axis>) -> Self {
        self.lock_on_direction = axis;
        self
    }

    pub fn with_acceleration(mut self, acceleration: f32) -> Self {
        self.acceleration = acceleration;
        self
    }

    pub fn with_momentum(mut self, momentum: bool) -> Self {
        self.momentum = momentum;
        self
    }

    pub fn with_momentum_limits(mut self, time_millis: u64, distance: f32) -> Self {
        self.momentum_limit_time = time_millis;
        self.momentum_limit_distance = distance;
        self
    }

    pub fn with_debounce(mut self, debounce: bool) -> Self {
        self.debounce = debounce;
        self
    }

    pub fn with_use_transition(mut self, use_transition: bool) -> Self {
        self.use_transition = use_transition;
        self
    }

    /// Applies the precedence rules between mutually exclusive options.
    ///
    /// The lower-priority option is switched off and each adjustment is
    /// reported; nothing here is fatal.
    pub fn resolve(
        &self,
        host_supports_transition: bool,
    ) -> (ScrollerConfig, SmallVec<[ConfigDiagnostic; 2]>) {
        let mut config = self.clone();
        let mut diagnostics = SmallVec::new();

        if config.use_transition && !host_supports_transition {
            config.use_transition = false;
            diagnostics.push(ConfigDiagnostic::TransitionUnsupported);
        }
        if config.use_transition && config.debounce {
            config.debounce = false;
            diagnostics.push(ConfigDiagnostic::DebounceDisabledByTransition);
        }
        if let Some(axis) = config.lock_on_direction {
            let only_axis = match (config.scroll_x, config.scroll_y) {
                (true, false) => Some(Axis::Horizontal),
                (false, true) => Some(Axis::Vertical),
                _ => None,
            };
            if only_axis == Some(axis) {
                config.lock_on_direction = None;
                diagnostics.push(ConfigDiagnostic::DirectionLockDisabled { axis });
            }
        }

        for diagnostic in &diagnostics {
            log::warn!("scroller config: {diagnostic}");
        }
        (config, diagnostics)
    }

    pub(crate) fn gesture_config(&self) -> GestureConfig {
        GestureConfig {
            enabled: self.enabled,
            min_threshold: self.min_threshold,
            min_direction_threshold: self.min_direction_threshold,
            lock_on_direction: self.lock_on_direction,
            bounce: self.bounce,
            debounce: self.debounce,
            momentum_limit_time: self.momentum_limit_time,
            momentum_limit_distance: self.momentum_limit_distance,
        }
    }

    pub(crate) fn momentum_solver(&self) -> MomentumSolver {
        MomentumSolver::new(self.acceleration).with_bounce(self.bounce)
    }
}

/// A configuration adjustment made by [`ScrollerConfig::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ConfigDiagnostic {
    /// Declarative transitions were requested but the host has none.
    TransitionUnsupported,
    /// Declarative transitions take over position updates from the tick.
    DebounceDisabledByTransition,
    /// Locking the only scrollable axis would make scrolling impossible.
    DirectionLockDisabled { axis: Axis },
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigDiagnostic::TransitionUnsupported => {
                f.write_str("use_transition disabled: host has no declarative transitions")
            }
            ConfigDiagnostic::DebounceDisabledByTransition => {
                f.write_str("debounce disabled: use_transition takes precedence")
            }
            ConfigDiagnostic::DirectionLockDisabled { axis } => write!(
                f,
                "lock_on_direction disabled: {} is the only scrollable axis",
                axis.as_str()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_need_no_adjustment() {
        let (resolved, diagnostics) = ScrollerConfig::default().resolve(false);
        assert!(diagnostics.is_empty());
        assert_eq!(resolved, ScrollerConfig::default());
        assert_eq!(resolved.bounce_time, 600);
        assert_eq!(resolved.acceleration, 0.0005);
    }

    #[test]
    fn transition_needs_host_support() {
        let config = ScrollerConfig::new().with_use_transition(true);
        let (resolved, diagnostics) = config.resolve(false);
        assert!(!resolved.use_transition);
        assert!(resolved.debounce);
        assert_eq!(diagnostics.as_slice(), &[ConfigDiagnostic::TransitionUnsupported]);
    }

    #[test]
    fn transition_wins_over_debounce() {
        let config = ScrollerConfig::new()
            .with_use_transition(true)
            .with_debounce(true);
        let (resolved, diagnostics) = config.resolve(true);
        assert!(resolved.use_transition);
        assert!(!resolved.debounce);
        assert_eq!(
            diagnostics.as_slice(),
            &[ConfigDiagnostic::DebounceDisabledByTransition]
        );
    }

    #[test]
    fn locking_the_only_axis_is_dropped() {
        let config = ScrollerConfig::new().with_lock_on_direction(Some(Axis::Vertical));
        let (resolved, diagnostics) = config.resolve(false);
        assert_eq!(resolved.lock_on_direction, None);
        assert_eq!(
            diagnostics[0].to_string(),
            "lock_on_direction disabled: vertical is the only scrollable axis"
        );

        let config = ScrollerConfig::new()
            .with_axes(false, true)
            .with_lock_on_direction(Some(Axis::Horizontal));
        let (resolved, diagnostics) = config.resolve(false);
        assert_eq!(resolved.lock_on_direction, Some(Axis::Horizontal));
        assert!(diagnostics.is_empty());
    }
}
