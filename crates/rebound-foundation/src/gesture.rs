//! Drag gesture state machine.
//!
//! The tracker only decides. It turns input samples into outcomes that say
//! where the content should go and which transitions happened; the owner
//! commits positions, fires notifications and starts motion. That keeps the
//! tracker free of host access and makes every transition testable on its
//! own.
//!
//! ```text
//!            start              axis == lock_on_direction
//!   Idle ───────────▶ Tracking ───────────────────────────▶ Locked
//!    ▲                  │  end / cancel                       │
//!    └──────────────────┴─────────────────────────────────────┘
//! ```

use rebound_core::{Axis, Bounds, Point};

use crate::gesture_constants::{
    MIN_DIRECTION_THRESHOLD, MIN_THRESHOLD, MOMENTUM_LIMIT_DISTANCE, MOMENTUM_LIMIT_TIME,
    RESISTANCE_FACTOR,
};
use crate::input::{InputSample, KindTag};
use crate::velocity::VelocityEstimator;

/// Drag policy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GestureConfig {
    pub enabled: bool,
    pub min_threshold: f32,
    pub min_direction_threshold: f32,
    /// Drags resolving to this axis are released to an enclosing scroller.
    pub lock_on_direction: Option<Axis>,
    /// Damp drags past a bound instead of clamping them.
    pub bounce: bool,
    /// Defer position updates to the owner's tick and smooth velocity per
    /// tick. When false every sample commits immediately and the release
    /// velocity is averaged over the momentum window.
    pub debounce: bool,
    pub momentum_limit_time: u64,
    pub momentum_limit_distance: f32,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_threshold: MIN_THRESHOLD,
            min_direction_threshold: MIN_DIRECTION_THRESHOLD,
            lock_on_direction: None,
            bounce: true,
            debounce: true,
            momentum_limit_time: MOMENTUM_LIMIT_TIME,
            momentum_limit_distance: MOMENTUM_LIMIT_DISTANCE,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    #[default]
    Idle,
    Tracking,
    /// The drag resolved to the forbidden axis and capture was released.
    Locked,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct GestureState {
    /// Input technology that owns the gesture. `None` once released.
    pub kind: Option<KindTag>,
    pub moved: bool,
    pub left_dead_zone: bool,
    /// Content position when the momentum window opened.
    pub start_position: Point,
    /// Timestamp when the momentum window opened.
    pub start_time: u64,
    /// Last pointer position seen.
    pub pointer: Point,
    /// Signed pointer travel since the gesture started.
    pub distance: Point,
    pub axis: Option<Axis>,
    /// Position computed but not yet committed (debounce mode).
    pub pending: Option<Point>,
}

/// How a captured move affects the position.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PositionUpdate {
    /// Inside the dead zone. The position stays but observers are told.
    Held,
    /// Stored as pending until the owner's next tick.
    Deferred(Point),
    /// Commit now.
    Immediate(Point),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MoveOutcome {
    /// Not ours: no gesture, or another technology's sample. The resolved
    /// axis is reported so an enclosing scroller can coordinate.
    Foreign { axis: Option<Axis> },
    /// Captured, but the pointer has not gone anywhere yet.
    Stationary,
    /// Captured. `first_move` is set on the gesture's first movement.
    Moved {
        first_move: bool,
        update: PositionUpdate,
    },
    /// The drag resolved to the forbidden axis.
    Locked { axis: Axis, first_move: bool },
}

/// Everything the owner needs to decide on momentum after a release.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Release {
    pub axis: Option<Axis>,
    /// Position still waiting to be committed.
    pub pending: Option<Point>,
    pub start_position: Point,
    /// Time from the momentum window opening to the release.
    pub duration: u64,
    /// Per-tick smoothed velocity, when smoothing was on.
    pub smoothed: Option<Point>,
}

impl Release {
    /// Release velocity along `axis`, given the final committed position.
    pub fn velocity(&self, axis: Axis, position: Point) -> f32 {
        match self.smoothed {
            Some(velocity) => velocity.get(axis),
            None => VelocityEstimator::average(
                position.get(axis),
                self.start_position.get(axis),
                self.duration,
            ),
        }
    }

    pub fn distance(&self, axis: Axis, position: Point) -> f32 {
        position.get(axis) - self.start_position.get(axis)
    }

    /// Axes momentum applies to: the resolved axis, or every scrollable one
    /// when the drag never resolved.
    pub fn momentum_axes(&self, bounds: &Bounds) -> impl Iterator<Item = Axis> {
        let bounds = *bounds;
        let resolved = self.axis;
        [Axis::Horizontal, Axis::Vertical]
            .into_iter()
            .filter(move |axis| bounds.has_scroll(*axis))
            .filter(move |axis| resolved.map_or(true, |resolved| resolved == *axis))
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EndOutcome {
    /// Nothing captured.
    Ignored,
    /// Captured but never moved. Capture is released.
    Unmoved,
    Released(Release),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CancelOutcome {
    Idle,
    Cancelled { moved: bool, pending: Option<Point> },
}

#[derive(Debug, Default)]
pub struct GestureTracker {
    config: GestureConfig,
    phase: GesturePhase,
    state: GestureState,
    velocity_x: VelocityEstimator,
    velocity_y: VelocityEstimator,
}

impl GestureTracker {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    pub fn config_mut(&mut self) -> &mut GestureConfig {
        &mut self.config
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    pub fn state(&self) -> &GestureState {
        &self.state
    }

    pub fn is_active(&self) -> bool {
        self.phase != GesturePhase::Idle
    }

    /// True while the owner should keep a tracking tick scheduled.
    pub fn needs_tick(&self) -> bool {
        self.config.debounce && self.phase == GesturePhase::Tracking && self.state.moved
    }

    /// Whether a start from `kind` would be taken.
    pub fn accepts(&self, kind: KindTag) -> bool {
        if !self.config.enabled {
            return false;
        }
        match (self.phase, self.state.kind) {
            (GesturePhase::Tracking, Some(owner)) => owner == kind,
            _ => true,
        }
    }

    /// Begins a gesture at the content's current `position`. Returns false
    /// when the start is rejected, in which case nothing changes.
    pub fn start(&mut self, sample: &InputSample, position: Point) -> bool {
        if !self.accepts(sample.kind) {
            log::debug!(
                "start from {:?} rejected (enabled: {}, owner: {:?})",
                sample.kind,
                self.config.enabled,
                self.state.kind
            );
            return false;
        }
        self.phase = GesturePhase::Tracking;
        self.state = GestureState {
            kind: Some(sample.kind),
            start_position: position,
            start_time: sample.timestamp,
            pointer: sample.position,
            ..GestureState::default()
        };
        self.velocity_x.reset(position.x);
        self.velocity_y.reset(position.y);
        log::debug!("gesture tracking {:?} from {position:?}", sample.kind);
        true
    }

    /// Applies a move sample. `committed` is the content position currently
    /// on screen. A disabled tracker leaves every sample to the host.
    pub fn move_to(&mut self, sample: &InputSample, committed: Point, bounds: &Bounds) -> MoveOutcome {
        if !self.config.enabled
            || self.phase != GesturePhase::Tracking
            || self.state.kind != Some(sample.kind)
        {
            return MoveOutcome::Foreign {
                axis: self.state.axis,
            };
        }

        let delta = sample.position - self.state.pointer;
        self.state.pointer = sample.position;
        self.state.distance = self.state.distance + delta;

        if delta == Point::ZERO && !self.state.moved {
            return MoveOutcome::Stationary;
        }
        let first_move = !self.state.moved;
        self.state.moved = true;

        if self.state.axis.is_none() {
            self.state.axis = self.resolve_axis();
        }
        if let Some(axis) = self.state.axis {
            if self.config.lock_on_direction == Some(axis) {
                log::debug!("gesture locked on {}; releasing capture", axis.as_str());
                self.phase = GesturePhase::Locked;
                self.state.kind = None;
                self.state.pending = None;
                return MoveOutcome::Locked { axis, first_move };
            }
        }

        if !self.state.left_dead_zone {
            let distance = self.state.distance;
            if distance.x.abs() < self.config.min_threshold
                && distance.y.abs() < self.config.min_threshold
            {
                return MoveOutcome::Moved {
                    first_move,
                    update: PositionUpdate::Held,
                };
            }
            self.state.left_dead_zone = true;
        }

        let base = self.state.pending.unwrap_or(committed);
        let target = Point::new(
            self.follow(Axis::Horizontal, base, delta, bounds),
            self.follow(Axis::Vertical, base, delta, bounds),
        );

        if sample.timestamp.saturating_sub(self.state.start_time) > self.config.momentum_limit_time {
            self.state.start_time = sample.timestamp;
            self.state.start_position = target;
        }

        let update = if self.config.debounce {
            self.state.pending = Some(target);
            PositionUpdate::Deferred(target)
        } else {
            PositionUpdate::Immediate(target)
        };
        MoveOutcome::Moved { first_move, update }
    }

    /// Hands out the position waiting for this tick.
    pub fn take_pending(&mut self) -> Option<Point> {
        self.state.pending.take()
    }

    /// Feeds the committed position of this tick to the estimators.
    pub fn sample_velocity(&mut self, position: Point) -> Point {
        Point::new(
            self.velocity_x.sample(position.x),
            self.velocity_y.sample(position.y),
        )
    }

    pub fn velocity(&self) -> Point {
        Point::new(self.velocity_x.velocity(), self.velocity_y.velocity())
    }

    /// Releases the gesture. Disabling mid-gesture drops it without a
    /// release.
    pub fn end(&mut self, sample: &InputSample) -> EndOutcome {
        if !self.config.enabled {
            if self.phase != GesturePhase::Idle {
                log::debug!("gesture dropped while disabled");
                self.reset();
            }
            return EndOutcome::Ignored;
        }
        match self.phase {
            GesturePhase::Idle => EndOutcome::Ignored,
            GesturePhase::Locked => {
                self.reset();
                EndOutcome::Ignored
            }
            GesturePhase::Tracking => {
                if self.state.kind != Some(sample.kind) {
                    return EndOutcome::Ignored;
                }
                let state = self.state;
                let smoothed = self.config.debounce.then(|| self.velocity());
                self.reset();
                if !state.moved {
                    log::debug!("gesture ended without movement");
                    return EndOutcome::Unmoved;
                }
                let release = Release {
                    axis: state.axis,
                    pending: state.pending,
                    start_position: state.start_position,
                    duration: sample.timestamp.saturating_sub(state.start_time),
                    smoothed,
                };
                log::debug!("gesture released: {release:?}");
                EndOutcome::Released(release)
            }
        }
    }

    /// Drops whatever is tracked, regardless of phase or enabled state.
    pub fn cancel(&mut self) -> CancelOutcome {
        let phase = self.phase;
        let state = self.state;
        self.reset();
        match phase {
            GesturePhase::Tracking => {
                log::debug!("gesture cancelled (moved: {})", state.moved);
                CancelOutcome::Cancelled {
                    moved: state.moved,
                    pending: state.pending,
                }
            }
            GesturePhase::Idle | GesturePhase::Locked => CancelOutcome::Idle,
        }
    }

    fn reset(&mut self) {
        self.phase = GesturePhase::Idle;
        self.state = GestureState::default();
    }

    fn resolve_axis(&self) -> Option<Axis> {
        let x = self.state.distance.x.abs();
        let y = self.state.distance.y.abs();
        let threshold = self.config.min_direction_threshold;
        if x - y > threshold {
            Some(Axis::Horizontal)
        } else if y - x > threshold {
            Some(Axis::Vertical)
        } else {
            None
        }
    }

    fn follow(&self, axis: Axis, base: Point, delta: Point, bounds: &Bounds) -> f32 {
        if !bounds.has_scroll(axis) {
            return 0.0;
        }
        let current = base.get(axis);
        if self.state.axis == Some(axis.orthogonal()) {
            return current;
        }
        let step = delta.get(axis);
        let next = current + step;
        if !bounds.exceeds(axis, next) {
            next
        } else if self.config.bounce {
            current + step / RESISTANCE_FACTOR
        } else {
            bounds.clamp_axis(axis, next)
        }
    }
}

#[cfg(test)]
#[path = "tests/gesture_tests.rs"]
mod tests;
