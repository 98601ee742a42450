//! Platform abstraction traits for the scroll engine.
//!
//! The engine never owns a frame loop, a clock, a renderer or a layout pass.
//! The host hands those capabilities in through the traits below; the
//! engine only requests and cancels ticks, reads the time, commits
//! positions and asks for fresh bounds.

use crate::geometry::{Bounds, Point};

/// Identifier for a tick requested from the host.
pub type TickHandle = u64;

/// Frame synchronization provided by the host.
///
/// A scheduled tick is answered by the host calling the engine's tick entry
/// point with the handle returned here, once, on its next frame. Cancelled
/// handles must not be delivered; stale deliveries are ignored anyway.
pub trait FrameScheduler {
    /// Request a single tick on the next frame.
    fn schedule_tick(&mut self) -> TickHandle;

    /// Drop a previously requested tick.
    fn cancel_tick(&mut self, handle: TickHandle);
}

/// Provides timing information for the engine.
pub trait Clock {
    /// Current time in milliseconds on the same timeline as input samples.
    fn now_millis(&self) -> u64;
}

/// The sole channel through which positions reach rendering.
pub trait PositionSink {
    fn commit_position(&mut self, x: f32, y: f32);
}

/// Control points of a cubic bezier timing curve, as understood by hosts
/// that animate declaratively.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }
}

/// Declarative ("fire and forget") transitions run by the host.
///
/// Hosts without such a facility keep the defaults and the engine falls back
/// to per-tick interpolation.
pub trait TransitionHost {
    fn supports_transition(&self) -> bool {
        false
    }

    /// Animate the rendered position to `target` over `duration_millis`.
    /// The host reports completion through the engine's transition-end entry
    /// point.
    fn start_transition(&mut self, target: Point, duration_millis: u64, curve: CubicBezier) {
        let _ = (target, duration_millis, curve);
    }

    /// Stop a running transition and return the position currently on
    /// screen, if a transition was running.
    fn stop_transition(&mut self) -> Option<Point> {
        None
    }
}

/// External measurement provider.
pub trait BoundsProvider {
    fn measure(&mut self) -> Bounds;
}

/// Everything the scroll engine needs from its host.
pub trait ScrollHost: FrameScheduler + Clock + PositionSink + TransitionHost + BoundsProvider {
    /// Detach whatever input sources feed the engine. Called once on destroy.
    fn unbind_input(&mut self) {}
}
