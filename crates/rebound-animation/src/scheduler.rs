//! Single-driver motion scheduler.
//!
//! Drives one motion at a time, either as a declarative transition the host
//! animates on its own, or as per-tick interpolation the scheduler computes
//! itself. Starting a motion while another is active cancels the old one
//! first, so there is never more than one writer of the position.

use rebound_core::{Clock, FrameScheduler, Point, TickHandle, TickSlot, TransitionHost};

use crate::easing::Easing;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MotionKind {
    /// The host animates; completion arrives via [`AnimationScheduler::on_transition_end`].
    Declarative,
    /// The scheduler interpolates on every tick.
    Procedural,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub start: Point,
    pub target: Point,
    pub start_time: u64,
    pub duration_ms: u64,
    pub easing: Easing,
    pub kind: MotionKind,
}

impl AnimationState {
    /// Linear progress at `now`, clamped to `[0, 1]`.
    pub fn fraction(&self, now: u64) -> f32 {
        if self.duration_ms == 0 {
            return 1.0;
        }
        let elapsed = now.saturating_sub(self.start_time) as f32;
        (elapsed / self.duration_ms as f32).min(1.0)
    }

    /// Interpolated position at `now`.
    pub fn position_at(&self, now: u64) -> Point {
        let fraction = self.fraction(now);
        if fraction >= 1.0 {
            return self.target;
        }
        let eased = self.easing.transform(fraction);
        Point::new(
            self.start.x + (self.target.x - self.start.x) * eased,
            self.start.y + (self.target.y - self.start.y) * eased,
        )
    }
}

/// Result of one procedural tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// Intermediate position; another tick has been scheduled.
    Moved(Point),
    /// The exact target; the motion is over.
    Finished(Point),
}

impl Step {
    pub fn position(&self) -> Point {
        match self {
            Step::Moved(point) | Step::Finished(point) => *point,
        }
    }
}

#[derive(Debug, Default)]
pub struct AnimationScheduler {
    state: Option<AnimationState>,
    tick: TickSlot,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.state.is_some()
    }

    pub fn state(&self) -> Option<&AnimationState> {
        self.state.as_ref()
    }

    pub fn is_pending_tick(&self, handle: TickHandle) -> bool {
        self.tick.handle() == Some(handle)
    }

    /// Starts per-tick interpolation from `from` to `to`.
    pub fn start_procedural<H>(
        &mut self,
        host: &mut H,
        from: Point,
        to: Point,
        duration_ms: u64,
        easing: Easing,
    ) where
        H: FrameScheduler + TransitionHost + Clock + ?Sized,
    {
        self.cancel(host);
        let start_time = host.now_millis();
        log::debug!("procedural motion {from:?} -> {to:?} over {duration_ms}ms");
        self.state = Some(AnimationState {
            start: from,
            target: to,
            start_time,
            duration_ms,
            easing,
            kind: MotionKind::Procedural,
        });
        self.tick.request(host);
    }

    /// Hands the motion to the host's transition facility.
    pub fn start_declarative<H>(
        &mut self,
        host: &mut H,
        from: Point,
        to: Point,
        duration_ms: u64,
        easing: Easing,
    ) where
        H: FrameScheduler + TransitionHost + Clock + ?Sized,
    {
        self.cancel(host);
        let start_time = host.now_millis();
        log::debug!("declarative motion {from:?} -> {to:?} over {duration_ms}ms");
        self.state = Some(AnimationState {
            start: from,
            target: to,
            start_time,
            duration_ms,
            easing,
            kind: MotionKind::Declarative,
        });
        host.start_transition(to, duration_ms, easing.bezier());
    }

    /// Advances procedural motion. Returns `None` for ticks that are not
    /// ours (stale or cancelled handles) and for declarative motion.
    pub fn on_tick<H>(&mut self, host: &mut H, handle: TickHandle, now: u64) -> Option<Step>
    where
        H: FrameScheduler + ?Sized,
    {
        if !self.tick.claim(handle) {
            return None;
        }
        let state = self.state?;
        if state.kind != MotionKind::Procedural {
            return None;
        }

        if state.fraction(now) >= 1.0 {
            self.state = None;
            return Some(Step::Finished(state.target));
        }

        let position = state.position_at(now);
        self.tick.request(host);
        Some(Step::Moved(position))
    }

    /// The host finished a declarative transition. Returns its target.
    pub fn on_transition_end(&mut self) -> Option<Point> {
        match self.state {
            Some(state) if state.kind == MotionKind::Declarative => {
                self.state = None;
                Some(state.target)
            }
            _ => None,
        }
    }

    /// Stops whatever is running.
    ///
    /// For declarative motion the host keeps animating until told otherwise,
    /// so the position currently on screen is read back and returned; the
    /// caller must adopt it. Procedural motion has already committed its
    /// last position and returns `None`.
    pub fn cancel<H>(&mut self, host: &mut H) -> Option<Point>
    where
        H: FrameScheduler + TransitionHost + Clock + ?Sized,
    {
        self.tick.cancel(host);
        let state = self.state.take()?;
        match state.kind {
            MotionKind::Procedural => None,
            MotionKind::Declarative => {
                let rendered = host
                    .stop_transition()
                    .unwrap_or_else(|| state.position_at(host.now_millis()));
                log::debug!("declarative motion interrupted at {rendered:?}");
                Some(rendered)
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;
