use rebound_animation::{Easing, EasingKind, Step};
use rebound_core::{names, Point, TickHandle};
use rebound_foundation::Release;

use super::{Direction, MomentumArgs, ScrollToArgs, Scroller};
use crate::error::ScrollerError;

impl Scroller {
    /// Scrolls to `(x, y)`.
    ///
    /// Without a duration (or with zero) the position jumps. Otherwise the
    /// host animates when declarative transitions are in use, and the
    /// scroller interpolates per tick when not. The default easing is the
    /// regular momentum curve.
    pub fn scroll_to(
        &mut self,
        x: f32,
        y: f32,
        duration: Option<u64>,
        easing: Option<Easing>,
    ) -> Result<(), ScrollerError> {
        self.ensure_alive()?;
        let target = Point::new(x, y);
        if target == self.position && !self.is_in_motion() {
            return Ok(());
        }

        self.stop_motion();
        if self.tracker.is_active() {
            // The pointer no longer drives the content once scroll_to runs.
            log::debug!("scroll_to ends the active gesture");
            self.tracker.cancel();
        }
        let args = ScrollToArgs {
            target,
            duration: duration.unwrap_or(0),
            easing: easing.unwrap_or_else(|| EasingKind::Regular.easing()),
        };
        self.hooks.scroll_to.enter(&args)?;
        self.direction = Direction::from_distance(args.target - self.position);
        self.animate(args.target, args.duration, args.easing)?;
        self.hooks.scroll_to.exit(&args, ())?;
        Ok(())
    }

    /// Scrolls vertically to the start.
    pub fn scroll_to_top(
        &mut self,
        duration: Option<u64>,
        easing: Option<Easing>,
    ) -> Result<(), ScrollerError> {
        self.scroll_to(self.position.x, 0.0, duration, easing)
    }

    /// Scrolls vertically to the far edge.
    pub fn scroll_to_bottom(
        &mut self,
        duration: Option<u64>,
        easing: Option<Easing>,
    ) -> Result<(), ScrollerError> {
        self.scroll_to(self.position.x, self.bounds.max_scroll_y, duration, easing)
    }

    /// The host finished a declarative transition.
    pub fn on_transition_end(&mut self) -> Result<(), ScrollerError> {
        self.ensure_alive()?;
        match self.animation.on_transition_end() {
            Some(target) => {
                self.position = target;
                self.finish_motion()
            }
            None => Ok(()),
        }
    }

    pub(super) fn on_animation_tick(
        &mut self,
        handle: TickHandle,
        now: u64,
    ) -> Result<(), ScrollerError> {
        match self.animation.on_tick(&mut *self.host, handle, now) {
            Some(Step::Moved(position)) => {
                self.commit(position);
                self.emit_position(names::SCROLL)
            }
            Some(Step::Finished(position)) => {
                self.commit(position);
                self.settle_after_final_scroll()
            }
            None => {
                log::trace!("ignoring stale tick {handle}");
                Ok(())
            }
        }
    }

    /// Starts motion to `target`. Zero duration jumps and completes at once.
    pub(super) fn animate(
        &mut self,
        target: Point,
        duration: u64,
        easing: Easing,
    ) -> Result<(), ScrollerError> {
        if duration == 0 {
            self.commit(target);
            return self.settle_after_final_scroll();
        }
        if self.config.use_transition && self.host.supports_transition() {
            self.animation
                .start_declarative(&mut *self.host, self.position, target, duration, easing);
            // The host renders the motion; logically the content is there.
            self.position = target;
        } else {
            self.animation
                .start_procedural(&mut *self.host, self.position, target, duration, easing);
        }
        Ok(())
    }

    /// Notifies the final position of a motion, then completes it. A
    /// failing listener still gets the content back into bounds.
    fn settle_after_final_scroll(&mut self) -> Result<(), ScrollerError> {
        if let Err(err) = self.emit_position(names::SCROLL) {
            self.reset_position(self.config.bounce_time)?;
            return Err(err);
        }
        self.finish_motion()
    }

    /// Shared completion path for every motion: a boundary reset if one is
    /// needed, `scrollEnd` otherwise.
    pub(super) fn finish_motion(&mut self) -> Result<(), ScrollerError> {
        if self.reset_position(self.config.bounce_time)? {
            return Ok(());
        }
        self.emit_position(names::SCROLL_END)
    }

    /// Moves back into bounds over `duration` if needed. Returns whether a
    /// reset was started.
    pub(super) fn reset_position(&mut self, duration: u64) -> Result<bool, ScrollerError> {
        let target = self.reset_target()?;
        if target == self.position {
            return Ok(false);
        }
        log::debug!("resetting {:?} -> {target:?} over {duration}ms", self.position);
        self.animate(target, duration, EasingKind::Regular.easing())?;
        Ok(true)
    }

    fn reset_target(&mut self) -> Result<Point, ScrollerError> {
        for provider in &mut self.reset_providers {
            if let Some(target) = provider.reset_target(self.position, &self.bounds)? {
                return Ok(target);
            }
        }
        Ok(self.bounds.clamp(self.position))
    }

    /// Momentum after a release, on every axis that qualifies.
    pub(super) fn release_momentum(&mut self, release: &Release) -> Result<(), ScrollerError> {
        let position = self.position;
        let mut target = position;
        let mut duration = 0;
        let mut easing = EasingKind::Regular;

        if self.config.momentum {
            let solver = self.config.momentum_solver();
            for axis in release.momentum_axes(&self.bounds) {
                let distance = release.distance(axis, position);
                if release.duration >= self.config.momentum_limit_time
                    || distance.abs() <= self.config.momentum_limit_distance
                {
                    continue;
                }
                let args = MomentumArgs {
                    axis,
                    velocity: release.velocity(axis, position),
                    position: position.get(axis),
                    lower_bound: self.bounds.lower(axis),
                    wrapper_size: self.bounds.wrapper_size(axis),
                };
                let result = self.hooks.momentum.run(&args, |args| {
                    solver.compute(args.velocity, args.position, args.lower_bound, args.wrapper_size)
                })?;
                log::debug!("momentum on {}: {result:?}", axis.as_str());
                target = target.with(axis, result.destination);
                duration = duration.max(result.duration_millis());
                if result.is_snap() {
                    easing = EasingKind::Bounce;
                }
            }
        }

        if target == position {
            return self.finish_motion();
        }
        self.animate(target, duration, easing.easing())
    }
}
