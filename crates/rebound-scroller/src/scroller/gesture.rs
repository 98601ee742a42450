use rebound_core::{names, EventArgs};
use rebound_foundation::{
    CancelOutcome, EndOutcome, InputEvent, InputPhase, InputSample, MoveOutcome, PositionUpdate,
};

use super::{Direction, Scroller};
use crate::error::ScrollerError;

impl Scroller {
    /// Dispatches one input event by phase.
    ///
    /// Events this scroller captures are marked consumed. Events already
    /// consumed (by a nested scroller) are skipped.
    pub fn handle_event(&mut self, event: &InputEvent) -> Result<(), ScrollerError> {
        if event.is_consumed() {
            return Ok(());
        }
        let captured = match event.phase {
            InputPhase::Start => self.start(&event.sample)?,
            InputPhase::Move => matches!(
                self.move_to(&event.sample)?,
                MoveOutcome::Moved { .. } | MoveOutcome::Stationary
            ),
            InputPhase::End => self.end(&event.sample)?,
            InputPhase::Cancel => self.cancel()?,
        };
        if captured {
            event.consume();
        }
        Ok(())
    }

    /// Begins a gesture. Returns false when the start is rejected (disabled,
    /// or another input technology owns the current gesture).
    pub fn start(&mut self, sample: &InputSample) -> Result<bool, ScrollerError> {
        self.ensure_alive()?;
        if !self.tracker.accepts(sample.kind) {
            log::debug!("ignoring {:?} start", sample.kind);
            return Ok(false);
        }
        self.stop_motion();
        self.tracker.start(sample, self.position);
        self.emit_position(names::BEFORE_SCROLL_START)?;
        Ok(true)
    }

    pub fn move_to(&mut self, sample: &InputSample) -> Result<MoveOutcome, ScrollerError> {
        self.ensure_alive()?;
        let outcome = self.tracker.move_to(sample, self.position, &self.bounds);
        match outcome {
            MoveOutcome::Foreign { .. } | MoveOutcome::Stationary => {}
            MoveOutcome::Moved { first_move, update } => {
                if first_move {
                    self.begin_drag()?;
                }
                self.direction = Direction::from_distance(self.tracker.state().distance);
                match update {
                    PositionUpdate::Held => self.emit_position(names::SCROLL)?,
                    PositionUpdate::Deferred(_) => {
                        self.tracking_tick.request(&mut *self.host);
                    }
                    PositionUpdate::Immediate(target) => {
                        self.commit(target);
                        self.emit_position(names::SCROLL)?;
                    }
                }
            }
            MoveOutcome::Locked { axis, first_move } => {
                if first_move {
                    self.begin_drag()?;
                }
                self.tracking_tick.cancel(&mut *self.host);
                self.emit(names::LOCK, EventArgs::Axis(axis))?;
                self.reset_position(self.config.bounce_time)?;
            }
        }
        Ok(outcome)
    }

    /// Releases the gesture: a boundary reset when the content was dragged
    /// past a bound, momentum otherwise.
    pub fn end(&mut self, sample: &InputSample) -> Result<bool, ScrollerError> {
        self.ensure_alive()?;
        match self.tracker.end(sample) {
            EndOutcome::Ignored => Ok(false),
            EndOutcome::Unmoved => {
                self.tracking_tick.cancel(&mut *self.host);
                // A tap can stop a bounce mid-flight; put the content back.
                self.reset_position(self.config.bounce_time)?;
                Ok(true)
            }
            EndOutcome::Released(release) => {
                self.tracking_tick.cancel(&mut *self.host);
                if let Some(pending) = release.pending {
                    self.commit(pending);
                    self.emit_position(names::SCROLL)?;
                }
                if !self.reset_position(self.config.bounce_time)? {
                    self.release_momentum(&release)?;
                }
                Ok(true)
            }
        }
    }

    /// Abandons the gesture without momentum. Runs whatever the enabled
    /// state, so no tracking tick outlives an interrupted gesture.
    pub fn cancel(&mut self) -> Result<bool, ScrollerError> {
        self.ensure_alive()?;
        self.tracking_tick.cancel(&mut *self.host);
        match self.tracker.cancel() {
            CancelOutcome::Idle => Ok(false),
            CancelOutcome::Cancelled { moved, pending } => {
                if let Some(pending) = pending {
                    self.commit(pending);
                }
                self.emit_position(names::SCROLL_CANCEL)?;
                if !self.reset_position(self.config.bounce_time)? && moved {
                    self.emit_position(names::SCROLL_END)?;
                }
                Ok(true)
            }
        }
    }

    fn begin_drag(&mut self) -> Result<(), ScrollerError> {
        self.commit(self.position);
        self.emit_position(names::SCROLL_START)?;
        if self.config.debounce {
            self.tracking_tick.request(&mut *self.host);
        }
        Ok(())
    }

    /// One tick of debounced tracking: commit, then sample velocity, then
    /// notify.
    pub(super) fn on_tracking_tick(&mut self) -> Result<(), ScrollerError> {
        let committed = match self.tracker.take_pending() {
            Some(target) => {
                self.commit(target);
                true
            }
            None => false,
        };
        self.tracker.sample_velocity(self.position);
        if self.tracker.needs_tick() {
            self.tracking_tick.request(&mut *self.host);
        }
        if committed {
            self.emit_position(names::SCROLL)?;
        }
        Ok(())
    }
}
