//! Bookkeeping for ticks requested from the host.
//!
//! A [`TickSlot`] owns at most one outstanding tick. Requesting while a tick
//! is pending coalesces into the pending one, which is what the refresh path
//! relies on to fold bursts of calls into a single recomputation.

use crate::platform::{FrameScheduler, TickHandle};

#[derive(Debug, Default)]
pub struct TickSlot {
    handle: Option<TickHandle>,
}

impl TickSlot {
    pub const fn new() -> Self {
        Self { handle: None }
    }

    pub fn is_pending(&self) -> bool {
        self.handle.is_some()
    }

    pub fn handle(&self) -> Option<TickHandle> {
        self.handle
    }

    /// Requests a tick unless one is already outstanding.
    pub fn request<F>(&mut self, frames: &mut F) -> TickHandle
    where
        F: FrameScheduler + ?Sized,
    {
        match self.handle {
            Some(handle) => handle,
            None => {
                let handle = frames.schedule_tick();
                log::trace!("tick {handle} requested");
                self.handle = Some(handle);
                handle
            }
        }
    }

    pub fn cancel<F>(&mut self, frames: &mut F)
    where
        F: FrameScheduler + ?Sized,
    {
        if let Some(handle) = self.handle.take() {
            log::trace!("tick {handle} cancelled");
            frames.cancel_tick(handle);
        }
    }

    /// Consumes the pending tick if `handle` belongs to this slot.
    pub fn claim(&mut self, handle: TickHandle) -> bool {
        if self.handle == Some(handle) {
            self.handle = None;
            true
        } else {
            false
        }
    }
}
