//! Input queue plumbing.
//!
//! Platform integrations enqueue normalized events as they arrive and drain
//! them into the scroller once per frame, in arrival order.

use std::collections::VecDeque;

use super::types::InputEvent;

#[derive(Debug, Default)]
pub struct InputQueue {
    queue: VecDeque<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
        }
    }

    pub fn push(&mut self, event: InputEvent) {
        self.queue.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn drain<F>(&mut self, mut handler: F)
    where
        F: FnMut(InputEvent),
    {
        for event in self.queue.drain(..) {
            handler(event);
        }
    }

    /// Like [`InputQueue::drain`], but stops at the first failing event.
    /// Events after the failing one stay queued.
    pub fn try_drain<E, F>(&mut self, mut handler: F) -> Result<(), E>
    where
        F: FnMut(&InputEvent) -> Result<(), E>,
    {
        while let Some(event) = self.queue.pop_front() {
            handler(&event)?;
        }
        Ok(())
    }
}
