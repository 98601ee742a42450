use rebound_core::Point;
use std::cell::Cell;
use std::rc::Rc;

/// Input technology a sample came from.
///
/// A gesture is captured for one kind at a time so that a device reporting
/// the same contact through two technologies (touch plus compatibility mouse
/// events) cannot drive the engine twice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum KindTag {
    Touch,
    Mouse,
    Pointer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InputPhase {
    Start,
    Move,
    End,
    Cancel,
}

/// One normalized input sample.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputSample {
    pub position: Point,
    /// Milliseconds on the host clock's timeline.
    pub timestamp: u64,
    pub kind: KindTag,
}

impl InputSample {
    pub fn new(x: f32, y: f32, timestamp: u64, kind: KindTag) -> Self {
        Self {
            position: Point::new(x, y),
            timestamp,
            kind,
        }
    }
}

/// Input event with consumption tracking for nested scrollers.
///
/// A scroller that captures an event consumes it; events it does not capture
/// (another technology's samples, or a gesture released by an axis lock)
/// stay unconsumed so an enclosing scroller can take them.
#[derive(Clone, Debug)]
pub struct InputEvent {
    pub phase: InputPhase,
    pub sample: InputSample,
    /// Shared so that consumption is visible across copies.
    consumed: Rc<Cell<bool>>,
}

impl InputEvent {
    pub fn new(phase: InputPhase, sample: InputSample) -> Self {
        Self {
            phase,
            sample,
            consumed: Rc::new(Cell::new(false)),
        }
    }

    pub fn start(sample: InputSample) -> Self {
        Self::new(InputPhase::Start, sample)
    }

    pub fn moved(sample: InputSample) -> Self {
        Self::new(InputPhase::Move, sample)
    }

    pub fn end(sample: InputSample) -> Self {
        Self::new(InputPhase::End, sample)
    }

    pub fn cancel(sample: InputSample) -> Self {
        Self::new(InputPhase::Cancel, sample)
    }

    pub fn consume(&self) {
        self.consumed.set(true);
    }

    pub fn is_consumed(&self) -> bool {
        self.consumed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn consumption_is_shared_between_clones() {
        let event = InputEvent::start(InputSample::new(0.0, 0.0, 0, KindTag::Touch));
        let copy = event.clone();
        assert!(!copy.is_consumed());
        event.consume();
        assert!(copy.is_consumed());
    }
}
