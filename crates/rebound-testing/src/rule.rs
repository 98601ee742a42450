use std::cell::RefCell;
use std::rc::Rc;

use rebound_core::{EventArgs, Point};
use rebound_foundation::{InputSample, KindTag, MoveOutcome};
use rebound_scroller::{Scroller, ScrollerConfig, ScrollerError};

use crate::host::TestHost;

/// Frame interval used by [`ScrollTestRule::pump_until_idle`].
pub const FRAME_MS: u64 = 16;

const MAX_IDLE_FRAMES: usize = 10_000;

/// Notifications captured in firing order.
#[derive(Clone, Default)]
pub struct EventRecorder {
    events: Rc<RefCell<Vec<(String, EventArgs)>>>,
}

impl EventRecorder {
    pub fn events(&self) -> Vec<(String, EventArgs)> {
        self.events.borrow().clone()
    }

    pub fn names(&self) -> Vec<String> {
        self.events
            .borrow()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    pub fn count(&self, name: &str) -> usize {
        self.events
            .borrow()
            .iter()
            .filter(|(recorded, _)| recorded == name)
            .count()
    }

    /// Positions carried by every recorded `name` notification.
    pub fn positions(&self, name: &str) -> Vec<Point> {
        self.events
            .borrow()
            .iter()
            .filter(|(recorded, _)| recorded == name)
            .filter_map(|(_, args)| args.position())
            .collect()
    }

    pub fn clear(&self) {
        self.events.borrow_mut().clear();
    }
}

/// Headless harness for driving a [`Scroller`] in tests.
///
/// Owns the scroller and a shared handle to its [`TestHost`]. Input samples
/// are stamped with the host clock; frames advance the clock and deliver
/// every tick requested before the frame began.
pub struct ScrollTestRule {
    scroller: Scroller,
    host: TestHost,
    kind: KindTag,
}

impl ScrollTestRule {
    pub fn new(host: TestHost, config: ScrollerConfig) -> Self {
        let scroller = Scroller::new(Box::new(host.clone()), config);
        Self {
            scroller,
            host,
            kind: KindTag::Touch,
        }
    }

    /// Input technology used by the drag helpers.
    pub fn with_kind(mut self, kind: KindTag) -> Self {
        self.kind = kind;
        self
    }

    pub fn scroller(&self) -> &Scroller {
        &self.scroller
    }

    pub fn scroller_mut(&mut self) -> &mut Scroller {
        &mut self.scroller
    }

    pub fn host(&self) -> &TestHost {
        &self.host
    }

    pub fn position(&self) -> Point {
        self.scroller.position()
    }

    /// Records every listed notification from now on.
    pub fn record(&mut self, names: &[&'static str]) -> EventRecorder {
        let recorder = EventRecorder::default();
        for &name in names {
            let events = Rc::clone(&recorder.events);
            self.scroller.on(name, move |args| {
                events.borrow_mut().push((name.to_owned(), *args));
                Ok(())
            });
        }
        recorder
    }

    pub fn sample(&self, x: f32, y: f32) -> InputSample {
        InputSample::new(x, y, self.host.now(), self.kind)
    }

    pub fn press(&mut self, x: f32, y: f32) -> Result<bool, ScrollerError> {
        let sample = self.sample(x, y);
        self.scroller.start(&sample)
    }

    pub fn move_pointer(&mut self, x: f32, y: f32) -> Result<MoveOutcome, ScrollerError> {
        let sample = self.sample(x, y);
        self.scroller.move_to(&sample)
    }

    pub fn release(&mut self, x: f32, y: f32) -> Result<bool, ScrollerError> {
        let sample = self.sample(x, y);
        self.scroller.end(&sample)
    }

    /// Presses at `from`, moves to `to` in `steps` equal moves spaced
    /// `step_ms` apart (delivering frames in between) and releases at `to`.
    pub fn drag(
        &mut self,
        from: Point,
        to: Point,
        steps: u32,
        step_ms: u64,
    ) -> Result<(), ScrollerError> {
        self.press(from.x, from.y)?;
        for step in 1..=steps {
            self.advance_frame(step_ms)?;
            let fraction = step as f32 / steps as f32;
            self.move_pointer(
                from.x + (to.x - from.x) * fraction,
                from.y + (to.y - from.y) * fraction,
            )?;
        }
        self.release(to.x, to.y)?;
        Ok(())
    }

    /// Advances the clock by `millis` and delivers the ticks that were
    /// pending. Ticks requested during delivery wait for the next frame.
    pub fn advance_frame(&mut self, millis: u64) -> Result<(), ScrollerError> {
        let now = self.host.advance_clock(millis);
        for handle in self.host.take_ticks() {
            self.scroller.on_tick(handle, now)?;
        }
        Ok(())
    }

    /// Delivers frames until no tick is pending. Returns the frame count.
    pub fn pump_until_idle(&mut self) -> Result<usize, ScrollerError> {
        let mut frames = 0;
        while self.host.pending_tick_count() > 0 {
            frames += 1;
            if frames > MAX_IDLE_FRAMES {
                panic!("pump_until_idle looped too many times!");
            }
            self.advance_frame(FRAME_MS)?;
        }
        Ok(frames)
    }

    /// Completes the host's running transition.
    pub fn finish_transition(&mut self) -> Result<(), ScrollerError> {
        self.host.complete_transition();
        self.scroller.on_transition_end()
    }
}
