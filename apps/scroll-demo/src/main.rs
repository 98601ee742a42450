//! Headless walkthrough of the scroll engine.
//!
//! A scripted flick is fed through an [`InputQueue`] against a real clock at
//! roughly sixty frames per second. It overshoots the far edge, bounces
//! back, and is then scrolled to the top with a timed `scroll_to`. Run with
//! `RUST_LOG=debug` to see the engine's own decisions.

use std::cell::RefCell;
use std::rc::Rc;
use std::thread;
use std::time::Duration;

use rebound_core::{
    Bounds, BoundsProvider, Clock, FrameScheduler, PositionSink, TickHandle, TransitionHost,
};
use rebound_foundation::MonotonicClock;
use rebound_scroller::{
    names, InputEvent, InputQueue, InputSample, KindTag, ScrollHost, Scroller, ScrollerConfig,
    ScrollerError,
};

const FRAME: Duration = Duration::from_millis(16);
const MAX_FRAMES: usize = 600;

#[derive(Default)]
struct Frames {
    next: TickHandle,
    pending: Vec<TickHandle>,
}

/// Host with a tick list drained by `main` and a fixed viewport.
struct DemoHost {
    clock: MonotonicClock,
    frames: Rc<RefCell<Frames>>,
    bounds: Bounds,
}

impl FrameScheduler for DemoHost {
    fn schedule_tick(&mut self) -> TickHandle {
        let mut frames = self.frames.borrow_mut();
        frames.next += 1;
        let handle = frames.next;
        frames.pending.push(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        self.frames
            .borrow_mut()
            .pending
            .retain(|pending| *pending != handle);
    }
}

impl Clock for DemoHost {
    fn now_millis(&self) -> u64 {
        self.clock.now_millis()
    }
}

impl PositionSink for DemoHost {
    fn commit_position(&mut self, x: f32, y: f32) {
        log::trace!("render at ({x:.1}, {y:.1})");
    }
}

impl TransitionHost for DemoHost {}

impl BoundsProvider for DemoHost {
    fn measure(&mut self) -> Bounds {
        self.bounds
    }
}

impl ScrollHost for DemoHost {}

struct Demo {
    scroller: Scroller,
    frames: Rc<RefCell<Frames>>,
    clock: MonotonicClock,
    input: InputQueue,
}

impl Demo {
    fn new(config: ScrollerConfig) -> Self {
        let clock = MonotonicClock::new();
        let frames = Rc::new(RefCell::new(Frames::default()));
        let host = DemoHost {
            clock,
            frames: Rc::clone(&frames),
            bounds: Bounds::from_sizes(320.0, 480.0, 320.0, 2000.0, false, true),
        };
        Self {
            scroller: Scroller::new(Box::new(host), config),
            frames,
            clock,
            input: InputQueue::new(),
        }
    }

    fn sample(&self, y: f32) -> InputSample {
        InputSample::new(160.0, y, self.clock.now_millis(), KindTag::Touch)
    }

    /// Waits one frame, dispatches queued input, then delivers due ticks.
    fn frame(&mut self) -> Result<(), ScrollerError> {
        thread::sleep(FRAME);
        let scroller = &mut self.scroller;
        self.input
            .try_drain(|event| scroller.handle_event(event))?;

        let now = self.clock.now_millis();
        let due = std::mem::take(&mut self.frames.borrow_mut().pending);
        for handle in due {
            self.scroller.on_tick(handle, now)?;
        }
        Ok(())
    }

    fn run_until_idle(&mut self) -> Result<usize, ScrollerError> {
        let mut frames = 0;
        while !self.frames.borrow().pending.is_empty() && frames < MAX_FRAMES {
            self.frame()?;
            frames += 1;
        }
        Ok(frames)
    }

    /// Drags from `from` to `to` over `steps` frames and lets go.
    fn flick(&mut self, from: f32, to: f32, steps: u32) -> Result<(), ScrollerError> {
        let start = self.sample(from);
        self.input.push(InputEvent::start(start));
        self.frame()?;
        for step in 1..=steps {
            let y = from + (to - from) * step as f32 / steps as f32;
            let sample = self.sample(y);
            self.input.push(InputEvent::moved(sample));
            self.frame()?;
        }
        let end = self.sample(to);
        self.input.push(InputEvent::end(end));
        self.frame()
    }
}

fn main() -> Result<(), ScrollerError> {
    #[cfg(all(feature = "logging", not(target_arch = "wasm32")))]
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .init();

    let mut demo = Demo::new(ScrollerConfig::new().with_start(0.0, -1200.0));
    for name in [
        names::BEFORE_SCROLL_START,
        names::SCROLL_START,
        names::SCROLL_END,
        names::SCROLL_CANCEL,
        names::LOCK,
        names::DESTROY,
    ] {
        demo.scroller.on(name, move |args| {
            log::info!("{name}: {args:?}");
            Ok(())
        });
    }
    demo.scroller.on(names::SCROLL, |args| {
        log::debug!("scroll: {args:?}");
        Ok(())
    });

    log::info!("flicking towards the bottom edge from {:?}", demo.scroller.position());
    demo.flick(400.0, 100.0, 5)?;
    let frames = demo.run_until_idle()?;
    log::info!(
        "came to rest at {:?} after {frames} frames",
        demo.scroller.position()
    );

    demo.scroller.scroll_to_top(Some(500), None)?;
    let frames = demo.run_until_idle()?;
    log::info!(
        "back at the top {:?} after {frames} frames",
        demo.scroller.position()
    );

    demo.scroller.destroy()
}
