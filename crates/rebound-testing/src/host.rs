//! Recording host with a manual clock and frame pump.

use std::cell::RefCell;
use std::rc::Rc;

use rebound_core::{
    Bounds, BoundsProvider, Clock, CubicBezier, FrameScheduler, Point, PositionSink, ScrollHost,
    TickHandle, TransitionHost,
};

/// A declarative transition the engine asked for.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionRecord {
    pub target: Point,
    pub duration_millis: u64,
    pub curve: CubicBezier,
}

#[derive(Default)]
struct HostState {
    now: u64,
    next_tick: TickHandle,
    pending_ticks: Vec<TickHandle>,
    cancelled_ticks: Vec<TickHandle>,
    commits: Vec<Point>,
    bounds: Bounds,
    supports_transition: bool,
    transitions: Vec<TransitionRecord>,
    transition_running: bool,
    rendered: Option<Point>,
    measure_count: usize,
    unbound: bool,
}

/// Host double that records everything the engine does to it.
///
/// Clones share state, so a test keeps one handle for assertions after
/// boxing another into the scroller.
#[derive(Clone, Default)]
pub struct TestHost {
    state: Rc<RefCell<HostState>>,
}

impl TestHost {
    pub fn new(bounds: Bounds) -> Self {
        let host = Self::default();
        host.state.borrow_mut().bounds = bounds;
        host
    }

    /// Wrapper of `wrapper_height` over content of `content_height`,
    /// scrolling vertically only.
    pub fn vertical(wrapper_height: f32, content_height: f32) -> Self {
        Self::new(Bounds::from_sizes(
            300.0,
            wrapper_height,
            300.0,
            content_height,
            false,
            true,
        ))
    }

    /// Advertise declarative transition support.
    pub fn with_transitions(self) -> Self {
        self.state.borrow_mut().supports_transition = true;
        self
    }

    pub fn now(&self) -> u64 {
        self.state.borrow().now
    }

    pub fn set_now(&self, now: u64) {
        self.state.borrow_mut().now = now;
    }

    /// Moves the clock forward without delivering ticks.
    pub fn advance_clock(&self, millis: u64) -> u64 {
        let mut state = self.state.borrow_mut();
        state.now += millis;
        state.now
    }

    /// Bounds returned by the next measurement.
    pub fn set_bounds(&self, bounds: Bounds) {
        self.state.borrow_mut().bounds = bounds;
    }

    pub fn measure_count(&self) -> usize {
        self.state.borrow().measure_count
    }

    /// Takes the ticks scheduled so far, in request order.
    pub fn take_ticks(&self) -> Vec<TickHandle> {
        std::mem::take(&mut self.state.borrow_mut().pending_ticks)
    }

    pub fn pending_tick_count(&self) -> usize {
        self.state.borrow().pending_ticks.len()
    }

    pub fn cancelled_ticks(&self) -> Vec<TickHandle> {
        self.state.borrow().cancelled_ticks.clone()
    }

    pub fn commits(&self) -> Vec<Point> {
        self.state.borrow().commits.clone()
    }

    pub fn commit_count(&self) -> usize {
        self.state.borrow().commits.len()
    }

    pub fn last_commit(&self) -> Option<Point> {
        self.state.borrow().commits.last().copied()
    }

    pub fn clear_commits(&self) {
        self.state.borrow_mut().commits.clear();
    }

    pub fn transitions(&self) -> Vec<TransitionRecord> {
        self.state.borrow().transitions.clone()
    }

    pub fn is_transition_running(&self) -> bool {
        self.state.borrow().transition_running
    }

    /// Marks the running transition as finished on screen.
    pub fn complete_transition(&self) {
        self.state.borrow_mut().transition_running = false;
    }

    /// Position reported when a running transition is stopped.
    pub fn set_rendered(&self, position: Point) {
        self.state.borrow_mut().rendered = Some(position);
    }

    pub fn is_unbound(&self) -> bool {
        self.state.borrow().unbound
    }
}

impl FrameScheduler for TestHost {
    fn schedule_tick(&mut self) -> TickHandle {
        let mut state = self.state.borrow_mut();
        state.next_tick += 1;
        let handle = state.next_tick;
        state.pending_ticks.push(handle);
        handle
    }

    fn cancel_tick(&mut self, handle: TickHandle) {
        let mut state = self.state.borrow_mut();
        state.pending_ticks.retain(|pending| *pending != handle);
        state.cancelled_ticks.push(handle);
    }
}

impl Clock for TestHost {
    fn now_millis(&self) -> u64 {
        self.now()
    }
}

impl PositionSink for TestHost {
    fn commit_position(&mut self, x: f32, y: f32) {
        self.state.borrow_mut().commits.push(Point::new(x, y));
    }
}

impl TransitionHost for TestHost {
    fn supports_transition(&self) -> bool {
        self.state.borrow().supports_transition
    }

    fn start_transition(&mut self, target: Point, duration_millis: u64, curve: CubicBezier) {
        let mut state = self.state.borrow_mut();
        state.transition_running = true;
        state.transitions.push(TransitionRecord {
            target,
            duration_millis,
            curve,
        });
    }

    fn stop_transition(&mut self) -> Option<Point> {
        let mut state = self.state.borrow_mut();
        if !state.transition_running {
            return None;
        }
        state.transition_running = false;
        state.rendered.take()
    }
}

impl BoundsProvider for TestHost {
    fn measure(&mut self) -> Bounds {
        let mut state = self.state.borrow_mut();
        state.measure_count += 1;
        state.bounds
    }
}

impl ScrollHost for TestHost {
    fn unbind_input(&mut self) {
        self.state.borrow_mut().unbound = true;
    }
}
