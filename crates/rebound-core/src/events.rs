//! Ordered publish/subscribe for scroll notifications.
//!
//! Listeners are kept per event name in registration order and invoked
//! synchronously. There is no removal primitive and no deduplication:
//! registering the same closure twice makes it fire twice.
//!
//! A listener that returns an error stops the firing. Listeners registered
//! after it do not run for that event, and the error is handed back to the
//! caller of [`EventBus::fire`].

use std::borrow::Cow;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::error::PluginError;
use crate::geometry::{Axis, Bounds, Point};

/// Names of the notifications emitted by the engine.
pub mod names {
    pub const BEFORE_SCROLL_START: &str = "beforeScrollStart";
    pub const SCROLL_START: &str = "scrollStart";
    pub const SCROLL: &str = "scroll";
    pub const SCROLL_END: &str = "scrollEnd";
    pub const SCROLL_CANCEL: &str = "scrollCancel";
    pub const LOCK: &str = "lock";
    pub const DESTROY: &str = "destroy";
    /// Bounds were recomputed.
    pub const REFRESH: &str = "refresh";
    /// Bounds were recomputed because the wrapper changed size.
    pub const RESIZE: &str = "resize";
}

/// Payload handed to listeners.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum EventArgs {
    None,
    Position(Point),
    Axis(Axis),
    Bounds(Bounds),
}

impl EventArgs {
    pub fn position(&self) -> Option<Point> {
        match self {
            EventArgs::Position(point) => Some(*point),
            _ => None,
        }
    }
}

pub type Listener = Box<dyn FnMut(&EventArgs) -> Result<(), PluginError>>;

#[derive(Default)]
pub struct EventBus {
    listeners: FxHashMap<Cow<'static, str>, SmallVec<[Listener; 2]>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends `listener` to the list for `name`.
    pub fn on<F>(&mut self, name: impl Into<Cow<'static, str>>, listener: F)
    where
        F: FnMut(&EventArgs) -> Result<(), PluginError> + 'static,
    {
        self.listeners
            .entry(name.into())
            .or_default()
            .push(Box::new(listener));
    }

    /// Invokes every listener of `name` in registration order.
    pub fn fire(&mut self, name: &str, args: &EventArgs) -> Result<(), PluginError> {
        let Some(listeners) = self.listeners.get_mut(name) else {
            return Ok(());
        };
        log::trace!("fire {name} to {} listener(s)", listeners.len());
        for listener in listeners.iter_mut() {
            listener(args)?;
        }
        Ok(())
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.listeners.get(name).map_or(0, |list| list.len())
    }

    pub fn has_listeners(&self, name: &str) -> bool {
        self.listener_count(name) > 0
    }
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut map = f.debug_map();
        for (name, listeners) in &self.listeners {
            map.entry(name, &listeners.len());
        }
        map.finish()
    }
}
