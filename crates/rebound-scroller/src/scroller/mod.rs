//! The scroll engine.
//!
//! [`Scroller`] owns the position, the bounds and every piece of motion
//! state, and is the only writer of the position. Gesture handling lives in
//! `gesture.rs`, animated motion and boundary resets in `motion.rs`; this
//! module holds construction, the plugin surface, tick dispatch and the
//! lifecycle operations.
//!
//! Any operation that starts new motion cancels the motion in flight first,
//! so at most one driver (the tracking tick, a procedural animation or a
//! host transition) ever writes the position.

mod gesture;
mod motion;

use std::borrow::Cow;
use std::fmt;

use rebound_animation::{AnimationScheduler, Easing, MomentumResult};
use rebound_core::{
    names, Axis, Bounds, EventArgs, EventBus, HookChain, PluginError, Point, ScrollHost,
    TickHandle, TickSlot,
};
use rebound_foundation::{GesturePhase, GestureTracker};
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::config::{ConfigDiagnostic, ScrollerConfig};
use crate::error::ScrollerError;
use crate::plugin::{Capability, Plugin, ResetProvider, RESERVED_CAPABILITY};

/// Arguments of the `momentum` extension point, one call per axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MomentumArgs {
    pub axis: Axis,
    pub velocity: f32,
    pub position: f32,
    pub lower_bound: f32,
    pub wrapper_size: f32,
}

/// Arguments of the `scroll_to` extension point.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScrollToArgs {
    pub target: Point,
    pub duration: u64,
    pub easing: Easing,
}

/// Interceptor chains the scroller runs at fixed points.
#[derive(Debug, Default)]
pub struct ScrollerHooks {
    /// Wraps the momentum computation after a release. `after` hooks may
    /// replace the result.
    pub momentum: HookChain<MomentumArgs, MomentumResult>,
    /// Wraps programmatic scrolling.
    pub scroll_to: HookChain<ScrollToArgs, ()>,
    /// Wraps adoption of freshly measured bounds. `after` hooks may adjust
    /// them.
    pub refresh: HookChain<Bounds, Bounds>,
}

/// Sign of the latest movement per axis.
///
/// `1` means scrolling forward (content moving towards `max_scroll`), `-1`
/// backward, `0` no movement on that axis.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Direction {
    pub x: i8,
    pub y: i8,
}

impl Direction {
    /// Direction of a pointer travel or synthesized gesture distance.
    pub fn from_distance(distance: Point) -> Self {
        Self {
            x: direction_of(distance.x),
            y: direction_of(distance.y),
        }
    }
}

fn direction_of(distance: f32) -> i8 {
    if distance > 0.0 {
        -1
    } else if distance < 0.0 {
        1
    } else {
        0
    }
}

pub struct Scroller {
    host: Box<dyn ScrollHost>,
    config: ScrollerConfig,
    diagnostics: SmallVec<[ConfigDiagnostic; 2]>,
    position: Point,
    bounds: Bounds,
    direction: Direction,
    tracker: GestureTracker,
    animation: AnimationScheduler,
    tracking_tick: TickSlot,
    refresh_tick: TickSlot,
    resize_requested: bool,
    events: EventBus,
    hooks: ScrollerHooks,
    plugins: Vec<&'static str>,
    capabilities: FxHashMap<String, Option<Capability>>,
    reset_providers: Vec<Box<dyn ResetProvider>>,
    destroyed: bool,
}

impl Scroller {
    /// Creates a scroller over `host`, measures bounds once and commits the
    /// configured start position as is.
    pub fn new(mut host: Box<dyn ScrollHost>, config: ScrollerConfig) -> Self {
        let (config, diagnostics) = config.resolve(host.supports_transition());
        let bounds = host.measure().restricted(config.scroll_x, config.scroll_y);
        let position = Point::new(config.start_x, config.start_y);
        host.commit_position(position.x, position.y);
        log::debug!("scroller created at {position:?} with {bounds:?}");

        Self {
            host,
            tracker: GestureTracker::new(config.gesture_config()),
            config,
            diagnostics,
            position,
            bounds,
            direction: Direction::default(),
            animation: AnimationScheduler::new(),
            tracking_tick: TickSlot::new(),
            refresh_tick: TickSlot::new(),
            resize_requested: false,
            events: EventBus::new(),
            hooks: ScrollerHooks::default(),
            plugins: Vec::new(),
            capabilities: FxHashMap::default(),
            reset_providers: Vec::new(),
            destroyed: false,
        }
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn bounds(&self) -> &Bounds {
        &self.bounds
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// The effective configuration, after precedence rules.
    pub fn config(&self) -> &ScrollerConfig {
        &self.config
    }

    /// Adjustments made to the requested configuration.
    pub fn diagnostics(&self) -> &[ConfigDiagnostic] {
        &self.diagnostics
    }

    pub fn gesture_phase(&self) -> GesturePhase {
        self.tracker.phase()
    }

    /// True while an animation or host transition is driving the position.
    pub fn is_in_motion(&self) -> bool {
        self.animation.is_running()
    }

    pub fn is_enabled(&self) -> bool {
        self.config.enabled
    }

    pub fn is_destroyed(&self) -> bool {
        self.destroyed
    }

    pub fn enable(&mut self) {
        self.set_enabled(true);
    }

    pub fn disable(&mut self) {
        self.set_enabled(false);
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.config.enabled = enabled;
        self.tracker.config_mut().enabled = enabled;
        if !enabled {
            self.tracking_tick.cancel(&mut *self.host);
            self.tracker.take_pending();
        }
    }

    /// Subscribes `listener` to the notification `name`.
    ///
    /// Listeners run synchronously in registration order. A failing listener
    /// stops the firing and fails the operation that triggered it.
    pub fn on<F>(&mut self, name: impl Into<Cow<'static, str>>, listener: F)
    where
        F: FnMut(&EventArgs) -> Result<(), PluginError> + 'static,
    {
        self.events.on(name, listener);
    }

    pub fn listener_count(&self, name: &str) -> usize {
        self.events.listener_count(name)
    }

    pub fn hooks_mut(&mut self) -> &mut ScrollerHooks {
        &mut self.hooks
    }

    pub fn add_reset_provider<P>(&mut self, provider: P)
    where
        P: ResetProvider + 'static,
    {
        self.reset_providers.push(Box::new(provider));
    }

    /// Registers `plugin`'s capabilities, then runs its initializer.
    ///
    /// The whole plugin is rejected when one of its capability names is
    /// reserved or already taken; nothing is registered in that case.
    pub fn plug<P: Plugin>(&mut self, mut plugin: P) -> Result<(), ScrollerError> {
        self.ensure_alive()?;
        let plugin_name = plugin.name();
        let capabilities = plugin.capabilities();

        for (index, (name, _)) in capabilities.iter().enumerate() {
            if name == RESERVED_CAPABILITY {
                log::warn!("plugin {plugin_name}: capability name `{name}` is reserved");
                return Err(ScrollerError::ReservedCapability { name: name.clone() });
            }
            let repeated = capabilities[..index].iter().any(|(other, _)| other == name);
            if repeated || self.capabilities.contains_key(name) {
                log::warn!("plugin {plugin_name}: capability `{name}` is already registered");
                return Err(ScrollerError::CapabilityConflict { name: name.clone() });
            }
        }

        for (name, capability) in capabilities {
            self.capabilities.insert(name, Some(capability));
        }
        self.plugins.push(plugin_name);
        log::debug!("plugin {plugin_name} registered");
        plugin.init(self)?;
        Ok(())
    }

    pub fn has_plugin(&self, name: &str) -> bool {
        self.plugins.iter().any(|plugin| *plugin == name)
    }

    pub fn has_capability(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    /// Runs the capability registered under `name`.
    pub fn invoke(&mut self, name: &str) -> Result<(), ScrollerError> {
        self.ensure_alive()?;
        let unknown = || ScrollerError::UnknownCapability {
            name: name.to_owned(),
        };
        // Taken out while it runs; a capability invoking itself finds the
        // slot empty.
        let mut capability = self
            .capabilities
            .get_mut(name)
            .and_then(Option::take)
            .ok_or_else(unknown)?;
        let result = capability(self);
        if let Some(slot) = self.capabilities.get_mut(name) {
            *slot = Some(capability);
        }
        result
    }

    /// Entry point for ticks requested from the host.
    pub fn on_tick(&mut self, handle: TickHandle, now: u64) -> Result<(), ScrollerError> {
        if self.destroyed {
            return Ok(());
        }
        if self.tracking_tick.claim(handle) {
            return self.on_tracking_tick();
        }
        if self.refresh_tick.claim(handle) {
            return self.on_refresh_tick();
        }
        self.on_animation_tick(handle, now)
    }

    /// Requests a bounds recomputation on the next tick.
    pub fn refresh(&mut self) -> Result<(), ScrollerError> {
        self.ensure_alive()?;
        self.refresh_tick.request(&mut *self.host);
        Ok(())
    }

    /// Like [`Scroller::refresh`], and also notifies `resize` listeners.
    pub fn resize(&mut self) -> Result<(), ScrollerError> {
        self.ensure_alive()?;
        self.resize_requested = true;
        self.refresh_tick.request(&mut *self.host);
        Ok(())
    }

    fn on_refresh_tick(&mut self) -> Result<(), ScrollerError> {
        let resized = std::mem::take(&mut self.resize_requested);
        let measured = self
            .host
            .measure()
            .restricted(self.config.scroll_x, self.config.scroll_y);
        self.bounds = self.hooks.refresh.run(&measured, |bounds| *bounds)?;
        log::debug!("bounds refreshed: {:?}", self.bounds);

        let args = EventArgs::Bounds(self.bounds);
        self.emit(names::REFRESH, args)?;
        if resized {
            self.emit(names::RESIZE, args)?;
        }
        if !self.is_in_motion() && !self.tracker.is_active() {
            self.reset_position(0)?;
        }
        Ok(())
    }

    /// Tears the scroller down. Every later operation fails with
    /// [`ScrollerError::Destroyed`].
    pub fn destroy(&mut self) -> Result<(), ScrollerError> {
        self.ensure_alive()?;
        self.stop_motion();
        self.tracker.cancel();
        self.refresh_tick.cancel(&mut *self.host);
        self.host.unbind_input();
        self.destroyed = true;
        log::debug!("scroller destroyed");
        self.emit(names::DESTROY, EventArgs::None)
    }

    fn ensure_alive(&self) -> Result<(), ScrollerError> {
        if self.destroyed {
            Err(ScrollerError::Destroyed)
        } else {
            Ok(())
        }
    }

    fn commit(&mut self, position: Point) {
        log::trace!("commit {position:?}");
        self.position = position;
        self.host.commit_position(position.x, position.y);
    }

    fn emit(&mut self, name: &str, args: EventArgs) -> Result<(), ScrollerError> {
        self.events.fire(name, &args)?;
        Ok(())
    }

    fn emit_position(&mut self, name: &str) -> Result<(), ScrollerError> {
        self.emit(name, EventArgs::Position(self.position))
    }

    /// Cancels every driver of the position: the animation (adopting the
    /// rendered position of an interrupted transition) and the tracking
    /// tick.
    fn stop_motion(&mut self) {
        if let Some(rendered) = self.animation.cancel(&mut *self.host) {
            self.commit(rendered);
        }
        self.tracking_tick.cancel(&mut *self.host);
        self.tracker.take_pending();
    }
}

impl fmt::Debug for Scroller {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Scroller")
            .field("position", &self.position)
            .field("bounds", &self.bounds)
            .field("direction", &self.direction)
            .field("phase", &self.tracker.phase())
            .field("in_motion", &self.animation.is_running())
            .field("plugins", &self.plugins)
            .field("destroyed", &self.destroyed)
            .finish()
    }
}
