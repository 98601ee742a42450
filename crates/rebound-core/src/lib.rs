//! Core seams for the rebound scroll engine.
//!
//! This crate holds what every other layer shares: geometry, the traits the
//! host implements, tick bookkeeping, and the plugin extension surface
//! (event bus and hook chains).

pub mod error;
pub mod events;
pub mod frame_clock;
pub mod geometry;
pub mod hooks;
pub mod platform;

pub use error::PluginError;
pub use events::{names, EventArgs, EventBus, Listener};
pub use frame_clock::TickSlot;
pub use geometry::{Axis, Bounds, Point};
pub use hooks::{AfterHook, BeforeHook, HookChain, HookPhase};
pub use platform::{
    BoundsProvider, Clock, CubicBezier, FrameScheduler, PositionSink, ScrollHost, TickHandle,
    TransitionHost,
};

pub mod prelude {
    pub use crate::events::{names, EventArgs};
    pub use crate::geometry::{Axis, Bounds, Point};
    pub use crate::platform::ScrollHost;
    pub use crate::PluginError;
}
