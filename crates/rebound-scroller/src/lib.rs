//! Scroll physics engine.
//!
//! [`Scroller`] turns normalized input samples into scrolling motion:
//! rubber-banding past the edges while dragging, momentum after release,
//! and a snap back into bounds once motion ends. It never owns a frame
//! loop, a clock or a renderer; all of those come from the
//! [`ScrollHost`](rebound_core::ScrollHost) it is built over.
//!
//! Plugins extend it through notifications ([`Scroller::on`]), interceptor
//! chains ([`Scroller::hooks_mut`]), reset providers and named
//! capabilities ([`Plugin`]).

pub mod config;
pub mod error;
pub mod plugin;
mod scroller;

pub use config::{ConfigDiagnostic, ScrollerConfig, DEFAULT_BOUNCE_TIME};
pub use error::ScrollerError;
pub use plugin::{Capability, Plugin, ResetProvider, RESERVED_CAPABILITY};
pub use scroller::{Direction, MomentumArgs, ScrollToArgs, Scroller, ScrollerHooks};

pub use rebound_animation::{Easing, EasingKind, MomentumResult};
pub use rebound_core::{names, Axis, Bounds, EventArgs, PluginError, Point, ScrollHost};
pub use rebound_foundation::{
    GesturePhase, InputEvent, InputPhase, InputQueue, InputSample, KindTag, MoveOutcome,
};

pub mod prelude {
    pub use crate::config::ScrollerConfig;
    pub use crate::error::ScrollerError;
    pub use crate::plugin::{Plugin, ResetProvider};
    pub use crate::scroller::Scroller;
    pub use rebound_animation::Easing;
    pub use rebound_core::prelude::*;
    pub use rebound_foundation::input::prelude::*;
}
