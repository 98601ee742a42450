//! Plugin surface.
//!
//! A plugin contributes named capabilities and gets one chance to wire
//! itself into the scroller (events, hooks, reset providers) when it is
//! plugged in. Capability names are unique per scroller.

use rebound_core::{Bounds, PluginError, Point};

use crate::error::ScrollerError;
use crate::scroller::Scroller;

/// Name that no capability may take. It denotes the plugin's initializer.
pub const RESERVED_CAPABILITY: &str = "init";

/// An operation a plugin adds to the scroller, run with [`Scroller::invoke`].
pub type Capability = Box<dyn FnMut(&mut Scroller) -> Result<(), ScrollerError>>;

pub trait Plugin {
    fn name(&self) -> &'static str;

    /// Named operations to register. Called once, before [`Plugin::init`].
    fn capabilities(&mut self) -> Vec<(String, Capability)> {
        Vec::new()
    }

    fn init(&mut self, scroller: &mut Scroller) -> Result<(), PluginError> {
        let _ = scroller;
        Ok(())
    }
}

/// Decides where the content should rest when a boundary reset is evaluated.
///
/// Providers are asked in registration order before the default
/// clamp-to-bounds rule. Returning `Some` claims the reset; returning the
/// current position means no reset is needed.
pub trait ResetProvider {
    fn reset_target(&mut self, position: Point, bounds: &Bounds) -> Result<Option<Point>, PluginError>;
}

impl<F> ResetProvider for F
where
    F: FnMut(Point, &Bounds) -> Result<Option<Point>, PluginError>,
{
    fn reset_target(&mut self, position: Point, bounds: &Bounds) -> Result<Option<Point>, PluginError> {
        self(position, bounds)
    }
}
