use rebound_core::PluginError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScrollerError {
    #[error("scroller has been destroyed")]
    Destroyed,
    #[error("plugin failed: {source}")]
    Plugin {
        #[from]
        source: PluginError,
    },
    #[error("capability `{name}` is already registered")]
    CapabilityConflict { name: String },
    #[error("no capability named `{name}` is available")]
    UnknownCapability { name: String },
    #[error("capability name `{name}` is reserved")]
    ReservedCapability { name: String },
}
