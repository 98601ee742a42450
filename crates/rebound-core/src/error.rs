use thiserror::Error;

/// Failure raised by plugin code: event listeners, hook interceptors,
/// capabilities and reset providers.
///
/// The engine does not isolate these. Whatever operation triggered the
/// plugin code returns the error to its caller.
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Other(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl PluginError {
    pub fn msg(message: impl Into<String>) -> Self {
        PluginError::Message(message.into())
    }
}
