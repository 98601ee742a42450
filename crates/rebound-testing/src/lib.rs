//! Testing utilities and harness for rebound

pub mod host;
pub mod rule;

pub use host::{TestHost, TransitionRecord};
pub use rule::{EventRecorder, ScrollTestRule, FRAME_MS};

pub mod prelude {
    pub use crate::host::{TestHost, TransitionRecord};
    pub use crate::rule::{EventRecorder, ScrollTestRule, FRAME_MS};
}
