pub mod dispatcher;
pub mod types;

pub use dispatcher::InputQueue;
pub use types::{InputEvent, InputPhase, InputSample, KindTag};

pub mod prelude {
    pub use super::types::{InputEvent, InputPhase, InputSample, KindTag};
}
