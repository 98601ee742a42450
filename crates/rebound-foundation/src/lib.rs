//! Input handling for the rebound scroll engine: normalized samples, the
//! input queue, velocity estimation and the drag gesture tracker.

pub mod clock;
pub mod gesture;
pub mod gesture_constants;
pub mod input;
pub mod velocity;

pub use clock::MonotonicClock;
pub use gesture::{
    CancelOutcome, EndOutcome, GestureConfig, GesturePhase, GestureState, GestureTracker,
    MoveOutcome, PositionUpdate, Release,
};
pub use input::{InputEvent, InputPhase, InputQueue, InputSample, KindTag};
pub use velocity::VelocityEstimator;

pub mod prelude {
    pub use crate::gesture::{GestureConfig, GestureTracker};
    pub use crate::input::prelude::*;
    pub use crate::velocity::VelocityEstimator;
}
