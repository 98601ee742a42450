//! Motion for the rebound scroll engine: easing curves, release momentum and
//! the single-driver animation scheduler.

pub mod easing;
pub mod momentum;
pub mod scheduler;

pub use easing::{Easing, EasingKind};
pub use momentum::{
    compute_momentum, MomentumResult, MomentumSolver, DEFAULT_ACCELERATION, SNAP_VELOCITY_DIVISOR,
    SNAP_WRAPPER_DIVISOR,
};
pub use scheduler::{AnimationScheduler, AnimationState, MotionKind, Step};

pub mod prelude {
    pub use crate::easing::{Easing, EasingKind};
    pub use crate::momentum::{MomentumResult, MomentumSolver};
    pub use crate::scheduler::AnimationScheduler;
}
