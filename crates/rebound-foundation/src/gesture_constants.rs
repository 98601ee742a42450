//! Shared gesture constants.
//!
//! Values are in logical distance units and milliseconds. The configurable
//! ones are defaults; the rest are fixed tuning of the drag feel.

/// Cumulative drag distance below which the position is held.
pub const MIN_THRESHOLD: f32 = 10.0;

/// How much one axis must dominate the other before the drag axis resolves.
pub const MIN_DIRECTION_THRESHOLD: f32 = 5.0;

/// Deltas that would carry the content past a bound are divided by this.
pub const RESISTANCE_FACTOR: f32 = 3.0;

/// Interval the smoothing estimator assumes between samples. Fixed; it is
/// not measured from actual tick arrival.
pub const TICK_INTERVAL_MS: f32 = 1000.0 / 60.0;

/// Weight of the newest instantaneous speed in the moving average.
pub const SMOOTHING_WEIGHT: f32 = 0.6;

/// Reported velocities below this magnitude (units/ms) are zero.
pub const VELOCITY_FLOOR: f32 = 0.1;

/// Releases slower than this (ms since the momentum window opened) get no
/// momentum; the window also restarts after this long.
pub const MOMENTUM_LIMIT_TIME: u64 = 300;

/// Releases that travelled less than this get no momentum.
pub const MOMENTUM_LIMIT_DISTANCE: f32 = 15.0;
