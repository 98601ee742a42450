//! Easing curves used by scroll motion.
//!
//! Every curve maps a linear fraction in `[0, 1]` onto an interpolation
//! factor whose image is also `[0, 1]`, and can describe itself as cubic
//! bezier control points for hosts that animate declaratively.

use rebound_core::CubicBezier;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    EaseInOut,
    /// Fast start, long tail. Used for momentum inside bounds.
    Swipe,
    /// Quadratic ease-out. Used for motion that overshoots a bound.
    SwipeBounce,
    /// Quartic ease-out.
    QuarticOut,
    /// Arbitrary curve supplied by the caller.
    Bezier(CubicBezier),
}

impl Easing {
    /// Apply the easing function to a linear fraction [0, 1].
    pub fn transform(&self, fraction: f32) -> f32 {
        let t = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::Swipe => {
                let u = t - 1.0;
                1.0 + u * u * u * u * u
            }
            Easing::SwipeBounce => t * (2.0 - t),
            Easing::QuarticOut => {
                let u = t - 1.0;
                1.0 - u * u * u * u
            }
            other => {
                let c = other.bezier();
                cubic_bezier(c.x1, c.y1, c.x2, c.y2, t)
            }
        }
    }

    /// Control points approximating this curve.
    pub fn bezier(&self) -> CubicBezier {
        match self {
            Easing::Linear => CubicBezier::new(0.0, 0.0, 1.0, 1.0),
            Easing::EaseIn => CubicBezier::new(0.42, 0.0, 1.0, 1.0),
            Easing::EaseOut => CubicBezier::new(0.0, 0.0, 0.58, 1.0),
            Easing::EaseInOut => CubicBezier::new(0.42, 0.0, 0.58, 1.0),
            Easing::Swipe => CubicBezier::new(0.23, 1.0, 0.32, 1.0),
            Easing::SwipeBounce => CubicBezier::new(0.25, 0.46, 0.45, 0.94),
            Easing::QuarticOut => CubicBezier::new(0.165, 0.84, 0.44, 1.0),
            Easing::Bezier(curve) => *curve,
        }
    }
}

/// Easing tag attached to a momentum result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EasingKind {
    /// Motion that ends inside bounds.
    Regular,
    /// Motion that was redirected at a bound and will snap back.
    Bounce,
}

impl EasingKind {
    pub fn easing(self) -> Easing {
        match self {
            EasingKind::Regular => Easing::Swipe,
            EasingKind::Bounce => Easing::SwipeBounce,
        }
    }
}

/// Cubic bezier curve approximation for easing.
fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, fraction: f32) -> f32 {
    if fraction <= 0.0 {
        return 0.0;
    }
    if fraction >= 1.0 {
        return 1.0;
    }

    let cx = 3.0 * x1;
    let bx = 3.0 * (x2 - x1) - cx;
    let ax = 1.0 - cx - bx;

    let cy = 3.0 * y1;
    let by = 3.0 * (y2 - y1) - cy;
    let ay = 1.0 - cy - by;

    fn sample_curve(a: f32, b: f32, c: f32, t: f32) -> f32 {
        ((a * t + b) * t + c) * t
    }

    fn sample_derivative(a: f32, b: f32, c: f32, t: f32) -> f32 {
        (3.0 * a * t + 2.0 * b) * t + c
    }

    // Newton-Raphson for the parametric `t` matching the x fraction.
    let mut t = fraction;
    let mut converged = false;
    for _ in 0..8 {
        let x = sample_curve(ax, bx, cx, t) - fraction;
        if x.abs() < 1e-6 {
            converged = true;
            break;
        }
        let dx = sample_derivative(ax, bx, cx, t);
        if dx.abs() < 1e-6 {
            break;
        }
        t = (t - x / dx).clamp(0.0, 1.0);
    }

    if !converged {
        let mut t0 = 0.0;
        let mut t1 = 1.0;
        t = fraction;
        for _ in 0..16 {
            let delta = sample_curve(ax, bx, cx, t) - fraction;
            if delta.abs() < 1e-6 {
                break;
            }
            if delta > 0.0 {
                t1 = t;
            } else {
                t0 = t;
            }
            t = 0.5 * (t0 + t1);
        }
    }

    sample_curve(ay, by, cy, t).clamp(0.0, 1.0)
}
