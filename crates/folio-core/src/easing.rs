//! Time-based easing for discrete variant transitions.

use crate::constants::{HOVER_EASE, HOVER_TRANSITION_SEC, REST_EASE, REST_TRANSITION_SEC};

/// CSS-style cubic Bézier timing curve through (0,0), (x1,y1), (x2,y2), (1,1).
///
/// `y` control values above 1 give the overshoot used by the hover and
/// back-out transitions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubicBezier {
    pub x1: f32,
    pub y1: f32,
    pub x2: f32,
    pub y2: f32,
}

const NEWTON_ITERATIONS: usize = 8;
const NEWTON_MIN_SLOPE: f32 = 1e-3;
const SUBDIVISION_PRECISION: f32 = 1e-6;
const SUBDIVISION_MAX_ITERATIONS: usize = 24;

impl CubicBezier {
    pub const fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub const fn from_array(p: [f32; 4]) -> Self {
        Self::new(p[0], p[1], p[2], p[3])
    }

    #[inline]
    fn coord(u: f32, p1: f32, p2: f32) -> f32 {
        // Bernstein form with p0 = 0, p3 = 1
        let a = 1.0 - 3.0 * p2 + 3.0 * p1;
        let b = 3.0 * p2 - 6.0 * p1;
        let c = 3.0 * p1;
        ((a * u + b) * u + c) * u
    }

    #[inline]
    fn slope(u: f32, p1: f32, p2: f32) -> f32 {
        let a = 1.0 - 3.0 * p2 + 3.0 * p1;
        let b = 3.0 * p2 - 6.0 * p1;
        let c = 3.0 * p1;
        (3.0 * a * u + 2.0 * b) * u + c
    }

    /// Curve parameter whose x equals `x`.
    fn solve_u(&self, x: f32) -> f32 {
        let mut u = x;
        for _ in 0..NEWTON_ITERATIONS {
            let s = Self::slope(u, self.x1, self.x2);
            if s.abs() < NEWTON_MIN_SLOPE {
                break;
            }
            let err = Self::coord(u, self.x1, self.x2) - x;
            if err.abs() < SUBDIVISION_PRECISION {
                return u;
            }
            u -= err / s;
        }
        // Newton stalled or diverged; bisect on [0, 1]
        let (mut lo, mut hi) = (0.0_f32, 1.0_f32);
        u = x;
        for _ in 0..SUBDIVISION_MAX_ITERATIONS {
            let err = Self::coord(u, self.x1, self.x2) - x;
            if err.abs() < SUBDIVISION_PRECISION {
                break;
            }
            if err > 0.0 {
                hi = u;
            } else {
                lo = u;
            }
            u = 0.5 * (lo + hi);
        }
        u
    }

    /// Eased progress for linear progress `t`; `t` is clamped to `[0, 1]`.
    pub fn ease(&self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if t == 0.0 || t == 1.0 {
            return t;
        }
        if self.x1 == self.y1 && self.x2 == self.y2 {
            return t;
        }
        Self::coord(self.solve_u(t), self.y1, self.y2)
    }
}

/// Duration plus curve of one variant transition.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub duration_sec: f32,
    pub curve: CubicBezier,
}

impl Transition {
    /// Into the hover variant.
    pub const HOVER: Transition = Transition {
        duration_sec: HOVER_TRANSITION_SEC,
        curve: CubicBezier::from_array(HOVER_EASE),
    };

    /// Back to the rest variant.
    pub const REST: Transition = Transition {
        duration_sec: REST_TRANSITION_SEC,
        curve: CubicBezier::from_array(REST_EASE),
    };

    /// Eased progress after `elapsed_sec`.
    #[inline]
    pub fn progress(&self, elapsed_sec: f32) -> f32 {
        if self.duration_sec <= 0.0 {
            return 1.0;
        }
        self.curve.ease(elapsed_sec / self.duration_sec)
    }
}
