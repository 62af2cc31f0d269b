use crate::constants::TILT_RANGE_DEG;
use crate::pointer::PointerSample;

/// Target orientation of a card, in degrees.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TiltTarget {
    pub rotate_x: f32,
    pub rotate_y: f32,
}

impl TiltTarget {
    pub const FLAT: TiltTarget = TiltTarget {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };
}

/// Maps pointer samples to a tilt that leans the surface away from the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TiltSolver {
    /// Degrees swept as the pointer crosses the whole surface.
    pub range_deg: f32,
}

impl Default for TiltSolver {
    fn default() -> Self {
        Self {
            range_deg: TILT_RANGE_DEG,
        }
    }
}

impl TiltSolver {
    pub fn new(range_deg: f32) -> Self {
        Self { range_deg }
    }

    /// Samples outside `[0, 1]` are passed through unclamped.
    #[inline]
    pub fn solve(&self, sample: PointerSample) -> TiltTarget {
        TiltTarget {
            rotate_x: (sample.y_pct - 0.5) * -self.range_deg,
            rotate_y: (sample.x_pct - 0.5) * self.range_deg,
        }
    }

    /// Orientation after the pointer leaves.
    #[inline]
    pub fn rest(&self) -> TiltTarget {
        TiltTarget::FLAT
    }

    /// Largest magnitude either axis reaches for in-range samples.
    #[inline]
    pub fn max_deflection(&self) -> f32 {
        self.range_deg.abs() * 0.5
    }
}
