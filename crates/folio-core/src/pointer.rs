//! Pointer sampling relative to a card surface.

use crate::constants::POINTER_REST;
use glam::Vec2;
use thiserror::Error;

/// Layout rectangle of a card surface in client (viewport) coordinates.
///
/// Always measured fresh from the element on the event that needs it; layout
/// can change between frames, so a stored copy is never reused.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SurfaceBounds {
    pub width: f32,
    pub height: f32,
    pub origin_x: f32,
    pub origin_y: f32,
}

impl SurfaceBounds {
    pub fn new(origin_x: f32, origin_y: f32, width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            origin_x,
            origin_y,
        }
    }

    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.origin_x, self.origin_y)
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// True when the surface has a usable, non-degenerate size.
    #[inline]
    pub fn is_measurable(&self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum LayoutError {
    #[error("surface not laid out ({width}x{height})")]
    Unavailable { width: f32, height: f32 },
}

/// Pointer position as a fraction of the surface size.
///
/// Inside the surface both components lie in `[0, 1]`. Values are not
/// clamped, so fast motion can briefly report slightly outside that range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerSample {
    pub x_pct: f32,
    pub y_pct: f32,
}

impl PointerSample {
    pub const REST: PointerSample = PointerSample {
        x_pct: POINTER_REST[0],
        y_pct: POINTER_REST[1],
    };

    pub fn new(x_pct: f32, y_pct: f32) -> Self {
        Self { x_pct, y_pct }
    }

    #[inline]
    pub fn as_vec2(&self) -> Vec2 {
        Vec2::new(self.x_pct, self.y_pct)
    }
}

impl Default for PointerSample {
    fn default() -> Self {
        Self::REST
    }
}

/// Normalizes a client-space pointer position against `bounds`.
#[inline]
pub fn normalize(client: Vec2, bounds: &SurfaceBounds) -> Result<PointerSample, LayoutError> {
    if !bounds.is_measurable() {
        return Err(LayoutError::Unavailable {
            width: bounds.width,
            height: bounds.height,
        });
    }
    let local = (client - bounds.origin()) / bounds.size();
    Ok(PointerSample::new(local.x, local.y))
}

/// Holds the latest pointer sample for one card.
#[derive(Clone, Copy, Debug, Default)]
pub struct PointerTracker {
    latest: PointerSample,
}

impl PointerTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a pointer move. On an unmeasurable surface the previous sample
    /// is kept and the error is returned for the caller to report.
    pub fn on_move(
        &mut self,
        client: Vec2,
        bounds: &SurfaceBounds,
    ) -> Result<PointerSample, LayoutError> {
        let sample = normalize(client, bounds)?;
        self.latest = sample;
        Ok(sample)
    }

    /// Pointer left the surface: snap back to the centre regardless of history.
    pub fn on_leave(&mut self) -> PointerSample {
        self.latest = PointerSample::REST;
        self.latest
    }

    #[inline]
    pub fn latest(&self) -> PointerSample {
        self.latest
    }
}
