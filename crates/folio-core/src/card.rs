//! Per-card motion state: hover state machine, spring channels and the
//! composed frame handed to the renderer.

use crate::constants::{POINTER_REST, TILT_RANGE_DEG};
use crate::layers::{LayerId, LayerOffset, VariantBlend, LAYERS, LAYER_COUNT};
use crate::pointer::{LayoutError, PointerTracker, SurfaceBounds};
use crate::spring::{SmoothedValue, SpringConfig};
use crate::tilt::{TiltSolver, TiltTarget};
use glam::Vec2;

/// Tunables for one card. `Default` uses the values in `constants`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardConfig {
    pub tilt_range_deg: f32,
    pub tilt_spring: SpringConfig,
    pub highlight_spring: SpringConfig,
    pub opacity_spring: SpringConfig,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            tilt_range_deg: TILT_RANGE_DEG,
            tilt_spring: SpringConfig::TILT,
            highlight_spring: SpringConfig::TILT,
            opacity_spring: SpringConfig::OPACITY,
        }
    }
}

impl CardConfig {
    pub fn with_tilt_range(mut self, range_deg: f32) -> Self {
        self.tilt_range_deg = range_deg;
        self
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum HoverState {
    #[default]
    Rest,
    Hovered,
}

/// Light spot following the cursor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HighlightState {
    pub x_pct: f32,
    pub y_pct: f32,
    pub intensity: f32,
}

impl HighlightState {
    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x_pct, self.y_pct)
    }
}

/// Resolved placement of one layer for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerPose {
    pub id: LayerId,
    pub depth_z: f32,
    pub offset: LayerOffset,
}

impl LayerPose {
    /// Depth plus the variant's own z translation.
    #[inline]
    pub fn z(&self) -> f32 {
        self.depth_z + self.offset.translate.z
    }
}

/// Everything the renderer needs to draw a card for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardFrame {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub hovered: bool,
    pub layers: [LayerPose; LAYER_COUNT],
    pub highlight: HighlightState,
}

impl CardFrame {
    pub fn layer(&self, id: LayerId) -> &LayerPose {
        &self.layers[id as usize]
    }
}

/// Motion state owned by a single mounted card.
#[derive(Clone, Debug)]
pub struct CardMotion {
    tracker: PointerTracker,
    solver: TiltSolver,
    rotate_x: SmoothedValue,
    rotate_y: SmoothedValue,
    highlight_x: SmoothedValue,
    highlight_y: SmoothedValue,
    intensity: SmoothedValue,
    state: HoverState,
    visible: bool,
    blend: VariantBlend,
}

impl Default for CardMotion {
    fn default() -> Self {
        Self::new(CardConfig::default())
    }
}

impl CardMotion {
    pub fn new(config: CardConfig) -> Self {
        Self {
            tracker: PointerTracker::new(),
            solver: TiltSolver::new(config.tilt_range_deg),
            rotate_x: SmoothedValue::new(0.0, config.tilt_spring),
            rotate_y: SmoothedValue::new(0.0, config.tilt_spring),
            highlight_x: SmoothedValue::new(POINTER_REST[0], config.highlight_spring),
            highlight_y: SmoothedValue::new(POINTER_REST[1], config.highlight_spring),
            intensity: SmoothedValue::new(0.0, config.opacity_spring),
            state: HoverState::Rest,
            visible: false,
            blend: VariantBlend::default(),
        }
    }

    #[inline]
    pub fn state(&self) -> HoverState {
        self.state
    }

    #[inline]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn tilt_target(&self) -> TiltTarget {
        TiltTarget {
            rotate_x: self.rotate_x.target(),
            rotate_y: self.rotate_y.target(),
        }
    }

    pub fn highlight_target(&self) -> HighlightState {
        HighlightState {
            x_pct: self.highlight_x.target(),
            y_pct: self.highlight_y.target(),
            intensity: self.intensity.target(),
        }
    }

    /// Current rest→hover blend factor of the layer variants.
    #[inline]
    pub fn variant_mix(&self) -> f32 {
        self.blend.mix()
    }

    fn set_state(&mut self, state: HoverState) {
        if self.state != state {
            self.state = state;
            self.blend.retarget(state == HoverState::Hovered);
        }
    }

    pub fn on_pointer_enter(&mut self) {
        self.set_state(HoverState::Hovered);
        self.intensity.set_target(1.0);
    }

    /// Updates tilt and highlight targets from a pointer move.
    ///
    /// An unmeasurable surface leaves every target untouched.
    pub fn on_pointer_move(
        &mut self,
        client: Vec2,
        bounds: &SurfaceBounds,
    ) -> Result<(), LayoutError> {
        let sample = self.tracker.on_move(client, bounds)?;
        let tilt = self.solver.solve(sample);
        self.rotate_x.set_target(tilt.rotate_x);
        self.rotate_y.set_target(tilt.rotate_y);
        self.highlight_x.set_target(sample.x_pct);
        self.highlight_y.set_target(sample.y_pct);
        self.intensity.set_target(1.0);
        Ok(())
    }

    pub fn on_pointer_leave(&mut self) {
        let sample = self.tracker.on_leave();
        let tilt = self.solver.rest();
        self.rotate_x.set_target(tilt.rotate_x);
        self.rotate_y.set_target(tilt.rotate_y);
        self.highlight_x.set_target(sample.x_pct);
        self.highlight_y.set_target(sample.y_pct);
        self.intensity.set_target(0.0);
        self.set_state(HoverState::Rest);
    }

    /// Any viewport visibility change puts the layers back to rest, so a card
    /// scrolled away mid-hover comes back clean.
    pub fn on_visibility_change(&mut self, visible: bool) {
        self.visible = visible;
        self.set_state(HoverState::Rest);
    }

    /// True while any channel still has motion left to play.
    pub fn is_animating(&self) -> bool {
        !(self.rotate_x.is_settled()
            && self.rotate_y.is_settled()
            && self.highlight_x.is_settled()
            && self.highlight_y.is_settled()
            && self.intensity.is_settled()
            && self.blend.is_finished())
    }

    /// Advances every channel by `dt_sec` and returns the composed frame.
    pub fn tick(&mut self, dt_sec: f32) -> CardFrame {
        self.rotate_x.tick(dt_sec);
        self.rotate_y.tick(dt_sec);
        self.highlight_x.tick(dt_sec);
        self.highlight_y.tick(dt_sec);
        self.intensity.tick(dt_sec);
        self.blend.tick(dt_sec);
        self.frame()
    }

    /// Composes the current values without advancing time.
    pub fn frame(&self) -> CardFrame {
        let mix = self.blend.mix();
        let layers = LAYERS.map(|spec| LayerPose {
            id: spec.id,
            depth_z: spec.depth_z,
            offset: spec.offset_at(mix),
        });
        CardFrame {
            rotate_x: self.rotate_x.current(),
            rotate_y: self.rotate_y.current(),
            hovered: self.state == HoverState::Hovered,
            layers,
            highlight: HighlightState {
                x_pct: self.highlight_x.current(),
                y_pct: self.highlight_y.current(),
                intensity: self.intensity.current(),
            },
        }
    }
}
