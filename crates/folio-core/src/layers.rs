//! Static layer table of the exploded card and the rest/hover variant blend.

use crate::easing::Transition;
use glam::Vec3;

/// Visual layers of a project card, back to front.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LayerId {
    GroundShadow,
    Base,
    Vents,
    Grid,
    LeftPlate,
    RightPlate,
    Header,
    Core,
    Footer,
    Title,
    Description,
}

impl LayerId {
    /// Stable class-name fragment for the element carrying this layer.
    pub fn name(&self) -> &'static str {
        match self {
            LayerId::GroundShadow => "ground-shadow",
            LayerId::Base => "base",
            LayerId::Vents => "vents",
            LayerId::Grid => "grid",
            LayerId::LeftPlate => "left-plate",
            LayerId::RightPlate => "right-plate",
            LayerId::Header => "header",
            LayerId::Core => "core",
            LayerId::Footer => "footer",
            LayerId::Title => "title",
            LayerId::Description => "description",
        }
    }
}

/// Offset applied on top of a layer's depth.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerOffset {
    pub translate: Vec3,
    pub rotate_deg: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl LayerOffset {
    pub const IDENTITY: LayerOffset = LayerOffset {
        translate: Vec3::ZERO,
        rotate_deg: 0.0,
        scale_x: 1.0,
        scale_y: 1.0,
    };

    pub const fn translate(x: f32, y: f32, z: f32) -> Self {
        Self {
            translate: Vec3::new(x, y, z),
            ..Self::IDENTITY
        }
    }

    pub const fn rotated(self, rotate_deg: f32) -> Self {
        Self { rotate_deg, ..self }
    }

    pub const fn scaled(self, scale_x: f32, scale_y: f32) -> Self {
        Self {
            scale_x,
            scale_y,
            ..self
        }
    }

    /// Linear blend; `t` outside `[0, 1]` extrapolates (eased overshoot).
    #[inline]
    pub fn lerp(&self, other: &LayerOffset, t: f32) -> LayerOffset {
        LayerOffset {
            translate: self.translate.lerp(other.translate, t),
            rotate_deg: self.rotate_deg + (other.rotate_deg - self.rotate_deg) * t,
            scale_x: self.scale_x + (other.scale_x - self.scale_x) * t,
            scale_y: self.scale_y + (other.scale_y - self.scale_y) * t,
        }
    }
}

impl Default for LayerOffset {
    fn default() -> Self {
        Self::IDENTITY
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayerSpec {
    pub id: LayerId,
    pub depth_z: f32,
    pub rest: LayerOffset,
    pub hover: LayerOffset,
}

impl LayerSpec {
    /// Layers whose rest and hover variants coincide never move.
    pub fn is_static(&self) -> bool {
        self.rest == self.hover
    }

    /// Offset for a rest→hover blend factor.
    #[inline]
    pub fn offset_at(&self, mix: f32) -> LayerOffset {
        self.rest.lerp(&self.hover, mix)
    }
}

pub const LAYER_COUNT: usize = 11;

const REST: LayerOffset = LayerOffset::IDENTITY;

/// Shared by every card; never mutated.
pub static LAYERS: [LayerSpec; LAYER_COUNT] = [
    LayerSpec {
        id: LayerId::GroundShadow,
        depth_z: -300.0,
        rest: REST,
        hover: REST,
    },
    LayerSpec {
        id: LayerId::Base,
        depth_z: -200.0,
        rest: REST,
        hover: LayerOffset::translate(40.0, 100.0, 0.0).rotated(2.0),
    },
    LayerSpec {
        id: LayerId::Vents,
        depth_z: -160.0,
        rest: REST,
        hover: LayerOffset::translate(0.0, -90.0, 0.0).scaled(1.15, 1.0),
    },
    LayerSpec {
        id: LayerId::Grid,
        depth_z: -120.0,
        rest: REST,
        hover: LayerOffset::IDENTITY.rotated(-3.0).scaled(1.35, 1.35),
    },
    LayerSpec {
        id: LayerId::LeftPlate,
        depth_z: -80.0,
        rest: REST,
        hover: LayerOffset::translate(-130.0, 40.0, 0.0).rotated(-2.0),
    },
    LayerSpec {
        id: LayerId::RightPlate,
        depth_z: -40.0,
        rest: REST,
        hover: LayerOffset::translate(130.0, -40.0, 0.0).rotated(2.0),
    },
    LayerSpec {
        id: LayerId::Header,
        depth_z: 0.0,
        rest: REST,
        hover: LayerOffset::translate(0.0, 0.0, 20.0),
    },
    LayerSpec {
        id: LayerId::Core,
        depth_z: 0.0,
        rest: REST,
        hover: LayerOffset::translate(0.0, 0.0, 20.0),
    },
    LayerSpec {
        id: LayerId::Footer,
        depth_z: 0.0,
        rest: REST,
        hover: LayerOffset::translate(0.0, 0.0, 20.0),
    },
    LayerSpec {
        id: LayerId::Title,
        depth_z: 30.0,
        rest: REST,
        hover: LayerOffset::translate(0.0, 0.0, 50.0),
    },
    LayerSpec {
        id: LayerId::Description,
        depth_z: 15.0,
        rest: REST,
        hover: LayerOffset::translate(0.0, 0.0, 45.0),
    },
];

/// Looks up the spec for `id`.
pub fn layer(id: LayerId) -> &'static LayerSpec {
    // The table is ordered like the enum.
    &LAYERS[id as usize]
}

/// Eased blend between the rest (0) and hover (1) variants.
///
/// All layers switch together on one trigger with one timing, so a single
/// blend factor drives every layer's offset. Retargeting mid-flight starts
/// the new transition from wherever the blend currently is.
#[derive(Clone, Copy, Debug)]
pub struct VariantBlend {
    from: f32,
    to: f32,
    elapsed_sec: f32,
    transition: Transition,
}

impl Default for VariantBlend {
    fn default() -> Self {
        Self {
            from: 0.0,
            to: 0.0,
            elapsed_sec: Transition::REST.duration_sec,
            transition: Transition::REST,
        }
    }
}

impl VariantBlend {
    /// Current blend factor; may overshoot 1 or undershoot 0 mid-transition.
    #[inline]
    pub fn mix(&self) -> f32 {
        self.from + (self.to - self.from) * self.transition.progress(self.elapsed_sec)
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.elapsed_sec >= self.transition.duration_sec
    }

    /// Starts a transition toward the hover (`true`) or rest variant.
    pub fn retarget(&mut self, hovered: bool) {
        let to = if hovered { 1.0 } else { 0.0 };
        if to == self.to {
            return;
        }
        self.from = self.mix();
        self.to = to;
        self.elapsed_sec = 0.0;
        self.transition = if hovered {
            Transition::HOVER
        } else {
            Transition::REST
        };
    }

    pub fn tick(&mut self, dt_sec: f32) {
        if dt_sec.is_finite() && dt_sec > 0.0 && !self.is_finished() {
            self.elapsed_sec = (self.elapsed_sec + dt_sec).min(self.transition.duration_sec);
        }
    }
}
