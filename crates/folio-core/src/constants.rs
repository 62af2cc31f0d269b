// Motion tuning shared by every card. Angles in degrees, lengths in CSS px,
// durations in seconds.

// Tilt
pub const TILT_RANGE_DEG: f32 = 45.0; // full swing across the surface; half of it each side of centre
pub const POINTER_REST: [f32; 2] = [0.5, 0.5]; // surface centre

// Springs (stiffness, damping, mass)
pub const TILT_STIFFNESS: f32 = 100.0;
pub const TILT_DAMPING: f32 = 30.0;
pub const HIGHLIGHT_OPACITY_STIFFNESS: f32 = 200.0;
pub const HIGHLIGHT_OPACITY_DAMPING: f32 = 30.0;
pub const SPRING_MASS: f32 = 1.0;

// Springs settle onto their target once both are below these
pub const SPRING_REST_DELTA: f32 = 1e-3;
pub const SPRING_REST_SPEED: f32 = 1e-2;

// Integration
pub const SPRING_MAX_SUBSTEP_SEC: f32 = 1.0 / 240.0;
pub const FRAME_DT_MAX_SEC: f32 = 0.1; // long gaps (background tab) are not replayed

// Layer variant transitions
pub const HOVER_TRANSITION_SEC: f32 = 0.6;
pub const HOVER_EASE: [f32; 4] = [0.34, 1.56, 0.64, 1.0];
pub const REST_TRANSITION_SEC: f32 = 0.5;
pub const REST_EASE: [f32; 4] = [0.33, 1.53, 0.69, 0.99]; // back-out

// Card stage
pub const PERSPECTIVE_PX: f32 = 1000.0;

// Highlight gradient
pub const HIGHLIGHT_RADIUS_PX: f32 = 600.0;
pub const HIGHLIGHT_ALPHA: f32 = 0.15;
pub const HIGHLIGHT_FALLOFF_PCT: f32 = 80.0;
pub const HIGHLIGHT_LIFT_PX: f32 = 20.0; // sits in front of the core surface

// Skill grid entry
pub const SKILL_STAGGER_SEC: f32 = 0.05;
pub const SKILL_ENTER_SCALE: f32 = 0.9;

// Section heading reveal on scroll
pub const REVEAL_OFFSET_PX: f32 = 20.0; // starts this far below its resting place
pub const REVEAL_THRESHOLD: f32 = 0.3; // share of the heading that must be in view
pub const REVEAL_TRANSITION_SEC: f32 = 0.5;
