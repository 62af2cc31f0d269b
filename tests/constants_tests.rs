// Host-side tests for tuning constants and their relationships.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;
use folio_core::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn motion_constants_are_positive() {
    assert!(TILT_RANGE_DEG > 0.0);
    assert!(TILT_STIFFNESS > 0.0 && TILT_DAMPING > 0.0);
    assert!(HIGHLIGHT_OPACITY_STIFFNESS > 0.0 && HIGHLIGHT_OPACITY_DAMPING > 0.0);
    assert!(SPRING_MASS > 0.0);
    assert!(HOVER_TRANSITION_SEC > 0.0 && REST_TRANSITION_SEC > 0.0);
    assert!(PERSPECTIVE_PX > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn constants_have_logical_relationships() {
    // Opacity responds faster than tilt.
    assert!(HIGHLIGHT_OPACITY_STIFFNESS > TILT_STIFFNESS);

    // Sub-steps are shorter than a 60 Hz frame; long gaps are capped above one.
    assert!(SPRING_MAX_SUBSTEP_SEC < 1.0 / 60.0);
    assert!(FRAME_DT_MAX_SEC > 1.0 / 60.0);

    // Rest point is the surface centre.
    assert_eq!(POINTER_REST, [0.5, 0.5]);

    // Highlight alpha is a fraction; falloff is a percentage.
    assert!(HIGHLIGHT_ALPHA > 0.0 && HIGHLIGHT_ALPHA <= 1.0);
    assert!(HIGHLIGHT_FALLOFF_PCT > 0.0 && HIGHLIGHT_FALLOFF_PCT <= 100.0);

    // Default tilt range is accepted by the page override bounds.
    assert!(TILT_RANGE_DEG >= TILT_RANGE_MIN_DEG && TILT_RANGE_DEG <= TILT_RANGE_MAX_DEG);
}

#[test]
fn easing_curves_overshoot() {
    // Both variant curves pass above 1 before landing.
    for curve in [CubicBezier::from_array(HOVER_EASE), CubicBezier::from_array(REST_EASE)] {
        let peak = (1..100)
            .map(|i| curve.ease(i as f32 / 100.0))
            .fold(f32::MIN, f32::max);
        assert!(peak > 1.0, "curve {:?} peaks at {}", curve, peak);
        assert_eq!(curve.ease(1.0), 1.0);
    }
}
