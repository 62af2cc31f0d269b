// Host-side tests for CSS output and page configuration.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod config {
    include!("../src/config.rs");
}
mod style {
    include!("../src/style.rs");
}

use folio_core::*;
use glam::Vec2;

#[test]
fn container_transform_has_perspective_and_rotation() {
    let mut card = CardMotion::default();
    card.on_pointer_move(Vec2::new(0.0, 0.0), &SurfaceBounds::new(0.0, 0.0, 400.0, 400.0))
        .unwrap();
    let mut frame = card.frame();
    frame.rotate_x = 22.5;
    frame.rotate_y = -22.5;
    let mut buf = String::from("stale");
    style::write_container_transform(&mut buf, &frame);
    assert_eq!(
        buf,
        "perspective(1000px) rotateX(22.500deg) rotateY(-22.500deg)"
    );
}

#[test]
fn layer_transform_folds_depth_into_z() {
    let pose = LayerPose {
        id: LayerId::Title,
        depth_z: 30.0,
        offset: LayerOffset::translate(0.0, 0.0, 50.0),
    };
    let mut buf = String::new();
    style::write_layer_transform(&mut buf, &pose);
    assert_eq!(
        buf,
        "translate3d(0.00px, 0.00px, 80.00px) rotate(0.000deg) scale(1.0000, 1.0000)"
    );
}

#[test]
fn layer_transform_carries_rotation_and_scale() {
    let pose = LayerPose {
        id: LayerId::Vents,
        depth_z: -160.0,
        offset: LayerOffset::translate(0.0, -90.0, 0.0).scaled(1.15, 1.0),
    };
    let mut buf = String::new();
    style::write_layer_transform(&mut buf, &pose);
    assert!(buf.starts_with("translate3d(0.00px, -90.00px, -160.00px)"));
    assert!(buf.ends_with("scale(1.1500, 1.0000)"));
}

#[test]
fn highlight_gradient_tracks_position() {
    let h = HighlightState {
        x_pct: 0.25,
        y_pct: 0.75,
        intensity: 1.0,
    };
    let mut buf = String::new();
    style::write_highlight_background(&mut buf, &h);
    assert_eq!(
        buf,
        "radial-gradient(600px circle at 25.00% 75.00%, rgba(255,255,255,0.15) 0%, transparent 80%)"
    );
}

#[test]
fn opacity_is_clamped() {
    let mut buf = String::new();
    style::write_opacity(&mut buf, 1.02);
    assert_eq!(buf, "1.0000");
    style::write_opacity(&mut buf, -0.01);
    assert_eq!(buf, "0.0000");
}

#[test]
fn tile_styles_use_stagger() {
    let e = tile_entrance(2);
    assert_eq!(
        style::tile_transition(&e, 0.3),
        "opacity 0.30s ease-out 0.10s, transform 0.30s ease-out 0.10s"
    );
    assert_eq!(style::tile_initial_transform(&e), "scale(0.90)");
}

#[test]
fn tilt_range_attribute_parsing() {
    assert_eq!(config::parse_tilt_range(Some("30")), Some(30.0));
    assert_eq!(config::parse_tilt_range(Some(" 12.5 ")), Some(12.5));
    assert_eq!(config::parse_tilt_range(Some("abc")), None);
    assert_eq!(config::parse_tilt_range(Some("-5")), None);
    assert_eq!(config::parse_tilt_range(Some("180")), None);
    assert_eq!(config::parse_tilt_range(Some("NaN")), None);
    assert_eq!(config::parse_tilt_range(None), None);
}

#[test]
fn card_config_falls_back_to_default() {
    assert_eq!(config::card_config(None), CardConfig::default());
    assert_eq!(config::card_config(Some("wild")), CardConfig::default());
    assert_eq!(config::card_config(Some("20")).tilt_range_deg, 20.0);
}

#[test]
fn heading_reveal_styles() {
    assert_eq!(style::reveal_transform(&RevealState::HIDDEN), "translateY(20px)");
    assert_eq!(style::reveal_transform(&RevealState::SHOWN), "translateY(0px)");
    assert_eq!(
        style::reveal_transition(REVEAL_TRANSITION_SEC),
        "opacity 0.50s ease-out, transform 0.50s ease-out"
    );
}

#[test]
fn reveal_headers_are_distinct_from_mount_points() {
    use constants::*;
    assert_eq!(REVEAL_HEADER_IDS.len(), 2);
    assert_ne!(REVEAL_HEADER_IDS[0], REVEAL_HEADER_IDS[1]);
    for id in REVEAL_HEADER_IDS {
        assert!(![PROJECTS_SECTION_ID, PROJECTS_GRID_ID, SKILLS_TABS_ID, SKILLS_GRID_ID].contains(&id));
    }
}

#[test]
fn highlight_is_lifted_off_the_core() {
    assert_eq!(style::highlight_lift_transform(), "translateZ(20px)");
}
