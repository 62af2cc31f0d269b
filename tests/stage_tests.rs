// Host-side tests for the mounted-card registry.

use folio_core::*;
use glam::Vec2;

fn surface() -> SurfaceBounds {
    SurfaceBounds::new(0.0, 0.0, 300.0, 200.0)
}

#[test]
fn mount_assigns_distinct_ids() {
    let mut stage = Stage::new();
    let a = stage.mount(CardConfig::default());
    let b = stage.mount(CardConfig::default());
    assert_ne!(a, b);
    assert_eq!(stage.len(), 2);
    assert!(stage.is_mounted(a) && stage.is_mounted(b));
}

#[test]
fn idle_cards_are_not_rendered() {
    let mut stage = Stage::new();
    stage.mount(CardConfig::default());
    let mut rendered = 0;
    stage.tick(1.0 / 60.0, |_, _| rendered += 1);
    assert_eq!(rendered, 0);
}

#[test]
fn only_animating_cards_are_rendered() {
    let mut stage = Stage::new();
    let a = stage.mount(CardConfig::default());
    let _b = stage.mount(CardConfig::default());
    stage.card_mut(a).unwrap().on_pointer_enter();
    let mut seen = Vec::new();
    stage.tick(1.0 / 60.0, |id, frame| {
        assert!(frame.hovered);
        seen.push(id);
    });
    assert_eq!(seen, vec![a]);
}

#[test]
fn unmounted_card_is_never_ticked_again() {
    let mut stage = Stage::new();
    let a = stage.mount(CardConfig::default());
    let b = stage.mount(CardConfig::default());
    for id in [a, b] {
        let card = stage.card_mut(id).unwrap();
        card.on_pointer_enter();
        card.on_pointer_move(Vec2::new(0.0, 0.0), &surface()).unwrap();
    }
    assert!(stage.unmount(a));
    assert!(!stage.unmount(a));
    assert!(stage.card(a).is_none());
    for _ in 0..10 {
        stage.tick(1.0 / 60.0, |id, _| assert_ne!(id, a));
    }
    assert_eq!(stage.len(), 1);
}

#[test]
fn cards_do_not_share_state() {
    let mut stage = Stage::new();
    let a = stage.mount(CardConfig::default());
    let b = stage.mount(CardConfig::default());
    stage
        .card_mut(a)
        .unwrap()
        .on_pointer_move(Vec2::new(300.0, 200.0), &surface())
        .unwrap();
    assert_eq!(stage.card(b).unwrap().tilt_target(), TiltTarget::FLAT);
    assert_ne!(stage.card(a).unwrap().tilt_target(), TiltTarget::FLAT);
}

#[test]
fn emptied_stage_reports_empty() {
    let mut stage = Stage::new();
    let a = stage.mount(CardConfig::default());
    assert!(!stage.is_empty());
    stage.unmount(a);
    assert!(stage.is_empty());
}
