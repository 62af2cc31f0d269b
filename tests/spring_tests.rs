// Host-side tests for spring smoothing.

use folio_core::*;

const DT: f32 = 1.0 / 60.0;

fn run(s: &mut SmoothedValue, seconds: f32) {
    let frames = (seconds / DT).round() as usize;
    for _ in 0..frames {
        s.tick(DT);
    }
}

#[test]
fn tilt_spring_converges_to_held_target() {
    let mut s = SmoothedValue::new(0.0, SpringConfig::TILT);
    s.set_target(22.5);
    run(&mut s, 5.0);
    assert!((s.current() - 22.5).abs() < 0.01, "current = {}", s.current());
}

#[test]
fn opacity_spring_converges_and_settles_exactly() {
    let mut s = SmoothedValue::new(0.0, SpringConfig::OPACITY);
    s.set_target(1.0);
    run(&mut s, 3.0);
    assert!(s.is_settled());
    assert_eq!(s.current(), 1.0);
    assert_eq!(s.velocity(), 0.0);
}

#[test]
fn abrupt_target_change_does_not_snap() {
    let mut s = SmoothedValue::new(0.0, SpringConfig::TILT);
    s.set_target(-22.5);
    let before = s.current();
    s.tick(DT);
    let step = (s.current() - before).abs();
    assert!(step > 0.0);
    assert!(step < 22.5 * 0.1, "first step {} is a snap", step);
}

#[test]
fn retarget_keeps_velocity() {
    let mut s = SmoothedValue::new(0.0, SpringConfig::TILT);
    s.set_target(22.5);
    run(&mut s, 0.1);
    let v = s.velocity();
    assert!(v > 0.0);
    s.set_target(-22.5);
    assert_eq!(s.velocity(), v);
    assert_eq!(s.target(), -22.5);
}

#[test]
fn per_tick_change_is_bounded_by_velocity_and_acceleration() {
    let cfg = SpringConfig::TILT;
    let mut s = SmoothedValue::new(0.0, cfg);
    s.set_target(22.5);
    run(&mut s, 0.15);
    // Reverse direction mid-flight.
    s.set_target(-22.5);
    for _ in 0..30 {
        let x0 = s.current();
        let v0 = s.velocity().abs();
        let a0 = (cfg.stiffness * (x0 - s.target()).abs() + cfg.damping * v0) / cfg.mass;
        s.tick(DT);
        let bound = 2.0 * (v0 + a0 * DT) * DT + 1e-3;
        assert!(
            (s.current() - x0).abs() <= bound,
            "step {} exceeds bound {}",
            (s.current() - x0).abs(),
            bound
        );
    }
}

#[test]
fn settled_spring_stays_put() {
    let mut s = SmoothedValue::new(0.5, SpringConfig::TILT);
    assert!(s.tick(DT));
    assert_eq!(s.current(), 0.5);
}

#[test]
fn long_frame_gaps_are_capped() {
    let mut a = SmoothedValue::new(0.0, SpringConfig::TILT);
    let mut b = a;
    a.set_target(10.0);
    b.set_target(10.0);
    a.tick(FRAME_DT_MAX_SEC);
    b.tick(30.0);
    assert_eq!(a.current(), b.current());
}
