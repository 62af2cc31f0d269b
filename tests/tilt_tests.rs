// Host-side tests for the pointer → tilt mapping.

use folio_core::*;

#[test]
fn in_range_samples_stay_within_half_range() {
    let solver = TiltSolver::default();
    let limit = solver.max_deflection() + 1e-4;
    assert!((solver.max_deflection() - 22.5).abs() < 1e-6);
    for xi in 0..=20 {
        for yi in 0..=20 {
            let t = solver.solve(PointerSample::new(xi as f32 / 20.0, yi as f32 / 20.0));
            assert!(t.rotate_x.abs() <= limit, "rotate_x {} out of range", t.rotate_x);
            assert!(t.rotate_y.abs() <= limit, "rotate_y {} out of range", t.rotate_y);
        }
    }
}

#[test]
fn centre_is_flat() {
    let t = TiltSolver::default().solve(PointerSample::REST);
    assert_eq!(t, TiltTarget::FLAT);
}

#[test]
fn top_left_corner_leans_away() {
    let t = TiltSolver::default().solve(PointerSample::new(0.0, 0.0));
    assert!((t.rotate_x - 22.5).abs() < 1e-6);
    assert!((t.rotate_y + 22.5).abs() < 1e-6);
}

#[test]
fn bottom_right_corner_leans_away() {
    let t = TiltSolver::default().solve(PointerSample::new(1.0, 1.0));
    assert!((t.rotate_x + 22.5).abs() < 1e-6);
    assert!((t.rotate_y - 22.5).abs() < 1e-6);
}

#[test]
fn solve_is_idempotent() {
    let solver = TiltSolver::default();
    let p = PointerSample::new(0.3, 0.8);
    assert_eq!(solver.solve(p), solver.solve(p));
}

#[test]
fn out_of_range_samples_tilt_past_the_limit() {
    // Unclamped on purpose: a sample past the edge tilts slightly further.
    let t = TiltSolver::default().solve(PointerSample::new(1.1, -0.1));
    assert!(t.rotate_y > 22.5);
    assert!(t.rotate_x > 22.5);
}

#[test]
fn custom_range_scales_linearly() {
    let t = TiltSolver::new(20.0).solve(PointerSample::new(1.0, 0.5));
    assert!((t.rotate_y - 10.0).abs() < 1e-6);
    assert_eq!(t.rotate_x, 0.0);
    assert_eq!(TiltSolver::new(20.0).rest(), TiltTarget::FLAT);
}
