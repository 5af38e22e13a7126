use super::*;

fn logo_ramp() -> LinearGradient {
    LinearGradient::new(Point::new(400.0, 400.0), Point::new(3600.0, 3600.0), 0.9, 0.4)
}

#[test]
fn endpoints_hit_bounds_exactly() {
    let g = logo_ramp();
    assert_eq!(g.alpha_at(g.start), 0.9);
    assert_eq!(g.alpha_at(g.end), 0.4);
}

#[test]
fn output_stays_within_bounds_everywhere() {
    for g in [
        logo_ramp(),
        LinearGradient::new(Point::new(10.0, -5.0), Point::new(-30.0, 12.0), 0.1, 0.7),
    ] {
        let lo = g.a0.min(g.a1) - 1e-12;
        let hi = g.a0.max(g.a1) + 1e-12;
        for yi in -10..=50 {
            for xi in -10..=50 {
                let p = Point::new(f64::from(xi) * 97.5 + 0.5, f64::from(yi) * 83.25 + 0.5);
                let a = g.alpha_at(p);
                assert!(a >= lo && a <= hi, "alpha {a} at {p:?} escapes [{lo}, {hi}]");
            }
        }
    }
}

#[test]
fn midpoint_is_average_and_ramp_is_flat_past_ends() {
    let g = logo_ramp();
    let mid = g.alpha_at(Point::new(2000.0, 2000.0));
    assert!((mid - 0.65).abs() < 1e-12);
    assert_eq!(g.alpha_at(Point::new(0.0, 0.0)), 0.9);
    assert_eq!(g.alpha_at(Point::new(4000.0, 4000.0)), 0.4);
    // Points perpendicular to the axis share the same value.
    let a = g.alpha_at(Point::new(1000.0, 3000.0));
    assert!((a - mid).abs() < 1e-12);
}

#[test]
fn degenerate_axis_yields_start_alpha() {
    let p = Point::new(5.0, 5.0);
    let g = LinearGradient::new(p, p, 0.3, 0.8);
    assert_eq!(g.alpha_at(Point::new(-100.0, 42.0)), 0.3);
}

#[test]
fn closures_act_as_modulators() {
    let left_half = |p: Point| if p.x < 50.0 { 1.0 } else { 0.0 };
    assert_eq!(left_half.alpha_at(Point::new(10.5, 0.5)), 1.0);
    assert_eq!(left_half.alpha_at(Point::new(60.5, 0.5)), 0.0);
}
