use shadow_flip::angles::*;

macro_rules! assert_approx {
    ($left:expr, $right:expr, $tol:expr) => {
        let (l, r) = ($left as f64, $right as f64);
        assert!(
            (l - r).abs() <= $tol,
            "assert_approx failed: left={}, right={}, diff={}, tol={}",
            l, r, (l - r).abs(), $tol
        );
    };
}

// ── NormalizeAngle ──

#[test]
fn test_normalize_angle_basic() {
    let cases: &[(f64, f64)] = &[
        (0.0, 0.0),
        (45.0, 45.0),
        (360.0, 0.0),
        (361.0, 1.0),
        (-1.0, 359.0),
        (-90.0, 270.0),
        (405.0, 45.0),
        (-180.0, 180.0),
        (720.0, 0.0),
        (-450.0, 270.0),
    ];
    for &(input, expected) in cases {
        assert_approx!(normalize_angle(input), expected, 1e-9);
    }
}

#[test]
fn test_normalize_angle_stays_below_full_turn() {
    for input in [-1e-15, -1e-12, 359.999_999_999, 1e9 + 0.5] {
        let a = normalize_angle(input);
        assert!((0.0..360.0).contains(&a), "input={} normalized={}", input, a);
    }
}

// ── AngularDistance ──

#[test]
fn test_angular_distance_wraps() {
    assert_approx!(angular_distance(359.0, 1.0), 2.0, 1e-9);
    assert_approx!(angular_distance(1.0, 359.0), 2.0, 1e-9);
    assert_approx!(angular_distance(0.5, 359.0), 1.5, 1e-9);
    assert_approx!(angular_distance(10.0, 190.0), 180.0, 1e-9);
    assert_approx!(angular_distance(90.0, 90.0), 0.0, 1e-9);
}

#[test]
fn test_angular_distance_symmetric_and_bounded() {
    for a in (0..720).step_by(37) {
        for b in (0..720).step_by(53) {
            let (a, b) = (a as f64 - 200.0, b as f64 - 300.0);
            let d = angular_distance(a, b);
            assert!((0.0..=180.0).contains(&d), "a={} b={} d={}", a, b, d);
            assert_approx!(d, angular_distance(b, a), 1e-9);
        }
    }
}

// ── Shadow axis ──

#[test]
fn test_shadow_heading_is_quarter_turn_clockwise() {
    assert_approx!(shadow_heading(0.0), 90.0, 1e-9);
    assert_approx!(shadow_heading(90.0), 180.0, 1e-9);
    assert_approx!(shadow_heading(270.0), 0.0, 1e-9);
    assert_approx!(shadow_heading(300.0), 30.0, 1e-9);
}

#[test]
fn test_shadow_heading_accepts_out_of_range_input() {
    assert_approx!(shadow_heading(-90.0), 0.0, 1e-9);
    assert_approx!(shadow_heading(450.0), 180.0, 1e-9);
    assert_approx!(shadow_heading(-450.0), 0.0, 1e-9);
}

#[test]
fn test_shadow_axis_ends_are_opposite() {
    for h in (0..360).step_by(15) {
        let (a, b) = shadow_axis(h as f64);
        assert_approx!(angular_distance(a, b), 180.0, 1e-9);
        assert!((0.0..360.0).contains(&b), "heading={} opposite={}", h, b);
    }
    let (a, b) = shadow_axis(90.0);
    assert_approx!(a, 180.0, 1e-9);
    assert_approx!(b, 0.0, 1e-9);
}

// ── Matching ──

#[test]
fn test_match_primary_bearing() {
    let axis = shadow_axis(90.0);
    assert_eq!(match_shadow_axis(180.4, axis, ANGLE_TOLERANCE_DEG), Some(180.0));
    assert_eq!(match_shadow_axis(179.1, axis, ANGLE_TOLERANCE_DEG), Some(180.0));
}

#[test]
fn test_match_opposite_bearing() {
    let axis = shadow_axis(0.0);
    assert_eq!(match_shadow_axis(270.5, axis, ANGLE_TOLERANCE_DEG), Some(270.0));
}

#[test]
fn test_match_across_north() {
    // facing 269.5 puts the shadow on 359.5 / 179.5
    let axis = shadow_axis(269.5);
    assert_approx!(axis.0, 359.5, 1e-9);
    assert_eq!(match_shadow_axis(0.3, axis, ANGLE_TOLERANCE_DEG), Some(axis.0));
    assert_eq!(match_shadow_axis(358.6, axis, ANGLE_TOLERANCE_DEG), Some(axis.0));
    assert_eq!(match_shadow_axis(1.5, axis, ANGLE_TOLERANCE_DEG), None);
}

#[test]
fn test_tolerance_upper_bound_is_exclusive() {
    let axis = (100.0, 280.0);
    assert_eq!(match_shadow_axis(101.0, axis, 1.0), None);
    assert_eq!(match_shadow_axis(99.0, axis, 1.0), None);
    assert_eq!(match_shadow_axis(100.999, axis, 1.0), Some(100.0));
}

#[test]
fn test_no_match_far_from_axis() {
    let axis = shadow_axis(90.0);
    for az in [45.0, 90.0, 135.0, 225.0, 270.0, 315.0] {
        assert_eq!(match_shadow_axis(az, axis, ANGLE_TOLERANCE_DEG), None, "az={}", az);
    }
}
