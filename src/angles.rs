pub const FULL_TURN: f64 = 360.0;
pub const QUARTER_TURN: f64 = 90.0;
pub const HALF_TURN: f64 = 180.0;

/// Matching tolerance between the sun's azimuth and a shadow-axis bearing.
pub const ANGLE_TOLERANCE_DEG: f64 = 1.0;

pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(FULL_TURN);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if a >= FULL_TURN {
        0.0
    } else {
        a
    }
}

/// Smallest separation between two bearings, in [0, 180].
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = normalize_angle(a - b);
    d.min(FULL_TURN - d)
}

pub fn shadow_heading(facing_heading: f64) -> f64 {
    normalize_angle(facing_heading + QUARTER_TURN)
}

/// Both ends of the shadow line cast by someone facing `facing_heading`.
pub fn shadow_axis(facing_heading: f64) -> (f64, f64) {
    let primary = shadow_heading(facing_heading);
    (primary, normalize_angle(primary + HALF_TURN))
}

/// Returns the axis bearing the azimuth lies within tolerance of, primary first.
pub fn match_shadow_axis(azimuth: f64, axis: (f64, f64), tolerance: f64) -> Option<f64> {
    [axis.0, axis.1]
        .into_iter()
        .find(|&bearing| angular_distance(azimuth, bearing) < tolerance)
}
