// crates/rotor-core/src/fixed/math.rs

/// Signed shortest step from `from` to `to` on a circle of `modulus` slots.
/// Result is in (-modulus/2, modulus/2]; an exact half turn counts as positive.
#[inline]
pub fn clock_diff(to: i32, from: i32, modulus: i32) -> i32 {
    let d = (to - from).rem_euclid(modulus);
    if d > modulus / 2 {
        d - modulus
    } else {
        d
    }
}

/// Signed shortest difference `to - from` in degrees, in (-180, 180].
#[inline]
pub fn clock_diff_degrees(to: f64, from: f64) -> f64 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 {
        d - 360.0
    } else {
        d
    }
}

/// Wrap a fixed-point position into [0, range).
#[inline]
pub fn wrap_units(units: i32, range: i32) -> i32 {
    units.rem_euclid(range)
}
