//! Triangle solver, the geometric primitive behind the inverse kinematics.
//!
//! Given the three side lengths of a triangle, finds the angle enclosed by two of
//! them with the law of cosines. Impossible triangles do not fail: they return
//! `f64::NAN` so that the result can be fed into further arithmetic and checked once.

/// Checks if sides a, b and c can form a triangle. Degenerate triangles (all three
/// points on one line, one side equal to the sum of the other two) are accepted.
pub fn is_triangle(a: f64, b: f64, c: f64) -> bool {
    a >= 0.0 && b >= 0.0 && c >= 0.0 && a + b >= c && a + c >= b && b + c >= a
}

/// Returns the angle (radians) between sides a and b, that is the angle opposite to
/// side c. Returns `f64::NAN` if the sides do not form a triangle or if a or b is zero
/// (the enclosed angle is then undefined).
///
/// For degenerate triangles the cosine may be computed slightly outside [-1, 1] due
/// rounding, so it is clamped before taking the arc cosine. Degenerate triangles give
/// 0 (c = |a - b|) or pi (c = a + b).
pub fn angle_between(a: f64, b: f64, c: f64) -> f64 {
    if !is_triangle(a, b, c) {
        return f64::NAN;
    }
    // 0 / 0 stays NaN and is not clamped away
    let cosine = (a * a + b * b - c * c) / (2.0 * a * b);
    if cosine.is_nan() {
        return f64::NAN;
    }
    cosine.clamp(-1.0, 1.0).acos()
}
