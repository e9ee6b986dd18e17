//! Joint angle calculation using atan2
//!
//! Angle at vertex `b` between the b→a and b→c directions, folded into
//! [0, 180] degrees.

/// Calculate joint angle in degrees
///
/// Returns:
/// - 180° = limb fully straight (a, b, c collinear)
/// - 90° = right-angle bend
/// - 0° = fully folded
pub fn calculate_joint_angle(
    a: (f32, f32),
    b: (f32, f32),
    c: (f32, f32),
) -> f32 {
    let radians = (c.1 - b.1).atan2(c.0 - b.0) - (a.1 - b.1).atan2(a.0 - b.0);
    let angle = radians.to_degrees().abs();

    if angle > 180.0 {
        360.0 - angle
    } else {
        angle
    }
}
