//! Helper functions

use std::f64::consts::PI;
use crate::kinematic_traits::{Joints, Point, Pose};

/// Checks if all joint values are finite. Joints returned by the inverse kinematics
/// for an unreachable target are not.
pub fn is_valid(qs: &Joints) -> bool {
    qs.iter().all(|&q| q.is_finite())
}

/// Normalize the angle into [0, 2 pi)
pub fn normalize_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let normalized = ((angle % two_pi) + two_pi) % two_pi;
    // Tiny negative input rounds up to exactly 2 pi
    if normalized >= two_pi { 0.0 } else { normalized }
}

/// Wrap the angle into [-pi, pi)
pub fn wrap_to_pi(angle: f64) -> f64 {
    normalize_angle(angle + PI) - PI
}

/// Checks if two angles point the same direction within the tolerance,
/// treating full turns as equal.
pub fn same_angle(a: f64, b: f64, tolerance: f64) -> bool {
    wrap_to_pi(a - b).abs() <= tolerance
}

/// Euclidean distance between two points
pub fn distance(a: &Point, b: &Point) -> f64 {
    nalgebra::distance(a, b)
}

/// Allows to specify joint values in degrees (converts to radians)
pub fn as_radians(degrees: [i32; 3]) -> Joints {
    std::array::from_fn(|i| (degrees[i] as f64).to_radians())
}

/// Convert joints that are array of f64's in radians to degrees
pub fn to_degrees(angles: &Joints) -> Joints {
    angles.map(f64::to_degrees)
}

/// Print joint values, converting radians to degrees.
pub fn dump_joints(joints: &Joints) {
    if !is_valid(joints) {
        println!("Unreachable");
        return;
    }
    let mut row_str = String::new();
    for joint_idx in 0..3 {
        let computed = joints[joint_idx];
        row_str.push_str(&format!("{:5.2} ", computed.to_degrees()));
    }
    println!("[{}]", row_str.trim_end());
}

/// Print positions of the elbow, the wrist and the end effector
pub fn dump_pose(pose: &Pose) {
    println!(
        "elbow: ({:.5}, {:.5}), wrist: ({:.5}, {:.5}), end: ({:.5}, {:.5})",
        pose[0].x, pose[0].y, pose[1].x, pose[1].y, pose[2].x, pose[2].y
    );
}
