use crate::kinematic_traits::{Joints, Kinematics, Point, Pose};
use crate::parameters::planar_arm::LinkLengths;
use crate::utils::{distance, dump_joints, dump_pose};

pub(crate) const TOLERANCE: f64 = 1e-5;

/// Checks if both coordinates are within the tolerance
pub(crate) fn points_approx_equal(a: &Point, b: &Point, tolerance: f64) -> bool {
    (a.x - b.x).abs() < tolerance && (a.y - b.y).abs() < tolerance
}

/// Panics with diagnostic output if the point differs from the expected one
pub(crate) fn assert_point_eq(actual: &Point, expected: &Point, what: &str) {
    if !points_approx_equal(actual, expected, TOLERANCE) {
        panic!(
            "{}: expected ({:.6}, {:.6}), got ({:.6}, {:.6})",
            what, expected.x, expected.y, actual.x, actual.y
        );
    }
}

/// Panics if the segments between the joints of the pose are not of the given lengths
pub(crate) fn assert_segment_lengths(pose: &Pose, lengths: &LinkLengths) {
    let origin = Point::origin();
    let segments = [
        ("upper arm", distance(&origin, &pose[0]), lengths.upper_arm),
        ("forearm", distance(&pose[0], &pose[1]), lengths.forearm),
        ("palm", distance(&pose[1], &pose[2]), lengths.palm),
    ];
    for (name, actual, expected) in segments {
        if (actual - expected).abs() > TOLERANCE {
            dump_pose(pose);
            panic!("Length of the {} is {}, expected {}", name, actual, expected);
        }
    }
}

/// Panics with diagnostic output if the joints are not equal within the tolerance
pub(crate) fn assert_joints_eq(actual: &Joints, expected: &Joints) {
    for i in 0..3 {
        if (actual[i] - expected[i]).abs() > TOLERANCE {
            println!("Expected:");
            dump_joints(expected);
            println!("Actual:");
            dump_joints(actual);
            panic!("Joint {} differs: expected {}, got {}", i, expected[i], actual[i]);
        }
    }
}

/// Solves the target and checks that forward kinematics brings the end effector there.
/// Returns false if the target has no solution.
pub(crate) fn round_trip(robot: &impl Kinematics, x: f64, y: f64, alpha: f64) -> bool {
    let joints = robot.inverse(x, y, alpha);
    if joints.iter().any(|q| q.is_nan()) {
        return false;
    }
    let pose = robot.forward(&joints);
    assert_point_eq(
        &pose[2],
        &Point::new(x, y),
        &format!("End effector for target ({}, {}, alpha {})", x, y, alpha),
    );
    true
}
