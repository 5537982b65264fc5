//! Closed-form kinematics of the planar three-link arm.

use std::f64::consts::PI;
use crate::kinematic_traits::{Joints, Kinematics, Point, Pose, Singularity, J_ELBOW};
use crate::parameters::planar_arm::{LinkLengths, MANIPULATOR};
use crate::triangle::{angle_between, is_triangle};
use crate::utils::{normalize_angle, wrap_to_pi};

/// Tolerance of the elbow angle for reporting a singularity.
const SINGULARITY_ANGLE_THRESHOLD: f64 = 1e-9;

#[derive(Debug, Clone, Copy)]
pub struct PlanarArmKinematics {
    /// The link lengths of the arm
    parameters: LinkLengths,
}

impl PlanarArmKinematics {
    /// Creates a new `PlanarArmKinematics` instance with the given link lengths.
    pub fn new(parameters: LinkLengths) -> Self {
        PlanarArmKinematics { parameters }
    }

    pub fn parameters(&self) -> &LinkLengths {
        &self.parameters
    }

    /// Position the wrist must take so that the palm, pointing at alpha (clockwise
    /// from the horizontal), ends at (x, y).
    pub fn wrist_target(&self, x: f64, y: f64, alpha: f64) -> Point {
        let palm = self.parameters.palm;
        Point::new(x - alpha.cos() * palm, y + alpha.sin() * palm)
    }

    /// Checks if the inverse kinematics has a solution for this target. The border
    /// of the reachable area (arm stretched or folded) is reachable.
    pub fn reachable(&self, x: f64, y: f64, alpha: f64) -> bool {
        let p = &self.parameters;
        is_triangle(p.upper_arm, p.forearm, reach(&self.wrist_target(x, y, alpha)))
    }

    /// Absolute direction of the palm in the math frame, in [0, 2 pi). This is -alpha
    /// for joints produced by the inverse kinematics.
    pub fn end_orientation(&self, qs: &Joints) -> f64 {
        normalize_angle(qs[0] + qs[1] + qs[2])
    }
}

impl Default for PlanarArmKinematics {
    fn default() -> Self {
        PlanarArmKinematics::new(MANIPULATOR)
    }
}

impl Kinematics for PlanarArmKinematics {
    fn inverse(&self, x: f64, y: f64, alpha: f64) -> Joints {
        let p = &self.parameters;
        let wrist = self.wrist_target(x, y, alpha);
        let reach = reach(&wrist);

        let elbow = angle_between(p.upper_arm, p.forearm, reach);
        // Equal upper arm and forearm folded onto the shoulder: any shoulder angle works
        let enclosed = if reach == 0.0 && elbow.is_finite() {
            0.0
        } else {
            angle_between(p.upper_arm, reach, p.forearm)
        };
        let shoulder = enclosed + f64::atan2(wrist.y, wrist.x);
        let wrist_angle = 2.0 * PI - elbow - shoulder - alpha;

        if elbow.is_nan() {
            tracing::trace!(
                "Target ({}, {}, alpha {}) unreachable: wrist at distance {} outside [{}, {}]",
                x, y, alpha, reach, p.min_reach(), p.max_reach()
            );
        }

        [shoulder, elbow, wrist_angle]
    }

    fn inverse_continuing(&self, x: f64, y: f64, alpha: f64, previous: &Joints) -> Joints {
        let solved = self.inverse(x, y, alpha);
        std::array::from_fn(|i| continue_from(solved[i], previous[i]))
    }

    fn forward(&self, joints: &Joints) -> Pose {
        let p = &self.parameters;
        let [shoulder, elbow, wrist] = *joints;

        let elbow_pos = Point::new(shoulder.cos() * p.upper_arm, shoulder.sin() * p.upper_arm);

        // elbow = pi is the forearm continuing straight from the upper arm
        let forearm_angle = elbow + shoulder - PI;
        let wrist_pos = Point::new(
            elbow_pos.x + forearm_angle.cos() * p.forearm,
            elbow_pos.y + forearm_angle.sin() * p.forearm,
        );

        let palm_angle = wrist + elbow + shoulder;
        let end_pos = Point::new(
            wrist_pos.x + palm_angle.cos() * p.palm,
            wrist_pos.y + palm_angle.sin() * p.palm,
        );

        [elbow_pos, wrist_pos, end_pos]
    }

    fn kinematic_singularity(&self, qs: &Joints) -> Option<Singularity> {
        let elbow = wrap_to_pi(qs[J_ELBOW]);
        if elbow.abs() < SINGULARITY_ANGLE_THRESHOLD {
            Some(Singularity::Folded)
        } else if PI - elbow.abs() < SINGULARITY_ANGLE_THRESHOLD {
            Some(Singularity::Extended)
        } else {
            None
        }
    }
}

/// Distance between the shoulder and the wrist.
fn reach(wrist: &Point) -> f64 {
    (wrist.x * wrist.x + wrist.y * wrist.y).sqrt()
}

/// Keep the previous value if the angle was not solved, otherwise shift the solved
/// angle by full turns so that it is within pi of the previous value.
fn continue_from(solved: f64, previous: f64) -> f64 {
    if !solved.is_finite() {
        return previous;
    }
    if !previous.is_finite() {
        return solved;
    }
    previous + wrap_to_pi(solved - previous)
}

/// Positions of the elbow, the wrist and the end effector of the [MANIPULATOR] arm
/// for the given joint angles (radians).
pub fn joint_positions(shoulder: f64, elbow: f64, wrist: f64) -> Pose {
    PlanarArmKinematics::default().forward(&[shoulder, elbow, wrist])
}

/// Joint angles (shoulder, elbow, wrist) that bring the end effector of the [MANIPULATOR]
/// arm to (x, y) with the palm at angle alpha (clockwise) to the horizontal.
/// Unreachable targets give `f64::NAN` joint values.
pub fn solve_angles(x: f64, y: f64, alpha: f64) -> Joints {
    PlanarArmKinematics::default().inverse(x, y, alpha)
}
