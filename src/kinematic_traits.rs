extern crate nalgebra as na;

use na::Point2;

/// Position in the plane of the arm, origin at the shoulder, y axis pointing up.
pub type Point = Point2<f64>;

/// Joint angles in radians, in the order shoulder, elbow, wrist.
/// Any of them may be `f64::NAN` if the inverse kinematics found no solution.
pub type Joints = [f64; 3];

/// Positions of the elbow, the wrist and the end effector, in this order.
/// The shoulder is always at the origin and is not included.
pub type Pose = [Point; 3];

/// For providing joint values when all are zero
pub const JOINTS_AT_ZERO: Joints = [0.0, 0.0, 0.0];

/// Index of the shoulder joint in [Joints]
pub const J_SHOULDER: usize = 0;

/// Index of the elbow joint in [Joints]
pub const J_ELBOW: usize = 1;

/// Index of the wrist joint in [Joints]
pub const J_WRIST: usize = 2;

/// Index of the elbow position in [Pose]
pub const P_ELBOW: usize = 0;

/// Index of the wrist position in [Pose]
pub const P_WRIST: usize = 1;

/// Index of the end effector position in [Pose]
pub const P_END: usize = 2;

/// Positions where the two elbow configurations of the inverse kinematics coincide.
/// These are the borders of the reachable area.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum Singularity {
    /// Elbow = pi: the upper arm and the forearm are in line, the wrist is at
    /// the maximal distance from the shoulder
    Extended,

    /// Elbow = 0: the forearm is folded back over the upper arm, the wrist is at
    /// the minimal distance from the shoulder
    Folded,
}

pub trait Kinematics: Send + Sync {
    /// Find the joint angles that bring the end effector to (x, y), the palm making
    /// the angle alpha (radians, clockwise) with the horizontal.
    ///
    /// Only one of the two elbow configurations is returned. If the target cannot
    /// be reached, the joint values are `f64::NAN`.
    fn inverse(&self, x: f64, y: f64, alpha: f64) -> Joints;

    /// Find the joint angles for the target as [Kinematics::inverse] does, but stay
    /// close to the previous joint values: joints that cannot be solved keep the
    /// previous value, and solved joints are shifted by full turns so they are
    /// no further than pi from the previous value.
    fn inverse_continuing(&self, x: f64, y: f64, alpha: f64, previous: &Joints) -> Joints;

    /// Find the positions of the elbow, the wrist and the end effector for the given
    /// joint angles. Never fails, `f64::NAN` joint values give `f64::NAN` positions.
    fn forward(&self, qs: &Joints) -> Pose;

    /// Detect the singularity. Returns either the singularity type or None if there is
    /// no singularity.
    fn kinematic_singularity(&self, qs: &Joints) -> Option<Singularity>;
}
