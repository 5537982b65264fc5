//! Rust implementation of inverse and forward kinematics for a planar arm with three
//! rotational joints: shoulder, elbow and wrist.
//!
//! The arm has three rigid segments of fixed length: the upper arm (shoulder to elbow),
//! the forearm (elbow to wrist) and the palm (wrist to the end effector). The shoulder
//! sits at the origin of the math plane, y axis pointing up, angles counter-clockwise
//! from the positive x axis.
//!
//! # Features
//!
//! - Closed-form inverse kinematics, no iteration. A single solution is returned per
//!   target: of the two elbow configurations only the one given by the sign conventions
//!   of the solver is produced.
//! - Unreachable targets are not errors. They produce `f64::NAN` joint values that
//!   propagate through the arithmetic and can be checked with [`utils::is_valid`].
//!   This keeps the solver cheap enough to call on every pointer move.
//! - Continuous solving ([`kinematic_traits::Kinematics::inverse_continuing`]) keeps the
//!   previous joint values where the target is out of reach and avoids 2 pi jumps.
//! - Forward kinematics returns the positions of the elbow, the wrist and the end effector.
//! - Link lengths can be read from a YAML file (feature `allow_filesystem`).
//!
//! # Angles
//!
//! The elbow angle is measured between the upper arm and the forearm, so that elbow = pi
//! means the arm is stretched straight and elbow = 0 means it is fully folded. The wrist
//! angle is relative to the accumulated orientation. The end orientation `alpha` passed
//! to the inverse kinematics is the angle between the palm and the horizontal, measured
//! clockwise.
//!
//! ```
//! use planar_arm_kinematics::kinematic_traits::Kinematics;
//! use planar_arm_kinematics::kinematics_impl::PlanarArmKinematics;
//! use planar_arm_kinematics::parameters::planar_arm::LinkLengths;
//! use planar_arm_kinematics::utils::is_valid;
//!
//! let arm = PlanarArmKinematics::new(LinkLengths::manipulator());
//! let joints = arm.inverse(120.0, 90.0, std::f64::consts::FRAC_PI_2);
//! assert!(is_valid(&joints));
//!
//! let pose = arm.forward(&joints);
//! let end = pose[2];
//! assert!((end.x - 120.0).abs() < 1e-5 && (end.y - 90.0).abs() < 1e-5);
//! ```

pub mod parameters;

#[cfg(feature = "allow_filesystem")]
pub mod parameters_from_file;
#[cfg(feature = "allow_filesystem")]
pub mod parameter_error;

#[path = "utils/utils.rs"]
pub mod utils;
pub mod triangle;
pub mod kinematic_traits;
pub mod kinematics_impl;

#[cfg(test)]
mod tests;
