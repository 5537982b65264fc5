//! Defines the link length data structure

pub mod planar_arm {

    /// Link lengths of the arm that the free functions in
    /// [kinematics_impl](crate::kinematics_impl) are bound to.
    pub const MANIPULATOR: LinkLengths = LinkLengths {
        upper_arm: 150.0,
        forearm: 120.0,
        palm: 60.0,
    };

    /// Lengths of the three segments of the arm. All lengths must be in the same unit,
    /// the joint positions are then returned in that unit too.
    #[derive(Debug, Clone, Copy, PartialEq)]
    pub struct LinkLengths {
        /// Shoulder to elbow.
        pub upper_arm: f64,

        /// Elbow to wrist.
        pub forearm: f64,

        /// Wrist to the end effector.
        pub palm: f64,
    }

    impl LinkLengths {
        pub const fn new(upper_arm: f64, forearm: f64, palm: f64) -> Self {
            LinkLengths { upper_arm, forearm, palm }
        }

        /// The arm used by [crate::kinematics_impl::joint_positions] and
        /// [crate::kinematics_impl::solve_angles].
        pub const fn manipulator() -> Self {
            MANIPULATOR
        }

        /// Largest distance between the shoulder and the wrist (arm stretched).
        pub fn max_reach(&self) -> f64 {
            self.upper_arm + self.forearm
        }

        /// Smallest distance between the shoulder and the wrist (arm folded).
        pub fn min_reach(&self) -> f64 {
            (self.upper_arm - self.forearm).abs()
        }

        /// Distance from the shoulder to the end effector when all segments are in line.
        pub fn total_length(&self) -> f64 {
            self.upper_arm + self.forearm + self.palm
        }

        /// Convert to string yaml representation (quick viewing, etc).
        pub fn to_yaml(&self) -> String {
            format!(
                "planar_arm_link_lengths:\n  \
              upper_arm: {:?}\n  \
              forearm: {:?}\n  \
              palm: {:?}\n",
                self.upper_arm, self.forearm, self.palm
            )
        }
    }

    impl Default for LinkLengths {
        fn default() -> Self {
            MANIPULATOR
        }
    }
}

#[cfg(test)]
mod tests {
    use super::planar_arm::*;

    #[test]
    fn test_reach() {
        let arm = LinkLengths::new(100.0, 140.0, 30.0);
        assert_eq!(arm.max_reach(), 240.0);
        assert_eq!(arm.min_reach(), 40.0);
        assert_eq!(arm.total_length(), 270.0);
    }

    #[test]
    fn test_default_is_manipulator() {
        assert_eq!(LinkLengths::default(), MANIPULATOR);
        assert_eq!(MANIPULATOR.total_length(), 330.0);
    }

    #[test]
    fn test_to_yaml() {
        let yaml = LinkLengths::new(1.5, 1.25, 0.5).to_yaml();
        assert_eq!(
            yaml,
            "planar_arm_link_lengths:\n  upper_arm: 1.5\n  forearm: 1.25\n  palm: 0.5\n"
        );
    }
}
