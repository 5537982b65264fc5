use std::f64::consts::PI;
use crate::kinematic_traits::{Kinematics, Point, JOINTS_AT_ZERO, P_END};
use crate::kinematics_impl::PlanarArmKinematics;
use crate::tests::test_utils::{assert_joints_eq, assert_point_eq};
use crate::utils::same_angle;

#[test]
fn test_unreachable_keeps_previous() {
    let robot = PlanarArmKinematics::default();
    let previous = [0.1, 0.2, 0.3];
    let joints = robot.inverse_continuing(1000.0, 0.0, 0.0, &previous);
    assert_eq!(joints, previous);
}

#[test]
fn test_reachable_matches_inverse() {
    let robot = PlanarArmKinematics::default();
    let direct = robot.inverse(120.0, 90.0, PI / 2.0);
    let continued = robot.inverse_continuing(120.0, 90.0, PI / 2.0, &direct);
    assert_joints_eq(&continued, &direct);
}

#[test]
fn test_stays_within_half_turn_of_previous() {
    let robot = PlanarArmKinematics::default();
    let (x, y, alpha) = (100.0, -80.0, 7.5);
    let direct = robot.inverse(x, y, alpha);

    let previous = [direct[0] + 4.0 * PI + 0.05, direct[1] - 2.0 * PI, direct[2] - 6.0 * PI - 0.1];
    let continued = robot.inverse_continuing(x, y, alpha, &previous);

    for i in 0..3 {
        assert!((continued[i] - previous[i]).abs() <= PI, "Joint {} jumped", i);
        assert!(same_angle(continued[i], direct[i], 1e-9));
    }
    assert_point_eq(&robot.forward(&continued)[P_END], &Point::new(x, y), "Continued solution");
}

#[test]
fn test_unsolved_previous_takes_solution() {
    let robot = PlanarArmKinematics::default();
    let previous = [f64::NAN, 0.0, f64::NAN];
    let continued = robot.inverse_continuing(120.0, 90.0, PI / 2.0, &previous);
    assert!(continued.iter().all(|q| q.is_finite()));
    assert_point_eq(&robot.forward(&continued)[P_END], &Point::new(120.0, 90.0), "From unsolved");
}

#[test]
fn test_from_zero() {
    // Stretched arm along x: elbow pi may come back as -pi, still the same pose
    let robot = PlanarArmKinematics::default();
    let continued = robot.inverse_continuing(270.0, -60.0, PI / 2.0, &JOINTS_AT_ZERO);
    assert!(continued.iter().all(|q| q.abs() <= PI));
    assert_point_eq(&robot.forward(&continued)[P_END], &Point::new(270.0, -60.0), "From zero");
}
