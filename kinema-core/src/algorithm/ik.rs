use nalgebra::Point2;

use super::{Elbow, JointAngles};
use crate::{Error, Result};

/// Inverse kinematics of a planar two-link arm.
///
/// Link lengths are expected to be positive; the solver does not check.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InverseKinematics {
    l1: f64,
    l2: f64,
}

impl InverseKinematics {
    pub fn new(l1: f64, l2: f64) -> Self {
        Self { l1, l2 }
    }

    /// Inner and outer radius of the reachable annulus.
    pub fn workspace(&self) -> (f64, f64) {
        ((self.l1 - self.l2).abs(), self.l1 + self.l2)
    }

    /// Whether the target lies within the closed reachable annulus.
    pub fn is_reachable(&self, target: &Point2<f64>) -> bool {
        let (inner, outer) = self.workspace();
        let r2 = target.coords.norm_squared();

        r2 <= outer.powi(2) && r2 >= inner.powi(2)
    }

    /// Solve the joint angles for a target point.
    ///
    /// The elbow selects between the two mirrored solutions. Targets on the
    /// workspace boundary are reachable and yield a fully extended or fully
    /// folded elbow.
    pub fn solve(&self, target: &Point2<f64>, elbow: Elbow) -> Result<JointAngles> {
        if !self.is_reachable(target) {
            return Err(Error::UnreachableTarget(*target));
        }

        let r2 = target.coords.norm_squared();
        log::trace!("IK squared distance: {:.4}", r2);

        // Floating point overshoot at the boundary can leave the cosine just
        // outside the arc cosine domain.
        let cos_theta_2 =
            ((r2 - self.l1.powi(2) - self.l2.powi(2)) / (2.0 * self.l1 * self.l2)).clamp(-1.0, 1.0);

        let theta_2 = elbow.sign() * cos_theta_2.acos();

        let k1 = self.l1 + self.l2 * theta_2.cos();
        let k2 = self.l2 * theta_2.sin();
        let theta_1 = target.y.atan2(target.x) - k2.atan2(k1);

        let angles = JointAngles::new(theta_1, theta_2);
        log::trace!("IK {} elbow: {}", elbow, angles);

        Ok(angles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::ForwardKinematics;
    use rand::{rngs::StdRng, Rng, SeedableRng};
    use std::f64::consts::PI;

    const TOLERANCE: f64 = 1e-9;

    fn assert_reaches(l1: f64, l2: f64, target: Point2<f64>, elbow: Elbow) {
        let angles = InverseKinematics::new(l1, l2).solve(&target, elbow).unwrap();
        let effector = ForwardKinematics::new(l1, l2).effector(&angles);

        assert!(
            nalgebra::distance(&effector, &target) < TOLERANCE,
            "target {} reached {}",
            target,
            effector
        );
    }

    #[test]
    fn test_ik_full_extension() {
        let ik = InverseKinematics::new(7.0, 5.0);

        let angles = ik.solve(&Point2::new(12.0, 0.0), Elbow::Up).unwrap();

        assert_eq!(angles.theta1, 0.0);
        assert_eq!(angles.theta2, 0.0);

        let points = ForwardKinematics::new(7.0, 5.0).solve(&angles);
        assert_eq!(points, [Point2::new(0.0, 0.0), Point2::new(7.0, 0.0), Point2::new(12.0, 0.0)]);
    }

    #[test]
    fn test_ik_inner_boundary() {
        let ik = InverseKinematics::new(7.0, 5.0);

        let up = ik.solve(&Point2::new(2.0, 0.0), Elbow::Up).unwrap();
        let down = ik.solve(&Point2::new(2.0, 0.0), Elbow::Down).unwrap();

        assert_eq!(up.theta2, PI);
        assert_eq!(down.theta2, -PI);

        assert_reaches(7.0, 5.0, Point2::new(2.0, 0.0), Elbow::Up);
        assert_reaches(7.0, 5.0, Point2::new(0.0, -2.0), Elbow::Down);
    }

    #[test]
    fn test_ik_outer_boundary_any_direction() {
        assert_reaches(7.0, 5.0, Point2::new(0.0, 12.0), Elbow::Up);
        assert_reaches(7.0, 5.0, Point2::new(-12.0, 0.0), Elbow::Down);
        assert_reaches(3.0, 4.0, Point2::new(0.0, -7.0), Elbow::Up);
    }

    #[test]
    fn test_ik_unreachable() {
        let ik = InverseKinematics::new(7.0, 5.0);

        assert_eq!(
            ik.solve(&Point2::new(1.0, 0.0), Elbow::Up),
            Err(Error::UnreachableTarget(Point2::new(1.0, 0.0)))
        );
        assert!(ik.solve(&Point2::new(12.0 + 1e-6, 0.0), Elbow::Up).is_err());
        assert!(ik.solve(&Point2::new(0.0, 2.0 - 1e-6), Elbow::Down).is_err());
        assert!(ik.solve(&Point2::new(9.0, 9.0), Elbow::Down).is_err());
    }

    #[test]
    fn test_ik_equal_links_reach_origin() {
        let ik = InverseKinematics::new(4.0, 4.0);

        assert_eq!(ik.workspace(), (0.0, 8.0));

        let angles = ik.solve(&Point2::origin(), Elbow::Up).unwrap();
        assert_eq!(angles.theta2, PI);

        let effector = ForwardKinematics::new(4.0, 4.0).effector(&angles);
        assert!(effector.coords.norm() < TOLERANCE);
    }

    #[test]
    fn test_ik_elbow_symmetry() {
        let ik = InverseKinematics::new(7.0, 5.0);
        let target = Point2::new(-3.0, 6.5);

        let up = ik.solve(&target, Elbow::Up).unwrap();
        let down = ik.solve(&target, Elbow::Down).unwrap();

        assert_eq!(up.theta2, -down.theta2);
        assert!(up.theta2 > 0.0);

        assert_reaches(7.0, 5.0, target, Elbow::Up);
        assert_reaches(7.0, 5.0, target, Elbow::Down);
    }

    #[test]
    fn test_ik_second_quadrant() {
        // A plain arc tangent would put the shoulder in the wrong half plane.
        let ik = InverseKinematics::new(1.0, 1.0);

        let angles = ik.solve(&Point2::new(-1.0, 1.0), Elbow::Up).unwrap();

        assert!((angles.theta1 - PI / 2.0).abs() < TOLERANCE);
        assert!((angles.theta2 - PI / 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_ik_roundtrip_random() {
        let mut rng = StdRng::seed_from_u64(0x6b69);

        for _ in 0..500 {
            let l1 = rng.gen_range(0.1..20.0);
            let l2 = rng.gen_range(0.1..20.0);

            let ik = InverseKinematics::new(l1, l2);
            let (inner, outer) = ik.workspace();

            let radius = rng.gen_range(inner + 1e-6..outer - 1e-6);
            let phi = rng.gen_range(-PI..PI);
            let target = Point2::new(radius * phi.cos(), radius * phi.sin());

            assert_reaches(l1, l2, target, Elbow::Up);
            assert_reaches(l1, l2, target, Elbow::Down);
        }
    }
}
