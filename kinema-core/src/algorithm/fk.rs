use nalgebra::Point2;

use super::JointAngles;

/// Forward kinematics of a planar two-link arm.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ForwardKinematics {
    l1: f64,
    l2: f64,
}

impl ForwardKinematics {
    pub fn new(l1: f64, l2: f64) -> Self {
        Self { l1, l2 }
    }

    /// Shoulder, elbow and end effector positions.
    pub fn solve(&self, angles: &JointAngles) -> [Point2<f64>; 3] {
        let theta_1 = angles.theta1;
        let theta_12 = angles.theta1 + angles.theta2;

        let p0 = Point2::origin();
        let p1 = Point2::new(
            p0.x + self.l1 * theta_1.cos(),
            p0.y + self.l1 * theta_1.sin(),
        );
        let p2 = Point2::new(
            p1.x + self.l2 * theta_12.cos(),
            p1.y + self.l2 * theta_12.sin(),
        );

        [p0, p1, p2]
    }

    /// End effector position.
    #[inline]
    pub fn effector(&self, angles: &JointAngles) -> Point2<f64> {
        self.solve(angles)[2]
    }
}
