//! Planar two-link kinematics.
//!
//! The solvers work in an abstract plane with the shoulder joint at the
//! origin. All angles are in radians; `theta2` is relative to the first
//! link.

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub mod fk;
pub mod ik;
pub mod trajectory;

pub use fk::ForwardKinematics;
pub use ik::InverseKinematics;
pub use trajectory::{interpolate_joints, step_joints, Trajectory, MAX_JOINT_STEPS};

/// Joint angles of a two-link arm in radians.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct JointAngles {
    /// Shoulder angle, measured from the positive first plane axis.
    pub theta1: f64,
    /// Elbow angle, measured from the first link.
    pub theta2: f64,
}

impl JointAngles {
    #[inline]
    pub fn new(theta1: f64, theta2: f64) -> Self {
        Self { theta1, theta2 }
    }

    /// Construct from angles in degrees.
    #[inline]
    pub fn from_degrees(theta1: f64, theta2: f64) -> Self {
        Self {
            theta1: theta1.to_radians(),
            theta2: theta2.to_radians(),
        }
    }

    /// Angles in degrees.
    #[inline]
    pub fn to_degrees(&self) -> (f64, f64) {
        (self.theta1.to_degrees(), self.theta2.to_degrees())
    }
}

impl std::fmt::Display for JointAngles {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "θ1 {:5.2}rad {:7.2}° θ2 {:5.2}rad {:7.2}°",
            self.theta1,
            self.theta1.to_degrees(),
            self.theta2,
            self.theta2.to_degrees()
        )
    }
}

impl From<(f64, f64)> for JointAngles {
    fn from((theta1, theta2): (f64, f64)) -> Self {
        Self { theta1, theta2 }
    }
}

/// Elbow configuration.
///
/// Selects one of the two mirror image solutions of the inverse problem.
/// `Up` takes the positive arc cosine for the elbow angle and `Down` the
/// negative one. The names are branch labels only; which branch appears
/// above the other depends on the plane and the target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Elbow {
    #[default]
    Up,
    Down,
}

impl Elbow {
    /// Parse a user token, falling back to `Up` for anything unrecognized.
    ///
    /// An empty token selects the default silently, any other unknown
    /// token is logged.
    pub fn parse_or_default(token: &str) -> Self {
        match token.parse() {
            Ok(elbow) => elbow,
            Err(_) => {
                if !token.trim().is_empty() {
                    log::warn!("Unknown elbow mode '{}', using up", token.trim());
                }
                Elbow::default()
            }
        }
    }

    /// Sign applied to the elbow angle.
    #[inline]
    pub fn sign(&self) -> f64 {
        match self {
            Elbow::Up => 1.0,
            Elbow::Down => -1.0,
        }
    }
}

impl std::str::FromStr for Elbow {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "up" => Ok(Elbow::Up),
            "down" => Ok(Elbow::Down),
            _ => Err(Error::InvalidElbowMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for Elbow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Elbow::Up => write!(f, "up"),
            Elbow::Down => write!(f, "down"),
        }
    }
}

/// Joint positions of a two-link arm for the given angles.
///
/// Returns the shoulder, elbow and end effector points.
pub fn forward(l1: f64, l2: f64, theta1: f64, theta2: f64) -> [Point2<f64>; 3] {
    ForwardKinematics::new(l1, l2).solve(&JointAngles::new(theta1, theta2))
}

/// Joint angles that place the end effector on the target.
pub fn inverse(l1: f64, l2: f64, target: &Point2<f64>, elbow: Elbow) -> Result<JointAngles> {
    InverseKinematics::new(l1, l2).solve(target, elbow)
}

/// Plan a straight task space path from start to target.
///
/// See [`Trajectory::plan`].
pub fn plan_trajectory(
    l1: f64,
    l2: f64,
    start: &Point2<f64>,
    target: &Point2<f64>,
    elbow: Elbow,
    steps: usize,
) -> Result<Trajectory> {
    Trajectory::plan(&InverseKinematics::new(l1, l2), start, target, elbow, steps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_elbow_parse() {
        assert_eq!("up".parse::<Elbow>(), Ok(Elbow::Up));
        assert_eq!(" DOWN ".parse::<Elbow>(), Ok(Elbow::Down));
        assert_eq!(
            "sideways".parse::<Elbow>(),
            Err(Error::InvalidElbowMode("sideways".to_string()))
        );
        assert!("".parse::<Elbow>().is_err());
    }

    #[test]
    fn test_elbow_parse_or_default() {
        assert_eq!(Elbow::parse_or_default("down"), Elbow::Down);
        assert_eq!(Elbow::parse_or_default(""), Elbow::Up);
        assert_eq!(Elbow::parse_or_default("sideways"), Elbow::Up);
    }

    #[test]
    fn test_joint_angles_degrees() {
        let angles = JointAngles::from_degrees(90.0, -45.0);

        assert!((angles.theta1 - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
        assert!((angles.theta2 + std::f64::consts::FRAC_PI_4).abs() < 1e-12);

        let (t1, t2) = angles.to_degrees();
        assert!((t1 - 90.0).abs() < 1e-9);
        assert!((t2 + 45.0).abs() < 1e-9);
    }

    #[test]
    fn test_free_functions() {
        let points = forward(7.0, 5.0, 0.0, 0.0);
        assert_eq!(points[2], Point2::new(12.0, 0.0));

        let angles = inverse(7.0, 5.0, &Point2::new(12.0, 0.0), Elbow::Up).unwrap();
        assert_eq!(angles, JointAngles::new(0.0, 0.0));

        let trajectory =
            plan_trajectory(7.0, 5.0, &Point2::new(12.0, 0.0), &Point2::new(6.0, 6.0), Elbow::Down, 10)
                .unwrap();
        assert_eq!(trajectory.len(), 10);
    }
}
