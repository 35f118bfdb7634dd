use std::error;
use std::fmt;

use nalgebra::Point2;

/// Kinematic error.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Target lies outside the reachable workspace of the arm.
    UnreachableTarget(Point2<f64>),
    /// A trajectory waypoint lies outside the reachable workspace.
    UnreachableWaypoint(usize, Point2<f64>),
    /// Elbow token is neither `up` nor `down`.
    InvalidElbowMode(String),
    /// Plane token is not one of `xy`, `yz` or `xz`.
    InvalidPlane(String),
    /// Joint interpolation step is not a positive finite number.
    InvalidStep(f64),
    /// No joint with this name exists in the chain.
    UnknownJoint(String),
    /// Number of joint positions does not match the movable joints.
    SizeMismatch { expected: usize, actual: usize },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::UnreachableTarget(point) => {
                write!(f, "target ({:.3}, {:.3}) is out of reach", point.x, point.y)
            }
            Error::UnreachableWaypoint(index, point) => write!(
                f,
                "waypoint {} at ({:.3}, {:.3}) is out of reach",
                index, point.x, point.y
            ),
            Error::InvalidElbowMode(token) => write!(f, "invalid elbow mode: '{}'", token),
            Error::InvalidPlane(token) => write!(f, "invalid plane: '{}'", token),
            Error::InvalidStep(step) => write!(f, "invalid joint step: {}", step),
            Error::UnknownJoint(name) => write!(f, "unknown joint: {}", name),
            Error::SizeMismatch { expected, actual } => write!(
                f,
                "expected {} joint positions, got {}",
                expected, actual
            ),
        }
    }
}

impl error::Error for Error {}

pub type Result<T = ()> = std::result::Result<T, Error>;
