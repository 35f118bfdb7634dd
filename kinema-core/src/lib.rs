pub mod algorithm;
pub mod body;
pub mod chain;
mod error;
pub mod geometry;
pub mod transform;

pub use nalgebra;

pub use algorithm::{Elbow, ForwardKinematics, InverseKinematics, JointAngles, Trajectory};
pub use body::Cuboid;
pub use chain::{Chain, ChainBuilder, Joint, JointType};
pub use error::{Error, Result};
pub use geometry::Plane;
pub use transform::{Axis, Frame, Transform};
