use nalgebra::Point3;

use crate::transform::{Axis, Frame, Transform};
use crate::{Error, Result};

/// Name of the first frame returned by [`Chain::frames`].
pub const BASE_FRAME: &str = "base";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JointType {
    /// A joint that provides one degree of freedom about a fixed axis of rotation.
    Revolute(Axis),
    /// A joint that provides one degree of freedom along a fixed axis of translation.
    Prismatic(Axis),
    /// A joint that provides zero degrees of freedom.
    Fixed,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Joint {
    name: String,
    ty: JointType,
    origin: Transform,
}

impl Joint {
    /// Construct a new joint.
    pub fn new(name: impl ToString, ty: JointType) -> Self {
        Self {
            name: name.to_string(),
            ty,
            origin: Transform::identity(),
        }
    }

    /// Origin relative to the previous joint.
    pub fn set_origin(mut self, origin: Transform) -> Self {
        self.origin = origin;
        self
    }

    /// Offset along the X axis of the previous joint.
    pub fn set_length(mut self, length: f64) -> Self {
        let mut matrix = *self.origin.matrix();
        matrix[(0, 3)] = length;
        self.origin = Transform::from_matrix(matrix);
        self
    }

    /// Offset along the Z axis of the previous joint.
    pub fn set_height(mut self, height: f64) -> Self {
        let mut matrix = *self.origin.matrix();
        matrix[(2, 3)] = height;
        self.origin = Transform::from_matrix(matrix);
        self
    }

    pub fn set_origin_translation(mut self, origin_x: f64, origin_y: f64, origin_z: f64) -> Self {
        let mut matrix = *self.origin.matrix();
        matrix[(0, 3)] = origin_x;
        matrix[(1, 3)] = origin_y;
        matrix[(2, 3)] = origin_z;
        self.origin = Transform::from_matrix(matrix);
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn ty(&self) -> &JointType {
        &self.ty
    }

    #[inline]
    pub fn origin(&self) -> &Transform {
        &self.origin
    }

    #[inline]
    pub fn is_movable(&self) -> bool {
        self.ty != JointType::Fixed
    }

    /// Transform of this joint at the given position.
    ///
    /// The position is an angle in radians for a revolute joint and a
    /// distance for a prismatic joint. A fixed joint ignores it.
    pub fn transform(&self, position: f64) -> Transform {
        let motion = match self.ty {
            JointType::Revolute(axis) => Transform::rotation(axis, position),
            JointType::Prismatic(axis) => Transform::translation_along(axis, position),
            JointType::Fixed => Transform::identity(),
        };

        self.origin * motion
    }
}

/// Serial kinematic chain.
///
/// Joints are ordered from base to tip. Every joint keeps its current
/// position, starting at zero.
#[derive(Clone, Debug, PartialEq)]
pub struct Chain {
    base: Transform,
    joints: Vec<Joint>,
    joint_state: Vec<f64>,
}

impl Chain {
    #[inline]
    pub fn joints(&self) -> &[Joint] {
        &self.joints
    }

    #[inline]
    pub fn base(&self) -> &Transform {
        &self.base
    }

    pub fn joint_by_name(&self, name: &str) -> Option<&Joint> {
        self.joints.iter().find(|joint| joint.name == name)
    }

    /// Current position of a joint.
    pub fn joint_position(&self, name: &str) -> Option<f64> {
        self.joints
            .iter()
            .position(|joint| joint.name == name)
            .map(|index| self.joint_state[index])
    }

    /// Number of joints with a degree of freedom.
    pub fn movable_count(&self) -> usize {
        self.joints.iter().filter(|joint| joint.is_movable()).count()
    }

    pub fn set_base(&mut self, base: Transform) {
        self.base = base;
    }

    /// Move all joints back to zero.
    pub fn reset(&mut self) {
        for position in &mut self.joint_state {
            *position = 0.0;
        }
    }

    pub fn set_joint_position(&mut self, name: &str, position: f64) -> Result {
        let index = self
            .joints
            .iter()
            .position(|joint| joint.name == name)
            .ok_or_else(|| Error::UnknownJoint(name.to_string()))?;

        self.joint_state[index] = position;

        Ok(())
    }

    /// Set the position of every movable joint, in chain order.
    pub fn set_joint_positions(&mut self, positions: &[f64]) -> Result {
        let expected = self.movable_count();
        if positions.len() != expected {
            return Err(Error::SizeMismatch {
                expected,
                actual: positions.len(),
            });
        }

        let movable = self
            .joints
            .iter()
            .zip(self.joint_state.iter_mut())
            .filter(|(joint, _)| joint.is_movable());

        for ((_, state), position) in movable.zip(positions) {
            *state = *position;
        }

        Ok(())
    }

    /// Cumulative transform after each joint, base first.
    pub fn transforms(&self) -> Vec<(&str, Transform)> {
        let mut pose = self.base;
        let mut transforms = Vec::with_capacity(self.joints.len() + 1);

        transforms.push((BASE_FRAME, pose));

        for (joint, position) in self.joints.iter().zip(&self.joint_state) {
            pose = pose * joint.transform(*position);
            transforms.push((joint.name(), pose));
        }

        transforms
    }

    /// Named frame after each joint, base first.
    pub fn frames(&self) -> Vec<(String, Frame)> {
        self.transforms()
            .into_iter()
            .map(|(name, transform)| (name.to_string(), transform.frame()))
            .collect()
    }

    /// Transform from the world to the tip of the chain.
    pub fn world_transformation(&self) -> Transform {
        self.joints
            .iter()
            .zip(&self.joint_state)
            .fold(self.base, |pose, (joint, position)| {
                pose * joint.transform(*position)
            })
    }

    /// Frame origins, base first.
    pub fn joint_points(&self) -> Vec<Point3<f64>> {
        self.transforms()
            .into_iter()
            .map(|(_, transform)| transform.origin())
            .collect()
    }
}

impl std::fmt::Display for Chain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (joint, position) in self.joints.iter().zip(&self.joint_state) {
            match joint.ty {
                JointType::Revolute(_) => write!(
                    f,
                    "{}={:.2}rad/{:5.2}° ",
                    joint.name,
                    position,
                    position.to_degrees()
                )?,
                JointType::Prismatic(_) => write!(f, "{}={:.2} ", joint.name, position)?,
                JointType::Fixed => {}
            }
        }

        let point = self.world_transformation().origin();

        write!(f, "Endpoint [{:.2}, {:.2}, {:.2}]", point.x, point.y, point.z)
    }
}

#[derive(Default)]
pub struct ChainBuilder {
    base: Transform,
    joints: Vec<Joint>,
}

impl ChainBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn base(mut self, base: Transform) -> Self {
        self.base = base;
        self
    }

    pub fn add_joint(mut self, joint: Joint) -> Self {
        self.joints.push(joint);
        self
    }

    pub fn build(self) -> Chain {
        let joint_state = vec![0.0; self.joints.len()];

        Chain {
            base: self.base,
            joints: self.joints,
            joint_state,
        }
    }
}
