use kinema_core::geometry::linspace;
use kinema_core::nalgebra::Point3;
use kinema_core::{Axis, Chain, ChainBuilder, Joint, JointType, Transform};

use super::Scenario;
use crate::config::ScaraConfig;
use crate::scene::Scene;
use crate::Result;

/// Joint values of a single SCARA pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaraPose {
    /// Elbow angle in radians.
    pub theta2: f64,
    /// Absolute height of the platter.
    pub piston: f64,
    /// Platter rotation in radians.
    pub theta3: f64,
}

/// SCARA manipulator with a vertical piston and a rotating square platter.
///
/// The animation has two phases. First the elbow turns while the piston
/// holds, then the piston lowers while the elbow holds. The platter turns
/// over both phases.
pub struct ScaraScenario {
    chain: Chain,
    base_height: f64,
    platter_radius: f64,
    arm_frames: usize,
    piston_frames: usize,
    theta2: f64,
    piston_start: f64,
    piston_end: f64,
    platter_turn: f64,
}

impl ScaraScenario {
    pub fn from_config(config: &ScaraConfig) -> Self {
        let chain = ChainBuilder::new()
            .add_joint(Joint::new("column", JointType::Fixed).set_height(config.base_height))
            .add_joint(
                Joint::new("shoulder", JointType::Fixed)
                    .set_origin(Transform::rotation_z(config.theta1.to_radians())),
            )
            .add_joint(Joint::new("elbow", JointType::Revolute(Axis::Z)).set_length(config.l1))
            .add_joint(Joint::new("wrist", JointType::Fixed).set_length(config.l2))
            .add_joint(Joint::new("piston", JointType::Prismatic(Axis::Z)))
            .build();

        Self {
            chain,
            base_height: config.base_height,
            platter_radius: config.platter_radius,
            arm_frames: config.arm_frames,
            piston_frames: config.piston_frames,
            theta2: config.theta2.to_radians(),
            piston_start: config.piston_start,
            piston_end: config.piston_end,
            platter_turn: config.platter_turn.to_radians(),
        }
    }

    /// Joint values for every frame of both phases.
    pub fn poses(&self) -> Vec<ScaraPose> {
        let total = self.arm_frames + self.piston_frames;

        let theta2 = linspace(0.0, self.theta2, self.arm_frames)
            .chain(std::iter::repeat(self.theta2).take(self.piston_frames));
        let piston = std::iter::repeat(self.piston_start)
            .take(self.arm_frames)
            .chain(linspace(self.piston_start, self.piston_end, self.piston_frames));
        let theta3 = linspace(0.0, self.platter_turn, total);

        theta2
            .zip(piston)
            .zip(theta3)
            .map(|((theta2, piston), theta3)| ScaraPose {
                theta2,
                piston,
                theta3,
            })
            .collect()
    }

    /// Platter corners around the piston top, rotated in the horizontal
    /// plane.
    fn platter(&self, top: Point3<f64>, theta3: f64) -> [Point3<f64>; 4] {
        let r = self.platter_radius;
        let placement = Transform::translation(top.x, top.y, top.z) * Transform::rotation_z(theta3);

        [(-r, -r), (r, -r), (r, r), (-r, r)]
            .map(|(x, y)| placement.transform_point(&Point3::new(x, y, 0.0)))
    }

    fn scene(&self, index: usize, chain: &Chain, pose: &ScaraPose) -> Scene {
        let points = chain.joint_points();
        let (base, axis, p1, p2, top) = (points[0], points[1], points[3], points[4], points[5]);

        let mut scene = Scene::new(index);
        scene
            .add_segment("column", base, axis)
            .add_segment("arm1", axis, p1)
            .add_segment("arm2", p1, p2)
            .add_segment("piston", p2, top)
            .add_quad("platter", self.platter(top, pose.theta3))
            .add_point("top", top);
        scene
    }
}

impl Scenario for ScaraScenario {
    fn name(&self) -> &str {
        "scara"
    }

    fn scenes(&self) -> Result<Vec<Scene>> {
        log::info!(
            "SCARA {} + {} frames, piston {:.1} to {:.1}",
            self.arm_frames,
            self.piston_frames,
            self.piston_start,
            self.piston_end
        );

        let mut chain = self.chain.clone();

        self.poses()
            .iter()
            .enumerate()
            .map(|(index, pose)| -> Result<Scene> {
                chain.set_joint_positions(&[pose.theta2, pose.piston - self.base_height])?;
                Ok(self.scene(index, &chain, pose))
            })
            .collect()
    }
}
