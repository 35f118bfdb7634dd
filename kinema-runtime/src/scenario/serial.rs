use kinema_core::algorithm::MAX_JOINT_STEPS;
use kinema_core::{Axis, Chain, ChainBuilder, Joint, JointType, Transform};

use super::Scenario;
use crate::config::ChainConfig;
use crate::scene::Scene;
use crate::{Error, Result};

const JOINTS: [&str; 3] = ["joint1", "joint2", "joint3"];
const LINKS: [&str; 3] = ["link1", "link2", "link3"];

/// Three link serial chain.
///
/// All revolute joints rotate about Z by the same angle, which sweeps up
/// to its final value. The last increment is shortened so the sweep ends
/// on the final value. Then the whole chain tilts about a base axis while
/// the joints hold.
pub struct SerialScenario {
    chain: Chain,
    /// Final joint angle in degrees.
    sweep: f64,
    /// Final tilt in degrees.
    tilt: f64,
    tilt_axis: Axis,
    /// Increment in degrees.
    step: f64,
}

impl SerialScenario {
    pub fn from_config(config: &ChainConfig) -> Self {
        let mut builder = ChainBuilder::new();

        for ((joint, link), length) in JOINTS.iter().zip(LINKS).zip(config.links) {
            builder = builder
                .add_joint(Joint::new(joint, JointType::Revolute(Axis::Z)))
                .add_joint(Joint::new(link, JointType::Fixed).set_length(length));
        }

        Self {
            chain: builder.build(),
            sweep: config.sweep,
            tilt: config.tilt,
            tilt_axis: config.tilt_axis,
            step: config.step,
        }
    }

    #[inline]
    pub fn chain(&self) -> &Chain {
        &self.chain
    }

    /// Angles from zero in whole increments, ending exactly on `end`.
    fn angles(&self, end: f64) -> Result<Vec<f64>> {
        let count = (end.abs() / self.step).ceil();
        if count.is_nan() || count > MAX_JOINT_STEPS as f64 {
            return Err(Error::Config(format!(
                "chain angle {} in steps of {} needs too many frames",
                end, self.step
            )));
        }

        let sign = end.signum();

        Ok((0..count as usize)
            .map(|i| sign * i as f64 * self.step)
            .chain(std::iter::once(end))
            .map(f64::to_radians)
            .collect())
    }

    fn scene(index: usize, chain: &Chain) -> Scene {
        let mut scene = Scene::new(index);

        let transforms = chain.transforms();

        // Frames after the base: joint, link, joint, link, joint, link.
        for pair in transforms[1..].chunks(2) {
            if let [(_, joint), (link, end)] = pair {
                scene.add_segment(*link, joint.origin(), end.origin());
            }
        }

        for (name, transform) in &transforms[1..] {
            scene.add_frame(*name, transform.frame());
        }

        scene
    }
}

impl Scenario for SerialScenario {
    fn name(&self) -> &str {
        "chain"
    }

    fn scenes(&self) -> Result<Vec<Scene>> {
        log::info!(
            "Chain {}, sweep {:.1}° tilt {:.1}°",
            self.chain.joints().len(),
            self.sweep,
            self.tilt
        );

        let mut chain = self.chain.clone();
        let mut scenes = Vec::new();

        for angle in self.angles(self.sweep)? {
            chain.set_joint_positions(&[angle, angle, angle])?;
            scenes.push(Self::scene(scenes.len(), &chain));
        }

        let hold = self.sweep.to_radians();
        chain.set_joint_positions(&[hold, hold, hold])?;

        for angle in self.angles(self.tilt)? {
            chain.set_base(Transform::rotation(self.tilt_axis, angle));
            scenes.push(Self::scene(scenes.len(), &chain));
        }

        log::debug!("Chain final pose: {}", chain);

        Ok(scenes)
    }
}
