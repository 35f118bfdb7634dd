use kinema_core::algorithm::{step_joints, JointAngles};
use kinema_core::Transform;

use super::Scenario;
use crate::config::SweepConfig;
use crate::scene::Scene;
use crate::Result;

/// Planar two-link arm whose joints step from zero to a goal.
///
/// The links are posed with Denavit-Hartenberg transforms and every joint
/// frame is drawn.
pub struct SweepScenario {
    l1: f64,
    l2: f64,
    /// Goal in degrees.
    goal: (f64, f64),
    /// Step in degrees.
    step: f64,
}

impl SweepScenario {
    /// Construct from a goal and step in degrees.
    pub fn new(l1: f64, l2: f64, goal: (f64, f64), step: f64) -> Self {
        Self { l1, l2, goal, step }
    }

    pub fn from_config(config: &SweepConfig) -> Self {
        Self::new(
            config.l1,
            config.l2,
            (config.theta1, config.theta2),
            config.step,
        )
    }

    /// Base, elbow and end effector frames of the arm.
    pub fn frames(&self, angles: &JointAngles) -> [Transform; 3] {
        let g0 = Transform::identity();
        let g1 = Transform::denavit_hartenberg(angles.theta1, 0.0, self.l1, 0.0);
        let g2 = g1 * Transform::denavit_hartenberg(angles.theta2, 0.0, self.l2, 0.0);

        [g0, g1, g2]
    }

    /// Joint angles per frame.
    ///
    /// Stepping runs on the configured degrees so the number of frames does
    /// not depend on the radian conversion.
    pub fn joint_sequence(&self) -> Result<Vec<JointAngles>> {
        let sequence = step_joints(
            &JointAngles::default(),
            &JointAngles::new(self.goal.0, self.goal.1),
            self.step,
        )?;

        Ok(sequence
            .into_iter()
            .map(|degrees| JointAngles::from_degrees(degrees.theta1, degrees.theta2))
            .collect())
    }
}

impl Scenario for SweepScenario {
    fn name(&self) -> &str {
        "sweep"
    }

    fn scenes(&self) -> Result<Vec<Scene>> {
        log::info!(
            "Sweep L1={:.2} L2={:.2} to θ1 {:.2}° θ2 {:.2}°",
            self.l1,
            self.l2,
            self.goal.0,
            self.goal.1
        );

        let scenes = self
            .joint_sequence()?
            .iter()
            .enumerate()
            .map(|(index, angles)| {
                let [g0, g1, g2] = self.frames(angles);

                let mut scene = Scene::new(index);
                scene
                    .add_segment("link1", g0.origin(), g1.origin())
                    .add_segment("link2", g1.origin(), g2.origin())
                    .add_frame("base", g0.frame())
                    .add_frame("elbow", g1.frame())
                    .add_frame("effector", g2.frame());
                scene
            })
            .collect();

        Ok(scenes)
    }
}
