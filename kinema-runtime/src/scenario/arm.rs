use kinema_core::algorithm::{self, ForwardKinematics, Trajectory};
use kinema_core::nalgebra::Point2;
use kinema_core::Plane;

use super::Scenario;
use crate::config::ArmConfig;
use crate::scene::Scene;
use crate::source::ArmParameters;
use crate::Result;

/// Planar two-link arm moving its end effector in a straight line.
///
/// The arm starts fully extended along the first plane axis and ends on
/// the target. Joint angles come from inverse kinematics on every sample.
pub struct ArmScenario {
    parameters: ArmParameters,
    plane: Plane,
    steps: usize,
}

impl ArmScenario {
    pub fn new(parameters: ArmParameters, plane: Plane, steps: usize) -> Self {
        Self {
            parameters,
            plane,
            steps,
        }
    }

    pub fn from_config(config: &ArmConfig) -> Self {
        let target = Point2::new(config.target[0], config.target[1]);

        Self::new(
            ArmParameters::new(config.l1, config.l2, target, config.elbow),
            config.plane,
            config.steps,
        )
    }

    /// Fully extended start position.
    pub fn start(&self) -> Point2<f64> {
        Point2::new(self.parameters.l1 + self.parameters.l2, 0.0)
    }

    pub fn plan(&self) -> Result<Trajectory> {
        self.parameters.validate()?;

        let trajectory = algorithm::plan_trajectory(
            self.parameters.l1,
            self.parameters.l2,
            &self.start(),
            &self.parameters.target(),
            self.parameters.elbow,
            self.steps,
        )
        .map_err(|e| {
            log::error!("{}", e);
            e
        })?;

        Ok(trajectory)
    }
}

impl Scenario for ArmScenario {
    fn name(&self) -> &str {
        "arm"
    }

    fn scenes(&self) -> Result<Vec<Scene>> {
        log::info!("Arm {} in {} plane", self.parameters, self.plane);

        let trajectory = self.plan()?;

        if let Some(angles) = trajectory.last() {
            log::info!("Final {}", angles);
        }

        let fk = ForwardKinematics::new(self.parameters.l1, self.parameters.l2);
        let target = self.plane.embed(&self.parameters.target());

        let scenes = trajectory
            .iter()
            .enumerate()
            .map(|(index, angles)| {
                let [p0, p1, p2] = fk.solve(angles).map(|point| self.plane.embed(&point));

                let mut scene = Scene::new(index);
                scene
                    .add_segment("link1", p0, p1)
                    .add_segment("link2", p1, p2)
                    .add_point("shoulder", p0)
                    .add_point("elbow", p1)
                    .add_point("effector", p2)
                    .add_target("target", target);
                scene
            })
            .collect();

        Ok(scenes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Primitive;
    use crate::Error;
    use kinema_core::nalgebra::{distance, Point3};
    use kinema_core::Elbow;

    fn effector(scene: &Scene) -> Point3<f64> {
        match scene.find("effector") {
            Some(Primitive::Point { position, .. }) => *position,
            _ => panic!("no effector in scene"),
        }
    }

    #[test]
    fn test_arm_default() {
        let scenario = ArmScenario::from_config(&ArmConfig::default());

        let scenes = scenario.scenes().unwrap();

        assert_eq!(scenes.len(), 100);
        assert_eq!(scenes[0].len(), 6);
        assert_eq!(effector(&scenes[0]), Point3::new(12.0, 0.0, 0.0));

        let last = effector(&scenes[99]);
        assert!(distance(&last, &Point3::new(4.0, 6.0, 0.0)) < 1e-9);
    }

    #[test]
    fn test_arm_plane() {
        let config = ArmConfig {
            plane: Plane::YZ,
            elbow: Elbow::Down,
            ..Default::default()
        };

        let scenes = ArmScenario::from_config(&config).scenes().unwrap();

        for scene in &scenes {
            assert_eq!(effector(scene).x, 0.0);
        }

        let last = effector(scenes.last().unwrap());
        assert!(distance(&last, &Point3::new(0.0, 4.0, 6.0)) < 1e-9);
    }

    #[test]
    fn test_arm_unreachable() {
        let parameters = ArmParameters::new(7.0, 5.0, Point2::new(1.0, 0.0), Elbow::Up);

        let result = ArmScenario::new(parameters, Plane::XY, 100).scenes();

        assert!(matches!(
            result,
            Err(Error::Kinematic(kinema_core::Error::UnreachableTarget(_)))
        ));
    }

    #[test]
    fn test_arm_unreachable_waypoint() {
        let parameters = ArmParameters::new(7.0, 5.0, Point2::new(-12.0, 0.0), Elbow::Up);

        let result = ArmScenario::new(parameters, Plane::XY, 3).scenes();

        assert!(matches!(
            result,
            Err(Error::Kinematic(kinema_core::Error::UnreachableWaypoint(1, _)))
        ));
    }
}
