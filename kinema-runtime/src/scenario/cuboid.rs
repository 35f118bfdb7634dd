use kinema_core::nalgebra::Point3;
use kinema_core::{Axis, Cuboid, Transform};

use super::Scenario;
use crate::config::CuboidConfig;
use crate::scene::Scene;
use crate::{Error, Result};

/// How the box moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CuboidMode {
    /// Rotate about X, then Y, then Z. Each rotation starts where the
    /// previous one ended.
    Sequential,
    /// Rotate about all three axes at once.
    Combined,
    /// Translate and rotate in a single rigid motion.
    Placement,
}

impl std::str::FromStr for CuboidMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "sequential" => Ok(CuboidMode::Sequential),
            "combined" => Ok(CuboidMode::Combined),
            "placement" => Ok(CuboidMode::Placement),
            _ => Err(Error::Config(format!("unknown box mode '{}'", s))),
        }
    }
}

impl std::fmt::Display for CuboidMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CuboidMode::Sequential => write!(f, "sequential"),
            CuboidMode::Combined => write!(f, "combined"),
            CuboidMode::Placement => write!(f, "placement"),
        }
    }
}

/// Rigid box animation.
pub struct CuboidScenario {
    cuboid: Cuboid,
    mode: CuboidMode,
    steps: usize,
    /// Degrees per frame of the combined rotation.
    combined_step: f64,
    placement: Transform,
}

impl CuboidScenario {
    pub fn from_config(config: &CuboidConfig, mode: CuboidMode) -> Self {
        let [x, y, z] = config.origin;
        let [dx, dy, dz] = config.size;
        let [tx, ty, tz] = config.translation;

        Self {
            cuboid: Cuboid::new(Point3::new(x, y, z), dx, dy, dz),
            mode,
            steps: config.steps,
            combined_step: config.combined_step,
            placement: Transform::translation(tx, ty, tz)
                * Transform::rotation(config.axis, config.angle.to_radians()),
        }
    }

    fn box_scene(index: usize, label: &str, cuboid: &Cuboid) -> Scene {
        let mut scene = Scene::new(index);
        Self::add_box(&mut scene, label, cuboid);
        scene
    }

    fn add_box(scene: &mut Scene, label: &str, cuboid: &Cuboid) {
        for (edge, (from, to)) in cuboid.edge_segments().enumerate() {
            scene.add_segment(format!("{}.{}", label, edge), from, to);
        }
        for (index, corner) in cuboid.corners().iter().enumerate() {
            scene.add_point(format!("{}.p{}", label, index + 1), *corner);
        }
    }

    fn sequential(&self) -> Vec<Scene> {
        let mut start = self.cuboid;
        let mut scenes = Vec::with_capacity(3 * self.steps);

        for axis in [Axis::X, Axis::Y, Axis::Z] {
            let mut last = start;

            for n in 0..self.steps {
                last = start.rotated(&Transform::rotation(axis, (n as f64).to_radians()));
                scenes.push(Self::box_scene(scenes.len(), "box", &last));
            }

            start = last;
        }

        scenes
    }

    fn combined(&self) -> Vec<Scene> {
        (0..self.steps)
            .map(|n| {
                let angle = (self.combined_step * n as f64).to_radians();
                let rotated = self.cuboid.rotated(&Transform::rotation_xyz(angle, angle, angle));

                Self::box_scene(n, "box", &rotated)
            })
            .collect()
    }

    fn placement(&self) -> Vec<Scene> {
        let placed = self.cuboid.transformed(&self.placement);

        let mut scene = Scene::new(0);
        Self::add_box(&mut scene, "original", &self.cuboid);
        Self::add_box(&mut scene, "placed", &placed);
        scene.add_frame("placement", self.placement.frame());

        vec![scene]
    }
}

impl Scenario for CuboidScenario {
    fn name(&self) -> &str {
        "cuboid"
    }

    fn scenes(&self) -> Result<Vec<Scene>> {
        log::info!("Box {} rotation", self.mode);

        let scenes = match self.mode {
            CuboidMode::Sequential => self.sequential(),
            CuboidMode::Combined => self.combined(),
            CuboidMode::Placement => self.placement(),
        };

        Ok(scenes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::Primitive;
    use approx::assert_relative_eq;

    fn corner(scene: &Scene, label: &str) -> Point3<f64> {
        match scene.find(label) {
            Some(Primitive::Point { position, .. }) => *position,
            _ => panic!("no corner {}", label),
        }
    }

    #[test]
    fn test_cuboid_mode_parse() {
        assert_eq!("combined".parse::<CuboidMode>().unwrap(), CuboidMode::Combined);
        assert_eq!(" Placement".parse::<CuboidMode>().unwrap(), CuboidMode::Placement);
        assert!("spin".parse::<CuboidMode>().is_err());
    }

    #[test]
    fn test_cuboid_sequential() {
        let scenario = CuboidScenario::from_config(&CuboidConfig::default(), CuboidMode::Sequential);

        let scenes = scenario.scenes().unwrap();

        assert_eq!(scenes.len(), 270);
        // Twelve edges and eight corners.
        assert_eq!(scenes[0].len(), 20);
        assert_eq!(corner(&scenes[0], "box.p2"), Point3::new(7.0, 0.0, 0.0));

        // The Y rotation starts from the box as left by the X rotation.
        let carried = Cuboid::new(Point3::origin(), 7.0, 2.0, 3.0)
            .rotated(&Transform::rotation_x(89.0_f64.to_radians()));
        assert_eq!(corner(&scenes[90], "box.p7"), carried.corners()[6]);
    }

    #[test]
    fn test_cuboid_combined() {
        let scenario = CuboidScenario::from_config(&CuboidConfig::default(), CuboidMode::Combined);

        let scenes = scenario.scenes().unwrap();

        assert_eq!(scenes.len(), 90);

        let angle = 20.0_f64.to_radians();
        let expected = Cuboid::new(Point3::origin(), 7.0, 2.0, 3.0)
            .rotated(&Transform::rotation_xyz(angle, angle, angle));
        assert_relative_eq!(corner(&scenes[10], "box.p7"), expected.corners()[6], epsilon = 1e-12);
    }

    #[test]
    fn test_cuboid_placement() {
        let scenario = CuboidScenario::from_config(&CuboidConfig::default(), CuboidMode::Placement);

        let scenes = scenario.scenes().unwrap();

        assert_eq!(scenes.len(), 1);
        assert_eq!(scenes[0].len(), 41);
        assert_eq!(corner(&scenes[0], "original.p1"), Point3::origin());
        assert_relative_eq!(corner(&scenes[0], "placed.p1"), Point3::new(4.0, 4.0, 4.0), epsilon = 1e-12);

        let half = std::f64::consts::FRAC_1_SQRT_2;
        assert_relative_eq!(
            corner(&scenes[0], "placed.p2"),
            Point3::new(4.0 + 7.0 * half, 4.0 + 7.0 * half, 4.0),
            epsilon = 1e-12
        );
    }
}
