use std::path::Path;
use std::time::Duration;

use kinema_core::{Axis, Elbow, Plane};
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub trait Configurable: Clone {
    fn global(&self) -> &GlobalConfig;
}

/// Kinema global configuration.
#[derive(Clone, Debug, Default)]
pub struct GlobalConfig {
    /// Name of the binary.
    pub bin_name: String,
    /// Level of verbosity.
    pub verbose: u8,
    /// Delay between two frames.
    pub frame_interval: Duration,
}

impl Configurable for GlobalConfig {
    fn global(&self) -> &GlobalConfig {
        self
    }
}

/// Planar arm driven by inverse kinematics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArmConfig {
    /// Length of the first link.
    pub l1: f64,
    /// Length of the second link.
    pub l2: f64,
    /// Target point in plane coordinates.
    pub target: [f64; 2],
    pub elbow: Elbow,
    /// Plane the arm moves in.
    pub plane: Plane,
    /// Number of trajectory samples, both ends included.
    pub steps: usize,
}

impl Default for ArmConfig {
    fn default() -> Self {
        Self {
            l1: 7.0,
            l2: 5.0,
            target: [4.0, 6.0],
            elbow: Elbow::Up,
            plane: Plane::XY,
            steps: 100,
        }
    }
}

/// Planar arm driven by stepping the joints, angles in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub l1: f64,
    pub l2: f64,
    /// Final shoulder angle.
    pub theta1: f64,
    /// Final elbow angle.
    pub theta2: f64,
    /// Joint increment per frame.
    pub step: f64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            l1: 8.0,
            l2: 6.0,
            theta1: 90.0,
            theta2: 45.0,
            step: 1.5,
        }
    }
}

/// Three link serial chain, angles in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// Link lengths from base to tip.
    pub links: [f64; 3],
    /// Final joint angle of the sweep.
    pub sweep: f64,
    /// Final tilt of the whole chain.
    pub tilt: f64,
    /// Tilt axis of the whole chain.
    pub tilt_axis: Axis,
    /// Angle increment per frame.
    pub step: f64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            links: [15.0, 5.0, 7.0],
            sweep: 30.0,
            tilt: 30.0,
            tilt_axis: Axis::X,
            step: 1.0,
        }
    }
}

/// SCARA manipulator, angles in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaraConfig {
    /// Fixed shoulder angle.
    pub theta1: f64,
    pub l1: f64,
    pub l2: f64,
    /// Height of the arm plane above the base.
    pub base_height: f64,
    /// Half the side of the square platter.
    pub platter_radius: f64,
    /// Frames of the elbow phase.
    pub arm_frames: usize,
    /// Frames of the piston phase.
    pub piston_frames: usize,
    /// Elbow angle at the end of the elbow phase.
    pub theta2: f64,
    /// Piston height during the elbow phase.
    pub piston_start: f64,
    /// Piston height at the end of the piston phase.
    pub piston_end: f64,
    /// Platter rotation over the whole animation.
    pub platter_turn: f64,
}

impl Default for ScaraConfig {
    fn default() -> Self {
        Self {
            theta1: 30.0,
            l1: 715.0,
            l2: 850.0,
            base_height: 776.0,
            platter_radius: 100.0,
            arm_frames: 120,
            piston_frames: 120,
            theta2: 90.0,
            piston_start: 880.0,
            piston_end: 418.5,
            platter_turn: 360.0,
        }
    }
}

/// Rigid box, angles in degrees.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CuboidConfig {
    /// Corner of the box at rest.
    pub origin: [f64; 3],
    /// Extent along X, Y and Z.
    pub size: [f64; 3],
    /// Frames per rotation.
    pub steps: usize,
    /// Angle increment per frame of the combined rotation.
    pub combined_step: f64,
    /// Translation of the placed box.
    pub translation: [f64; 3],
    /// Rotation axis of the placed box.
    pub axis: Axis,
    /// Rotation of the placed box.
    pub angle: f64,
}

impl Default for CuboidConfig {
    fn default() -> Self {
        Self {
            origin: [0.0, 0.0, 0.0],
            size: [7.0, 2.0, 3.0],
            steps: 90,
            combined_step: 2.0,
            translation: [4.0, 4.0, 4.0],
            axis: Axis::Z,
            angle: 45.0,
        }
    }
}

/// Scenario configuration.
///
/// Every section and every field is optional in the file; missing values
/// take their defaults.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Delay between two frames in milliseconds.
    pub interval: u64,
    pub arm: ArmConfig,
    pub sweep: SweepConfig,
    pub chain: ChainConfig,
    pub scara: ScaraConfig,
    pub cuboid: CuboidConfig,
}

fn ensure_positive(name: &str, value: f64) -> Result {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(Error::Config(format!("{} must be positive, got {}", name, value)))
    }
}

fn ensure_finite(name: &str, value: f64) -> Result {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::Config(format!("{} must be finite, got {}", name, value)))
    }
}

fn ensure_nonzero(name: &str, value: usize) -> Result {
    if value > 0 {
        Ok(())
    } else {
        Err(Error::Config(format!("{} must be at least one", name)))
    }
}

impl Config {
    /// Read the configuration from the first path that exists.
    ///
    /// Falls back to the defaults when none of the paths exist.
    pub fn try_from_file<P: AsRef<Path>>(paths: Vec<P>) -> Result<Self> {
        for path in paths {
            if path.as_ref().exists() {
                return Self::from_file(path);
            }
        }

        log::debug!("No configuration file found, using defaults");

        Ok(Self::default())
    }

    /// Read the configuration from a file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        log::debug!("Reading configuration from {}", path.as_ref().display());

        std::fs::read_to_string(path)?.parse()
    }

    /// Check all values for consistency.
    pub fn validate(&self) -> Result {
        ensure_positive("arm.l1", self.arm.l1)?;
        ensure_positive("arm.l2", self.arm.l2)?;
        ensure_finite("arm.target", self.arm.target[0])?;
        ensure_finite("arm.target", self.arm.target[1])?;
        ensure_nonzero("arm.steps", self.arm.steps)?;

        ensure_positive("sweep.l1", self.sweep.l1)?;
        ensure_positive("sweep.l2", self.sweep.l2)?;
        ensure_finite("sweep.theta1", self.sweep.theta1)?;
        ensure_finite("sweep.theta2", self.sweep.theta2)?;
        ensure_positive("sweep.step", self.sweep.step)?;

        for length in self.chain.links {
            ensure_positive("chain.links", length)?;
        }
        ensure_finite("chain.sweep", self.chain.sweep)?;
        ensure_finite("chain.tilt", self.chain.tilt)?;
        ensure_positive("chain.step", self.chain.step)?;

        ensure_finite("scara.theta1", self.scara.theta1)?;
        ensure_positive("scara.l1", self.scara.l1)?;
        ensure_positive("scara.l2", self.scara.l2)?;
        ensure_positive("scara.base_height", self.scara.base_height)?;
        ensure_positive("scara.platter_radius", self.scara.platter_radius)?;
        ensure_finite("scara.theta2", self.scara.theta2)?;
        ensure_finite("scara.piston_start", self.scara.piston_start)?;
        ensure_finite("scara.piston_end", self.scara.piston_end)?;
        ensure_finite("scara.platter_turn", self.scara.platter_turn)?;

        for value in self.cuboid.origin.iter().chain(&self.cuboid.translation) {
            ensure_finite("cuboid", *value)?;
        }
        for extent in self.cuboid.size {
            ensure_positive("cuboid.size", extent)?;
        }
        ensure_nonzero("cuboid.steps", self.cuboid.steps)?;
        ensure_finite("cuboid.combined_step", self.cuboid.combined_step)?;
        ensure_finite("cuboid.angle", self.cuboid.angle)?;

        Ok(())
    }

    #[inline]
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.interval)
    }
}

impl std::str::FromStr for Config {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let config: Config = toml::from_str(s)?;
        config.validate()?;

        Ok(config)
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Arm: {}x{} {} elbow in {}; Sweep: {}x{}; Chain: {:?}; SCARA: {}x{}; Box: {:?}",
            self.arm.l1,
            self.arm.l2,
            self.arm.elbow,
            self.arm.plane,
            self.sweep.l1,
            self.sweep.l2,
            self.chain.links,
            self.scara.l1,
            self.scara.l2,
            self.cuboid.size,
        )
    }
}
