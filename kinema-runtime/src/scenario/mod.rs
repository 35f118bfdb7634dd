//! Animated manipulator scenarios.
//!
//! A scenario computes every scene up front. Nothing is drawn when any
//! frame fails, so an unreachable target never produces a partial
//! animation.

mod arm;
mod cuboid;
mod scara;
mod serial;
mod sweep;

pub use arm::ArmScenario;
pub use cuboid::{CuboidMode, CuboidScenario};
pub use scara::ScaraScenario;
pub use serial::SerialScenario;
pub use sweep::SweepScenario;

use crate::scene::Scene;
use crate::Result;

pub trait Scenario {
    /// Scenario name.
    fn name(&self) -> &str;

    /// All scenes of the animation in order.
    fn scenes(&self) -> Result<Vec<Scene>>;
}
