use std::time::Duration;

use kinema_core::Plane;

use crate::config::GlobalConfig;
use crate::scenario::{ArmScenario, Scenario};
use crate::sink::FrameSink;
use crate::source::ParameterSource;
use crate::{Error, Result};

/// Feed scenario frames into a sink at a fixed pace.
#[derive(Clone, Copy, Debug, Default)]
pub struct Animator {
    interval: Duration,
}

impl Animator {
    pub fn new(interval: Duration) -> Self {
        Self { interval }
    }

    pub fn from_config(config: &GlobalConfig) -> Self {
        Self::new(config.frame_interval)
    }

    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Play a scenario from start to end.
    ///
    /// All scenes are computed before the first one is drawn. Returns the
    /// number of drawn frames.
    pub fn play<S: FrameSink + ?Sized>(&self, scenario: &dyn Scenario, sink: &mut S) -> Result<usize> {
        let scenes = scenario.scenes()?;

        log::debug!("Playing {} with {} frames", scenario.name(), scenes.len());

        sink.begin(scenario.name())?;

        for scene in &scenes {
            sink.draw(scene)?;

            if !self.interval.is_zero() {
                std::thread::sleep(self.interval);
            }
        }

        sink.finish()?;

        Ok(scenes.len())
    }

    /// Animate the arm for every parameter set the source yields.
    ///
    /// A target the arm cannot reach is reported and skipped. Any other
    /// failure ends the session. Returns the number of animations played.
    pub fn run_interactive<P, S>(
        &self,
        source: &mut P,
        plane: Plane,
        steps: usize,
        sink: &mut S,
    ) -> Result<usize>
    where
        P: ParameterSource + ?Sized,
        S: FrameSink + ?Sized,
    {
        let mut played = 0;

        while let Some(parameters) = source.next()? {
            let scenario = ArmScenario::new(parameters, plane, steps);

            match self.play(&scenario, sink) {
                Ok(_) => played += 1,
                Err(Error::Kinematic(e)) => {
                    log::warn!("Skipping {}: {}", parameters, e);
                }
                Err(e) => return Err(e),
            }
        }

        log::info!("Session ended after {} animations", played);

        Ok(played)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SweepConfig;
    use crate::program::Program;
    use crate::scenario::SweepScenario;
    use crate::sink::Recorder;
    use crate::source::ArmParameters;
    use kinema_core::nalgebra::Point2;
    use kinema_core::Elbow;

    #[test]
    fn test_animator_play() {
        let animator = Animator::default();
        let mut recorder = Recorder::new();

        let scenario = SweepScenario::from_config(&SweepConfig::default());
        let frames = animator.play(&scenario, &mut recorder).unwrap();

        assert_eq!(frames, 60);
        assert_eq!(recorder.scenarios()[0].0, "sweep");
        assert_eq!(recorder.scenes().len(), 60);
        assert_eq!(recorder.finished(), 1);
    }

    #[test]
    fn test_animator_play_nothing_on_failure() {
        let animator = Animator::default();
        let mut recorder = Recorder::new();

        let parameters = ArmParameters::new(7.0, 5.0, Point2::new(20.0, 0.0), Elbow::Up);
        let scenario = ArmScenario::new(parameters, Plane::XY, 10);

        assert!(animator.play(&scenario, &mut recorder).is_err());
        assert!(recorder.scenarios().is_empty());
    }

    #[test]
    fn test_animator_interactive_skips_unreachable() {
        let animator = Animator::default();
        let mut recorder = Recorder::new();

        let mut program: Program = [
            ArmParameters::new(7.0, 5.0, Point2::new(4.0, 6.0), Elbow::Up),
            ArmParameters::new(7.0, 5.0, Point2::new(20.0, 0.0), Elbow::Up),
            ArmParameters::new(3.0, 4.0, Point2::new(0.0, -6.0), Elbow::Down),
        ]
        .into_iter()
        .collect();

        let played = animator
            .run_interactive(&mut program, Plane::XY, 20, &mut recorder)
            .unwrap();

        assert_eq!(played, 2);
        assert_eq!(recorder.scenarios().len(), 2);
        assert_eq!(recorder.scenarios()[1].1.len(), 20);
        assert!(program.is_empty());
    }

    #[test]
    fn test_animator_interactive_stops_on_invalid_parameters() {
        let animator = Animator::default();
        let mut recorder = Recorder::new();

        let mut program: Program = [
            ArmParameters::new(0.0, 5.0, Point2::new(4.0, 0.0), Elbow::Up),
            ArmParameters::new(7.0, 5.0, Point2::new(4.0, 6.0), Elbow::Up),
        ]
        .into_iter()
        .collect();

        let result = animator.run_interactive(&mut program, Plane::XY, 20, &mut recorder);

        assert!(matches!(result, Err(Error::Config(_))));
        assert_eq!(program.len(), 1);
    }
}
