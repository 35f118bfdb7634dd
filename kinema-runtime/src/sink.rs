//! Frame sinks.
//!
//! A sink receives the scenes of one scenario at a time. Every scenario is
//! bracketed by [`FrameSink::begin`] and [`FrameSink::finish`].

use crate::scene::Scene;
use crate::Result;

pub trait FrameSink {
    /// Start a new scenario.
    fn begin(&mut self, _name: &str) -> Result {
        Ok(())
    }

    /// Draw a single scene.
    fn draw(&mut self, scene: &Scene) -> Result;

    /// End the current scenario.
    fn finish(&mut self) -> Result {
        Ok(())
    }
}

impl<S: FrameSink + ?Sized> FrameSink for Box<S> {
    fn begin(&mut self, name: &str) -> Result {
        (**self).begin(name)
    }

    fn draw(&mut self, scene: &Scene) -> Result {
        (**self).draw(scene)
    }

    fn finish(&mut self) -> Result {
        (**self).finish()
    }
}

/// Write every primitive to the log.
pub struct LogSink {
    name: String,
    level: log::Level,
}

impl LogSink {
    pub fn new(level: log::Level) -> Self {
        Self {
            name: String::new(),
            level,
        }
    }
}

impl Default for LogSink {
    fn default() -> Self {
        Self::new(log::Level::Info)
    }
}

impl FrameSink for LogSink {
    fn begin(&mut self, name: &str) -> Result {
        self.name = name.to_string();
        log::log!(self.level, "Scenario {}", self.name);
        Ok(())
    }

    fn draw(&mut self, scene: &Scene) -> Result {
        log::log!(self.level, "{} frame {}", self.name, scene.index());

        for primitive in scene.primitives() {
            log::log!(self.level, "  {}", primitive);
        }

        Ok(())
    }

    fn finish(&mut self) -> Result {
        log::log!(self.level, "Scenario {} done", self.name);
        Ok(())
    }
}

/// Keep all scenes in memory.
#[derive(Debug, Default)]
pub struct Recorder {
    scenarios: Vec<(String, Vec<Scene>)>,
    finished: usize,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded scenarios with their scenes, in order of arrival.
    #[inline]
    pub fn scenarios(&self) -> &[(String, Vec<Scene>)] {
        &self.scenarios
    }

    /// Scenes of the most recent scenario.
    pub fn scenes(&self) -> &[Scene] {
        self.scenarios
            .last()
            .map(|(_, scenes)| scenes.as_slice())
            .unwrap_or_default()
    }

    /// Number of scenarios that were finished.
    #[inline]
    pub fn finished(&self) -> usize {
        self.finished
    }
}

impl FrameSink for Recorder {
    fn begin(&mut self, name: &str) -> Result {
        self.scenarios.push((name.to_string(), Vec::new()));
        Ok(())
    }

    fn draw(&mut self, scene: &Scene) -> Result {
        match self.scenarios.last_mut() {
            Some((_, scenes)) => scenes.push(scene.clone()),
            None => self.scenarios.push((String::new(), vec![scene.clone()])),
        }

        Ok(())
    }

    fn finish(&mut self) -> Result {
        self.finished += 1;
        Ok(())
    }
}
