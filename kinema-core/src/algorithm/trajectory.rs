use nalgebra::Point2;

use super::{Elbow, InverseKinematics, JointAngles};
use crate::geometry::{lerp, linspace};
use crate::{Error, Result};

/// Upper bound on the number of samples produced by [`step_joints`].
pub const MAX_JOINT_STEPS: usize = 1_000_000;

/// Joint space trajectory of a two-link arm.
///
/// A trajectory only exists once every waypoint has been solved, there is
/// no partially planned state.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    waypoints: Vec<Point2<f64>>,
    angles: Vec<JointAngles>,
}

impl Trajectory {
    /// Plan a straight line in task space from `start` to `target`.
    ///
    /// The path is sampled at `steps` evenly spaced points including both
    /// ends, and every sample is solved with the same elbow configuration.
    /// The target is validated first. If any waypoint cannot be reached the
    /// whole plan is rejected.
    pub fn plan(
        ik: &InverseKinematics,
        start: &Point2<f64>,
        target: &Point2<f64>,
        elbow: Elbow,
        steps: usize,
    ) -> Result<Self> {
        ik.solve(target, elbow)?;

        let waypoints: Vec<Point2<f64>> = linspace(start.x, target.x, steps)
            .zip(linspace(start.y, target.y, steps))
            .map(|(x, y)| Point2::new(x, y))
            .collect();

        let angles = waypoints
            .iter()
            .enumerate()
            .map(|(index, waypoint)| {
                ik.solve(waypoint, elbow).map_err(|_| {
                    log::error!("Waypoint {} ({:.2}, {:.2}) out of reach", index, waypoint.x, waypoint.y);
                    Error::UnreachableWaypoint(index, *waypoint)
                })
            })
            .collect::<Result<Vec<_>>>()?;

        log::debug!("Planned trajectory of {} waypoints", angles.len());

        Ok(Self { waypoints, angles })
    }

    /// Task space waypoints.
    #[inline]
    pub fn waypoints(&self) -> &[Point2<f64>] {
        &self.waypoints
    }

    /// Joint angles per waypoint.
    #[inline]
    pub fn angles(&self) -> &[JointAngles] {
        &self.angles
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.angles.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.angles.is_empty()
    }

    /// Final joint configuration.
    #[inline]
    pub fn last(&self) -> Option<&JointAngles> {
        self.angles.last()
    }

    pub fn iter(&self) -> impl Iterator<Item = &JointAngles> {
        self.angles.iter()
    }
}

impl IntoIterator for Trajectory {
    type Item = JointAngles;
    type IntoIter = std::vec::IntoIter<JointAngles>;

    fn into_iter(self) -> Self::IntoIter {
        self.angles.into_iter()
    }
}

/// Interpolate linearly in joint space.
///
/// Uses the same sampling as [`linspace`]: both ends included.
pub fn interpolate_joints(start: &JointAngles, end: &JointAngles, steps: usize) -> Vec<JointAngles> {
    linspace(0.0, 1.0, steps)
        .map(|t| {
            JointAngles::new(
                lerp(start.theta1, end.theta1, t),
                lerp(start.theta2, end.theta2, t),
            )
        })
        .collect()
}

/// Advance both joints by a fixed step until each reaches its goal.
///
/// Every joint moves toward its goal by at most `step` per sample and is
/// clamped at the goal; a joint that arrived first waits there. The
/// sequence excludes the start and ends with the goal. Starting at the goal
/// yields an empty sequence. A step that would need more than
/// [`MAX_JOINT_STEPS`] samples is rejected.
pub fn step_joints(start: &JointAngles, end: &JointAngles, step: f64) -> Result<Vec<JointAngles>> {
    if !step.is_finite() || step <= 0.0 {
        return Err(Error::InvalidStep(step));
    }

    fn advance(current: f64, goal: f64, step: f64) -> f64 {
        if current < goal {
            (current + step).min(goal)
        } else {
            (current - step).max(goal)
        }
    }

    let span = (end.theta1 - start.theta1)
        .abs()
        .max((end.theta2 - start.theta2).abs());
    let count = (span / step).ceil();
    if count > MAX_JOINT_STEPS as f64 {
        return Err(Error::InvalidStep(step));
    }

    let count = count as usize;
    let mut current = *start;
    let mut sequence = Vec::new();

    for index in 1..=count {
        current = if index == count {
            *end
        } else {
            JointAngles::new(
                advance(current.theta1, end.theta1, step),
                advance(current.theta2, end.theta2, step),
            )
        };
        sequence.push(current);
    }

    Ok(sequence)
}
