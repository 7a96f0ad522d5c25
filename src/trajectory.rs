//! Recorded trajectory of a propagation run.
//!
//! The recorder is a sink: it appends whatever positions the driver hands it
//! and never inspects them. No decimation, no deduplication.

use bevy::math::DVec2;

/// Chronologically ordered positions, one per completed step.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Trajectory {
    points: Vec<DVec2>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Position recorded after step `step` (1-based).
    pub fn at_step(&self, step: usize) -> Option<DVec2> {
        step.checked_sub(1).and_then(|i| self.points.get(i).copied())
    }

    pub fn first(&self) -> Option<DVec2> {
        self.points.first().copied()
    }

    pub fn last(&self) -> Option<DVec2> {
        self.points.last().copied()
    }

    pub fn points(&self) -> &[DVec2] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVec2> {
        self.points.iter()
    }

    /// Smallest distance from the origin over the recorded points.
    pub fn min_radius(&self) -> Option<f64> {
        self.points.iter().map(|p| p.length()).reduce(f64::min)
    }

    /// Largest distance from the origin over the recorded points.
    pub fn max_radius(&self) -> Option<f64> {
        self.points.iter().map(|p| p.length()).reduce(f64::max)
    }

    /// Polyline length through the recorded points (m).
    pub fn path_length(&self) -> f64 {
        self.points.windows(2).map(|w| (w[1] - w[0]).length()).sum()
    }

    pub fn into_points(self) -> Vec<DVec2> {
        self.points
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a DVec2;
    type IntoIter = std::slice::Iter<'a, DVec2>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

/// Append-only accumulator owned by the simulation driver.
#[derive(Clone, Debug, Default)]
pub struct TrajectoryRecorder {
    trajectory: Trajectory,
}

impl TrajectoryRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorder with room for `capacity` points, so a full run never reallocates.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            trajectory: Trajectory {
                points: Vec::with_capacity(capacity),
            },
        }
    }

    #[inline]
    pub fn record(&mut self, pos: DVec2) {
        self.trajectory.points.push(pos);
    }

    pub fn len(&self) -> usize {
        self.trajectory.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trajectory.is_empty()
    }

    /// Borrowed view of everything recorded so far.
    pub fn view(&self) -> &Trajectory {
        &self.trajectory
    }

    /// Owned copy of everything recorded so far.
    pub fn snapshot(&self) -> Trajectory {
        self.trajectory.clone()
    }

    pub fn into_trajectory(self) -> Trajectory {
        self.trajectory
    }
}
