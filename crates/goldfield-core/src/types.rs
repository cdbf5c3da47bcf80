//! Fundamental grid and simulation-time types.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Integer grid cell coordinate. x = column (east), y = row (south).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPos {
    pub x: i32,
    pub y: i32,
}

/// Simulation time tracking.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulation time in seconds.
    pub elapsed_secs: f64,
}

impl GridPos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn as_ivec2(self) -> IVec2 {
        IVec2::new(self.x, self.y)
    }

    /// Squared Euclidean distance in cells. Exact, used for nearest-neighbour ordering.
    pub fn distance_sq_to(&self, other: &GridPos) -> i64 {
        let dx = (other.x - self.x) as i64;
        let dy = (other.y - self.y) as i64;
        dx * dx + dy * dy
    }

    /// Euclidean distance in cells.
    pub fn distance_to(&self, other: &GridPos) -> f64 {
        (self.distance_sq_to(other) as f64).sqrt()
    }

    /// Move one cell toward `target` on each axis independently
    /// (diagonal steps allowed). No-op when already on the target cell.
    pub fn step_toward(&mut self, target: &GridPos) {
        let step = (target.as_ivec2() - self.as_ivec2()).signum();
        self.x += step.x;
        self.y += step.y;
    }
}

impl From<IVec2> for GridPos {
    fn from(v: IVec2) -> Self {
        Self { x: v.x, y: v.y }
    }
}

impl SimTime {
    /// Seconds per tick at the default tick rate.
    pub fn dt(&self) -> f64 {
        crate::constants::DT
    }

    /// Advance by one tick.
    pub fn advance(&mut self) {
        self.tick += 1;
        self.elapsed_secs += self.dt();
    }
}
