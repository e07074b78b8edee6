//! Algorithm enum for selecting how a generation is computed.
//!
//! Both variants run the same two passes (count, then apply) and produce
//! identical grids; they differ only in whether the passes are split across
//! rayon workers.

use serde::{Deserialize, Serialize};

use super::{Grid, Rule};

/// Available step implementations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// One thread, cell by cell
    #[default]
    Serial,
    /// Both passes as rayon parallel iterators
    Parallel,
}

impl Algorithm {
    /// Get all available algorithms
    pub fn all() -> Vec<Algorithm> {
        vec![Algorithm::Serial, Algorithm::Parallel]
    }

    /// Display name for UI
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Serial",
            Algorithm::Parallel => "Parallel",
        }
    }

    /// Short description for tooltips/info
    pub fn description(&self) -> &'static str {
        match self {
            Algorithm::Serial => "Two passes, single thread",
            Algorithm::Parallel => "Two passes, rayon worker pool",
        }
    }

    /// Advance `grid` one generation
    pub fn step(&self, grid: &mut Grid, rule: &Rule) {
        match self {
            Algorithm::Serial => grid.step(rule),
            Algorithm::Parallel => grid.step_parallel(rule),
        }
    }
}
