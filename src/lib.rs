// Domain layer - Cellular automaton kernel
pub mod domain;

// Application layer - Lifecycle and coordination
pub mod application;

pub mod error;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

// Re-exports for convenience
pub use domain::{Algorithm, Cell, Grid, Neighborhood, Rule, Tessellation};
pub use application::{GenerationClock, Lifecycle, Simulation, SimulationConfig};
pub use error::{ConfigError, GridError, RuleParseError, SimulationError};
