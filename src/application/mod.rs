mod clock;
mod config;
mod simulation;

pub use clock::GenerationClock;
pub use config::SimulationConfig;
pub use simulation::{Lifecycle, Simulation};
