use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;

use super::SimulationConfig;
use crate::domain::{Grid, Rule};
use crate::error::{GridError, SimulationError};

/// Lifecycle of a [`Simulation`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, no grid yet
    Uninitialized,
    Running,
    /// Built, but `step()` does nothing
    Paused,
    /// Torn down; `build()` brings it back
    Destroyed,
}

/// Simulation orchestrates the kernel.
/// This is the application layer that coordinates domain logic: it owns the
/// grid, the rule and the config, and is the only state there is.
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    rule: Rule,
    state: Lifecycle,
    generation: u64,
    rng: StdRng,
}

impl Simulation {
    /// Create an unbuilt simulation
    pub fn new(config: SimulationConfig) -> Self {
        let rng = Self::make_rng(&config);
        Self {
            rule: config.rule,
            config,
            grid: Grid::empty(),
            state: Lifecycle::Uninitialized,
            generation: 0,
            rng,
        }
    }

    fn make_rng(config: &SimulationConfig) -> StdRng {
        match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }

    /// Size the grid from the config, resolve its topology and seed random
    /// initial states.
    ///
    /// Valid from `Uninitialized` and `Destroyed`. An invalid config leaves
    /// the simulation untouched.
    pub fn build(&mut self) -> Result<(), SimulationError> {
        if !matches!(self.state, Lifecycle::Uninitialized | Lifecycle::Destroyed) {
            return Err(SimulationError::InvalidTransition {
                from: self.state,
                action: "build",
            });
        }
        self.config.validate()?;

        if self.config.seed.is_some() {
            self.rng = Self::make_rng(&self.config);
        }

        let (width, height) = self.config.grid_dimensions();
        let mut grid = Grid::new(
            self.config.tessellation,
            self.config.neighborhood,
            self.config.wrap,
            width,
            height,
        );
        grid.randomize(self.config.density, &mut self.rng)?;

        self.grid = grid;
        self.rule = self.config.rule;
        self.generation = 0;
        self.state = if self.config.start_paused {
            Lifecycle::Paused
        } else {
            Lifecycle::Running
        };
        debug!("Simulation built ({:?}), rule {}", self.state, self.rule);
        Ok(())
    }

    /// Release the grid. Safe from any state, including `Destroyed`.
    pub fn teardown(&mut self) {
        self.grid.teardown();
        self.generation = 0;
        if self.state != Lifecycle::Destroyed {
            debug!("Simulation torn down from {:?}", self.state);
        }
        self.state = Lifecycle::Destroyed;
    }

    /// Tear down and build again from `config`. Nothing of the old run
    /// survives.
    pub fn restart(&mut self, config: SimulationConfig) -> Result<(), SimulationError> {
        config.validate()?;
        self.teardown();
        self.config = config;
        self.build()
    }

    /// Advance one generation while running.
    ///
    /// Returns whether a generation was computed.
    pub fn step(&mut self) -> bool {
        if self.state != Lifecycle::Running {
            return false;
        }
        self.config.algorithm.step(&mut self.grid, &self.rule);
        self.generation += 1;
        true
    }

    /// Running -> Paused. Pausing twice is the same as pausing once.
    pub fn pause(&mut self) {
        if self.state == Lifecycle::Running {
            self.state = Lifecycle::Paused;
        }
    }

    /// Paused -> Running
    pub fn resume(&mut self) {
        if self.state == Lifecycle::Paused {
            self.state = Lifecycle::Running;
        }
    }

    /// Toggle play/pause state
    pub fn toggle_pause(&mut self) {
        match self.state {
            Lifecycle::Running => self.pause(),
            Lifecycle::Paused => self.resume(),
            Lifecycle::Uninitialized | Lifecycle::Destroyed => {}
        }
    }

    /// Flip one cell, bypassing the rule
    pub fn toggle_cell(&mut self, x: usize, y: usize) -> Result<(), GridError> {
        self.grid.toggle_cell(x, y)
    }

    pub fn state(&self) -> Lifecycle {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == Lifecycle::Running
    }

    pub fn is_paused(&self) -> bool {
        self.state == Lifecycle::Paused
    }

    /// Generations computed since the last build
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn rule(&self) -> Rule {
        self.rule
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    /// `(x, y, alive)` for every cell, row by row
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.grid.iter_cells()
    }

    pub fn neighbors_of(&self, x: usize, y: usize) -> Result<Vec<(usize, usize)>, GridError> {
        self.grid.neighbors_of(x, y)
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }
}
