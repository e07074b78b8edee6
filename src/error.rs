//! Error types for the kernel and its configuration.

use thiserror::Error;

use crate::application::Lifecycle;

/// Errors raised by grid access.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Coordinates outside `[0, width) x [0, height)`.
    #[error("cell ({x}, {y}) is outside the {width}x{height} grid")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
}

/// Errors raised while validating or loading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Density must be a probability.
    #[error("density {0} is not in [0, 1]")]
    InvalidDensity(f64),

    /// Malformed JSON configuration.
    #[error("config parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("cannot read config: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised while parsing `B../S..` rule notation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleParseError {
    #[error("rule is missing the B (birth) part")]
    MissingBirth,

    #[error("rule is missing the S (survival) part")]
    MissingSurvival,

    #[error("invalid neighbor count {0:?} in rule")]
    InvalidDigit(char),

    #[error("rule part {0:?} given more than once")]
    Duplicate(char),
}

/// Errors raised by the simulation lifecycle.
#[derive(Debug, Error)]
pub enum SimulationError {
    #[error(transparent)]
    Grid(#[from] GridError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The requested action is not valid in the current lifecycle state.
    #[error("cannot {action} while {from:?}")]
    InvalidTransition {
        from: Lifecycle,
        action: &'static str,
    },
}
