use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::{Algorithm, Neighborhood, Rule, Tessellation, default_rule};
use crate::error::ConfigError;

/// Everything needed to build a simulation.
///
/// Missing JSON fields fall back to [`SimulationConfig::default`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Tiling shape; also decides which cells are mirrored.
    pub tessellation: Tessellation,
    /// Displacement table. Should suit `tessellation`; not checked.
    pub neighborhood: Neighborhood,
    /// Toroidal edges when true, truncated edges otherwise.
    pub wrap: bool,
    /// Probability that a cell starts alive.
    pub density: f64,
    /// Keep/spawn masks.
    pub rule: Rule,
    /// Canvas extents in pixels, used only to size the grid.
    pub canvas_width: u32,
    pub canvas_height: u32,
    /// Cell width in pixels.
    pub cell_diameter: u32,
    /// Delay between generations. Read by the driving clock, not the kernel.
    pub generation_delay_ms: u64,
    /// Build straight into the paused state.
    pub start_paused: bool,
    /// Seed for the initial states; fresh entropy when absent.
    pub seed: Option<u64>,
    pub algorithm: Algorithm,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            tessellation: Tessellation::Hexagonal,
            neighborhood: Neighborhood::HexHoneycomb,
            wrap: true,
            density: 0.3,
            rule: default_rule(),
            canvas_width: 100,
            canvas_height: 100,
            cell_diameter: 10,
            generation_delay_ms: 100,
            start_paused: false,
            seed: None,
            algorithm: Algorithm::Serial,
        }
    }
}

impl SimulationConfig {
    /// Parse a JSON config and validate it
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Check the values the kernel cannot work with.
    ///
    /// Undersized canvases and odd tessellation/neighborhood pairings are
    /// allowed; they give an empty grid or an unusual topology.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(ConfigError::InvalidDensity(self.density));
        }
        Ok(())
    }

    /// Grid dimensions this config produces
    pub fn grid_dimensions(&self) -> (usize, usize) {
        self.tessellation
            .dimensions(self.canvas_width, self.canvas_height, self.cell_diameter)
    }

    /// Build into the paused state (builder pattern)
    pub fn with_paused(mut self, paused: bool) -> Self {
        self.start_paused = paused;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_canvas(mut self, width: u32, height: u32) -> Self {
        self.canvas_width = width;
        self.canvas_height = height;
        self
    }

    /// Switch tessellation, moving to its first native neighborhood when the
    /// current one was drawn for another tiling
    pub fn with_tessellation(mut self, tessellation: Tessellation) -> Self {
        self.tessellation = tessellation;
        if self.neighborhood.native_tessellation() != tessellation {
            if let Some(&first) = Neighborhood::for_tessellation(tessellation).first() {
                self.neighborhood = first;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SimulationConfig::default();
        assert_eq!(config.tessellation, Tessellation::Hexagonal);
        assert_eq!(config.neighborhood, Neighborhood::HexHoneycomb);
        assert_eq!(config.rule, Rule::new(0b1100, 0b1000));
        assert_eq!(config.grid_dimensions(), (9, 11));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = SimulationConfig::from_json_str(
            r#"{
                "tessellation": "triangular",
                "neighborhood": "tri_moore",
                "wrap": false,
                "rule": { "keep": 12, "spawn": 8 },
                "seed": 42
            }"#,
        )
        .unwrap();

        assert_eq!(config.tessellation, Tessellation::Triangular);
        assert_eq!(config.neighborhood, Neighborhood::TriMoore);
        assert!(!config.wrap);
        assert_eq!(config.rule, Rule::conway());
        assert_eq!(config.seed, Some(42));
        assert_eq!(config.density, 0.3);
        assert_eq!(config.cell_diameter, 10);
    }

    #[test]
    fn test_json_round_trip() {
        let config = SimulationConfig::default()
            .with_seed(9)
            .with_tessellation(Tessellation::Rectangular);
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(SimulationConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_density_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "density": 1.2 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDensity(_)));

        let config = SimulationConfig {
            density: -0.1,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = SimulationConfig::from_json_str(r#"{ "tessellation": "octagonal" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_file_errors_are_reported() {
        let missing = std::env::temp_dir().join("hex_life_missing_config.json");
        let _ = std::fs::remove_file(&missing);
        let err = SimulationConfig::from_json_file(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
        assert!(err.to_string().starts_with("cannot read config"));

        let bad = std::env::temp_dir().join(format!("hex_life_bad_{}.json", std::process::id()));
        std::fs::write(&bad, "{ not json").unwrap();
        let err = SimulationConfig::from_json_file(&bad).unwrap_err();
        std::fs::remove_file(&bad).unwrap();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_file_loads() {
        let path = std::env::temp_dir().join(format!("hex_life_ok_{}.json", std::process::id()));
        std::fs::write(&path, r#"{ "wrap": false, "seed": 3 }"#).unwrap();
        let config = SimulationConfig::from_json_file(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert!(!config.wrap);
        assert_eq!(config.seed, Some(3));
    }

    #[test]
    fn test_with_tessellation_keeps_native_neighborhood() {
        let config = SimulationConfig::default().with_tessellation(Tessellation::Rectangular);
        assert_eq!(config.neighborhood, Neighborhood::RectVonNeumann);

        let config = SimulationConfig {
            neighborhood: Neighborhood::HexStar,
            ..Default::default()
        }
        .with_tessellation(Tessellation::Hexagonal);
        assert_eq!(config.neighborhood, Neighborhood::HexStar);
    }
}
