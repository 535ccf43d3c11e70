//! Engine configuration management via TOML files.
//!
//! This module provides configuration parsing from TOML format with sensible defaults.

use std::collections::HashMap;
use std::fmt;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Network shape and hyperparameters.
///
/// Sizes are fixed at construction and never change afterwards; the feature
/// extractor and the one-hot encoder both depend on them staying put.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkConfig {
    /// Input feature vector size
    pub input_size: usize,
    /// Hidden layer size
    pub hidden_size: usize,
    /// Output size (number of emotion classes)
    pub output_size: usize,
    /// Initial learning rate (decays linearly to 0 across epochs)
    pub learning_rate: f32,
    /// Number of training epochs
    pub epochs: usize,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            input_size: 48,
            hidden_size: 32,
            output_size: 10,
            learning_rate: 0.05,
            epochs: 60,
        }
    }
}

/// Engine configuration loaded from TOML file.
///
/// # Examples
///
/// ```
/// use mood_insight_core::EngineConfig;
///
/// let config = EngineConfig::load_from_file("config/engine.toml")
///     .unwrap_or_else(|_| EngineConfig::default());
///
/// println!("Network: {}→{}→{}", config.network.input_size,
///     config.network.hidden_size, config.network.output_size);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct EngineConfig {
    /// Network shape and hyperparameters
    pub network: NetworkConfig,
    /// Default forecast horizon in days
    pub horizon_days: usize,
    /// Random seed for deterministic weight initialization
    pub seed: u64,
}

impl EngineConfig {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(&path)?;
        Self::from_str(&contents)
    }

    pub fn from_str(toml_str: &str) -> Result<Self, ConfigError> {
        let mut section = String::new();
        let mut values: HashMap<String, String> = HashMap::new();

        for line in toml_str.lines() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }

            if trimmed.starts_with('[') && trimmed.ends_with(']') {
                section = trimmed.trim_matches(&['[', ']'][..]).to_string();
                continue;
            }

            let (key, value) = trimmed
                .split_once('=')
                .ok_or_else(|| ConfigError::Parse(format!("Invalid line: {}", trimmed)))?;
            let key = key.trim().to_string();
            let value = value.trim().trim_matches('"').to_string();
            values.insert(format!("{}::{}", section, key), value);
        }

        let defaults = NetworkConfig::default();
        let hidden_size = values
            .remove("network::hidden_size")
            .map(|v| v.parse())
            .transpose()
            .map_err(|_| ConfigError::Parse("hidden_size must be an integer".into()))?
            .unwrap_or(defaults.hidden_size);
        let learning_rate = values
            .remove("network::learning_rate")
            .map(|v| v.parse())
            .transpose()
            .map_err(|_| ConfigError::Parse("learning_rate must be a number".into()))?
            .unwrap_or(defaults.learning_rate);
        let epochs = values
            .remove("network::epochs")
            .map(|v| v.parse())
            .transpose()
            .map_err(|_| ConfigError::Parse("epochs must be an integer".into()))?
            .unwrap_or(defaults.epochs);
        let horizon_days = values
            .remove("predictor::horizon_days")
            .map(|v| v.parse())
            .transpose()
            .map_err(|_| ConfigError::Parse("horizon_days must be an integer".into()))?
            .unwrap_or(7);
        let seed = values
            .remove("engine::seed")
            .map(|v| v.parse())
            .transpose()
            .map_err(|_| ConfigError::Parse("seed must be an integer".into()))?
            .unwrap_or(42);

        Ok(Self {
            network: NetworkConfig {
                hidden_size,
                learning_rate,
                epochs,
                ..defaults
            },
            horizon_days,
            seed,
        })
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            network: NetworkConfig::default(),
            horizon_days: 7,
            seed: 42,
        }
    }
}

/// Errors raised while reading configuration.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "I/O error while reading config: {}", err),
            ConfigError::Parse(msg) => write!(f, "Config parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.network.input_size, 48);
        assert_eq!(config.network.hidden_size, 32);
        assert_eq!(config.network.output_size, 10);
        assert_eq!(config.horizon_days, 7);
    }

    #[test]
    fn test_from_str_overrides() {
        let toml = r#"
            [engine]
            seed = 7

            [network]
            hidden_size = 64
            learning_rate = 0.01
            epochs = 20

            [predictor]
            horizon_days = 3
        "#;

        let config = EngineConfig::from_str(toml).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.network.hidden_size, 64);
        assert!((config.network.learning_rate - 0.01).abs() < 1e-6);
        assert_eq!(config.network.epochs, 20);
        assert_eq!(config.horizon_days, 3);
        // Fixed sizes come from defaults regardless of file contents
        assert_eq!(config.network.input_size, 48);
        assert_eq!(config.network.output_size, 10);
    }

    #[test]
    fn test_from_str_rejects_garbage() {
        assert!(EngineConfig::from_str("not a config").is_err());
    }

    #[test]
    fn test_empty_str_gives_defaults() {
        let config = EngineConfig::from_str("").unwrap();
        assert_eq!(config.seed, 42);
        assert_eq!(config.network.epochs, NetworkConfig::default().epochs);
    }
}
