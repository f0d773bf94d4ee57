//! Operation parameters and the TOML configuration file.
//!
//! The parameters here are the only tunables of the engines: the
//! binarization threshold, the motion thresholds, the subtraction
//! constants, and the blending weights.

use crate::motion::{DEFAULT_LOW_MOTION_THRESHOLD, DEFAULT_MOTION_THRESHOLD};
use crate::ops::{DEFAULT_BINARY_THRESHOLD, DEFAULT_OFFSET};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parameters for the demonstration suites.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OperationConfig {
    /// Threshold used to binarize Boolean operands.
    pub binary_threshold: u8,
    /// Difference threshold for motion detection.
    pub motion_threshold: u8,
    /// More sensitive threshold for the comparison variant.
    pub motion_low_threshold: u8,
    /// Constants added by the offset subtraction, one result each.
    pub offsets: Vec<i16>,
    /// Weights of the first image, one blend each.
    pub blend_alphas: Vec<f64>,
}

impl Default for OperationConfig {
    fn default() -> Self {
        Self {
            binary_threshold: DEFAULT_BINARY_THRESHOLD,
            motion_threshold: DEFAULT_MOTION_THRESHOLD,
            motion_low_threshold: DEFAULT_LOW_MOTION_THRESHOLD,
            offsets: vec![DEFAULT_OFFSET, 150],
            blend_alphas: vec![0.3, 0.5, 0.7],
        }
    }
}

impl OperationConfig {
    /// Validates the configuration parameters.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(&k) = self.offsets.iter().find(|k| !(-255..=255).contains(*k)) {
            return Err(ConfigError::InvalidOffset(k));
        }
        if let Some(&a) = self
            .blend_alphas
            .iter()
            .find(|a| !(0.0..=1.0).contains(*a))
        {
            return Err(ConfigError::InvalidAlpha(a));
        }
        if self.motion_low_threshold > self.motion_threshold {
            return Err(ConfigError::InvalidMotionThresholds {
                low: self.motion_low_threshold,
                high: self.motion_threshold,
            });
        }
        Ok(())
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// An offset constant lies outside `[-255, 255]`.
    #[error("offset {0} outside [-255, 255]")]
    InvalidOffset(i16),
    /// A blend weight lies outside `[0, 1]`.
    #[error("blend alpha {0} outside [0, 1]")]
    InvalidAlpha(f64),
    /// The low motion threshold is above the main one.
    #[error("low motion threshold {low} exceeds motion threshold {high}")]
    InvalidMotionThresholds {
        /// Configured low threshold.
        low: u8,
        /// Configured main threshold.
        high: u8,
    },
    /// The configuration file could not be read.
    #[error("failed to read config file: {0}")]
    FileReadError(String),
    /// The configuration file is not valid TOML.
    #[error("failed to parse config file: {0}")]
    ParseError(String),
}

/// Output configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// Directory that receives one subfolder per operation family.
    pub directory: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("processing_results"),
        }
    }
}

/// Full configuration file format.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FileConfig {
    /// Operation parameters.
    #[serde(default)]
    pub operations: OperationConfig,
    /// Output location.
    #[serde(default)]
    pub output: OutputConfig,
}

impl FileConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::FileReadError(e.to_string()))?;
        Self::from_toml(&content)
    }

    /// Parses and validates configuration text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: FileConfig =
            toml::from_str(content).map_err(|e| ConfigError::ParseError(e.to_string()))?;
        config.operations.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_valid() {
        let config = OperationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.binary_threshold, 127);
        assert_eq!(config.motion_threshold, 30);
        assert_eq!(config.offsets, [100, 150]);
    }

    #[test]
    fn test_alpha_out_of_range_invalid() {
        let config = OperationConfig {
            blend_alphas: vec![0.5, 1.2],
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidAlpha(_))));
    }

    #[test]
    fn test_low_threshold_above_main_invalid() {
        let config = OperationConfig {
            motion_threshold: 10,
            motion_low_threshold: 20,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMotionThresholds { low: 20, high: 10 })
        ));
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let config = FileConfig::from_toml(
            r#"
            [operations]
            binary_threshold = 100
            offsets = [50]

            [output]
            directory = "out"
            "#,
        )
        .unwrap();

        assert_eq!(config.operations.binary_threshold, 100);
        assert_eq!(config.operations.offsets, [50]);
        assert_eq!(config.operations.motion_threshold, 30);
        assert_eq!(config.output.directory, PathBuf::from("out"));
    }

    #[test]
    fn test_empty_file_is_default() {
        assert_eq!(FileConfig::from_toml("").unwrap(), FileConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected_on_load() {
        let err = FileConfig::from_toml("[operations]\noffsets = [400]\n").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidOffset(400)));

        let err = FileConfig::from_toml("[operations]\nbinary_threshold = 300\n").unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }
}
