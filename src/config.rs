//! YAML configuration file support for faqbot.
//!
//! Lets deployments define the whole answering pipeline (normalization,
//! matching, dataset location) in a single YAML file and load it at
//! runtime.
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! # faqbot pipeline configuration
//! version: "1.0"
//!
//! normalize:
//!   version: 1
//!   normalize_unicode: true
//!   lowercase: true
//!   lemmatize: true
//!
//! matcher:
//!   threshold: 60
//!
//! dataset:
//!   path: "data/dataset.json"
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use matcher::MatchConfig;
use normalize::NormalizeConfig;

/// Errors that can occur when loading YAML configuration files
#[derive(Debug, Error)]
pub enum ConfigLoadError {
    #[error("failed to read config file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("unsupported config version: {0}")]
    UnsupportedVersion(String),
}

/// Top-level YAML configuration structure for the answering pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct FaqbotConfig {
    /// Configuration format version
    pub version: String,

    /// Optional configuration name/description
    #[serde(default)]
    pub name: Option<String>,

    /// Normalization stage configuration
    #[serde(default)]
    pub normalize: NormalizeYamlConfig,

    /// Matcher stage configuration
    #[serde(default)]
    pub matcher: MatchYamlConfig,

    /// Dataset source configuration
    #[serde(default)]
    pub dataset: DatasetYamlConfig,
}

impl FaqbotConfig {
    /// Load a YAML configuration file from the given path
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigLoadError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse YAML configuration from a string
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: FaqbotConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    fn validate(&self) -> Result<(), ConfigLoadError> {
        match self.version.as_str() {
            "1.0" | "1" => Ok(()),
            v => Err(ConfigLoadError::UnsupportedVersion(v.to_string())),
        }?;

        self.normalize.validate()?;
        self.matcher.validate()?;
        self.dataset.validate()?;

        Ok(())
    }

    /// Build the crate-level normalization config
    pub fn to_normalize_config(&self) -> NormalizeConfig {
        NormalizeConfig {
            version: self.normalize.version,
            normalize_unicode: self.normalize.normalize_unicode,
            lowercase: self.normalize.lowercase,
            lemmatize: self.normalize.lemmatize,
        }
    }

    /// Build the crate-level matcher config
    pub fn to_match_config(&self) -> MatchConfig {
        MatchConfig {
            threshold: self.matcher.threshold,
        }
    }
}

impl Default for FaqbotConfig {
    fn default() -> Self {
        Self {
            version: "1.0".to_string(),
            name: None,
            normalize: NormalizeYamlConfig::default(),
            matcher: MatchYamlConfig::default(),
            dataset: DatasetYamlConfig::default(),
        }
    }
}

/// Normalization stage YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NormalizeYamlConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "true_value")]
    pub normalize_unicode: bool,

    #[serde(default = "true_value")]
    pub lowercase: bool,

    #[serde(default = "true_value")]
    pub lemmatize: bool,
}

impl NormalizeYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.version == 0 {
            return Err(ConfigLoadError::Validation(
                "normalize.version must be >= 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for NormalizeYamlConfig {
    fn default() -> Self {
        Self {
            version: 1,
            normalize_unicode: true,
            lowercase: true,
            lemmatize: true,
        }
    }
}

/// Matcher stage YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchYamlConfig {
    /// Match-acceptance cutoff on the 0..=100 scale (strictly-greater-than)
    #[serde(default = "default_threshold")]
    pub threshold: u8,
}

impl MatchYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.threshold > 100 {
            return Err(ConfigLoadError::Validation(
                "matcher.threshold must be between 0 and 100".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for MatchYamlConfig {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
        }
    }
}

/// Dataset source YAML configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetYamlConfig {
    #[serde(default = "default_dataset_path")]
    pub path: String,
}

impl DatasetYamlConfig {
    fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.path.trim().is_empty() {
            return Err(ConfigLoadError::Validation(
                "dataset.path must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for DatasetYamlConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
        }
    }
}

// Helper functions for serde defaults
fn default_version() -> u32 {
    1
}
fn true_value() -> bool {
    true
}
fn default_threshold() -> u8 {
    60
}
fn default_dataset_path() -> String {
    "data/dataset.json".to_string()
}
