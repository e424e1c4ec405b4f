//! # Configuration
//!
//! Optional YAML settings for the command-line tool.
//!
//! ```yaml
//! tuning: ukulele          # preset name or a list of integers
//! notation: h              # standard | h
//! simplified: false
//! ```
//!
//! Every key is optional; missing keys keep their defaults (guitar, standard
//! notation, full parsing).

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use crate::error::ChordError;
use crate::key::Notation;
use crate::tuning::Tuning;

/// Tuning as written in YAML: a preset name or a list of offsets.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub enum RawTuning {
    Name(String),
    Strings(Vec<i32>),
}

/// Raw configuration for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawConfig {
    pub tuning: Option<RawTuning>,
    pub notation: Option<String>,
    pub simplified: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub tuning: Tuning,
    pub notation: Notation,
    pub simplified: bool,
}

impl Config {
    /// Parse configuration from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self, ChordError> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawConfig =
            serde_yaml::from_str(content).map_err(|e| ChordError::ConfigError(e.to_string()))?;

        let tuning = match raw.tuning {
            Some(RawTuning::Name(name)) => name.parse()?,
            Some(RawTuning::Strings(strings)) => Tuning::new(strings)?,
            None => Tuning::default(),
        };
        let notation = match raw.notation {
            Some(notation) => notation.parse()?,
            None => Notation::default(),
        };

        Ok(Self {
            tuning,
            notation,
            simplified: raw.simplified.unwrap_or(false),
        })
    }

    /// Read and parse a YAML configuration file.
    pub fn load(path: &Path) -> Result<Self, ChordError> {
        let content = fs::read_to_string(path)?;
        let config = Self::from_yaml(&content)?;
        debug!(path = %path.display(), tuning = %config.tuning, "loaded configuration");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::default().tuning, Tuning::guitar());
    }

    #[test]
    fn test_preset_and_notation() {
        let config = Config::from_yaml("tuning: ukulele\nnotation: h\nsimplified: true\n").unwrap();
        assert_eq!(config.tuning, Tuning::ukulele());
        assert_eq!(config.notation, Notation::H);
        assert!(config.simplified);
    }

    #[test]
    fn test_tuning_list() {
        let config = Config::from_yaml("tuning: [-20, -15, -10, -5]\n").unwrap();
        assert_eq!(config.tuning.strings(), &[-20, -15, -10, -5]);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_yaml("tuning: []\n"),
            Err(ChordError::InvalidTuning(_))
        ));
        assert!(matches!(
            Config::from_yaml("notation: solfege\n"),
            Err(ChordError::ConfigError(_))
        ));
        assert!(matches!(
            Config::from_yaml("capo: 2\n"),
            Err(ChordError::ConfigError(_))
        ));
    }
}
