//! Engine configuration.
//!
//! Configuration sources (highest priority first):
//! 1. Environment variable (CITEMARK_CONFIG pointing at a YAML file)
//! 2. Config file (.citemark/config.yaml, searched upward from the
//!    current directory)
//! 3. User config dir (~/.config/citemark/config.yaml)
//! 4. Defaults
//!
//! The numeric defaults are behavior-parity constants, preserved from the
//! source system rather than re-derived; they are configurable but the
//! defaults are the contract.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Thresholds and limits for the citation pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Minimum trimmed length for a response sentence to survive
    /// segmentation (default: 50)
    #[serde(default = "default_min_sentence_chars")]
    pub min_sentence_chars: usize,

    /// Minimum normalized length for a cleaned sentence to count as
    /// meaningful (default: 60)
    #[serde(default = "default_min_meaningful_chars")]
    pub min_meaningful_chars: usize,

    /// Minimum cleaned length for a sentence to be citation-worthy
    /// (default: 80)
    #[serde(default = "default_min_citation_chars")]
    pub min_citation_chars: usize,

    /// Document sentences must exceed this length to be scanned
    /// (default: 50)
    #[serde(default = "default_min_document_sentence_chars")]
    pub min_document_sentence_chars: usize,

    /// A candidate's similarity must exceed this to be kept (default: 0.7)
    #[serde(default = "default_similarity_threshold")]
    pub similarity_threshold: f64,

    /// Maximum citations per processed response (default: 5)
    #[serde(default = "default_max_citations")]
    pub max_citations: usize,
}

fn default_min_sentence_chars() -> usize {
    50
}
fn default_min_meaningful_chars() -> usize {
    60
}
fn default_min_citation_chars() -> usize {
    80
}
fn default_min_document_sentence_chars() -> usize {
    50
}
fn default_similarity_threshold() -> f64 {
    0.7
}
fn default_max_citations() -> usize {
    5
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_sentence_chars: default_min_sentence_chars(),
            min_meaningful_chars: default_min_meaningful_chars(),
            min_citation_chars: default_min_citation_chars(),
            min_document_sentence_chars: default_min_document_sentence_chars(),
            similarity_threshold: default_similarity_threshold(),
            max_citations: default_max_citations(),
        }
    }
}

impl EngineConfig {
    /// Check the configuration for values the pipeline cannot work with
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.similarity_threshold) {
            return Err(ConfigError::ThresholdOutOfRange {
                value: self.similarity_threshold,
            });
        }
        if self.min_sentence_chars == 0 {
            return Err(ConfigError::ZeroMinimum {
                field: "min_sentence_chars",
            });
        }
        if self.min_citation_chars == 0 {
            return Err(ConfigError::ZeroMinimum {
                field: "min_citation_chars",
            });
        }
        if self.min_citation_chars < self.min_sentence_chars {
            return Err(ConfigError::GateBelowSegmentFloor {
                citation: self.min_citation_chars,
                sentence: self.min_sentence_chars,
            });
        }
        Ok(())
    }

    /// Load and validate a config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: EngineConfig = serde_yaml::from_str(&raw)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;

        Ok(config)
    }

    /// Resolve configuration from the standard sources, falling back to
    /// defaults when no file is found.
    pub fn discover() -> Result<Self> {
        if let Ok(env_path) = std::env::var("CITEMARK_CONFIG") {
            return Self::load(PathBuf::from(env_path));
        }

        if let Some(path) = find_config_file() {
            return Self::load(path);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let path = config_dir.join("citemark").join("config.yaml");
            if path.exists() {
                return Self::load(path);
            }
        }

        Ok(Self::default())
    }
}

/// Find .citemark/config.yaml by searching the current directory and parents
fn find_config_file() -> Option<PathBuf> {
    let mut current = std::env::current_dir().ok()?;

    loop {
        let config_path = current.join(".citemark").join("config.yaml");
        if config_path.exists() {
            return Some(config_path);
        }

        if !current.pop() {
            break;
        }
    }

    None
}

/// Configuration validation errors
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("similarity_threshold must be in [0, 1], got {value}")]
    ThresholdOutOfRange { value: f64 },

    #[error("{field} must be non-zero")]
    ZeroMinimum { field: &'static str },

    #[error("min_citation_chars ({citation}) must not be below min_sentence_chars ({sentence})")]
    GateBelowSegmentFloor { citation: usize, sentence: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.min_sentence_chars, 50);
        assert_eq!(config.min_meaningful_chars, 60);
        assert_eq!(config.min_citation_chars, 80);
        assert_eq!(config.min_document_sentence_chars, 50);
        assert_eq!(config.similarity_threshold, 0.7);
        assert_eq!(config.max_citations, 5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: EngineConfig = serde_yaml::from_str("max_citations: 3\n").unwrap();
        assert_eq!(config.max_citations, 3);
        assert_eq!(config.similarity_threshold, 0.7);
    }

    #[test]
    fn test_threshold_out_of_range_rejected() {
        let config = EngineConfig {
            similarity_threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ThresholdOutOfRange { .. })
        ));
    }

    #[test]
    fn test_gate_below_segment_floor_rejected() {
        let config = EngineConfig {
            min_citation_chars: 40,
            min_sentence_chars: 50,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::GateBelowSegmentFloor { .. })
        ));
    }

    #[test]
    fn test_zero_minimum_rejected() {
        let config = EngineConfig {
            min_sentence_chars: 0,
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ZeroMinimum { .. })
        ));
    }
}
