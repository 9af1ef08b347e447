//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading analysis
//! settings from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};

use super::types::AnalysisConfig;

/// Loads analysis configuration.
///
/// # Example
///
/// ```
/// use labour_engine::config::{ConfigLoader, ShiftRowPolicy};
///
/// let config = ConfigLoader::from_yaml_str("shift_row_policy: skip", "inline").unwrap();
/// assert_eq!(config.shift_row_policy, ShiftRowPolicy::Skip);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads configuration from a YAML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the YAML file (e.g., "./labour-engine.yaml")
    ///
    /// # Returns
    ///
    /// Returns the parsed configuration, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown values (`ConfigParseError`)
    ///
    /// # Example
    ///
    /// ```no_run
    /// use labour_engine::config::ConfigLoader;
    ///
    /// let config = ConfigLoader::load("./labour-engine.yaml")?;
    /// # Ok::<(), labour_engine::error::EngineError>(())
    /// ```
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<AnalysisConfig> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        let config = Self::from_yaml_str(&content, &path_str)?;
        debug!(path = %path_str, ?config, "Loaded configuration");
        Ok(config)
    }

    /// Parses configuration from YAML text.
    ///
    /// `origin` names the source in error messages. Blank input gives the
    /// default configuration.
    pub fn from_yaml_str(content: &str, origin: &str) -> EngineResult<AnalysisConfig> {
        if content.trim().is_empty() {
            return Ok(AnalysisConfig::default());
        }

        serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
            path: origin.to_string(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ShiftRowPolicy;
    use std::path::PathBuf;

    fn fixture(name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("tests/fixtures/config")
            .join(name)
    }

    #[test]
    fn test_load_valid_configuration() {
        let result = ConfigLoader::load(fixture("skip.yaml"));
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());
        assert_eq!(result.unwrap().shift_row_policy, ShiftRowPolicy::Skip);
    }

    #[test]
    fn test_missing_file_returns_config_not_found() {
        match ConfigLoader::load(fixture("does-not-exist.yaml")) {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.ends_with("does-not-exist.yaml"));
            }
            other => panic!("Expected ConfigNotFound error, got {:?}", other),
        }
    }

    #[test]
    fn test_unknown_policy_returns_parse_error() {
        let result = ConfigLoader::load(fixture("invalid.yaml"));
        assert!(matches!(result, Err(EngineError::ConfigParseError { .. })));
    }

    #[test]
    fn test_blank_configuration_uses_defaults() {
        let config = ConfigLoader::from_yaml_str("  \n", "inline").unwrap();
        assert_eq!(config, AnalysisConfig::default());
        assert_eq!(config.shift_row_policy, ShiftRowPolicy::Stop);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let config = ConfigLoader::from_yaml_str("{}", "inline").unwrap();
        assert_eq!(config.shift_row_policy, ShiftRowPolicy::Stop);
    }

    #[test]
    fn test_explicit_stop_policy() {
        let config = ConfigLoader::from_yaml_str("shift_row_policy: stop\n", "inline").unwrap();
        assert_eq!(config.shift_row_policy, ShiftRowPolicy::Stop);
    }
}
