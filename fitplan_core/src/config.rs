//! Configuration file support for Fitplan.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/fitplan/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub data: DataConfig,

    #[serde(default)]
    pub allocator: AllocatorConfig,

    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Data storage configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DataConfig {
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

/// Weekly allocation limits and fallback exercise defaults
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AllocatorConfig {
    /// Most catalog exercises drawn per body part per day
    #[serde(default = "default_exercises_per_body_part")]
    pub exercises_per_body_part: usize,

    /// Below this many unused candidates, recently used exercises are allowed again
    #[serde(default = "default_min_unused_candidates")]
    pub min_unused_candidates: usize,

    /// Training days are topped up with fallback exercises to this size
    #[serde(default = "default_min_exercises_per_day")]
    pub min_exercises_per_day: usize,

    #[serde(default = "default_fallback_sets")]
    pub fallback_sets: u32,

    #[serde(default = "default_fallback_reps")]
    pub fallback_reps: u32,

    #[serde(default = "default_fallback_rest_seconds")]
    pub fallback_rest_seconds: u32,
}

impl Default for AllocatorConfig {
    fn default() -> Self {
        Self {
            exercises_per_body_part: default_exercises_per_body_part(),
            min_unused_candidates: default_min_unused_candidates(),
            min_exercises_per_day: default_min_exercises_per_day(),
            fallback_sets: default_fallback_sets(),
            fallback_reps: default_fallback_reps(),
            fallback_rest_seconds: default_fallback_rest_seconds(),
        }
    }
}

/// Optional replacement catalogs (JSON arrays)
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct CatalogConfig {
    #[serde(default)]
    pub exercises_path: Option<PathBuf>,

    #[serde(default)]
    pub nutrition_path: Option<PathBuf>,
}

// Default value functions
fn default_data_dir() -> PathBuf {
    let base = dirs::data_local_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join(".local/share")))
        .unwrap_or_else(|| PathBuf::from("."));
    base.join("fitplan")
}

fn default_exercises_per_body_part() -> usize {
    3
}

fn default_min_unused_candidates() -> usize {
    2
}

fn default_min_exercises_per_day() -> usize {
    2
}

fn default_fallback_sets() -> u32 {
    3
}

fn default_fallback_reps() -> u32 {
    12
}

fn default_fallback_rest_seconds() -> u32 {
    60
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!("No config file found at {:?}, using defaults", config_path);
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        config.validate()?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|home| home.join(".config")))
            .unwrap_or_else(|| PathBuf::from("."));
        base.join("fitplan").join("config.toml")
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }

    /// Reject settings the allocator cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.allocator.exercises_per_body_part == 0 {
            return Err(Error::Config(
                "allocator.exercises_per_body_part must be at least 1".into(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.allocator.exercises_per_body_part, 3);
        assert_eq!(config.allocator.min_unused_candidates, 2);
        assert_eq!(config.allocator.min_exercises_per_day, 2);
        assert_eq!(config.allocator.fallback_sets, 3);
        assert_eq!(config.allocator.fallback_reps, 12);
        assert_eq!(config.allocator.fallback_rest_seconds, 60);
        assert!(config.catalog.exercises_path.is_none());
    }

    #[test]
    fn test_config_roundtrip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");

        let mut config = Config::default();
        config.allocator.fallback_reps = 15;
        config.save_to(&path).unwrap();

        let parsed = Config::load_from(&path).unwrap();
        assert_eq!(parsed.allocator, config.allocator);
        assert_eq!(parsed.data.data_dir, config.data.data_dir);
    }

    #[test]
    fn test_partial_config() {
        let toml_str = r#"
[allocator]
exercises_per_body_part = 2
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.allocator.exercises_per_body_part, 2);
        assert_eq!(config.allocator.fallback_sets, 3); // default
    }

    #[test]
    fn test_zero_exercises_per_body_part_rejected() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[allocator]\nexercises_per_body_part = 0\n").unwrap();

        assert!(matches!(Config::load_from(&path), Err(Error::Config(_))));
    }
}
