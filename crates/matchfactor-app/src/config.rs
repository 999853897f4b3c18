//! Configuration management for matchfactor
//!
//! Config stored at: ~/.config/matchfactor/config.json

use std::path::{Path, PathBuf};

use matchfactor_domain::{CatalogSource, OperatingParameters};
use matchfactor_infra::{BuiltinCatalog, TomlCatalogFile};
use matchfactor_types::{ConfigError, JobCondition, OutputFormat, Result};
use serde::{Deserialize, Serialize};

/// Application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Equipment catalog file (built-in catalog when unset)
    #[serde(default)]
    pub catalog_path: Option<PathBuf>,

    /// Default operating condition
    #[serde(default)]
    pub job_condition: JobCondition,

    /// Default one-way haul distance in km
    #[serde(default = "default_haul_distance")]
    pub haul_distance_km: f64,

    /// Default number of trucks
    #[serde(default = "default_num_trucks")]
    pub num_trucks: u32,

    /// Default loader reposition time in seconds
    #[serde(default = "default_reposition_time")]
    pub reposition_time_s: f64,

    /// Loaded truck speed in km/h (catalog value when null)
    #[serde(default = "default_speed_loaded")]
    pub speed_loaded_kmh: Option<f64>,

    /// Empty truck speed in km/h (catalog value when null)
    #[serde(default = "default_speed_empty")]
    pub speed_empty_kmh: Option<f64>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_haul_distance() -> f64 {
    3.0
}

fn default_num_trucks() -> u32 {
    5
}

fn default_reposition_time() -> f64 {
    20.0
}

fn default_speed_loaded() -> Option<f64> {
    Some(20.0)
}

fn default_speed_empty() -> Option<f64> {
    Some(30.0)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            catalog_path: None,
            job_condition: JobCondition::default(),
            haul_distance_km: default_haul_distance(),
            num_trucks: default_num_trucks(),
            reposition_time_s: default_reposition_time(),
            speed_loaded_kmh: default_speed_loaded(),
            speed_empty_kmh: default_speed_empty(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("matchfactor");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Load config from the default location, or defaults when absent
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = serde_json::from_str(&content)
                .map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .map_err(|e| ConfigError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Operating parameters built from the configured defaults
    pub fn operating_parameters(&self) -> OperatingParameters {
        OperatingParameters {
            job_condition: self.job_condition,
            haul_distance_km: self.haul_distance_km,
            num_trucks: self.num_trucks,
            reposition_time_s: self.reposition_time_s,
        }
    }

    /// Where the equipment catalog comes from
    pub fn catalog_source(&self) -> Box<dyn CatalogSource> {
        match &self.catalog_path {
            Some(path) => Box::new(TomlCatalogFile::new(path)),
            None => Box::new(BuiltinCatalog),
        }
    }
}

fn speed_label(speed: Option<f64>) -> String {
    speed
        .map(|s| format!("{} km/h", s))
        .unwrap_or_else(|| "(catalog)".to_string())
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Match Factor Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Catalog:          {}",
            self.catalog_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "(built-in)".to_string())
        )?;
        writeln!(
            f,
            "Job condition:    {} ({:.0}%)",
            self.job_condition,
            self.job_condition.efficiency() * 100.0
        )?;
        writeln!(f, "Haul distance:    {} km", self.haul_distance_km)?;
        writeln!(f, "Trucks:           {}", self.num_trucks)?;
        writeln!(f, "Reposition time:  {} s", self.reposition_time_s)?;
        writeln!(f, "Speed loaded:     {}", speed_label(self.speed_loaded_kmh))?;
        writeln!(f, "Speed empty:      {}", speed_label(self.speed_empty_kmh))?;
        writeln!(f, "Output format:    {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.job_condition, JobCondition::Average);
        assert_eq!(config.haul_distance_km, 3.0);
        assert_eq!(config.num_trucks, 5);
        assert_eq!(config.reposition_time_s, 20.0);
        assert_eq!(config.speed_loaded_kmh, Some(20.0));
        assert_eq!(config.speed_empty_kmh, Some(30.0));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{"num_trucks": 8}"#).unwrap();
        assert_eq!(config.num_trucks, 8);
        assert_eq!(config.haul_distance_km, 3.0);
        assert_eq!(config.speed_loaded_kmh, Some(20.0));
    }

    #[test]
    fn test_null_speed_means_catalog() {
        let config: Config = serde_json::from_str(r#"{"speed_loaded_kmh": null}"#).unwrap();
        assert_eq!(config.speed_loaded_kmh, None);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("nested").join("config.json");

        let config = Config {
            job_condition: JobCondition::RatherPoor,
            num_trucks: 9,
            ..Config::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().expect("Failed to create temp dir");
        let loaded = Config::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(loaded, Config::default());
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let dir = tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();

        assert!(matches!(
            Config::load_from(&path),
            Err(matchfactor_types::Error::Config(ConfigError::ParseError(_)))
        ));
    }

    #[test]
    fn test_operating_parameters() {
        let params = Config::default().operating_parameters();
        assert_eq!(params, OperatingParameters::default());
    }

    #[test]
    fn test_catalog_source_selection() {
        assert_eq!(Config::default().catalog_source().describe(), "built-in catalog");

        let config = Config {
            catalog_path: Some(PathBuf::from("site.toml")),
            ..Config::default()
        };
        assert_eq!(config.catalog_source().describe(), "site.toml");
    }
}
