use anyhow::{Context, Result};
use directories::ProjectDirs;
use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const LOCAL_CONFIG_FILE: &str = ".titlecase.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub extra_exceptions: Vec<String>,

    #[serde(default)]
    pub ignore_patterns: Vec<String>,

    #[serde(default = "default_min_heading_level")]
    pub min_heading_level: u8,

    #[serde(default = "default_max_heading_level")]
    pub max_heading_level: u8,
}

/// One config file. Only the keys it sets override earlier layers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ConfigLayer {
    pub extra_exceptions: Option<Vec<String>>,
    pub ignore_patterns: Option<Vec<String>>,
    pub min_heading_level: Option<u8>,
    pub max_heading_level: Option<u8>,
}

impl ConfigLayer {
    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }
}

fn default_min_heading_level() -> u8 {
    1
}

fn default_max_heading_level() -> u8 {
    6
}

impl Default for Config {
    fn default() -> Self {
        Self {
            extra_exceptions: Vec::new(),
            ignore_patterns: vec![
                r"https?://\S+".to_string(), // URLs
                r"^\s*[-*+]\s".to_string(),  // list items in plain text
            ],
            min_heading_level: default_min_heading_level(),
            max_heading_level: default_max_heading_level(),
        }
    }
}

impl Config {
    /// Load configuration with priority: CLI args > local config > global config > defaults
    pub fn load(cli_exceptions: Vec<String>, cli_patterns: Vec<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                debug!("Loading global config from {}", global_path.display());
                config = config.merge(ConfigLayer::from_file(&global_path)?);
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            debug!("Loading local config from {}", local_path.display());
            config = config.merge(ConfigLayer::from_file(&local_path)?);
        }

        config.extra_exceptions.extend(cli_exceptions);
        config.ignore_patterns.extend(cli_patterns);

        config.validate()?;
        Ok(config)
    }

    /// Defaults overlaid with a single config file.
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self::default().merge(ConfigLayer::from_file(path)?))
    }

    fn merge(mut self, layer: ConfigLayer) -> Self {
        // Exceptions accumulate across layers, everything else is overridden
        if let Some(exceptions) = layer.extra_exceptions {
            self.extra_exceptions.extend(exceptions);
        }
        if let Some(patterns) = layer.ignore_patterns {
            self.ignore_patterns = patterns;
        }
        if let Some(level) = layer.min_heading_level {
            self.min_heading_level = level;
        }
        if let Some(level) = layer.max_heading_level {
            self.max_heading_level = level;
        }
        self
    }

    fn validate(&self) -> Result<()> {
        let levels = 1..=6;
        if !levels.contains(&self.min_heading_level)
            || !levels.contains(&self.max_heading_level)
            || self.min_heading_level > self.max_heading_level
        {
            anyhow::bail!(
                "Invalid heading levels {}..={}: must be within 1..=6 and ordered",
                self.min_heading_level,
                self.max_heading_level
            );
        }
        Ok(())
    }

    pub fn global_config_path() -> Option<PathBuf> {
        ProjectDirs::from("", "", "titlecase").map(|dirs| dirs.config_dir().join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.extra_exceptions.is_empty());
        assert_eq!(config.min_heading_level, 1);
        assert_eq!(config.max_heading_level, 6);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_merge_configs() {
        let base = Config {
            extra_exceptions: vec!["per".to_string()],
            ..Default::default()
        };
        let layer = ConfigLayer {
            extra_exceptions: Some(vec!["versus".to_string()]),
            ignore_patterns: Some(vec!["^TODO".to_string()]),
            max_heading_level: Some(3),
            ..Default::default()
        };

        let merged = base.merge(layer);
        assert_eq!(merged.extra_exceptions, vec!["per", "versus"]);
        assert_eq!(merged.ignore_patterns, vec!["^TODO"]);
        assert_eq!(merged.min_heading_level, 1);
        assert_eq!(merged.max_heading_level, 3);
    }

    #[test]
    fn test_later_layer_can_restore_default_values() {
        let global = ConfigLayer {
            max_heading_level: Some(3),
            ..Default::default()
        };
        let local = ConfigLayer {
            max_heading_level: Some(6),
            ignore_patterns: Some(Vec::new()),
            ..Default::default()
        };

        let merged = Config::default().merge(global).merge(local);
        assert_eq!(merged.max_heading_level, 6);
        assert!(merged.ignore_patterns.is_empty());
    }

    #[test]
    fn test_from_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "extra_exceptions = [\"per\", \"amid\"]").unwrap();

        let config = Config::from_file(file.path()).unwrap();
        assert_eq!(config.extra_exceptions, vec!["per", "amid"]);
        assert_eq!(config.ignore_patterns, Config::default().ignore_patterns);
        assert_eq!(config.max_heading_level, 6);
    }

    #[test]
    fn test_from_file_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "extra_exceptions = per").unwrap();

        let err = Config::from_file(file.path()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config file"));
    }

    #[test]
    fn test_validate_heading_levels() {
        let config = Config {
            min_heading_level: 4,
            max_heading_level: 2,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        let config = Config {
            max_heading_level: 7,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
