use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::core::{
    services::{SelectionCriteria, Voltage, KAIC_OPTIONS},
    session::{DEFAULT_MAIN_AMPERAGE, MAIN_AMPERAGES},
    utils::{app_data_dir, config_file_in, ensure_dir},
};

const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration format error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid configuration value for `{key}`: {value}")]
    InvalidValue { key: String, value: String },
}

/// User defaults applied to each new session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_name: Option<String>,
    #[serde(default = "default_main_amperage")]
    pub main_amperage: u32,
    #[serde(default = "default_performance")]
    pub performance: u32,
    #[serde(default)]
    pub lsi_required: bool,
    #[serde(default)]
    pub voltage: Option<Voltage>,
    #[serde(default)]
    pub min_kaic: Option<u32>,
}

fn default_main_amperage() -> u32 {
    DEFAULT_MAIN_AMPERAGE
}

fn default_performance() -> u32 {
    80
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: None,
            project_name: None,
            main_amperage: default_main_amperage(),
            performance: default_performance(),
            lsi_required: false,
            voltage: None,
            min_kaic: None,
        }
    }
}

impl Config {
    pub const KEYS: [&'static str; 7] = [
        "data_dir",
        "project_name",
        "main_amperage",
        "performance",
        "lsi_required",
        "voltage",
        "min_kaic",
    ];

    /// Starting criteria for a session; the amp rating keeps its default.
    pub fn selection_criteria(&self) -> SelectionCriteria {
        SelectionCriteria {
            voltage: self.voltage,
            min_kaic: self.min_kaic,
            performance: self.performance,
            lsi_required: self.lsi_required,
            ..SelectionCriteria::default()
        }
    }

    /// Updates one key from its textual form. `none` clears optional keys.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let cleared = value.eq_ignore_ascii_case("none");
        match key {
            "data_dir" => self.data_dir = (!cleared).then(|| PathBuf::from(value)),
            "project_name" => self.project_name = (!cleared).then(|| value.to_string()),
            "main_amperage" => {
                let amps: u32 = value.parse().map_err(|_| invalid())?;
                if !MAIN_AMPERAGES.contains(&amps) {
                    return Err(invalid());
                }
                self.main_amperage = amps;
            }
            "performance" => {
                self.performance = match value {
                    "80" => 80,
                    "100" => 100,
                    _ => return Err(invalid()),
                }
            }
            "lsi_required" => {
                self.lsi_required = match value.to_ascii_lowercase().as_str() {
                    "true" | "on" | "yes" => true,
                    "false" | "off" | "no" => false,
                    _ => return Err(invalid()),
                }
            }
            "voltage" => {
                self.voltage = if cleared {
                    None
                } else {
                    Some(Voltage::parse(value).ok_or_else(invalid)?)
                }
            }
            "min_kaic" => {
                self.min_kaic = if cleared {
                    None
                } else {
                    let kaic: u32 = value.parse().map_err(|_| invalid())?;
                    if !KAIC_OPTIONS.contains(&kaic) {
                        return Err(invalid());
                    }
                    Some(kaic)
                }
            }
            _ => return Err(invalid()),
        }
        Ok(())
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        Self::with_base_dir(app_data_dir())
    }

    pub fn with_base_dir(base: PathBuf) -> Result<Self, ConfigError> {
        ensure_dir(&base)?;
        Ok(Self {
            path: config_file_in(&base),
        })
    }

    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::debug!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        assert_eq!(manager.load().unwrap(), Config::default());
    }

    #[test]
    fn saved_values_load_back() {
        let dir = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();
        let mut config = Config::default();
        config.set("voltage", "480").unwrap();
        config.set("min_kaic", "65").unwrap();
        config.set("main_amperage", "2000").unwrap();
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.voltage, Some(Voltage::V480));
        assert_eq!(loaded.selection_criteria().min_kaic, Some(65));
        assert_eq!(loaded.main_amperage, 2000);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let mut config = Config::default();
        assert!(config.set("main_amperage", "1000").is_err());
        assert!(config.set("performance", "90").is_err());
        assert!(config.set("colour", "blue").is_err());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn min_kaic_accepts_only_listed_ratings() {
        let mut config = Config::default();
        assert!(matches!(
            config.set("min_kaic", "40"),
            Err(ConfigError::InvalidValue { .. })
        ));
        assert_eq!(config.min_kaic, None);
        config.set("min_kaic", "65").unwrap();
        assert_eq!(config.min_kaic, Some(65));
        config.set("min_kaic", "none").unwrap();
        assert_eq!(config.min_kaic, None);
    }
}
