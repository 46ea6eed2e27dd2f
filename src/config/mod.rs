use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

/// Keys every configuration file is expected to carry.
pub const CONFIG_KEYS: [&str; 4] = ["data_file", "export_file", "theme", "separator_char"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_data_file")]
    pub data_file: String,
    #[serde(default = "default_export_file")]
    pub export_file: String,
    #[serde(default = "default_theme")]
    pub theme: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_data_file() -> String {
    Config::default_data_file().to_string_lossy().to_string()
}
fn default_export_file() -> String {
    "timeloom_export.csv".to_string()
}
fn default_theme() -> String {
    "light".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: default_data_file(),
            export_file: default_export_file(),
            theme: default_theme(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("timeloom")
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".timeloom")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("timeloom.conf")
    }

    /// Return the default path of the JSON data file
    pub fn default_data_file() -> PathBuf {
        Self::config_dir().join("data.json")
    }

    /// Data file with `~/` expanded.
    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_file)
    }

    /// Resolve a `--data` value: `~` is expanded and a relative name lives in
    /// the config directory (the current directory in test mode).
    pub fn resolve_data_file(name: &str, is_test: bool) -> PathBuf {
        let p = expand_tilde(name);
        if p.is_absolute() || is_test {
            p
        } else {
            Self::config_dir().join(p)
        }
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path)?;
            serde_yaml::from_str(&content).map_err(|e| {
                AppError::Config(format!("failed to parse {}: {}", path.display(), e))
            })
        } else {
            Ok(Config::default())
        }
    }

    /// Keys of [`CONFIG_KEYS`] missing from the configuration file on disk.
    pub fn missing_keys() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        if !path.exists() {
            return Ok(CONFIG_KEYS.to_vec());
        }

        let content = fs::read_to_string(&path)?;
        let yaml: Value = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("failed to parse {}: {}", path.display(), e)))?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(CONFIG_KEYS.to_vec());
        };

        Ok(CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| !map.contains_key(*k))
            .collect())
    }

    /// Initialize configuration and data files.
    ///
    /// In test mode the configuration file is left untouched.
    pub fn init_all(custom_data: Option<String>, is_test: bool) -> io::Result<Config> {
        let dir = Self::config_dir();

        let data_path = match custom_data {
            Some(name) => Self::resolve_data_file(&name, is_test),
            None => Self::default_data_file(),
        };

        let config = Config {
            data_file: data_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config).map_err(io::Error::other)?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = data_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        // Create an empty data file if not exists
        if !data_path.exists() {
            fs::write(&data_path, "[]")?;
        }

        Ok(config)
    }
}
