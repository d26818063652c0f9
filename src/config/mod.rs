use crate::core::sources::SourceSet;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::PathBuf;

/// Keys every config file is expected to carry; used by `config --check`.
pub const CONFIG_KEYS: [&str; 7] = [
    "csv_dir",
    "colab_file",
    "xcolab_file",
    "itcd_file",
    "xitcd_file",
    "initial_month",
    "separator_char",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_csv_dir")]
    pub csv_dir: String,
    #[serde(default = "default_colab_file")]
    pub colab_file: String,
    #[serde(default = "default_xcolab_file")]
    pub xcolab_file: String,
    #[serde(default = "default_itcd_file")]
    pub itcd_file: String,
    #[serde(default = "default_xitcd_file")]
    pub xitcd_file: String,
    #[serde(default = "default_initial_month")]
    pub initial_month: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

fn default_csv_dir() -> String {
    Config::default_csv_dir().to_string_lossy().to_string()
}
fn default_colab_file() -> String {
    "colab.csv".to_string()
}
fn default_xcolab_file() -> String {
    "xcolab.csv".to_string()
}
fn default_itcd_file() -> String {
    "itcd.csv".to_string()
}
fn default_xitcd_file() -> String {
    "xitcd.csv".to_string()
}
fn default_initial_month() -> String {
    "2022-11".to_string()
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            csv_dir: default_csv_dir(),
            colab_file: default_colab_file(),
            xcolab_file: default_xcolab_file(),
            itcd_file: default_itcd_file(),
            xitcd_file: default_xitcd_file(),
            initial_month: default_initial_month(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the configuration directory.
    /// `ROOMBOOK_HOME` wins over the user's home directory.
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var("ROOMBOOK_HOME")
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".roombook")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("roombook.conf")
    }

    /// Default location of the CSV exports
    pub fn default_csv_dir() -> PathBuf {
        Self::config_dir().join("csv_files")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    /// Write the configuration file (and create the CSV directory).
    /// In test mode nothing is written to disk.
    pub fn init_all(csv_dir: Option<String>, is_test: bool) -> AppResult<Self> {
        let mut config = Self::default();
        if let Some(dir) = csv_dir {
            config.csv_dir = dir;
        }

        if is_test {
            return Ok(config);
        }

        fs::create_dir_all(Self::config_dir())?;
        fs::create_dir_all(config.csv_path())?;

        let yaml = serde_yaml::to_string(&config).map_err(|e| AppError::Config(e.to_string()))?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes())
            .map_err(|_| AppError::ConfigSave)?;

        Ok(config)
    }

    /// Keys from `CONFIG_KEYS` absent in the file on disk (defaults are
    /// used for them at load time).
    pub fn missing_keys() -> AppResult<Vec<&'static str>> {
        let path = Self::config_file();
        let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
        let value: serde_yaml::Value =
            serde_yaml::from_str(&content).map_err(|e| AppError::Config(e.to_string()))?;

        let missing = CONFIG_KEYS
            .iter()
            .copied()
            .filter(|k| value.get(*k).is_none())
            .collect();
        Ok(missing)
    }

    pub fn csv_path(&self) -> PathBuf {
        expand_tilde(&self.csv_dir)
    }

    pub fn sources(&self) -> SourceSet {
        SourceSet::new(
            &self.colab_file,
            &self.xcolab_file,
            &self.itcd_file,
            &self.xitcd_file,
        )
    }
}
