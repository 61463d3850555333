use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use crate::errors::{AppError, AppResult};

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub xmltv: XmltvConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Directory holding lineup.json, status/ and guide/
    #[serde(default = "default_snapshot_dir")]
    pub snapshot_dir: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_m3u_path")]
    pub m3u_path: PathBuf,
    #[serde(default = "default_xmltv_path")]
    pub xmltv_path: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct XmltvConfig {
    #[serde(default = "default_generator_info_name")]
    pub generator_info_name: String,
}

fn default_snapshot_dir() -> PathBuf {
    PathBuf::from(DEFAULT_SNAPSHOT_DIR)
}

fn default_m3u_path() -> PathBuf {
    PathBuf::from(DEFAULT_M3U_PATH)
}

fn default_xmltv_path() -> PathBuf {
    PathBuf::from(DEFAULT_XMLTV_PATH)
}

fn default_generator_info_name() -> String {
    DEFAULT_GENERATOR_INFO_NAME.to_string()
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            snapshot_dir: default_snapshot_dir(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            m3u_path: default_m3u_path(),
            xmltv_path: default_xmltv_path(),
        }
    }
}

impl Default for XmltvConfig {
    fn default() -> Self {
        Self {
            generator_info_name: default_generator_info_name(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file, writing the defaults there first
    /// if the file does not exist yet
    pub fn load_from_file<P: AsRef<Path>>(config_file: P) -> AppResult<Self> {
        let config_file = config_file.as_ref();

        if config_file.exists() {
            let contents = std::fs::read_to_string(config_file)?;
            let config: Self = toml::from_str(&contents).map_err(|e| {
                AppError::configuration(format!("Invalid config file {config_file:?}: {e}"))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            let default_config = Self::default();
            let contents = toml::to_string_pretty(&default_config).map_err(|e| {
                AppError::configuration(format!("Failed to serialize default config: {e}"))
            })?;
            if let Some(parent) = config_file.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(config_file, contents)?;
            info!("Created default config file: {:?}", config_file);
            Ok(default_config)
        }
    }

    /// Reject values that cannot produce a run
    pub fn validate(&self) -> AppResult<()> {
        if self.input.snapshot_dir.as_os_str().is_empty() {
            return Err(AppError::configuration("input.snapshot_dir must not be empty"));
        }
        if self.output.m3u_path.as_os_str().is_empty() {
            return Err(AppError::configuration("output.m3u_path must not be empty"));
        }
        if self.output.xmltv_path.as_os_str().is_empty() {
            return Err(AppError::configuration("output.xmltv_path must not be empty"));
        }
        if self.output.m3u_path == self.output.xmltv_path {
            return Err(AppError::configuration(
                "output.m3u_path and output.xmltv_path must differ",
            ));
        }
        Ok(())
    }
}
