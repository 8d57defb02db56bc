//! Configuration for the clockface terminal clock.
//!
//! Settings live in `config.toml` under the platform config directory. A
//! missing file means defaults; every field is optional.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use clockface_core::{ClockFace, ColorTheme, FaceError, HandMotion};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Name of the config file inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Errors while reading or writing the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("no home directory to store configuration in")]
    NoConfigDir,
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid [face] section: {0}")]
    Face(#[from] FaceError),
}

/// Face dimensions as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FaceConfig {
    pub size: f64,
    pub center_inset: f64,
    pub number_radius: f64,
    pub corner_radius: f64,
    pub label_width: f64,
    pub label_height: f64,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            size: ClockFace::DEFAULT_SIZE,
            center_inset: ClockFace::DEFAULT_CENTER_INSET,
            number_radius: ClockFace::DEFAULT_NUMBER_RADIUS,
            corner_radius: ClockFace::DEFAULT_CORNER_RADIUS,
            label_width: ClockFace::DEFAULT_LABEL_SIZE,
            label_height: ClockFace::DEFAULT_LABEL_SIZE,
        }
    }
}

impl FaceConfig {
    /// Validate these dimensions into a face.
    pub fn to_face(&self) -> Result<ClockFace, FaceError> {
        ClockFace::new(self.size, self.center_inset, self.number_radius)?
            .with_corner_radius(self.corner_radius)
            .with_label_size(self.label_width, self.label_height)
    }
}

/// All user settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub color_theme: ColorTheme,
    pub motion: HandMotion,
    pub show_numerals: bool,
    /// Event poll interval of the app loop, in milliseconds.
    pub tick_rate_ms: u64,
    /// Length of the second hand sweep, in seconds.
    pub sweep_seconds: f64,
    /// `env_logger` filter, e.g. "debug" or "clockface=trace".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
    pub face: FaceConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            color_theme: ColorTheme::default(),
            motion: HandMotion::default(),
            show_numerals: true,
            tick_rate_ms: 100,
            sweep_seconds: 10.0,
            log_level: None,
            face: FaceConfig::default(),
        }
    }
}

impl Config {
    /// Project directories for clockface, if a home directory exists.
    pub fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("", "", "clockface")
    }

    /// Default location of the config file.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Load from the default location.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::default_path()?)
    }

    /// Load from `path`, returning defaults when the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no config at {}, using defaults", path.display());
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };
        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        // Reject bad dimensions at load time rather than at first draw
        config.face.to_face()?;
        log::debug!("loaded config from {}", path.display());
        Ok(config)
    }

    /// Save to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_to(&Self::default_path()?)
    }

    /// Write to `path`, creating parent directories as needed.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigError> {
        let io_err = |source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents).map_err(io_err)?;
        log::debug!("saved config to {}", path.display());
        Ok(())
    }

    /// The validated clock face.
    pub fn clock_face(&self) -> Result<ClockFace, FaceError> {
        self.face.to_face()
    }

    /// Event poll interval, never below one millisecond.
    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Sweep length; negative or non-finite values fall back to zero.
    pub fn sweep_duration(&self) -> Duration {
        Duration::try_from_secs_f64(self.sweep_seconds).unwrap_or(Duration::ZERO)
    }
}
