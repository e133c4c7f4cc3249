//! Application settings and paths.
//!
//! Manages XDG-compliant paths for configuration.

use crate::error::{ConfigError, ConfigResult};
use crate::option::ValidationPolicy;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Output formats accepted in `default_output_format`.
const OUTPUT_FORMATS: [&str; 3] = ["plain", "json", "csv"];

/// Application directory paths following XDG Base Directory Specification.
#[derive(Debug, Clone)]
pub struct Paths {
    /// Configuration directory (~/.config/scanopt)
    pub config_dir: PathBuf,
}

impl Paths {
    /// Resolve paths using XDG directories.
    pub fn resolve() -> ConfigResult<Self> {
        let project = ProjectDirs::from("com", "scanopt", "scanopt")
            .ok_or(ConfigError::DirectoryNotFound)?;

        Ok(Self {
            config_dir: project.config_dir().to_path_buf(),
        })
    }

    /// Get the path to the settings file.
    pub fn settings_file(&self) -> PathBuf {
        self.config_dir.join("settings.json")
    }
}

/// Application-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Default output format (plain, json, csv).
    pub default_output_format: String,
    /// Reject in-range values that miss the quantization step.
    pub enforce_quantization: bool,
    /// Use colors in plain output.
    pub color: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            default_output_format: "plain".to_string(),
            enforce_quantization: true,
            color: true,
        }
    }
}

impl AppSettings {
    /// Load settings from the default location.
    ///
    /// A missing file, or no resolvable config directory at all, yields
    /// defaults.
    pub fn load() -> ConfigResult<Self> {
        Self::load_with(Paths::resolve())
    }

    fn load_with(paths: ConfigResult<Paths>) -> ConfigResult<Self> {
        let file = match paths {
            Ok(paths) => paths.settings_file(),
            Err(ConfigError::DirectoryNotFound) => {
                warn!("no configuration directory (is HOME set?), using default settings");
                return Ok(Self::default());
            }
            Err(e) => return Err(e),
        };

        if !file.exists() {
            debug!(path = %file.display(), "no settings file, using defaults");
            return Ok(Self::default());
        }

        Self::load_from(&file)
    }

    /// Load settings from a specific file.
    pub fn load_from(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let settings: Self =
            serde_json::from_str(&content).map_err(|e| ConfigError::InvalidFormat(e.to_string()))?;
        settings.validate()?;

        debug!(path = %path.display(), "loaded settings");
        Ok(settings)
    }

    /// Save settings to the default location.
    pub fn save(&self) -> ConfigResult<()> {
        let paths = Paths::resolve()?;
        fs::create_dir_all(&paths.config_dir)?;
        self.save_to(&paths.settings_file())
    }

    /// Save settings to a specific file.
    pub fn save_to(&self, path: &Path) -> ConfigResult<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content).map_err(|e| ConfigError::WriteFailed {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    /// Check values that serde alone cannot.
    pub fn validate(&self) -> ConfigResult<()> {
        if !OUTPUT_FORMATS.contains(&self.default_output_format.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "default_output_format must be one of {}, got '{}'",
                OUTPUT_FORMATS.join(", "),
                self.default_output_format
            )));
        }
        Ok(())
    }

    /// Constraint checking policy derived from these settings.
    pub fn validation_policy(&self) -> ValidationPolicy {
        ValidationPolicy {
            enforce_quantization: self.enforce_quantization,
        }
    }
}
