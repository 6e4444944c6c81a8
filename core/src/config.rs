//! Scan configuration.
//!
//! Values come from three layers, later ones winning:
//!
//! 1. built-in defaults
//! 2. a TOML file (`SCANSTITCH_CONFIG`, else `scanstitch.toml` in the working directory)
//! 3. environment overrides `PATH_TO_DATA`, `CLOUD_POINTS_NAME`, `ITEM_DILUTION`, `DELETE_FRAMES`
//!
//! ```toml
//! data_path = "/var/scans/run-3"
//! cloud_points_name = "pointData.csv"
//! item_dilution = 20
//! delete_frames = false
//! ```

use crate::{Error, Result};
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "SCANSTITCH_CONFIG";
/// Config file looked up in the working directory when `CONFIG_ENV` is unset.
pub const DEFAULT_CONFIG_FILE: &str = "scanstitch.toml";

pub const PATH_TO_DATA: &str = "PATH_TO_DATA";
pub const CLOUD_POINTS_NAME: &str = "CLOUD_POINTS_NAME";
pub const ITEM_DILUTION: &str = "ITEM_DILUTION";
pub const DELETE_FRAMES: &str = "DELETE_FRAMES";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Directory holding frame images, per-frame metadata and the cloud CSV.
    #[serde(alias = "PATH_TO_DATA")]
    pub data_path: PathBuf,
    /// File name of the point cloud CSV inside `data_path`.
    #[serde(alias = "CLOUD_POINTS_NAME")]
    pub cloud_points_name: String,
    /// Keep every Nth frame in batch mode.
    #[serde(alias = "ITEM_DILUTION")]
    pub item_dilution: i64,
    /// Remove `frame_<id>.png` files after a successful batch stitch.
    #[serde(alias = "DELETE_FRAMES")]
    pub delete_frames: bool,
    /// Also write `average_location.csv` in batch mode.
    pub save_average_location: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from("data"),
            cloud_points_name: "pointData.csv".to_string(),
            item_dilution: 20,
            delete_frames: false,
            save_average_location: false,
        }
    }
}

impl ScanConfig {
    /// Load the configuration from `path`, or from the default lookup when `None`,
    /// then apply environment overrides.
    ///
    /// Values are not validated here: only batch mode depends on
    /// `item_dilution`, and it calls [`validate`](Self::validate) itself.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let explicit = match path {
            Some(p) => Some(p.to_path_buf()),
            None => env::var_os(CONFIG_ENV).map(PathBuf::from),
        };

        let mut config = match explicit {
            Some(p) => Self::from_file(&p)?,
            None => {
                let fallback = Path::new(DEFAULT_CONFIG_FILE);
                if fallback.is_file() {
                    Self::from_file(fallback)?
                } else {
                    tracing::debug!("No config file found, using defaults");
                    Self::default()
                }
            }
        };

        config.apply_overrides(|key| env::var(key).ok())?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("failed to read {}: {}", path.display(), e))
        })?;
        let config = Self::from_toml_str(&contents)
            .map_err(|e| Error::Config(format!("{}: {}", path.display(), e)))?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        basic_toml::from_str(contents).map_err(|e| Error::Config(e.to_string()))
    }

    /// Apply overrides from a key lookup (normally the process environment).
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup(PATH_TO_DATA) {
            self.data_path = PathBuf::from(v);
        }
        if let Some(v) = lookup(CLOUD_POINTS_NAME) {
            self.cloud_points_name = v;
        }
        if let Some(v) = lookup(ITEM_DILUTION) {
            self.item_dilution = v.trim().parse().map_err(|_| {
                Error::Config(format!("{} must be an integer, got '{}'", ITEM_DILUTION, v))
            })?;
        }
        if let Some(v) = lookup(DELETE_FRAMES) {
            self.delete_frames = parse_flag(&v).ok_or_else(|| {
                Error::Config(format!("{} must be a boolean, got '{}'", DELETE_FRAMES, v))
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.item_dilution <= 0 {
            return Err(Error::InvalidStride(self.item_dilution));
        }
        Ok(())
    }

    /// Full path of the point cloud CSV.
    pub fn cloud_points_path(&self) -> PathBuf {
        self.data_path.join(&self.cloud_points_name)
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
