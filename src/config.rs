use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::totp::{DEFAULT_LENGTH, DEFAULT_PERIOD};

const DIR_NAME: &str = ".alphacode";
const FILE_NAME: &str = "config.toml";
const DEFAULT_REFRESH_MS: u64 = 10;

fn default_length() -> usize {
    DEFAULT_LENGTH
}

fn default_period() -> u32 {
    DEFAULT_PERIOD
}

fn default_refresh_ms() -> u64 {
    DEFAULT_REFRESH_MS
}

/// Harness settings read from `~/.alphacode/config.toml`. Command-line
/// flags win over anything set here.
#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct Config {
    pub secret: Option<String>,
    #[serde(default = "default_length")]
    pub length: usize,
    #[serde(default = "default_period")]
    pub period: u32,
    #[serde(default = "default_refresh_ms")]
    pub refresh_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            secret: None,
            length: DEFAULT_LENGTH,
            period: DEFAULT_PERIOD,
            refresh_ms: DEFAULT_REFRESH_MS,
        }
    }
}

pub fn get_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DIR_NAME).join(FILE_NAME))
}

impl Config {
    pub fn load() -> Result<Config> {
        match get_path() {
            Some(path) => Config::load_from(&path),
            None => {
                warn!("Unable to find home directory, using default config");
                Ok(Config::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Config::default());
        }

        debug!("Loading config from {}", path.display());
        let contents = fs::read_to_string(path)?;
        Config::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Config> {
        Ok(toml::from_str(contents)?)
    }
}
