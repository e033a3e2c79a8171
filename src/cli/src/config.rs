use std::{
    fs,
    path::{Path, PathBuf},
};

use color_eyre::eyre::WrapErr;
use log::debug;
use serde::Deserialize;

/// Settings read from `config.toml`. Every key is optional.
#[derive(Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub scramble: ScrambleConfig,
    pub display: DisplayConfig,
    pub check: CheckConfig,
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScrambleConfig {
    pub length: usize,
    /// Makes `scramble` and `check` reproducible when set.
    pub seed: Option<u64>,
}

impl Default for ScrambleConfig {
    fn default() -> Self {
        Self {
            length: 25,
            seed: None,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DisplayConfig {
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CheckConfig {
    pub count: usize,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self { count: 100 }
    }
}

impl Config {
    /// Reads `path` if given. Otherwise falls back to the file in the user's
    /// config directory, and to the defaults if that doesn't exist either.
    pub fn load(path: Option<&Path>) -> color_eyre::Result<Config> {
        if let Some(path) = path {
            return Config::read(path);
        }

        match default_path() {
            Some(path) if path.is_file() => Config::read(&path),
            _ => {
                debug!("No configuration file, using the defaults");
                Ok(Config::default())
            }
        }
    }

    fn read(path: &Path) -> color_eyre::Result<Config> {
        debug!("Reading configuration from {}", path.display());

        let text = fs::read_to_string(path)
            .wrap_err_with(|| format!("Failed to read configuration file {}", path.display()))?;
        toml::from_str(&text)
            .wrap_err_with(|| format!("Failed to parse configuration file {}", path.display()))
    }
}

pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cube").join("config.toml"))
}
