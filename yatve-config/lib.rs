// Editor-wide settings. Everything has a default, so a missing config file
// is fine; only a file that exists but cannot be read or parsed is an error.

use std::{
    env, fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use iced::{Pixels, Size};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

const DEFAULT_FONT_SIZE: f32 = 16.0;
const DEFAULT_PADDING: f32 = 8.0;
const DEFAULT_WIDTH: f32 = 600.0;
const DEFAULT_HEIGHT: f32 = 400.0;

/// Overrides the config file location.
pub const CONFIG_ENV: &str = "YATVE_CONFIG";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("could not parse {}: {source}", path.display())]
    Parse { path: PathBuf, source: toml::de::Error },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    pub font_size: Pixels,
    /// Space between the text and the edges of the view.
    pub padding: f32,
    pub window_size: Size,
}

impl Default for Config {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

/// On-disk shape of the config file.
#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct RawConfig {
    font_size: f32,
    padding: f32,
    width: f32,
    height: f32,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            padding: DEFAULT_PADDING,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
        }
    }
}

impl From<RawConfig> for Config {
    fn from(raw: RawConfig) -> Self {
        Self {
            font_size: Pixels(raw.font_size),
            padding: raw.padding,
            window_size: Size::new(raw.width, raw.height),
        }
    }
}

impl Config {
    /// Loads from `$YATVE_CONFIG`, or `config.toml` in the platform config
    /// directory.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) => Self::from_path(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let source = match fs::read_to_string(path) {
            Ok(source) => source,
            Err(error) if error.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no config file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        Self::parse(&source).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(source: &str) -> Result<Self, toml::de::Error> {
        toml::from_str::<RawConfig>(source).map(Into::into)
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(path) = env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(path));
    }

    ProjectDirs::from("org", "poacher", "yatve").map(|dirs| dirs.config_dir().join("config.toml"))
}
