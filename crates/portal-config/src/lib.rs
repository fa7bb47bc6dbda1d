//! Configuration loading for the portal tunnel effect.
//!
//! A small numeric-parameter file at the platform config directory
//! (`config.toml` under the `portal` project dir). A missing file means
//! defaults; a malformed file is a startup error.

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

/// Errors raised while loading the config file.
#[derive(Debug)]
pub enum ConfigError {
    Read(PathBuf, io::Error),
    Parse(PathBuf, toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Read(path, err) => {
                write!(f, "failed to read config {}: {err}", path.display())
            }
            ConfigError::Parse(path, err) => {
                write!(f, "failed to parse config {}: {err}", path.display())
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Read(_, err) => Some(err),
            ConfigError::Parse(_, err) => Some(err),
        }
    }
}

/// Numeric effect parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Number of wireframe grid planes.
    pub planes: usize,
    /// Number of falling glyph streams.
    pub streams: usize,
    /// Fixed tick rate the frame driver targets.
    pub target_fps: u32,
    /// Parallax strength multiplier, clamped to [0, 1].
    pub parallax: f32,
    /// Optional RNG seed for a reproducible layout.
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            planes: 12,
            streams: 48,
            target_fps: 60,
            parallax: 1.0,
            seed: None,
        }
    }
}

impl Config {
    /// Load from the platform config dir. A missing file yields defaults.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load and validate a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let raw = fs::read_to_string(path)
            .map_err(|err| ConfigError::Read(path.to_path_buf(), err))?;
        let config: Config =
            toml::from_str(&raw).map_err(|err| ConfigError::Parse(path.to_path_buf(), err))?;
        Ok(config.sanitized())
    }

    /// Clamp values into usable ranges.
    fn sanitized(mut self) -> Self {
        self.planes = self.planes.clamp(1, 64);
        self.streams = self.streams.clamp(1, 512);
        self.target_fps = self.target_fps.clamp(1, 240);
        self.parallax = self.parallax.clamp(0.0, 1.0);
        self
    }
}

/// Path of the config file, if a platform config dir exists.
pub fn config_path() -> Option<PathBuf> {
    ProjectDirs::from("", "", "portal").map(|dirs| dirs.config_dir().join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.planes, 12);
        assert_eq!(config.streams, 48);
        assert_eq!(config.target_fps, 60);
        assert_eq!(config.parallax, 1.0);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_parse_partial_file() {
        let config: Config = toml::from_str("planes = 6\nseed = 99").unwrap();
        assert_eq!(config.planes, 6);
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.streams, Config::default().streams);
    }

    #[test]
    fn test_sanitize_clamps_ranges() {
        let config: Config = toml::from_str("planes = 0\nparallax = 3.5\ntarget_fps = 10000")
            .unwrap();
        let config = config.sanitized();
        assert_eq!(config.planes, 1);
        assert_eq!(config.parallax, 1.0);
        assert_eq!(config.target_fps, 240);
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        assert!(toml::from_str::<Config>("planes = \"many\"").is_err());
    }
}
