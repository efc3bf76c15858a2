use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::ConfigError;

pub const DEFAULT_LEADERBOARD_FILE: &str = "leaderboard.txt";
pub const DEFAULT_TOP_N: usize = 5;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub leaderboard_path: PathBuf,
    pub top_n: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            leaderboard_path: PathBuf::from(DEFAULT_LEADERBOARD_FILE),
            top_n: DEFAULT_TOP_N,
        }
    }
}

pub fn get_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("numguess").join("config.json"))
}

/// Loads the user config, falling back to defaults when it is missing or unreadable.
pub fn load_config() -> GameConfig {
    let Some(path) = get_config_path() else {
        return GameConfig::default();
    };
    if !path.exists() {
        debug!(path = %path.display(), "No config file, using defaults");
        return GameConfig::default();
    }

    match read_config(&path) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "Ignoring config file");
            GameConfig::default()
        }
    }
}

pub fn read_config(path: &Path) -> Result<GameConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub fn save_config(config: &GameConfig) -> Result<PathBuf, ConfigError> {
    let path = get_config_path().ok_or(ConfigError::NoHome)?;
    write_config(&path, config)?;
    Ok(path)
}

pub fn write_config(path: &Path, config: &GameConfig) -> Result<(), ConfigError> {
    let write_err = |source| ConfigError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(write_err)?;
    }

    let contents = serde_json::to_string_pretty(config)
        .map_err(|source| ConfigError::Serialize { source })?;
    fs::write(path, contents).map_err(write_err)
}
