//! Filesystem locations for config and logs (~/.parallax/...)

use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::constants::fs::{CONFIG_DIR_NAME, CONFIG_FILE_NAME, LOGS_DIR_NAME, LOG_FILE_NAME};
use crate::error::{ConfigError, ConfigResult};

/// Root config directory (~/.parallax)
pub fn config_dir() -> ConfigResult<PathBuf> {
    dirs::home_dir()
        .map(|home| home.join(CONFIG_DIR_NAME))
        .ok_or(ConfigError::NoHomeDirectory)
}

/// Path of the TOML config file
pub fn config_file() -> ConfigResult<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Directory holding log files. Falls back to the system temp dir when
/// there is no home directory.
pub fn logs_dir() -> PathBuf {
    config_dir()
        .unwrap_or_else(|_| std::env::temp_dir().join(CONFIG_DIR_NAME))
        .join(LOGS_DIR_NAME)
}

/// Full path of the log file
pub fn log_file() -> PathBuf {
    logs_dir().join(LOG_FILE_NAME)
}

/// Create the logs directory if missing
pub fn ensure_logs_dir() -> Result<PathBuf> {
    let dir = logs_dir();
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create logs directory {}", dir.display()))?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_file_lives_in_logs_dir() {
        let file = log_file();
        assert_eq!(file.parent(), Some(logs_dir().as_path()));
        assert!(file.ends_with(LOG_FILE_NAME));
    }

    #[test]
    fn test_config_file_name() {
        if let Ok(path) = config_file() {
            assert!(path.ends_with(format!("{}/{}", CONFIG_DIR_NAME, CONFIG_FILE_NAME)));
        }
    }
}
