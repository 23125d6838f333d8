//! Configuration initialization and hierarchy management

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::adapters::toml_config::{AppConfig, DEFAULT_CONFIG_FILE};
use crate::domain::errors::*;

/// Environment variable naming a config file
pub const ENV_CONFIG: &str = "CHAPTER_PLAYLIST_CONFIG";
pub const ENV_FFPROBE: &str = "CHAPTER_PLAYLIST_FFPROBE";
pub const ENV_FFMPEG: &str = "CHAPTER_PLAYLIST_FFMPEG";
pub const ENV_LOG_LEVEL: &str = "CHAPTER_PLAYLIST_LOG_LEVEL";

/// Values given on the command line; `None` means not given
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub config_file: Option<PathBuf>,
    pub ffprobe: Option<PathBuf>,
    pub ffmpeg: Option<PathBuf>,
    pub log_level: Option<String>,
    pub json_logs: bool,
}

/// Resolve configuration following precedence: CLI > Env > File > Defaults
pub fn initialize_configuration(overrides: &ConfigOverrides) -> DomainResult<AppConfig> {
    initialize_with_env(overrides, |key| std::env::var(key).ok())
}

/// [`initialize_configuration`] with an injectable environment lookup
pub fn initialize_with_env<F>(overrides: &ConfigOverrides, env: F) -> DomainResult<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    // Step 1 and 2: defaults, replaced by a config file if one is found
    let mut config = match locate_config_file(overrides.config_file.as_deref(), &env) {
        Some(path) => {
            debug!(path = %path.display(), "Loading configuration file");
            AppConfig::load(&path)?
        }
        None => AppConfig::default(),
    };

    // Step 3: environment
    if let Some(ffprobe) = env(ENV_FFPROBE) {
        config.tools.ffprobe = PathBuf::from(ffprobe);
    }
    if let Some(ffmpeg) = env(ENV_FFMPEG) {
        config.tools.ffmpeg = PathBuf::from(ffmpeg);
    }
    if let Some(level) = env(ENV_LOG_LEVEL) {
        config.logging.level = level;
    }

    // Step 4: command line
    if let Some(ffprobe) = &overrides.ffprobe {
        config.tools.ffprobe = ffprobe.clone();
    }
    if let Some(ffmpeg) = &overrides.ffmpeg {
        config.tools.ffmpeg = ffmpeg.clone();
    }
    if let Some(level) = &overrides.log_level {
        config.logging.level = level.clone();
    }
    if overrides.json_logs {
        config.logging.json = true;
    }

    config.validate()?;
    Ok(config)
}

/// An explicitly named file must exist; the working-directory default is
/// only used when present
fn locate_config_file<F>(explicit: Option<&Path>, env: &F) -> Option<PathBuf>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Some(path) = env(ENV_CONFIG) {
        return Some(PathBuf::from(path));
    }
    let default = PathBuf::from(DEFAULT_CONFIG_FILE);
    default.is_file().then_some(default)
}
