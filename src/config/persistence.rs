use std::fs;
use std::path::{Path, PathBuf};

use super::StripConfig;

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns the path to `~/.config/tabstrip/config.ron`.
pub fn config_path() -> Option<PathBuf> {
    config_base_dir().map(|base| base.join("tabstrip").join("config.ron"))
}

/// Loads the config at `path`, falling back to defaults when it is missing or invalid.
pub fn load_config_from(path: &Path) -> StripConfig {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) => {
            log::debug!("no config at {}: {err}", path.display());
            return StripConfig::default();
        }
    };
    match ron::from_str(&contents) {
        Ok(config) => config,
        Err(err) => {
            log::warn!("ignoring invalid config {}: {err}", path.display());
            StripConfig::default()
        }
    }
}

/// Loads the user config, falling back to defaults on any error.
pub fn load_config() -> StripConfig {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => StripConfig::default(),
    }
}

/// Writes `config` to `path` as pretty RON, creating parent directories.
pub fn save_config_to(path: &Path, config: &StripConfig) -> anyhow::Result<()> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir)?;
    }
    let pretty = ron::ser::PrettyConfig::default();
    let serialized = ron::ser::to_string_pretty(config, pretty)?;
    fs::write(path, serialized)?;
    Ok(())
}
