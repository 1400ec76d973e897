//! Loading `settings.toml` and locating per-user files.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;

use crate::models::settings::Settings;

const SETTINGS_FILE: &str = "settings.toml";

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "Ken24T", "NearbyPlaces")
}

pub fn default_settings_path() -> PathBuf {
    match project_dirs() {
        Some(dirs) => dirs.config_dir().join(SETTINGS_FILE),
        None => {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE)
        }
    }
}

/// Read and validate a settings file.
pub fn load_settings(path: &Path) -> Result<Settings> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("failed to read settings from {}", path.display()))?;
    let settings: Settings = toml::from_str(&data)
        .with_context(|| format!("failed to parse settings in {}", path.display()))?;
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings in {}: {}", path.display(), e))?;
    Ok(settings)
}

/// Settings from `path`, or the defaults when the file is absent or bad.
pub fn load_or_default(path: &Path) -> Settings {
    if !path.exists() {
        log::debug!("No settings at {}, using defaults", path.display());
        return Settings::default();
    }

    match load_settings(path) {
        Ok(settings) => {
            log::info!("Loaded settings from {}", path.display());
            settings
        }
        Err(err) => {
            log::warn!("{err:#}; using defaults");
            Settings::default()
        }
    }
}

pub fn save_settings(path: &Path, settings: &Settings) -> Result<()> {
    settings
        .validate()
        .map_err(|e| anyhow!("Invalid settings: {}", e))?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("failed to create dir {}", parent.display()))?;
    }
    let data = toml::to_string_pretty(settings).context("failed to serialize settings")?;
    fs::write(path, data)
        .with_context(|| format!("failed to write settings to {}", path.display()))?;
    Ok(())
}
