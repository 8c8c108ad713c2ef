use serde::{Serialize, Deserialize};
use directories::ProjectDirs;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

pub const DEFAULT_PLAYER_NAME: &str = "Player";

/// Persisted chat preferences
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ChatSettings {
    /// Player has silenced chat; a notice is shown when the panel starts
    pub silence_chat: bool,
    pub start_transparent: bool,
    pub start_pinned: bool,
    /// Name used for lines typed locally
    pub player_name: String,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            silence_chat: false,
            start_transparent: false,
            start_pinned: false,
            player_name: DEFAULT_PLAYER_NAME.to_string(),
        }
    }
}

pub fn settings_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from("com", "overlay-chat", "overlay-chat").ok_or(Error::NoConfigDir)?;
    let dir = proj.config_dir();
    fs::create_dir_all(dir)?;
    Ok(dir.join("settings.json"))
}

/// Load settings from the platform config dir, falling back to defaults when
/// no file has been written yet.
pub fn load_settings() -> Result<ChatSettings> {
    load_settings_from(&settings_path()?)
}

pub fn load_settings_from(path: &Path) -> Result<ChatSettings> {
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no settings file, using defaults");
        return Ok(ChatSettings::default());
    }
    let content = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded settings");
    Ok(settings)
}

pub fn save_settings(settings: &ChatSettings) -> Result<()> {
    save_settings_to(settings, &settings_path()?)
}

pub fn save_settings_to(settings: &ChatSettings, path: &Path) -> Result<()> {
    let data = serde_json::to_string_pretty(settings)?;
    let mut file = fs::File::create(path)?;
    file.write_all(data.as_bytes())?;
    tracing::info!(path = %path.display(), "saved settings");
    Ok(())
}
