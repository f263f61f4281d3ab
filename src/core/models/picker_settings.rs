use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use super::GifServiceError;
use crate::global_constants;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "Dark"),
            ThemeMode::Light => write!(f, "Light"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PickerSettings {
    pub search_endpoint: String,
    pub rating: String,
    pub debounce_ms: u64,
    pub default_query: String,
    pub conversation_id: String,
    pub theme_mode: ThemeMode,
    pub api_key: Option<String>,
}

impl Default for PickerSettings {
    fn default() -> Self {
        Self {
            search_endpoint: global_constants::DEFAULT_SEARCH_ENDPOINT.to_string(),
            rating: global_constants::DEFAULT_RATING.to_string(),
            debounce_ms: global_constants::DEFAULT_DEBOUNCE_MS,
            default_query: global_constants::DEFAULT_QUERY.to_string(),
            conversation_id: global_constants::DEFAULT_CONVERSATION_ID.to_string(),
            theme_mode: ThemeMode::default(),
            api_key: None,
        }
    }
}

impl PickerSettings {
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;

        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            let default_settings = Self::default();
            default_settings.save()?;
            return Ok(default_settings);
        }

        let contents = std::fs::read_to_string(&settings_path)?;
        let settings: PickerSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Search endpoint: {}", settings.search_endpoint);
        log::debug!("[SETTINGS] Debounce window: {}ms", settings.debounce_ms);

        Ok(settings)
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let settings_path = Self::get_settings_file_path()?;

        if let Some(parent) = settings_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = serde_json::to_string_pretty(self)?;
        std::fs::write(&settings_path, contents)?;

        log::info!("[SETTINGS] Saved settings to {:?}", settings_path);
        Ok(())
    }

    /// The environment wins over the settings file. There is no built-in fallback key.
    pub fn resolve_api_key(&self, env_value: Option<String>) -> Result<String, GifServiceError> {
        let from_env = env_value.filter(|key| !key.trim().is_empty());
        if let Some(key) = from_env {
            log::debug!(
                "[SETTINGS] Using api key from {}",
                global_constants::GIPHY_API_KEY_ENV
            );
            return Ok(key.trim().to_string());
        }

        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => {
                log::debug!("[SETTINGS] Using api key from settings file");
                Ok(key.to_string())
            }
            _ => {
                let location = Self::get_settings_file_path()
                    .map(|path| path.display().to_string())
                    .unwrap_or_else(|_| global_constants::SETTINGS_FILE_NAME.to_string());
                Err(GifServiceError::MissingApiKey(location))
            }
        }
    }

    pub fn debounce_window(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::SETTINGS_DIR_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
