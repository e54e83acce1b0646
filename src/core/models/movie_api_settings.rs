use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::global_constants;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovieApiSettings {
    pub api_key: String,
    pub search_host: String,
    pub search_path: String,
    pub image_base_url: String,
}

impl Default for MovieApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            search_host: global_constants::DEFAULT_SEARCH_HOST.to_string(),
            search_path: global_constants::DEFAULT_SEARCH_PATH.to_string(),
            image_base_url: global_constants::DEFAULT_IMAGE_BASE_URL.to_string(),
        }
    }
}

impl MovieApiSettings {
    /// Reads settings from the user config directory if the file exists,
    /// then lets `TMDB_API_KEY` override the stored key. Never writes.
    pub fn load() -> anyhow::Result<Self> {
        let settings_path = Self::get_settings_file_path()?;
        let settings = Self::load_from_path(&settings_path)?;

        let env_api_key = std::env::var(global_constants::API_KEY_ENV_VAR).ok();
        let settings = settings.with_api_key_override(env_api_key);

        if settings.api_key.is_empty() {
            log::warn!(
                "[SETTINGS] No API key configured, set {} or edit {:?}",
                global_constants::API_KEY_ENV_VAR,
                settings_path
            );
        }

        Ok(settings)
    }

    pub fn load_from_path(settings_path: &Path) -> anyhow::Result<Self> {
        if !settings_path.exists() {
            log::info!("[SETTINGS] No settings file found, using defaults");
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(settings_path)?;
        let settings: MovieApiSettings = serde_json::from_str(&contents)?;

        log::info!("[SETTINGS] Loaded settings from {:?}", settings_path);
        log::debug!("[SETTINGS] Search host: {}", settings.search_host);
        log::debug!("[SETTINGS] Image base URL: {}", settings.image_base_url);

        Ok(settings)
    }

    pub fn with_api_key_override(mut self, api_key: Option<String>) -> Self {
        if let Some(key) = api_key.filter(|key| !key.trim().is_empty()) {
            log::debug!("[SETTINGS] Using API key from environment");
            self.api_key = key.trim().to_string();
        }
        self
    }

    fn get_settings_file_path() -> anyhow::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?
            .join(global_constants::CONFIG_DIRECTORY_NAME);

        Ok(config_dir.join(global_constants::SETTINGS_FILE_NAME))
    }
}
