//! Runtime settings, read from `TUNEBOX_*` environment variables (a `.env`
//! file is loaded first by `main`).

use std::path::PathBuf;

use tracing::warn;

use crate::audio::config::AudioConfig;

pub const ENV_SEARCH_TERM: &str = "TUNEBOX_SEARCH_TERM";
pub const ENV_RESULT_LIMIT: &str = "TUNEBOX_RESULT_LIMIT";
pub const ENV_API_URL: &str = "TUNEBOX_API_URL";
pub const ENV_VOLUME: &str = "TUNEBOX_VOLUME";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceConfig {
    pub api_url: String,
    pub search_term: String,
    pub result_limit: u32,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: "https://itunes.apple.com/search".to_string(),
            search_term: "raj bains".to_string(),
            result_limit: 100,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppConfig {
    pub source: SourceConfig,
    pub audio: AudioConfig,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. Blank values are ignored and
    /// unparseable numbers fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let mut config = Self::default();

        if let Some(term) = get(ENV_SEARCH_TERM) {
            config.source.search_term = term;
        }
        if let Some(url) = get(ENV_API_URL) {
            config.source.api_url = url;
        }
        if let Some(limit) = get(ENV_RESULT_LIMIT) {
            match limit.parse::<u32>() {
                Ok(limit) if limit > 0 => config.source.result_limit = limit,
                _ => warn!(value = limit.as_str(), "config_invalid_result_limit"),
            }
        }
        if let Some(volume) = get(ENV_VOLUME) {
            match volume.parse::<u8>() {
                Ok(volume) if volume <= 100 => config.audio.volume = volume,
                _ => warn!(value = volume.as_str(), "config_invalid_volume"),
            }
        }

        config
    }
}

/// Directory holding the playlists blob, next to the log file.
pub fn storage_dir() -> PathBuf {
    crate::util::log::get_data_dir()
}
