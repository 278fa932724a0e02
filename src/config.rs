//! Application-level configuration loading: pagination, upload, and session
//! tunables.

use std::{env, fs, io::ErrorKind, path::PathBuf, time::Duration};

use serde::Deserialize;
use tracing::{info, warn};

/// Default location on disk where the server looks for the JSON configuration.
const DEFAULT_CONFIG_PATH: &str = "config/app.json";
/// Environment variable that overrides [`DEFAULT_CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "SPRITE_FORGE_CONFIG_PATH";

const DEFAULT_PAGE_SIZE: u64 = 20;
const DEFAULT_DETAIL_ICON_PAGE_SIZE: u64 = 30;
const DEFAULT_MAX_PAGE_SIZE: u64 = 100;
const DEFAULT_MAX_ICONS_PER_SPRITE: usize = 500;
const DEFAULT_MAX_SVG_BYTES: usize = 256 * 1024;
const DEFAULT_POPULAR_TAG_LIMIT: usize = 20;
const DEFAULT_SESSION_TTL_HOURS: u64 = 24 * 7;

#[derive(Debug, Clone)]
/// Immutable runtime configuration shared across the application.
pub struct AppConfig {
    default_page_size: u64,
    detail_icon_page_size: u64,
    max_page_size: u64,
    max_icons_per_sprite: usize,
    max_svg_bytes: usize,
    popular_tag_limit: usize,
    session_ttl_hours: u64,
}

impl AppConfig {
    /// Load the application configuration from disk, falling back to the
    /// baked-in defaults.
    pub fn load() -> Self {
        let path = resolve_config_path();
        match fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<RawConfig>(&contents) {
                Ok(raw) => {
                    let config: Self = raw.into();
                    info!(path = %path.display(), "loaded configuration");
                    config
                }
                Err(err) => {
                    warn!(
                        path = %path.display(),
                        error = %err,
                        "failed to parse config; falling back to defaults"
                    );
                    Self::default()
                }
            },
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    path = %path.display(),
                    "config file not found; using built-in defaults"
                );
                Self::default()
            }
            Err(err) => {
                warn!(
                    path = %path.display(),
                    error = %err,
                    "failed to read config; falling back to defaults"
                );
                Self::default()
            }
        }
    }

    /// Resolve the effective page size for a listing request.
    pub fn clamp_page_size(&self, requested: Option<u64>) -> u64 {
        requested
            .unwrap_or(self.default_page_size)
            .clamp(1, self.max_page_size)
    }

    /// Resolve the effective 1-based page number for a listing request.
    pub fn clamp_page(&self, requested: Option<u64>) -> u64 {
        requested.unwrap_or(1).max(1)
    }

    /// Number of icons embedded in the sprite detail response.
    pub fn detail_icon_page_size(&self) -> u64 {
        self.detail_icon_page_size
    }

    /// Upper bound on icons accepted in one sprite upload.
    pub fn max_icons_per_sprite(&self) -> usize {
        self.max_icons_per_sprite
    }

    /// Upper bound on a single SVG document, in bytes.
    pub fn max_svg_bytes(&self) -> usize {
        self.max_svg_bytes
    }

    /// Number of tags returned by the popular-tags endpoint.
    pub fn popular_tag_limit(&self) -> usize {
        self.popular_tag_limit
    }

    /// Lifetime of a freshly issued session.
    pub fn session_ttl(&self) -> Duration {
        Duration::from_secs(self.session_ttl_hours * 3600)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        RawConfig::default().into()
    }
}

#[derive(Debug, Default, Deserialize)]
/// JSON representation of the configuration file located at
/// [`DEFAULT_CONFIG_PATH`]; every field is optional.
struct RawConfig {
    default_page_size: Option<u64>,
    detail_icon_page_size: Option<u64>,
    max_page_size: Option<u64>,
    max_icons_per_sprite: Option<usize>,
    max_svg_bytes: Option<usize>,
    popular_tag_limit: Option<usize>,
    session_ttl_hours: Option<u64>,
}

impl From<RawConfig> for AppConfig {
    fn from(value: RawConfig) -> Self {
        Self {
            default_page_size: value.default_page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            detail_icon_page_size: value
                .detail_icon_page_size
                .unwrap_or(DEFAULT_DETAIL_ICON_PAGE_SIZE),
            max_page_size: value.max_page_size.unwrap_or(DEFAULT_MAX_PAGE_SIZE),
            max_icons_per_sprite: value
                .max_icons_per_sprite
                .unwrap_or(DEFAULT_MAX_ICONS_PER_SPRITE),
            max_svg_bytes: value.max_svg_bytes.unwrap_or(DEFAULT_MAX_SVG_BYTES),
            popular_tag_limit: value.popular_tag_limit.unwrap_or(DEFAULT_POPULAR_TAG_LIMIT),
            session_ttl_hours: value.session_ttl_hours.unwrap_or(DEFAULT_SESSION_TTL_HOURS),
        }
    }
}

/// Resolve the configuration path taking the environment override into account.
fn resolve_config_path() -> PathBuf {
    env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .filter(|path| !path.as_os_str().is_empty())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_config_keeps_defaults_elsewhere() {
        let raw: RawConfig = serde_json::from_str(r#"{"default_page_size": 10}"#).unwrap();
        let config: AppConfig = raw.into();
        assert_eq!(config.clamp_page_size(None), 10);
        assert_eq!(config.detail_icon_page_size(), DEFAULT_DETAIL_ICON_PAGE_SIZE);
    }

    #[test]
    fn page_size_is_clamped() {
        let config = AppConfig::default();
        assert_eq!(config.clamp_page_size(Some(0)), 1);
        assert_eq!(config.clamp_page_size(Some(10_000)), DEFAULT_MAX_PAGE_SIZE);
        assert_eq!(config.clamp_page_size(None), DEFAULT_PAGE_SIZE);
    }

    #[test]
    fn page_number_never_goes_below_one() {
        let config = AppConfig::default();
        assert_eq!(config.clamp_page(Some(0)), 1);
        assert_eq!(config.clamp_page(None), 1);
        assert_eq!(config.clamp_page(Some(7)), 7);
    }
}
