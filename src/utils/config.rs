//! Application configuration

use crate::formatter::SectionKind;
use crate::utils::error::TubelensError;
use crate::utils::platform;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, warn};

/// Metadata API the lookups are sent to
pub const DEFAULT_API_ENDPOINT: &str =
    "http://node1.mindwired.com.br:8452/api/scraper/v1/video-youtube.com";

/// Application settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Base URL of the metadata API
    pub api_endpoint: String,

    /// Query parameter carrying the video identifier
    pub id_query_param: String,

    /// Locale for upload dates (e.g. "en_US"); `None` follows the system
    pub locale: Option<String>,

    /// Section expanded when a result is first shown
    pub initial_section: SectionKind,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            api_endpoint: DEFAULT_API_ENDPOINT.to_string(),
            id_query_param: "id".to_string(),
            locale: None,
            initial_section: SectionKind::GeneralInformation,
        }
    }
}

impl AppSettings {
    /// Load settings from the platform config directory.
    ///
    /// A missing file yields the defaults. A file that exists but cannot be
    /// parsed or validated is an error, so the caller can tell the user.
    pub fn load() -> Result<Self, TubelensError> {
        Self::load_from(&platform::settings_path())
    }

    pub fn load_from(path: &Path) -> Result<Self, TubelensError> {
        if !path.exists() {
            debug!("No settings file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let json = std::fs::read_to_string(path)?;
        let settings: AppSettings = serde_json::from_str(&json)
            .map_err(|e| TubelensError::Config(format!("{}: {}", path.display(), e)))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Like [`AppSettings::load`], but logs and falls back to defaults
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            warn!("Ignoring settings file: {}", e);
            Self::default()
        })
    }

    pub fn save_to(&self, path: &Path) -> Result<(), TubelensError> {
        self.validate()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), TubelensError> {
        let endpoint = reqwest::Url::parse(&self.api_endpoint).map_err(|e| {
            TubelensError::Config(format!("invalid api_endpoint {:?}: {}", self.api_endpoint, e))
        })?;
        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(TubelensError::Config(format!(
                "api_endpoint must be http or https, got {}",
                endpoint.scheme()
            )));
        }
        if self.id_query_param.trim().is_empty() {
            return Err(TubelensError::Config(
                "id_query_param must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = AppSettings::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.id_query_param, "id");
        assert_eq!(config.initial_section, SectionKind::GeneralInformation);
    }

    #[test]
    fn missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = AppSettings::load_from(&dir.path().join("nope.json")).unwrap();
        assert_eq!(settings, AppSettings::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, r#"{ "locale": "pt_BR", "initial_section": "VideoUrls" }"#).unwrap();

        let settings = AppSettings::load_from(&path).unwrap();
        assert_eq!(settings.locale.as_deref(), Some("pt_BR"));
        assert_eq!(settings.initial_section, SectionKind::VideoUrls);
        assert_eq!(settings.api_endpoint, DEFAULT_API_ENDPOINT);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("settings.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = AppSettings::load_from(&path).unwrap_err();
        assert!(matches!(err, TubelensError::Config(_)));
    }

    #[test]
    fn rejects_non_http_endpoint() {
        let settings = AppSettings {
            api_endpoint: "ftp://example.com/api".to_string(),
            ..Default::default()
        };
        assert!(matches!(settings.validate(), Err(TubelensError::Config(_))));

        let settings = AppSettings {
            api_endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn rejects_blank_query_param() {
        let settings = AppSettings {
            id_query_param: "  ".to_string(),
            ..Default::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn save_then_load_keeps_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = AppSettings {
            api_endpoint: "https://api.example.com/v2/video".to_string(),
            id_query_param: "video_id".to_string(),
            locale: Some("de_DE".to_string()),
            initial_section: SectionKind::AudioUrls,
        };

        settings.save_to(&path).unwrap();
        assert_eq!(AppSettings::load_from(&path).unwrap(), settings);
    }
}
