//! Settings model.

use std::path::PathBuf;

use triagedesk_core::{ApiClient, DEFAULT_API_URL};

use crate::style::widgets::palette::ThemeMode;

/// Environment variable that overrides the stored API address at startup.
pub const API_URL_ENV: &str = "TRIAGEDESK_API_URL";

/// State for the settings screen.
#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// Selected settings section.
    pub selected_section: SettingsSection,
    /// API address as typed, not yet applied.
    pub api_url_input: String,
    /// Validation error for `api_url_input`.
    pub api_url_error: Option<String>,
}

/// Settings sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SettingsSection {
    /// Classification service connection.
    #[default]
    Connection,
    /// Appearance settings.
    Appearance,
    /// About the application.
    About,
}

/// Application settings that persist across sessions.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Current theme mode (serialized as string).
    #[serde(with = "theme_mode_serde")]
    pub theme_mode: ThemeMode,
    /// Base address of the classification service.
    pub api_base_url: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::Light,
            api_base_url: DEFAULT_API_URL.to_string(),
        }
    }
}

impl AppSettings {
    /// Location of the settings file.
    #[must_use]
    pub fn path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("triagedesk")
            .join("settings.json")
    }

    /// Parses stored settings, falling back to defaults for anything unreadable.
    #[must_use]
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).unwrap_or_else(|e| {
            tracing::info!("Ignoring unreadable settings file: {e}");
            Self::default()
        })
    }

    /// Applies an API address override, ignoring blank values.
    #[must_use]
    pub fn with_api_override(mut self, value: Option<&str>) -> Self {
        if let Some(url) = value.map(str::trim).filter(|url| !url.is_empty()) {
            tracing::debug!("API address overridden by {API_URL_ENV}: {url}");
            self.api_base_url = url.to_string();
        }
        self
    }

    /// Builds a client for the configured address.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored address is not a valid http(s) URL.
    pub fn client(&self) -> triagedesk_core::Result<ApiClient> {
        ApiClient::new(&self.api_base_url)
    }
}

/// Serde helpers for `ThemeMode` (since it doesn't derive `Serialize`/`Deserialize`).
mod theme_mode_serde {
    use super::ThemeMode;
    use serde::{Deserialize, Deserializer, Serializer};

    #[allow(clippy::trivially_copy_pass_by_ref)] // Required by serde with= signature
    pub fn serialize<S>(mode: &ThemeMode, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(match mode {
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        })
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<ThemeMode, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(if s == "dark" {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        })
    }
}

impl SettingsState {
    /// Creates a settings screen seeded with the current address.
    #[must_use]
    pub fn new(settings: &AppSettings) -> Self {
        Self {
            api_url_input: settings.api_base_url.clone(),
            ..Self::default()
        }
    }
}
