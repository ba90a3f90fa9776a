use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{LekhaError, Result};
use crate::types::Position;

/// Top-level configuration for the widget.
///
/// Loaded from `~/.lekha/config.toml` by default. Each section corresponds
/// to a bounded context or cross-cutting concern. Hosts embedding the widget
/// programmatically can also build this in code and skip the file entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LekhaConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub appearance: AppearanceConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

impl LekhaConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: LekhaConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| LekhaError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Remote knowledge-retrieval service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Base URL of the hosted service; `/health` and `/api/chat` hang off it.
    pub base_url: String,
    /// Whether web search is requested on chat calls by default.
    pub web_search_enabled: bool,
    /// Request timeout in seconds. A hung request settles as a failure
    /// notice instead of leaving the widget loading forever.
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "https://ca-chatbot-api.onrender.com".to_string(),
            web_search_enabled: true,
            timeout_secs: 30,
        }
    }
}

/// Visual placement of the widget on the host page.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    /// Page corner the launcher and panel anchor to.
    pub position: Position,
    /// Theme label, forwarded into the markup as a CSS class.
    pub theme: String,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            position: Position::default(),
            theme: "light".to_string(),
        }
    }
}

/// Conversation session persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Persist the session identifier across restarts. Off by default:
    /// a fresh page load starts a fresh conversation.
    pub persist: bool,
    /// Where the session record is stored when persistence is on.
    pub file: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            persist: false,
            file: "~/.lekha/session.toml".to_string(),
        }
    }
}
