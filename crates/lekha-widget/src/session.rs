//! Session lifecycle.
//!
//! A session correlates all chat requests from one widget instance to one
//! server-side conversation context. It is minted once at construction and
//! never regenerated while the widget lives; persistence across restarts is
//! opt-in configuration.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use lekha_core::config::SessionConfig;

use crate::error::WidgetError;

/// The opaque conversation identifier plus its mint time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// Mint a fresh session.
    ///
    /// The id combines wall-clock millis with hex-encoded random entropy,
    /// so collisions within a browser session are vanishingly unlikely.
    /// Infallible: the entropy source is always available.
    pub fn new() -> Self {
        let mut rng = rand::rng();
        let entropy: [u8; 4] = rng.random();
        Self {
            id: format!(
                "session-{}-{}",
                Utc::now().timestamp_millis(),
                hex::encode(entropy)
            ),
            created_at: Utc::now(),
        }
    }

    /// Load a persisted session record from a TOML file.
    pub fn load(path: &Path) -> Result<Self, WidgetError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| WidgetError::Session(e.to_string()))?;
        toml::from_str(&content).map_err(|e| WidgetError::Session(e.to_string()))
    }

    /// Persist this session record as TOML.
    pub fn save(&self, path: &Path) -> Result<(), WidgetError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| WidgetError::Session(e.to_string()))?;
        }
        let content =
            toml::to_string_pretty(self).map_err(|e| WidgetError::Session(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| WidgetError::Session(e.to_string()))
    }

    /// Resolve the session according to the persistence configuration.
    ///
    /// With persistence off this is just [`Session::new`]. With it on, a
    /// stored record is resumed when readable; otherwise a fresh session is
    /// minted and best-effort saved. The conversation must never be blocked
    /// by a disk problem, so every failure here downgrades to a warning.
    pub fn resolve(config: &SessionConfig) -> Self {
        if !config.persist {
            return Self::new();
        }

        let path = expand_home(&config.file);
        match Self::load(&path) {
            Ok(session) => {
                debug!(session_id = %session.id, "Resumed persisted session");
                session
            }
            Err(e) => {
                warn!(error = %e, "No usable persisted session; starting fresh");
                let session = Self::new();
                if let Err(e) = session.save(&path) {
                    warn!(error = %e, "Failed to persist new session");
                }
                session
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand a leading `~/` to the user's home directory.
fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        #[cfg(target_os = "windows")]
        if let Ok(home) = std::env::var("USERPROFILE") {
            return PathBuf::from(home).join(rest);
        }
        #[cfg(not(target_os = "windows"))]
        if let Ok(home) = std::env::var("HOME") {
            return PathBuf::from(home).join(rest);
        }
    }
    PathBuf::from(path)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_id_format() {
        let session = Session::new();
        assert!(session.id.starts_with("session-"));
        // session-<millis>-<8 hex chars>
        let parts: Vec<&str> = session.id.splitn(3, '-').collect();
        assert_eq!(parts.len(), 3);
        assert!(parts[1].parse::<i64>().is_ok());
        assert_eq!(parts[2].len(), 8);
        assert!(parts[2].chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_session_ids_are_unique() {
        let a = Session::new();
        let b = Session::new();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.toml");

        let session = Session::new();
        session.save(&path).unwrap();
        let loaded = Session::load(&path).unwrap();
        assert_eq!(loaded, session);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(Session::load(&dir.path().join("nope.toml")).is_err());
    }

    #[test]
    fn test_resolve_ephemeral_mints_fresh_each_time() {
        let config = SessionConfig::default();
        assert!(!config.persist);
        let a = Session::resolve(&config);
        let b = Session::resolve(&config);
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_resolve_persistent_resumes_stored_session() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("session.toml");
        let config = SessionConfig {
            persist: true,
            file: file.to_string_lossy().to_string(),
        };

        let first = Session::resolve(&config);
        let second = Session::resolve(&config);
        assert_eq!(first.id, second.id);
    }

    #[test]
    fn test_resolve_persistent_recovers_from_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("session.toml");
        std::fs::write(&file, "not valid toml [[[").unwrap();
        let config = SessionConfig {
            persist: true,
            file: file.to_string_lossy().to_string(),
        };

        let session = Session::resolve(&config);
        assert!(session.id.starts_with("session-"));
        // The fresh session replaced the corrupt record.
        let resumed = Session::resolve(&config);
        assert_eq!(resumed.id, session.id);
    }

    #[test]
    fn test_expand_home_passthrough_for_plain_paths() {
        assert_eq!(
            expand_home("/tmp/session.toml"),
            PathBuf::from("/tmp/session.toml")
        );
    }
}
