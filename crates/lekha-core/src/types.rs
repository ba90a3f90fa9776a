use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of source attributions retained on an assistant message.
///
/// The remote service may return more; only the first three are kept, in
/// their original order. Truncation is display policy, not an error.
pub const MAX_SOURCES: usize = 3;

// =============================================================================
// Enums
// =============================================================================

/// The author of a transcript message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Typed by the person using the widget.
    User,
    /// Returned by the remote knowledge-retrieval service.
    Assistant,
}

/// Connection status of the remote service, as last observed by a probe.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConnectionStatus {
    /// Health probe succeeded and reported healthy.
    Online,
    /// Probe failed, returned non-2xx, or reported non-healthy.
    Offline,
    /// No probe has completed yet (initial state).
    #[default]
    Connecting,
}

/// Corner of the host page the widget anchors to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    BottomRight,
    BottomLeft,
    TopRight,
    TopLeft,
}

impl Position {
    /// Returns the CSS class suffix for this anchor position.
    pub fn css_suffix(&self) -> &str {
        match self {
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
        }
    }
}

// =============================================================================
// Source
// =============================================================================

/// A source attribution attached to an assistant message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Source {
    /// A web search result; rendered as a link.
    Web { title: String, url: String },
    /// A knowledge-base or uploaded document; rendered as a label, no link.
    Document { label: String },
}

// =============================================================================
// Message
// =============================================================================

/// A single transcript entry.
///
/// Messages are owned by the message store and are never mutated or removed
/// once appended; insertion order is display order.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: Uuid,
    pub role: Role,
    pub content: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    pub created_at: DateTime<Utc>,
}

impl Message {
    /// Create a user message. User messages carry no sources.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            role: Role::User,
            content: content.into(),
            sources: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Create an assistant message, keeping at most [`MAX_SOURCES`] sources
    /// in their original order.
    pub fn assistant(content: impl Into<String>, mut sources: Vec<Source>) -> Self {
        sources.truncate(MAX_SOURCES);
        Self {
            id: Uuid::new_v4(),
            role: Role::Assistant,
            content: content.into(),
            sources,
            created_at: Utc::now(),
        }
    }
}

// =============================================================================
// WidgetState
// =============================================================================

/// Observable UI state of the widget.
///
/// Mutated only by the state controller; read by the renderer after every
/// change. `is_loading == true` implies the send action is disabled and at
/// most one chat request is outstanding. Closing hides the interface but
/// resets nothing, so reopening resumes the same conversation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetState {
    pub is_open: bool,
    pub is_loading: bool,
    pub web_search_enabled: bool,
    pub connection: ConnectionStatus,
}

impl WidgetState {
    /// Initial state: closed, idle, connection not yet probed.
    pub fn new(web_search_enabled: bool) -> Self {
        Self {
            is_open: false,
            is_loading: false,
            web_search_enabled,
            connection: ConnectionStatus::Connecting,
        }
    }
}

impl Default for WidgetState {
    fn default() -> Self {
        Self::new(true)
    }
}

// =============================================================================
// Tests
// =============================================================================
