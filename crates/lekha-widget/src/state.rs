//! UI state machine: visibility, loading guard, feature toggles.
//!
//! `Closed` and `Open` alternate; the loading flag is orthogonal and the
//! `begin_request` / `end_request` pair is the sole admission-control rule
//! protecting the network client from concurrent chat calls.

use tracing::debug;

use lekha_core::types::{ConnectionStatus, WidgetState};

/// Owns the widget state; the only code that mutates it.
#[derive(Debug)]
pub struct StateController {
    state: WidgetState,
}

impl StateController {
    pub fn new(web_search_enabled: bool) -> Self {
        Self {
            state: WidgetState::new(web_search_enabled),
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    /// Flip visibility. Returns true when the panel just opened, so the
    /// caller can request input focus.
    pub fn toggle(&mut self) -> bool {
        if self.state.is_open {
            self.close();
            false
        } else {
            self.open();
            true
        }
    }

    pub fn open(&mut self) {
        self.state.is_open = true;
    }

    /// Hide the interface. Session, messages, and flags are retained, so
    /// reopening resumes the same conversation.
    pub fn close(&mut self) {
        self.state.is_open = false;
    }

    /// Escape input: closes only when currently open. Returns whether
    /// anything changed.
    pub fn escape(&mut self) -> bool {
        if self.state.is_open {
            self.state.is_open = false;
            true
        } else {
            false
        }
    }

    /// Preference forwarded on the next chat request; an in-flight request
    /// is unaffected.
    pub fn set_web_search_enabled(&mut self, enabled: bool) {
        self.state.web_search_enabled = enabled;
    }

    pub fn set_connection(&mut self, status: ConnectionStatus) {
        self.state.connection = status;
    }

    /// Admission control for the network client.
    ///
    /// Returns the trimmed message when admitted and raises the loading
    /// flag; returns `None` (a silent no-op) when a request is already in
    /// flight or the candidate is whitespace-only. This is the only rule
    /// keeping chat calls from overlapping.
    pub fn begin_request(&mut self, candidate: &str) -> Option<String> {
        if self.state.is_loading {
            debug!("Send rejected: a request is already in flight");
            return None;
        }
        let trimmed = candidate.trim();
        if trimmed.is_empty() {
            debug!("Send rejected: empty message");
            return None;
        }
        self.state.is_loading = true;
        Some(trimmed.to_string())
    }

    /// Release the loading flag. Reached on every settle path, success or
    /// failure; the flag never stays stuck after a request settles.
    pub fn end_request(&mut self) {
        self.state.is_loading = false;
    }
}

// =============================================================================
// Tests
// =============================================================================
