//! Render engine for the widget.
//!
//! The controller never touches a UI surface directly; it renders through the
//! narrow [`Render`] trait, so the whole state machine is testable headless.
//! [`HtmlRender`] is the production projection that builds the embeddable
//! markup; [`NullRender`] discards everything.

pub mod html;

use lekha_core::types::{Message, WidgetState};

pub use html::HtmlRender;

/// Projection of message-store deltas and widget state into a visible surface.
///
/// `delta` carries only the messages appended since the previous call;
/// implementations extend their transcript rather than rebuilding it, which
/// is what preserves scroll-position semantics in a live surface.
pub trait Render {
    /// Reflect newly appended messages and the current widget state.
    fn render(&mut self, delta: &[Message], state: &WidgetState);

    /// The controller requests keyboard focus for the input field
    /// (fires when the panel opens).
    fn focus_input(&mut self) {}
}

/// A renderer that discards everything. For headless hosts and tests.
#[derive(Debug, Default)]
pub struct NullRender;

impl Render for NullRender {
    fn render(&mut self, _delta: &[Message], _state: &WidgetState) {}
}
