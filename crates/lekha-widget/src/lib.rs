//! The widget controller: session lifecycle, append-only message store,
//! UI state machine, and the network-call discipline.
//!
//! This is the embeddable core. A host constructs exactly one [`Widget`] per
//! page via the factory, wires its input events to the controller methods,
//! and supplies a [`Render`](lekha_render::Render) implementation; everything
//! else (markup, HTTP, configuration) is handled by the sibling crates.

pub mod error;
pub mod session;
pub mod state;
pub mod store;
pub mod widget;

pub use error::WidgetError;
pub use session::Session;
pub use state::StateController;
pub use store::MessageStore;
pub use widget::{SendOutcome, Widget};
