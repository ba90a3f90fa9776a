//! Core domain types, configuration, and errors shared by all Lekha crates.

pub mod config;
pub mod error;
pub mod types;

pub use config::LekhaConfig;
pub use error::{LekhaError, Result};
pub use types::{ConnectionStatus, Message, Position, Role, Source, WidgetState, MAX_SOURCES};
