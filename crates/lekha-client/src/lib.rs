//! Network client for the remote knowledge-retrieval service.
//!
//! The service exposes exactly two HTTP contracts: a health probe
//! (`GET /health`) and a chat completion call (`POST /api/chat`). This crate
//! provides the wire DTOs for both, the [`KnowledgeService`] trait the widget
//! controller talks through, and the `reqwest`-backed implementation.

pub mod client;
pub mod error;
pub mod wire;

pub use client::{HttpKnowledgeService, KnowledgeService};
pub use error::ClientError;
pub use wire::{ChatReply, ChatRequest, ErrorBody, HealthProbeReply, WireSource};
