//! The network client: health probe and chat completion.
//!
//! Call discipline lives in the widget controller (single in-flight request,
//! error-to-message mapping); this module is only responsible for issuing the
//! two HTTP calls and classifying their outcomes.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use lekha_core::types::ConnectionStatus;

use crate::error::ClientError;
use crate::wire::{ChatReply, ChatRequest, ErrorBody, HealthProbeReply};

/// Seam between the widget controller and the remote service.
///
/// The HTTP implementation is the production path; tests substitute scripted
/// implementations so every state-machine property can be checked offline.
#[async_trait]
pub trait KnowledgeService: Send + Sync {
    /// Probe `GET /health`.
    ///
    /// Success is a 2xx response whose body reports `status == "healthy"`;
    /// every other outcome (non-2xx, malformed body, transport failure) is
    /// classified uniformly as [`ConnectionStatus::Offline`].
    async fn health(&self) -> ConnectionStatus;

    /// Issue `POST /api/chat`.
    ///
    /// The caller must have passed admission control first; this method does
    /// not enforce the single-in-flight rule. No automatic retry.
    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ClientError>;
}

/// `reqwest`-backed implementation of [`KnowledgeService`].
pub struct HttpKnowledgeService {
    http: Client,
    api_base: String,
}

impl HttpKnowledgeService {
    /// Create a client against `api_base` with a bounded per-request timeout.
    ///
    /// Without the timeout a hung request would never settle and the widget
    /// would stay in the loading state with no way out.
    pub fn new(api_base: impl Into<String>, timeout: Duration) -> Result<Self, ClientError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ClientError::Build(e.to_string()))?;
        let api_base = api_base.into().trim_end_matches('/').to_string();
        Ok(Self { http, api_base })
    }
}

#[async_trait]
impl KnowledgeService for HttpKnowledgeService {
    async fn health(&self) -> ConnectionStatus {
        let url = format!("{}/health", self.api_base);
        let response = match self.http.get(&url).send().await {
            Ok(r) => r,
            Err(e) => {
                debug!(error = %e, "Health probe transport failure");
                return ConnectionStatus::Offline;
            }
        };

        if !response.status().is_success() {
            debug!(status = %response.status(), "Health probe returned non-2xx");
            return ConnectionStatus::Offline;
        }

        match response.json::<HealthProbeReply>().await {
            Ok(reply) if reply.is_healthy() => ConnectionStatus::Online,
            Ok(reply) => {
                debug!(status = %reply.status, "Service reported non-healthy status");
                ConnectionStatus::Offline
            }
            Err(e) => {
                debug!(error = %e, "Health probe body malformed");
                ConnectionStatus::Offline
            }
        }
    }

    async fn chat(&self, request: ChatRequest) -> Result<ChatReply, ClientError> {
        let url = format!("{}/api/chat", self.api_base);
        let response = self
            .http
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "Chat request transport failure");
                ClientError::RequestFailed("could not reach the assistant service".to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            // Prefer the body's `detail` text; fall back to the status line.
            let detail = match response.json::<ErrorBody>().await {
                Ok(ErrorBody { detail: Some(d) }) if !d.trim().is_empty() => d,
                _ => format!("the assistant service returned {}", status),
            };
            warn!(%status, "Chat request failed");
            return Err(ClientError::RequestFailed(detail));
        }

        response
            .json::<ChatReply>()
            .await
            .map_err(|e| ClientError::MalformedResponse(e.to_string()))
    }
}
