//! Wire DTOs for the two HTTP contracts of the knowledge-retrieval service.
//!
//! Shapes mirror the remote API exactly; everything the widget does not
//! interpret is either optional or ignored, so backend additions never break
//! deserialization.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use lekha_core::types::Source;

/// Body of `POST /api/chat`.
#[derive(Clone, Debug, Serialize)]
pub struct ChatRequest {
    pub message: String,
    pub web_search_enabled: bool,
    pub session_id: String,
}

/// Successful (2xx) body of `POST /api/chat`.
///
/// Only `response` is required; a 2xx body without it is treated as
/// malformed. The remaining fields are metadata the service may omit or
/// send as `null`.
#[derive(Clone, Debug, Deserialize)]
pub struct ChatReply {
    pub response: String,
    #[serde(default)]
    pub sources: Option<Vec<WireSource>>,
    #[serde(default)]
    pub web_search_used: Option<bool>,
    #[serde(default)]
    pub documents_found: Option<u64>,
    #[serde(default)]
    pub session_id: Option<String>,
}

impl ChatReply {
    /// The wire sources, treating both a missing and a `null` array as empty.
    pub fn sources(&self) -> &[WireSource] {
        self.sources.as_deref().unwrap_or(&[])
    }
}

/// One entry of the heterogeneous `sources` array.
///
/// The backend concatenates web search results (`title`/`url`/`domain`) and
/// knowledge-base document references (`name`/`type`/`relevance`) into a
/// single list, so every field is optional and classification happens in
/// [`WireSource::to_source`].
#[derive(Clone, Debug, Default, Deserialize)]
pub struct WireSource {
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub domain: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

impl WireSource {
    /// Classify this entry into a displayable [`Source`].
    ///
    /// Anything with a usable URL is a web source (title falls back to the
    /// domain, then the URL itself); everything else is a document reference
    /// with the best available label.
    pub fn to_source(&self) -> Source {
        let url = self.url.as_deref().unwrap_or("").trim();
        if !url.is_empty() {
            let title = first_non_empty(&[&self.title, &self.domain])
                .unwrap_or_else(|| url.to_string());
            return Source::Web {
                title,
                url: url.to_string(),
            };
        }

        let label = first_non_empty(&[&self.name, &self.source, &self.title, &self.content])
            .unwrap_or_else(|| "Knowledge base document".to_string());
        Source::Document { label }
    }
}

fn first_non_empty(candidates: &[&Option<String>]) -> Option<String> {
    candidates
        .iter()
        .filter_map(|c| c.as_deref())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// Body of `GET /health`.
///
/// Only `status` is interpreted; `timestamp` and the per-service breakdown
/// are informational.
#[derive(Clone, Debug, Deserialize)]
pub struct HealthProbeReply {
    pub status: String,
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub services: Option<HashMap<String, String>>,
}

impl HealthProbeReply {
    /// Whether the service declared itself healthy.
    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

/// Body of a non-2xx response; `detail` is shown verbatim when present.
#[derive(Clone, Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_request_serializes_all_fields() {
        let req = ChatRequest {
            message: "What is GST?".to_string(),
            web_search_enabled: false,
            session_id: "session-1700000000000-a1b2c3d4".to_string(),
        };
        let json = serde_json::to_value(&req).unwrap();
        assert_eq!(json["message"], "What is GST?");
        assert_eq!(json["web_search_enabled"], false);
        assert_eq!(json["session_id"], "session-1700000000000-a1b2c3d4");
    }

    #[test]
    fn test_chat_reply_full_body() {
        let body = r#"{
            "response": "GST is a destination-based tax.",
            "sources": [
                {"title": "CBIC", "url": "https://cbic.gov.in", "domain": "cbic.gov.in"},
                {"name": "gst_act.pdf", "type": "uploaded_document", "relevance": 0.91}
            ],
            "web_search_used": true,
            "documents_found": 4,
            "session_id": "session-1"
        }"#;
        let reply: ChatReply = serde_json::from_str(body).unwrap();
        assert_eq!(reply.response, "GST is a destination-based tax.");
        assert_eq!(reply.sources().len(), 2);
        assert_eq!(reply.web_search_used, Some(true));
        assert_eq!(reply.documents_found, Some(4));
        assert_eq!(reply.session_id.as_deref(), Some("session-1"));
    }

    #[test]
    fn test_chat_reply_minimal_body() {
        let reply: ChatReply = serde_json::from_str(r#"{"response": "ok"}"#).unwrap();
        assert_eq!(reply.response, "ok");
        assert!(reply.sources().is_empty());
        assert_eq!(reply.web_search_used, None);
    }

    #[test]
    fn test_chat_reply_null_fields() {
        // The backend serializes unset optionals as null, not absent.
        let body = r#"{"response": "ok", "sources": null, "web_search_used": null,
                       "documents_found": null, "session_id": null}"#;
        let reply: ChatReply = serde_json::from_str(body).unwrap();
        assert!(reply.sources().is_empty());
        assert_eq!(reply.session_id, None);
    }

    #[test]
    fn test_chat_reply_missing_response_is_error() {
        let body = r#"{"sources": [], "web_search_used": false}"#;
        assert!(serde_json::from_str::<ChatReply>(body).is_err());
    }

    #[test]
    fn test_web_source_classification() {
        let wire: WireSource = serde_json::from_str(
            r#"{"title": "GST overview", "url": "https://example.org/gst", "domain": "example.org"}"#,
        )
        .unwrap();
        assert_eq!(
            wire.to_source(),
            Source::Web {
                title: "GST overview".to_string(),
                url: "https://example.org/gst".to_string(),
            }
        );
    }

    #[test]
    fn test_web_source_title_falls_back_to_domain_then_url() {
        let wire: WireSource =
            serde_json::from_str(r#"{"url": "https://example.org/a", "domain": "example.org"}"#)
                .unwrap();
        assert_eq!(
            wire.to_source(),
            Source::Web {
                title: "example.org".to_string(),
                url: "https://example.org/a".to_string(),
            }
        );

        let wire: WireSource = serde_json::from_str(r#"{"url": "https://example.org/b"}"#).unwrap();
        assert_eq!(
            wire.to_source(),
            Source::Web {
                title: "https://example.org/b".to_string(),
                url: "https://example.org/b".to_string(),
            }
        );
    }

    #[test]
    fn test_document_source_label_priority() {
        let wire: WireSource = serde_json::from_str(
            r#"{"name": "gst_act.pdf", "type": "uploaded_document", "relevance": 0.91}"#,
        )
        .unwrap();
        assert_eq!(
            wire.to_source(),
            Source::Document {
                label: "gst_act.pdf".to_string()
            }
        );

        let wire: WireSource =
            serde_json::from_str(r#"{"type": "document", "source": "circular_12.pdf"}"#).unwrap();
        assert_eq!(
            wire.to_source(),
            Source::Document {
                label: "circular_12.pdf".to_string()
            }
        );
    }

    #[test]
    fn test_source_with_nothing_usable_gets_fallback_label() {
        let wire: WireSource = serde_json::from_str(r#"{"url": "   ", "title": ""}"#).unwrap();
        assert_eq!(
            wire.to_source(),
            Source::Document {
                label: "Knowledge base document".to_string()
            }
        );
    }

    #[test]
    fn test_health_reply_healthy() {
        let body = r#"{"status": "healthy", "timestamp": "2024-01-01T00:00:00",
                       "services": {"openai": "healthy", "qdrant": "healthy"}}"#;
        let reply: HealthProbeReply = serde_json::from_str(body).unwrap();
        assert!(reply.is_healthy());
        assert_eq!(reply.services.unwrap().len(), 2);
    }

    #[test]
    fn test_health_reply_other_status_is_not_healthy() {
        let reply: HealthProbeReply =
            serde_json::from_str(r#"{"status": "degraded"}"#).unwrap();
        assert!(!reply.is_healthy());
        assert_eq!(reply.timestamp, None);
    }

    #[test]
    fn test_error_body_with_and_without_detail() {
        let body: ErrorBody =
            serde_json::from_str(r#"{"detail": "Error processing request: boom"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("Error processing request: boom"));

        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, None);
    }
}
