//! Error types for the widget controller.

use lekha_client::ClientError;
use lekha_core::error::LekhaError;

/// Errors from widget construction and session persistence.
///
/// Exchange failures never surface here: a failed chat call becomes a
/// transcript notice, not an error, so the host's send path is infallible.
#[derive(Debug, thiserror::Error)]
pub enum WidgetError {
    #[error("session persistence error: {0}")]
    Session(String),
    #[error("service error: {0}")]
    Service(String),
}

impl From<ClientError> for WidgetError {
    fn from(err: ClientError) -> Self {
        WidgetError::Service(err.to_string())
    }
}

impl From<WidgetError> for LekhaError {
    fn from(err: WidgetError) -> Self {
        match err {
            WidgetError::Session(d) => LekhaError::Session(d),
            WidgetError::Service(d) => LekhaError::Client(d),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_widget_error_display() {
        let err = WidgetError::Session("file unreadable".to_string());
        assert_eq!(err.to_string(), "session persistence error: file unreadable");

        let err = WidgetError::Service("bad proxy".to_string());
        assert_eq!(err.to_string(), "service error: bad proxy");
    }

    #[test]
    fn test_from_client_error() {
        let err: WidgetError = ClientError::Build("invalid proxy".to_string()).into();
        assert!(matches!(err, WidgetError::Service(_)));
        assert!(err.to_string().contains("invalid proxy"));
    }

    #[test]
    fn test_conversion_to_lekha_error() {
        let top: LekhaError = WidgetError::Session("disk full".to_string()).into();
        assert!(matches!(top, LekhaError::Session(_)));

        let top: LekhaError = WidgetError::Service("timeout".to_string()).into();
        assert!(matches!(top, LekhaError::Client(_)));
    }
}
