use thiserror::Error;

/// Top-level error type for the Lekha widget.
///
/// Each variant wraps a subsystem-specific error. Subsystem crates define
/// their own error types and implement `From<SubsystemError> for LekhaError`
/// so that the `?` operator works across crate boundaries.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum LekhaError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Client error: {0}")]
    Client(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<toml::de::Error> for LekhaError {
    fn from(err: toml::de::Error) -> Self {
        LekhaError::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for LekhaError {
    fn from(err: toml::ser::Error) -> Self {
        LekhaError::Config(err.to_string())
    }
}

impl From<serde_json::Error> for LekhaError {
    fn from(err: serde_json::Error) -> Self {
        LekhaError::Serialization(err.to_string())
    }
}

/// A specialized `Result` type for Lekha operations.
pub type Result<T> = std::result::Result<T, LekhaError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LekhaError::Config("missing field".to_string());
        assert_eq!(err.to_string(), "Configuration error: missing field");

        let err = LekhaError::Session("file unreadable".to_string());
        assert_eq!(err.to_string(), "Session error: file unreadable");

        let err = LekhaError::Client("connection refused".to_string());
        assert_eq!(err.to_string(), "Client error: connection refused");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: LekhaError = io_err.into();
        assert!(matches!(err, LekhaError::Io(_)));
        assert!(err.to_string().contains("file not found"));
    }

    #[test]
    fn test_error_from_toml_de() {
        let bad_toml = "invalid = [[[";
        let parsed: std::result::Result<toml::Value, _> = toml::from_str(bad_toml);
        assert!(parsed.is_err());
        let err: LekhaError = parsed.unwrap_err().into();
        assert!(matches!(err, LekhaError::Config(_)));
    }

    #[test]
    fn test_error_from_serde_json() {
        let bad_json = "{ invalid json }";
        let parsed: std::result::Result<serde_json::Value, _> = serde_json::from_str(bad_json);
        assert!(parsed.is_err());
        let err: LekhaError = parsed.unwrap_err().into();
        assert!(matches!(err, LekhaError::Serialization(_)));
    }

    #[test]
    fn test_result_type_with_question_mark() {
        fn inner() -> Result<String> {
            let io_result: std::result::Result<i32, std::io::Error> = Ok(42);
            let _value = io_result?;
            Ok("success".to_string())
        }

        assert_eq!(inner().unwrap(), "success");
    }

    #[test]
    fn test_error_debug_impl() {
        let err = LekhaError::Config("test debug".to_string());
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("Config"));
        assert!(debug_str.contains("test debug"));
    }
}
