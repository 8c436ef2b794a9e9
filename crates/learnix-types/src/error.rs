use thiserror::Error;
use uuid::Uuid;

/// Errors related to chat session lookup.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("session not found: {0}")]
    NotFound(Uuid),

    #[error("invalid session id: '{0}'")]
    InvalidId(String),
}

/// Errors related to configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Invalid(String),

    #[error("failed to read {path}: {reason}")]
    Read { path: String, reason: String },

    #[error("failed to parse {path}: {reason}")]
    Parse { path: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_error_display() {
        let err = SessionError::InvalidId("abc".to_string());
        assert_eq!(err.to_string(), "invalid session id: 'abc'");

        let id = Uuid::nil();
        let err = SessionError::NotFound(id);
        assert!(err.to_string().contains(&id.to_string()));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::Parse {
            path: "/tmp/config.toml".to_string(),
            reason: "expected `=`".to_string(),
        };
        assert!(err.to_string().contains("/tmp/config.toml"));
        assert!(err.to_string().contains("expected `=`"));
    }
}
