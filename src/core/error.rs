//! Widget error types

use thiserror::Error;

/// Errors that can occur in the chat widget core
#[derive(Error, Debug)]
pub enum WidgetError {
    /// A remote collaborator call failed (chat service or agent directory)
    #[error("Remote call failed: {0}")]
    Remote(#[from] anyhow::Error),

    /// State store rejected or failed a read/write
    #[error("State store error: {0}")]
    Store(String),

    /// No value stored under the requested namespace
    #[error("Namespace not found: {0}")]
    NamespaceNotFound(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message
    #[error("{0}")]
    Other(String),
}

impl WidgetError {
    /// Create a generic error from a string
    pub fn other(msg: impl Into<String>) -> Self {
        WidgetError::Other(msg.into())
    }

    /// Create a state store error
    pub fn store_error(msg: impl Into<String>) -> Self {
        WidgetError::Store(msg.into())
    }
}

/// Result type alias for widget operations
pub type WidgetResult<T> = Result<T, WidgetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = WidgetError::NamespaceNotFound("ChatWidget".into());
        assert_eq!(err.to_string(), "Namespace not found: ChatWidget");

        let err = WidgetError::store_error("disk full");
        assert_eq!(err.to_string(), "State store error: disk full");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let widget_err: WidgetError = io_err.into();
        assert!(matches!(widget_err, WidgetError::Io(_)));
    }

    #[test]
    fn test_error_from_anyhow() {
        let remote_err: WidgetError = anyhow::anyhow!("503 from backend").into();
        assert_eq!(
            remote_err.to_string(),
            "Remote call failed: 503 from backend"
        );
    }
}
