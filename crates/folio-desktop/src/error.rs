//! Error types for the desktop shell
//!
//! Nothing in this crate is fatal: registry operations on an unknown slot
//! report [`DesktopError::UnknownWindow`] without touching any state, and the
//! coordinator logs and ignores it.

/// Errors that can occur in desktop shell operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DesktopError {
    /// No window slot is configured under the given key
    UnknownWindow(String),

    /// The static window configuration is unusable
    InvalidConfig(String),

    /// JSON serialization or deserialization failed
    SerializationError(String),
}

impl std::fmt::Display for DesktopError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownWindow(key) => write!(f, "unknown window: {}", key),
            Self::InvalidConfig(msg) => write!(f, "invalid configuration: {}", msg),
            Self::SerializationError(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for DesktopError {}

impl From<serde_json::Error> for DesktopError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Result type alias for desktop operations
pub type DesktopResult<T> = Result<T, DesktopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DesktopError::UnknownWindow("nonexistent".to_string());
        assert_eq!(err.to_string(), "unknown window: nonexistent");

        let err = DesktopError::InvalidConfig("no window slots".to_string());
        assert_eq!(err.to_string(), "invalid configuration: no window slots");
    }

    #[test]
    fn test_error_from_json() {
        let err: DesktopError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DesktopError::SerializationError(_)));
    }

    #[test]
    fn test_error_equality() {
        let err1 = DesktopError::UnknownWindow("finder".to_string());
        let err2 = DesktopError::UnknownWindow("finder".to_string());
        let err3 = DesktopError::UnknownWindow("safari".to_string());

        assert_eq!(err1, err2);
        assert_ne!(err1, err3);
    }
}
