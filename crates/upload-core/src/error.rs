//! Error types for preview generation.
//!
//! None of these reach the host: every failure degrades to "no preview"
//! and the filename fallback is rendered instead.

use thiserror::Error;

/// Errors that can occur while deriving a preview from a selected file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    /// Reading the file contents failed.
    #[error("failed to read file: {0}")]
    Read(String),

    /// Creating a transient resource handle failed.
    #[error("failed to create preview handle: {0}")]
    Handle(String),
}

impl PreviewError {
    /// Create a read error from anything printable.
    pub fn read(message: impl Into<String>) -> Self {
        Self::Read(message.into())
    }

    /// Create a handle error from anything printable.
    pub fn handle(message: impl Into<String>) -> Self {
        Self::Handle(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            PreviewError::read("permission denied").to_string(),
            "failed to read file: permission denied"
        );
        assert_eq!(
            PreviewError::handle("quota").to_string(),
            "failed to create preview handle: quota"
        );
    }

    #[test]
    fn test_every_error_carries_a_cause() {
        for error in [PreviewError::read("eof"), PreviewError::handle("revoked")] {
            let cause = match &error {
                PreviewError::Read(cause) | PreviewError::Handle(cause) => cause,
            };
            assert!(error.to_string().ends_with(cause.as_str()));
        }
    }
}
