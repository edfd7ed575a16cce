#![allow(dead_code)]

use thiserror::Error;

/// Application-level error type. Every failure is handled at the operation
/// boundary and shown as an inline message; nothing propagates to a global
/// handler and nothing resets in-memory state.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Profile error: {0}")]
    Profile(#[from] crate::profile::ProfileError),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// The inline message shown to the user. Validation messages pass
    /// through verbatim; infrastructure detail goes to the log instead of
    /// the screen.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::Storage(detail) => {
                tracing::error!("Storage error: {detail}");
                "Could not read or write saved resume data. Your edits are still in memory."
                    .to_string()
            }
            AppError::Profile(e) => {
                tracing::warn!("Profile error: {e}");
                "Could not reach the profile service.".to_string()
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                "Something went wrong. Your edits are still in memory.".to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_message_passes_through() {
        let err = AppError::Validation("a resume keeps at least one education entry".to_string());
        assert_eq!(
            err.user_message(),
            "a resume keeps at least one education entry"
        );
    }

    #[test]
    fn test_storage_message_is_generic() {
        let err = AppError::Storage("disk full".to_string());
        let msg = err.user_message();
        assert!(!msg.contains("disk full"));
        assert!(msg.contains("still in memory"));
    }
}
