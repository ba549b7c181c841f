//! Error types shared by the services, stores and state containers.
//!
//! Errors never leave a hook as a panic: they are turned into form errors,
//! toasts or a `FetchState::Error` at the point where they happen.

use thiserror::Error;

use crate::state::FieldErrors;

/// Failure of a single REST call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// The request never produced a response (offline, CORS, DNS...).
    #[error("Network error: {0}")]
    Network(String),

    /// The server answered with a non-2xx status.
    #[error("HTTP {status}: {message}")]
    Http { status: u16, message: String },

    /// The response body could not be decoded.
    #[error("Parse error: {0}")]
    Decode(String),

    /// No session token, or the server rejected it (401).
    #[error("Not authenticated")]
    Unauthorized,
}

impl ApiError {
    /// HTTP status carried by the error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } => Some(*status),
            ApiError::Unauthorized => Some(401),
            _ => None,
        }
    }

    /// 409, used by the API for duplicate names.
    pub fn is_conflict(&self) -> bool {
        self.status() == Some(409)
    }
}

/// Application level error.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Validation failed on {} field(s)", .0.len())]
    Validation(FieldErrors),
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn conflict_is_detected_from_status() {
        let err = ApiError::Http { status: 409, message: "Conflict".into() };
        assert!(err.is_conflict());
        assert_eq!(err.status(), Some(409));

        let err = ApiError::Network("offline".into());
        assert!(!err.is_conflict());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn app_error_wraps_api_error() {
        let err: AppError = ApiError::Unauthorized.into();
        assert_eq!(err.to_string(), "Not authenticated");
    }
}
