//! Error types for the Champa storefront
//!
//! One error enum is shared by every crate in the workspace. The variants
//! follow the failure taxonomy of the storefront: missing login, a login the
//! server rejected, a request that failed for any other reason, and local
//! form validation. Infrastructure failures (files, JSON, configuration)
//! sit beside them.

use std::path::PathBuf;
use thiserror::Error;

/// Fallback message when the server does not say what went wrong
pub const GENERIC_FAILURE: &str = "Something went wrong";

/// The main error type for the storefront
#[derive(Debug, Error)]
pub enum ShopError {
    // ========================================================================
    // Authentication Errors
    // ========================================================================
    /// No bearer token is held; raised before any network traffic
    #[error("Login required")]
    AuthMissing,

    /// The server answered 401; the stored token has already been purged
    #[error("Session expired: {message}")]
    AuthRejected { message: String },

    // ========================================================================
    // Remote Errors
    // ========================================================================
    /// Any other non-2xx answer, transport failure or malformed body
    #[error("Request failed{}: {message}", .status.map(|s| format!(" ({s})")).unwrap_or_default())]
    RequestFailed {
        status: Option<u16>,
        message: String,
    },

    // ========================================================================
    // Validation Errors
    // ========================================================================
    /// General validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// A single form field failed validation
    #[error("Invalid '{field}': {message}")]
    FieldValidation { field: String, message: String },

    // ========================================================================
    // Storage / IO Errors
    // ========================================================================
    /// File IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Client storage could not be read or written
    #[error("Storage error at '{path}': {message}")]
    Storage { path: PathBuf, message: String },

    /// JSON serialization error
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration file could not be loaded
    #[error("Invalid configuration: {0}")]
    Config(String),

    // ========================================================================
    // Generic Errors
    // ========================================================================
    /// Internal error (should not happen)
    #[error("Internal error: {0}")]
    Internal(String),

    /// Operation cancelled by user
    #[error("Operation cancelled")]
    Cancelled,
}

impl ShopError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        ShopError::Validation(msg.into())
    }

    /// Create a field validation error
    pub fn field(field: impl Into<String>, msg: impl Into<String>) -> Self {
        ShopError::FieldValidation {
            field: field.into(),
            message: msg.into(),
        }
    }

    /// Create a request failure with an optional HTTP status
    pub fn request_failed(status: Option<u16>, msg: impl Into<String>) -> Self {
        ShopError::RequestFailed {
            status,
            message: msg.into(),
        }
    }

    /// Create an internal error
    pub fn internal(msg: impl Into<String>) -> Self {
        ShopError::Internal(msg.into())
    }

    /// Check if this error means the user has to log in (again)
    pub fn is_auth(&self) -> bool {
        matches!(self, ShopError::AuthMissing | ShopError::AuthRejected { .. })
    }

    /// Check if this error is a local validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ShopError::Validation(_) | ShopError::FieldValidation { .. }
        )
    }

    /// Check if this error came from the remote side
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            ShopError::AuthRejected { .. } | ShopError::RequestFailed { .. }
        )
    }

    /// HTTP status attached to the error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            ShopError::AuthRejected { .. } => Some(401),
            ShopError::RequestFailed { status, .. } => *status,
            _ => None,
        }
    }

    /// Message suitable for a toast or an inline error row
    pub fn user_message(&self) -> String {
        match self {
            ShopError::AuthMissing => "Please log in to continue".to_string(),
            ShopError::AuthRejected { message } | ShopError::RequestFailed { message, .. } => {
                message.clone()
            }
            ShopError::Validation(message) => message.clone(),
            ShopError::FieldValidation { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias using ShopError
pub type ShopResult<T> = Result<T, ShopError>;

/// Extension trait for turning storage failures into `ShopError::Storage`
pub trait StorageResultExt<T> {
    /// Attach the storage path to an IO failure
    fn at_path(self, path: &std::path::Path) -> ShopResult<T>;
}

impl<T> StorageResultExt<T> for std::io::Result<T> {
    fn at_path(self, path: &std::path::Path) -> ShopResult<T> {
        self.map_err(|e| ShopError::Storage {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
