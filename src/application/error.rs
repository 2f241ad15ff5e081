//! # Application Errors
//!
//! Error types for flow controller operations.
//!
//! Validation failures in the wallet are surfaced as *gate conditions*: the
//! controllers expose `can_advance`/`can_submit` so callers disable the
//! affordance, and the mutating operations return these errors when invoked
//! anyway (a misbehaving caller, not a user-visible failure).
//!
//! # Examples
//!
//! ```
//! use uniwallet_core::application::error::ApplicationError;
//!
//! let err = ApplicationError::invalid_state("submission already pending");
//! assert!(err.to_string().contains("pending"));
//! ```

use crate::domain::errors::DomainError;
use crate::infrastructure::scanner::ScanError;
use thiserror::Error;

/// Application layer error.
///
/// Wraps domain errors with flow-level context for wizard misuse and
/// collaborator failures.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// Domain error from business logic.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Input validation failed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Operation invoked in a step that does not allow it.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// Referenced resource does not exist.
    #[error("not found: {resource_type} {id}")]
    NotFound {
        /// Type of resource.
        resource_type: String,
        /// Resource identifier.
        id: String,
    },

    /// A submission delay is already in flight.
    #[error("submission pending")]
    SubmissionPending,

    /// QR scanner failure.
    #[error("scanner error: {0}")]
    Scanner(#[from] ScanError),
}

impl ApplicationError {
    /// Creates a validation error.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates an invalid state error.
    #[must_use]
    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    /// Creates a not found error.
    #[must_use]
    pub fn not_found(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// Returns true if this is a validation error (own or domain-level).
    #[must_use]
    pub fn is_validation(&self) -> bool {
        match self {
            Self::Validation(_) => true,
            Self::Domain(e) => e.is_validation(),
            _ => false,
        }
    }
}

/// Result type for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
