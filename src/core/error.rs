//! Typed error handling for payment operations
//!
//! Service operations return [`ServiceResult`], so callers match on the
//! failure kind instead of inspecting error text.
//!
//! # Error Categories
//!
//! - [`ServiceError`]: outcomes of a payment operation that are not a success
//! - [`StorageError`]: failures reported by a storage backend
//!
//! A lookup that finds nothing is not an error; see
//! [`Lookup`](crate::payments::service::Lookup).
//!
//! # Example
//!
//! ```rust,ignore
//! match service.create(input).await {
//!     Ok(id) => println!("created {}", id),
//!     Err(ServiceError::ValidationFailed(violations)) => {
//!         for v in &violations {
//!             println!("{}: {}", v.field(), v.message);
//!         }
//!     }
//!     Err(e) => eprintln!("create failed: {}", e),
//! }
//! ```

use crate::core::validation::Violation;
use std::fmt;

// =============================================================================
// Service Errors
// =============================================================================

/// Failure outcomes of a payment service operation
#[derive(Debug)]
pub enum ServiceError {
    /// Caller input broke one or more field constraints
    ValidationFailed(Vec<Violation>),

    /// A required path or query parameter was absent
    MissingParameter { parameter: String },

    /// The currency filter was supplied but empty
    EmptyFilter,

    /// The storage backend failed
    StoreFailed(StorageError),
}

impl fmt::Display for ServiceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceError::ValidationFailed(violations) => {
                let msgs: Vec<String> = violations
                    .iter()
                    .map(|v| format!("{}: {}", v.path.join("."), v.message))
                    .collect();
                write!(f, "Validation failed: {}", msgs.join(", "))
            }
            ServiceError::MissingParameter { parameter } => {
                write!(f, "Missing required parameter: {}", parameter)
            }
            ServiceError::EmptyFilter => write!(f, "Currency filter is empty"),
            ServiceError::StoreFailed(e) => write!(f, "Store failed: {}", e),
        }
    }
}

impl std::error::Error for ServiceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ServiceError::StoreFailed(e) => Some(e),
            _ => None,
        }
    }
}

impl ServiceError {
    /// Stable code for logs and metrics
    pub fn error_code(&self) -> &'static str {
        match self {
            ServiceError::ValidationFailed(_) => "VALIDATION_FAILED",
            ServiceError::MissingParameter { .. } => "MISSING_PARAMETER",
            ServiceError::EmptyFilter => "EMPTY_FILTER",
            ServiceError::StoreFailed(_) => "STORE_FAILED",
        }
    }
}

impl From<StorageError> for ServiceError {
    fn from(err: StorageError) -> Self {
        ServiceError::StoreFailed(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors reported by storage backends
#[derive(Debug)]
pub enum StorageError {
    /// Could not reach the backend
    ConnectionError { backend: String, message: String },

    /// The backend rejected or failed a request
    QueryError { backend: String, message: String },

    /// A stored item could not be converted to or from a payment
    SerializationError { backend: String, message: String },

    /// In-process state was poisoned by a panicking writer
    LockPoisoned { backend: String },

    /// Backend not available
    Unavailable { backend: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
            StorageError::QueryError { backend, message } => {
                write!(f, "{} query error: {}", backend, message)
            }
            StorageError::SerializationError { backend, message } => {
                write!(f, "{} item conversion error: {}", backend, message)
            }
            StorageError::LockPoisoned { backend } => {
                write!(f, "{} lock poisoned", backend)
            }
            StorageError::Unavailable { backend } => {
                write!(f, "Storage backend '{}' is unavailable", backend)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    pub fn query(backend: &str, message: impl fmt::Display) -> Self {
        StorageError::QueryError {
            backend: backend.to_string(),
            message: message.to_string(),
        }
    }

    pub fn serialization(backend: &str, message: impl fmt::Display) -> Self {
        StorageError::SerializationError {
            backend: backend.to_string(),
            message: message.to_string(),
        }
    }
}

// =============================================================================
// Result type alias
// =============================================================================

/// A specialized Result type for payment service operations
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Tests
// =============================================================================
