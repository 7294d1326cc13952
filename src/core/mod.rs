//! Core module containing the payment model, validation, identity and store contract

pub mod error;
pub mod identity;
pub mod payment;
pub mod store;
pub mod validation;

pub use error::{ServiceError, ServiceResult, StorageError};
pub use identity::{IdentityPolicy, UuidIdentityPolicy};
pub use payment::{Payment, PaymentCandidate};
pub use store::PaymentStore;
pub use validation::{UnvalidatedInput, Violation, ViolationCode};
