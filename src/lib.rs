//! # payments-rs
//!
//! A small payment record service: create a payment, fetch it by identifier,
//! and list payments, optionally filtered by currency.
//!
//! ## Layout
//!
//! - [`core`]: the `Payment` model, input validation, identity assignment,
//!   the `PaymentStore` contract and error types
//! - [`storage`]: in-memory and DynamoDB (`dynamodb` feature) stores
//! - [`payments`]: the `PaymentService`, HTTP handlers and response mapping
//! - [`server`]: `ServerBuilder` producing the axum router
//! - [`config`]: YAML and environment configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use payments::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     ServerBuilder::new()
//!         .with_store(InMemoryPaymentStore::new())
//!         .serve("127.0.0.1:3000")
//!         .await
//! }
//! ```

pub mod config;
pub mod core;
pub mod payments;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        IdentityPolicy, Payment, PaymentCandidate, PaymentStore, ServiceError, ServiceResult,
        StorageError, UnvalidatedInput, UuidIdentityPolicy, Violation, ViolationCode,
    };

    // === Service ===
    pub use crate::payments::{Envelope, Lookup, PaymentAppState, PaymentService};

    // === Storage ===
    pub use crate::storage::InMemoryPaymentStore;
    #[cfg(feature = "dynamodb")]
    pub use crate::storage::DynamoDBPaymentStore;

    // === Config ===
    pub use crate::config::{AppConfig, ConfigError, StorageBackend};

    // === Server ===
    pub use crate::server::ServerBuilder;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use serde::{Deserialize, Serialize};
}
