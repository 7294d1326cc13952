//! Shared test harness for payment store backends
//!
//! Provides sample payments, stores that always fail or panic, a router builder,
//! and the two macro-generated suites:
//!
//! - `payment_store_tests!` validates the `PaymentStore` contract
//! - `rest_integration_tests!` drives the full HTTP API over a store
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod store_harness;
//! use store_harness::*;
//!
//! payment_store_tests!(InMemoryPaymentStore::new());
//! rest_integration_tests!(InMemoryPaymentStore::new());
//! ```

#![allow(dead_code, unused_macros)]


#[macro_use]
pub mod rest_tests;

use async_trait::async_trait;
use axum::Router;
use payments::core::{Payment, PaymentStore, StorageError};
use payments::server::ServerBuilder;
use std::collections::HashSet;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// A payment with a random identifier
pub fn sample_payment(amount: f64, currency: &str) -> Payment {
    Payment::new(Uuid::new_v4().to_string(), amount, currency)
}

/// Four payments across three currencies (two AUD)
pub fn sample_batch() -> Vec<Payment> {
    vec![
        sample_payment(100.0, "AUD"),
        sample_payment(200.0, "USD"),
        sample_payment(300.0, "EUR"),
        sample_payment(50.5, "AUD"),
    ]
}

pub fn ids_of(payments: &[Payment]) -> HashSet<String> {
    payments.iter().map(|p| p.id.clone()).collect()
}

/// Identifiers of the `data` array in a list response body
pub fn ids_in_body(body: &serde_json::Value) -> HashSet<String> {
    body["data"]
        .as_array()
        .expect("data should be an array")
        .iter()
        .map(|p| p["paymentId"].as_str().expect("paymentId").to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Failing store
// ---------------------------------------------------------------------------

/// Store whose every operation fails
#[derive(Clone, Default)]
pub struct FailingStore;

impl FailingStore {
    fn fail<T>() -> Result<T, StorageError> {
        Err(StorageError::Unavailable {
            backend: "failing".to_string(),
        })
    }
}

#[async_trait]
impl PaymentStore for FailingStore {
    async fn get(&self, _id: &str) -> Result<Option<Payment>, StorageError> {
        Self::fail()
    }

    async fn list(&self) -> Result<Vec<Payment>, StorageError> {
        Self::fail()
    }

    async fn list_by_currency(&self, _currency: &str) -> Result<Vec<Payment>, StorageError> {
        Self::fail()
    }

    async fn put(&self, _payment: Payment) -> Result<(), StorageError> {
        Self::fail()
    }
}

// ---------------------------------------------------------------------------
// Panicking store
// ---------------------------------------------------------------------------

/// Store whose every operation panics
#[derive(Clone, Default)]
pub struct PanickingStore;

#[async_trait]
impl PaymentStore for PanickingStore {
    async fn get(&self, _id: &str) -> Result<Option<Payment>, StorageError> {
        panic!("get exploded")
    }

    async fn list(&self) -> Result<Vec<Payment>, StorageError> {
        panic!("list exploded")
    }

    async fn list_by_currency(&self, _currency: &str) -> Result<Vec<Payment>, StorageError> {
        panic!("list_by_currency exploded")
    }

    async fn put(&self, _payment: Payment) -> Result<(), StorageError> {
        panic!("put exploded")
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

/// Build the full application router over `store`
pub fn build_test_router(store: impl PaymentStore + 'static) -> Router {
    ServerBuilder::new()
        .with_store(store)
        .build()
        .expect("router should build")
}
