//! Persistence contract for payment records

use crate::core::error::StorageError;
use crate::core::payment::Payment;
use async_trait::async_trait;

/// Key-value store of payments with a secondary index on `currency`
///
/// The store is the sole writer and source of truth. Implementations are
/// shared behind `Arc` and must allow many calls in flight at once. No
/// implementation retries; backend failures surface as [`StorageError`].
#[async_trait]
pub trait PaymentStore: Send + Sync {
    /// Point lookup by identifier
    async fn get(&self, id: &str) -> Result<Option<Payment>, StorageError>;

    /// Every stored payment, unordered
    async fn list(&self) -> Result<Vec<Payment>, StorageError>;

    /// Payments whose `currency` equals `currency`, served by the index
    async fn list_by_currency(&self, currency: &str) -> Result<Vec<Payment>, StorageError>;

    /// Insert or overwrite by identifier (last writer wins)
    async fn put(&self, payment: Payment) -> Result<(), StorageError>;
}
