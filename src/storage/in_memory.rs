//! In-memory implementation of PaymentStore for testing and development

use crate::core::{Payment, PaymentStore, StorageError};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, RwLock};

const BACKEND: &str = "in-memory";

/// Primary map plus the currency index, guarded together
#[derive(Default)]
struct Tables {
    payments: HashMap<String, Payment>,
    by_currency: HashMap<String, HashSet<String>>,
}

/// In-memory payment store
///
/// Useful for testing and development. Uses RwLock for thread-safe access;
/// the lock is never held across an `.await`. Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryPaymentStore {
    tables: Arc<RwLock<Tables>>,
}

impl InMemoryPaymentStore {
    /// Create a new, empty in-memory store
    pub fn new() -> Self {
        Self::default()
    }

    fn poisoned<E>(_: E) -> StorageError {
        StorageError::LockPoisoned {
            backend: BACKEND.to_string(),
        }
    }
}

#[async_trait]
impl PaymentStore for InMemoryPaymentStore {
    async fn get(&self, id: &str) -> Result<Option<Payment>, StorageError> {
        let tables = self.tables.read().map_err(Self::poisoned)?;

        Ok(tables.payments.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<Payment>, StorageError> {
        let tables = self.tables.read().map_err(Self::poisoned)?;

        Ok(tables.payments.values().cloned().collect())
    }

    async fn list_by_currency(&self, currency: &str) -> Result<Vec<Payment>, StorageError> {
        let tables = self.tables.read().map_err(Self::poisoned)?;

        let Some(ids) = tables.by_currency.get(currency) else {
            return Ok(Vec::new());
        };

        Ok(ids
            .iter()
            .filter_map(|id| tables.payments.get(id))
            .cloned()
            .collect())
    }

    async fn put(&self, payment: Payment) -> Result<(), StorageError> {
        let mut tables = self.tables.write().map_err(Self::poisoned)?;
        let Tables {
            payments,
            by_currency,
        } = &mut *tables;

        // An overwrite with a different currency moves the index entry
        if let Some(previous) = payments.get(&payment.id) {
            if previous.currency != payment.currency {
                if let Some(ids) = by_currency.get_mut(&previous.currency) {
                    ids.remove(&payment.id);
                    if ids.is_empty() {
                        by_currency.remove(&previous.currency);
                    }
                }
            }
        }

        by_currency
            .entry(payment.currency.clone())
            .or_default()
            .insert(payment.id.clone());
        payments.insert(payment.id.clone(), payment);

        Ok(())
    }
}
