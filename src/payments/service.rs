//! Payment service orchestrating validation, identity and storage

use crate::core::validation::{self, CURRENCY};
use crate::core::{
    IdentityPolicy, Payment, PaymentStore, ServiceError, ServiceResult, UnvalidatedInput,
    UuidIdentityPolicy,
};
use serde_json::Value;
use std::sync::Arc;

/// Result of a point lookup
///
/// A missing record is a normal outcome, not an error.
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup {
    Found(Payment),
    NotFound(String),
}

/// Payment operations over an injected store
///
/// Holds no state of its own beyond its handles, so cloning is cheap and
/// every request can run concurrently. Validation and parameter checks happen
/// before any store call.
#[derive(Clone)]
pub struct PaymentService {
    store: Arc<dyn PaymentStore>,
    identity: Arc<dyn IdentityPolicy>,
}

impl PaymentService {
    pub fn new(store: Arc<dyn PaymentStore>, identity: Arc<dyn IdentityPolicy>) -> Self {
        Self { store, identity }
    }

    /// Service using random UUID identifiers
    pub fn with_store(store: impl PaymentStore + 'static) -> Self {
        Self::new(Arc::new(store), Arc::new(UuidIdentityPolicy))
    }

    /// Validate, assign an identifier, persist; returns the new identifier
    pub async fn create(&self, input: UnvalidatedInput) -> ServiceResult<String> {
        let candidate = validation::validate_payment(&input).map_err(|violations| {
            tracing::warn!(
                violations = violations.len(),
                malformed = input.is_malformed(),
                "rejected payment input"
            );
            ServiceError::ValidationFailed(violations)
        })?;

        let payment = self.identity.assign(candidate);
        let id = payment.id.clone();

        self.store.put(payment).await.map_err(|e| {
            tracing::error!(error = %e, payment_id = %id, "failed to store payment");
            ServiceError::from(e)
        })?;

        tracing::info!(payment_id = %id, "payment created");
        Ok(id)
    }

    /// Look up a payment by identifier
    pub async fn get_by_id(&self, id: Option<&str>) -> ServiceResult<Lookup> {
        let id = match id {
            Some(id) if !id.is_empty() => id,
            _ => {
                return Err(ServiceError::MissingParameter {
                    parameter: "id".to_string(),
                });
            }
        };

        tracing::debug!(payment_id = %id, "fetching payment");

        let found = self.store.get(id).await.map_err(|e| {
            tracing::error!(error = %e, payment_id = %id, "failed to fetch payment");
            ServiceError::from(e)
        })?;

        Ok(match found {
            Some(payment) => Lookup::Found(payment),
            None => Lookup::NotFound(id.to_string()),
        })
    }

    /// List every payment, or only those matching the `currency` filter
    ///
    /// Keys other than `currency` are ignored.
    pub async fn list(&self, query: &UnvalidatedInput) -> ServiceResult<Vec<Payment>> {
        let result = match query.field(CURRENCY) {
            None => self.store.list().await,
            Some(Value::String(s)) if s.is_empty() => return Err(ServiceError::EmptyFilter),
            Some(filter) => {
                let currency = validation::validate_currency_filter(filter).map_err(|violations| {
                    tracing::warn!(violations = violations.len(), "rejected currency filter");
                    ServiceError::ValidationFailed(violations)
                })?;
                tracing::debug!(currency = %currency, "listing payments by currency");
                self.store.list_by_currency(&currency).await
            }
        };

        result.map_err(|e| {
            tracing::error!(error = %e, "failed to list payments");
            ServiceError::from(e)
        })
    }
}
