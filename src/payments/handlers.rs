//! HTTP handlers for payment operations
//!
//! Handlers only translate between HTTP and the service: raw body and query
//! parameters become [`UnvalidatedInput`], and service results go through
//! the [`Envelope`] mapper.

use crate::core::UnvalidatedInput;
use crate::core::validation::RawBody;
use crate::payments::response::Envelope;
use crate::payments::service::{Lookup, PaymentService};
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, Query, State};
use std::collections::HashMap;

/// State shared by the payment handlers
#[derive(Clone)]
pub struct PaymentAppState {
    pub service: PaymentService,
}

impl PaymentAppState {
    pub fn new(service: PaymentService) -> Self {
        Self { service }
    }
}

/// POST /payments
pub async fn create_payment(
    State(state): State<PaymentAppState>,
    RawBody(input): RawBody,
) -> Envelope {
    Envelope::created(state.service.create(input).await)
}

/// GET /payments/{id}
///
/// An id segment that cannot be decoded names no stored payment.
pub async fn get_payment(
    State(state): State<PaymentAppState>,
    id: Result<Path<String>, PathRejection>,
) -> Envelope {
    match id {
        Ok(Path(id)) => Envelope::fetched(state.service.get_by_id(Some(&id)).await),
        Err(rejection) => {
            tracing::warn!(error = %rejection, "undecodable payment id");
            Envelope::fetched(Ok(Lookup::NotFound(String::new())))
        }
    }
}

/// GET /payments/ (empty id segment)
pub async fn get_payment_without_id(State(state): State<PaymentAppState>) -> Envelope {
    Envelope::fetched(state.service.get_by_id(None).await)
}

/// GET /payments?currency={code}
///
/// Any other query parameter (`limit`, for instance) is accepted and ignored.
pub async fn list_payments(
    State(state): State<PaymentAppState>,
    Query(params): Query<HashMap<String, String>>,
) -> Envelope {
    let query = UnvalidatedInput::from_query(params);
    Envelope::listed(state.service.list(&query).await)
}
