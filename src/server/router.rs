//! Route tables for the payment API

use crate::payments::handlers::{
    PaymentAppState, create_payment, get_payment, get_payment_without_id, list_payments,
};
use axum::{Json, Router, routing::get};
use serde_json::{Value, json};

/// Name reported by the health endpoint
pub const SERVICE_NAME: &str = "payments-rs";

/// Build payment routes
///
/// - GET /payments?currency={code} - List payments, optionally by currency
/// - POST /payments - Create a payment
/// - GET /payments/{id} - Get a payment by ID
/// - GET /payments/ - Rejected with 400 (missing ID)
pub fn build_payment_routes(state: PaymentAppState) -> Router {
    Router::new()
        .route("/payments", get(list_payments).post(create_payment))
        .route("/payments/", get(get_payment_without_id))
        .route("/payments/{id}", get(get_payment))
        .with_state(state)
}

/// Build health check routes
pub fn health_routes() -> Router {
    Router::new().route("/health", get(health_check))
}

async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "service": SERVICE_NAME
    }))
}
