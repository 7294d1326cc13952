//! HTTP server for the payment API
//!
//! `ServerBuilder` wires a store into the payment service and produces an
//! axum router with:
//! - the payment routes
//! - a health route
//! - HTTP tracing and (optionally) permissive CORS layers

pub mod builder;
pub mod router;

pub use builder::ServerBuilder;
pub use router::{SERVICE_NAME, build_payment_routes, health_routes};
