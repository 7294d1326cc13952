//! Payment lifecycle: service, HTTP handlers and response mapping

pub mod handlers;
pub mod response;
pub mod service;

pub use handlers::{
    PaymentAppState, create_payment, get_payment, get_payment_without_id, list_payments,
};
pub use response::Envelope;
pub use service::{Lookup, PaymentService};
