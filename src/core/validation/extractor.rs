//! Axum extractor for untrusted request bodies
//!
//! `RawBody` never rejects: the body is read as bytes regardless of
//! `Content-Type`, and anything that is not JSON becomes
//! [`UnvalidatedInput::Malformed`] so the validator can report it like any
//! other invalid payload.

use super::input::UnvalidatedInput;
use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use std::convert::Infallible;

/// Request body wrapped as [`UnvalidatedInput`]
///
/// # Usage
///
/// ```rust,ignore
/// pub async fn create_payment(
///     State(state): State<PaymentAppState>,
///     RawBody(input): RawBody,
/// ) -> Envelope {
///     Envelope::created(state.service.create(input).await)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RawBody(pub UnvalidatedInput);

impl<S> FromRequest<S> for RawBody
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let input = match Bytes::from_request(req, state).await {
            Ok(bytes) => UnvalidatedInput::from_body(&bytes),
            Err(e) => UnvalidatedInput::Malformed(e.body_text()),
        };

        Ok(RawBody(input))
    }
}
