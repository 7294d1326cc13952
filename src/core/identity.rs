//! Identity assignment for new payments

use crate::core::payment::{Payment, PaymentCandidate};
use uuid::Uuid;

/// Decides the persistent identifier of a new payment
///
/// Called on every create. Implementations must produce identifiers that do
/// not collide with existing ones with overwhelming probability.
pub trait IdentityPolicy: Send + Sync {
    /// Produce a fresh, non-empty identifier
    fn next_id(&self) -> String;

    /// Turn a validated candidate into the record to persist
    fn assign(&self, candidate: PaymentCandidate) -> Payment {
        candidate.with_id(self.next_id())
    }
}

/// Random UUID v4 identifiers
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidIdentityPolicy;

impl IdentityPolicy for UuidIdentityPolicy {
    fn next_id(&self) -> String {
        Uuid::new_v4().to_string()
    }
}
