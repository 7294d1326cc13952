//! Payment record and its pre-identity candidate form

use serde::{Deserialize, Serialize};

/// A persisted payment record
///
/// The serialized shape is the stored shape: the identifier is written as
/// `paymentId`, and read endpoints return it verbatim. Create responses only
/// carry the bare identifier, so API clients see `result` on create and
/// `paymentId` on read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    /// Server-assigned identifier, never taken from client input
    #[serde(rename = "paymentId")]
    pub id: String,

    /// Strictly positive amount
    pub amount: f64,

    /// Three-character currency code (length-checked only)
    pub currency: String,
}

impl Payment {
    /// Build a payment from an already-assigned identifier
    pub fn new(id: impl Into<String>, amount: f64, currency: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            amount,
            currency: currency.into(),
        }
    }
}

/// A validated payment that has not been given an identifier yet
///
/// Only the validator constructs candidates, and only the identity policy
/// turns them into a [`Payment`]. There is no field for a client identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct PaymentCandidate {
    pub amount: f64,
    pub currency: String,
}

impl PaymentCandidate {
    pub(crate) fn new(amount: f64, currency: impl Into<String>) -> Self {
        Self {
            amount,
            currency: currency.into(),
        }
    }

    /// Attach an identifier, producing the record to persist
    pub fn with_id(self, id: impl Into<String>) -> Payment {
        Payment {
            id: id.into(),
            amount: self.amount,
            currency: self.currency,
        }
    }
}
