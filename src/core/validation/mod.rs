//! Payment input validation
//!
//! Turns an [`UnvalidatedInput`] into a typed [`PaymentCandidate`], or into
//! the complete list of [`Violation`]s. Every field is checked; a problem in
//! `amount` never hides a problem in `currency`.

pub mod extractor;
pub mod input;
pub mod validators;
pub mod violation;

pub use extractor::RawBody;
pub use input::UnvalidatedInput;
pub use violation::{Violation, ViolationCode};

use crate::core::payment::PaymentCandidate;
use serde_json::Value;
use validators::{exact_length, max_length, min_length, number_field, positive, string_field};

pub const AMOUNT: &str = "amount";
pub const CURRENCY: &str = "currency";
pub const CURRENCY_LENGTH: usize = 3;

/// Validate a create-payment payload
///
/// Malformed and non-object inputs have no fields, so they report the
/// missing-field violation for each required field.
pub fn validate_payment(input: &UnvalidatedInput) -> Result<PaymentCandidate, Vec<Violation>> {
    let mut violations = Vec::new();

    let amount = match number_field(AMOUNT, input.field(AMOUNT)) {
        Ok(amount) => match positive("Amount must be positive")(AMOUNT, amount) {
            Ok(()) => Some(amount),
            Err(v) => {
                violations.push(v);
                None
            }
        },
        Err(v) => {
            violations.push(v);
            None
        }
    };

    let currency = match string_field(CURRENCY, input.field(CURRENCY)) {
        Ok(currency) => {
            let before = violations.len();
            let checks = [
                min_length(CURRENCY_LENGTH, "Currency must be at least 3 characters")(
                    CURRENCY, currency,
                ),
                max_length(CURRENCY_LENGTH, "Currency must be at most 3 characters")(
                    CURRENCY, currency,
                ),
            ];
            violations.extend(checks.into_iter().filter_map(Result::err));
            (violations.len() == before).then_some(currency)
        }
        Err(v) => {
            violations.push(v);
            None
        }
    };

    match (amount, currency) {
        (Some(amount), Some(currency)) if violations.is_empty() => {
            Ok(PaymentCandidate::new(amount, currency))
        }
        _ => Err(violations),
    }
}

/// Validate a list filter value: a string of exactly three characters
pub fn validate_currency_filter(value: &Value) -> Result<String, Vec<Violation>> {
    let currency = string_field(CURRENCY, Some(value)).map_err(|v| vec![v])?;

    exact_length(CURRENCY_LENGTH, "Currency must be 3 characters")(CURRENCY, currency)
        .map_err(|v| vec![v])?;

    Ok(currency.to_string())
}
