//! DynamoDB implementation of PaymentStore
//!
//! Expects a table keyed by the string attribute `paymentId` and a global
//! secondary index whose partition key is `currency` (projection ALL).

use crate::core::{Payment, PaymentStore, StorageError};
use async_trait::async_trait;
use aws_sdk_dynamodb::Client as DynamoDBClient;
use aws_sdk_dynamodb::error::{DisplayErrorContext, SdkError};
use aws_sdk_dynamodb::types::AttributeValue;
use std::collections::HashMap;

const BACKEND: &str = "DynamoDB";

type Item = HashMap<String, AttributeValue>;

/// DynamoDB payment store
#[derive(Clone)]
pub struct DynamoDBPaymentStore {
    client: DynamoDBClient,
    table_name: String,
    currency_index: String,
}

impl DynamoDBPaymentStore {
    pub fn new(
        client: DynamoDBClient,
        table_name: impl Into<String>,
        currency_index: impl Into<String>,
    ) -> Self {
        Self {
            client,
            table_name: table_name.into(),
            currency_index: currency_index.into(),
        }
    }

    /// Transport failures become `ConnectionError`, everything else `QueryError`
    fn request_error<E, R>(err: SdkError<E, R>) -> StorageError
    where
        E: std::error::Error + 'static,
        R: std::fmt::Debug,
    {
        let message = DisplayErrorContext(&err).to_string();
        match err {
            SdkError::DispatchFailure(_) | SdkError::TimeoutError(_) => {
                StorageError::ConnectionError {
                    backend: BACKEND.to_string(),
                    message,
                }
            }
            _ => StorageError::query(BACKEND, message),
        }
    }

    fn payment_to_item(payment: &Payment) -> Result<Item, StorageError> {
        serde_dynamo::to_item(payment).map_err(|e| StorageError::serialization(BACKEND, e))
    }

    fn items_to_payments(items: Vec<Item>) -> Result<Vec<Payment>, StorageError> {
        serde_dynamo::from_items(items).map_err(|e| StorageError::serialization(BACKEND, e))
    }
}

#[async_trait]
impl PaymentStore for DynamoDBPaymentStore {
    async fn get(&self, id: &str) -> Result<Option<Payment>, StorageError> {
        let result = self
            .client
            .get_item()
            .table_name(&self.table_name)
            .key("paymentId", AttributeValue::S(id.to_string()))
            .send()
            .await
            .map_err(Self::request_error)?;

        match result.item {
            Some(item) => serde_dynamo::from_item(item)
                .map(Some)
                .map_err(|e| StorageError::serialization(BACKEND, e)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<Payment>, StorageError> {
        let mut payments = Vec::new();
        let mut start_key: Option<Item> = None;

        // Follow LastEvaluatedKey so callers always get the complete set
        loop {
            let page = self
                .client
                .scan()
                .table_name(&self.table_name)
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(Self::request_error)?;

            payments.extend(Self::items_to_payments(page.items.unwrap_or_default())?);

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(table = %self.table_name, count = payments.len(), "scanned payments");
        Ok(payments)
    }

    async fn list_by_currency(&self, currency: &str) -> Result<Vec<Payment>, StorageError> {
        let mut payments = Vec::new();
        let mut start_key: Option<Item> = None;

        loop {
            let page = self
                .client
                .query()
                .table_name(&self.table_name)
                .index_name(&self.currency_index)
                .key_condition_expression("currency = :currency")
                .expression_attribute_values(":currency", AttributeValue::S(currency.to_string()))
                .set_exclusive_start_key(start_key.take())
                .send()
                .await
                .map_err(Self::request_error)?;

            payments.extend(Self::items_to_payments(page.items.unwrap_or_default())?);

            match page.last_evaluated_key {
                Some(key) if !key.is_empty() => start_key = Some(key),
                _ => break,
            }
        }

        tracing::debug!(
            table = %self.table_name,
            index = %self.currency_index,
            currency,
            count = payments.len(),
            "queried payments by currency"
        );
        Ok(payments)
    }

    async fn put(&self, payment: Payment) -> Result<(), StorageError> {
        let item = Self::payment_to_item(&payment)?;

        self.client
            .put_item()
            .table_name(&self.table_name)
            .set_item(Some(item))
            .send()
            .await
            .map_err(Self::request_error)?;

        Ok(())
    }
}
