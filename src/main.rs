//! payments-server
//!
//! Loads configuration, initializes logging, builds the configured store and
//! serves the payment API until SIGTERM or Ctrl+C.

use anyhow::Result;
use payments::config::{AppConfig, StorageBackend, StorageConfig};
use payments::core::PaymentStore;
use payments::server::ServerBuilder;
use payments::storage::InMemoryPaymentStore;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = AppConfig::load()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.server.log_filter))?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let store = build_store(&config.storage).await?;

    ServerBuilder::new()
        .with_shared_store(store)
        .with_cors(config.cors.allow_any_origin)
        .serve(&config.server.bind_addr())
        .await
}

async fn build_store(config: &StorageConfig) -> Result<Arc<dyn PaymentStore>> {
    match config.backend {
        StorageBackend::InMemory => {
            tracing::info!("using in-memory payment store");
            Ok(Arc::new(InMemoryPaymentStore::new()))
        }
        StorageBackend::DynamoDb => build_dynamodb_store(config).await,
    }
}

#[cfg(feature = "dynamodb")]
async fn build_dynamodb_store(config: &StorageConfig) -> Result<Arc<dyn PaymentStore>> {
    use payments::storage::DynamoDBPaymentStore;

    let mut loader = aws_config::defaults(aws_config::BehaviorVersion::latest());
    if let Some(region) = &config.region {
        loader = loader.region(aws_config::Region::new(region.clone()));
    }
    if let Some(endpoint) = &config.endpoint_url {
        loader = loader.endpoint_url(endpoint);
    }
    let sdk_config = loader.load().await;

    tracing::info!(
        table = %config.table_name,
        index = %config.currency_index,
        "using DynamoDB payment store"
    );

    Ok(Arc::new(DynamoDBPaymentStore::new(
        aws_sdk_dynamodb::Client::new(&sdk_config),
        config.table_name.clone(),
        config.currency_index.clone(),
    )))
}

#[cfg(not(feature = "dynamodb"))]
async fn build_dynamodb_store(_config: &StorageConfig) -> Result<Arc<dyn PaymentStore>> {
    anyhow::bail!("storage backend 'dynamodb' requires the `dynamodb` feature")
}
