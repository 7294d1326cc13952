//! ServerBuilder for fluent API to build the payment HTTP server

use super::router::{build_payment_routes, health_routes};
use crate::core::{IdentityPolicy, PaymentStore, UuidIdentityPolicy};
use crate::payments::{Envelope, PaymentAppState, PaymentService};
use anyhow::Result;
use axum::Router;
use axum::response::{IntoResponse, Response};
use std::any::Any as PanicPayload;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Builder for the payment server
///
/// # Example
///
/// ```ignore
/// ServerBuilder::new()
///     .with_store(InMemoryPaymentStore::new())
///     .serve("127.0.0.1:3000")
///     .await?;
/// ```
pub struct ServerBuilder {
    store: Option<Arc<dyn PaymentStore>>,
    identity: Arc<dyn IdentityPolicy>,
    allow_any_origin: bool,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            store: None,
            identity: Arc::new(UuidIdentityPolicy),
            allow_any_origin: true,
            custom_routes: Vec::new(),
        }
    }

    /// Set the payment store (required)
    pub fn with_store(mut self, store: impl PaymentStore + 'static) -> Self {
        self.store = Some(Arc::new(store));
        self
    }

    /// Set an already shared payment store (required)
    pub fn with_shared_store(mut self, store: Arc<dyn PaymentStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Replace the UUID identity policy
    pub fn with_identity_policy(mut self, identity: impl IdentityPolicy + 'static) -> Self {
        self.identity = Arc::new(identity);
        self
    }

    /// Toggle the permissive CORS layer (on by default)
    pub fn with_cors(mut self, allow_any_origin: bool) -> Self {
        self.allow_any_origin = allow_any_origin;
        self
    }

    /// Add routes outside the payment API
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the router with health, payment and custom routes plus layers
    pub fn build(self) -> Result<Router> {
        let store = self
            .store
            .ok_or_else(|| anyhow::anyhow!("PaymentStore is required. Call .with_store()"))?;

        let service = PaymentService::new(store, self.identity);
        let mut app = health_routes().merge(build_payment_routes(PaymentAppState::new(service)));

        for custom_router in self.custom_routes {
            app = app.merge(custom_router);
        }

        if self.allow_any_origin {
            app = app.layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            );
        }

        Ok(app
            .layer(CatchPanicLayer::custom(panic_response))
            .layer(TraceLayer::new_for_http()))
    }

    /// Serve the application with graceful shutdown
    ///
    /// Binds to `addr` and stops on SIGTERM or Ctrl+C.
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Generic 500 envelope for a request whose handler panicked
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "request handler panicked");
    Envelope::internal_error().into_response()
}

/// Wait for shutdown signal (SIGTERM or Ctrl+C)
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
