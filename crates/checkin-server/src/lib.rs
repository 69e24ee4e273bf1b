#![allow(clippy::must_use_candidate)]

//! Check-in HTTP server
//!
//! Every request runs through one fixed chain, outermost first:
//! request logger, CORS (when configured), error normalizer, panic boundary,
//! then the routes with the not-found fallbacks. Nothing below the normalizer
//! writes an error body.

mod boundary;
mod checkin;
mod cors;
mod error;
mod extract;
mod health;
mod normalizer;
mod not_found;
mod request_log;
pub mod validation;

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use checkin_config::{Config, CorsConfig, ServerConfig};
use tower_http::catch_panic::CatchPanicLayer;

pub use boundary::{FailedWith, HandlerResult};
pub use error::AppError;
pub use extract::JsonBody;
pub use normalizer::normalize;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    pub fn new(config: &Config) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        let router = with_error_pipeline(routes(&config.server), config.server.cors.as_ref());

        Self {
            router,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router.into_make_service_with_connect_info::<SocketAddr>())
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

/// Feature routes without any middleware
pub fn routes(config: &ServerConfig) -> Router {
    let mut app = Router::new().route("/api/checkin", post(checkin::check_in));

    if config.health.enabled {
        app = app.route(&config.health.path, get(health::health_handler));
    }

    app
}

/// Wrap `routes` in the request pipeline
///
/// This is the only place the middleware order is decided.
pub fn with_error_pipeline(routes: Router, cors: Option<&CorsConfig>) -> Router {
    // Innermost first
    let mut app = routes
        .fallback(not_found::route_not_found)
        .method_not_allowed_fallback(not_found::method_not_allowed)
        .layer(CatchPanicLayer::custom(boundary::panic_response))
        .layer(axum::middleware::from_fn(normalizer::normalize_errors));

    if let Some(cors) = cors {
        app = app.layer(cors::cors_layer(cors));
    }

    app.layer(axum::middleware::from_fn(request_log::log_requests))
}
