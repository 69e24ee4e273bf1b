//! Scripted backend for client tests
//!
//! Answers every `POST /api/checkin` the same way and counts the requests it
//! receives.

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Json, Router, routing};
use tokio_util::sync::CancellationToken;

/// What the backend answers with
#[derive(Debug, Clone)]
pub enum Behavior {
    /// 404 `{"error":"Not found"}`
    NotFound,
    /// Non-JSON error page with the given status
    HtmlError(StatusCode),
    /// A valid check-in after sleeping
    Slow(Duration),
}

pub struct MockBackend {
    addr: SocketAddr,
    shutdown: CancellationToken,
    state: Arc<MockState>,
}

struct MockState {
    behavior: Behavior,
    request_count: AtomicU32,
}

impl MockBackend {
    /// Start the mock server, returning immediately
    pub async fn start(behavior: Behavior) -> anyhow::Result<Self> {
        let state = Arc::new(MockState {
            behavior,
            request_count: AtomicU32::new(0),
        });

        let app = Router::new()
            .route("/api/checkin", routing::post(handle_checkin))
            .with_state(Arc::clone(&state));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, state })
    }

    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Number of requests that reached the handler
    pub fn request_count(&self) -> u32 {
        self.state.request_count.load(Ordering::SeqCst)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

async fn handle_checkin(State(state): State<Arc<MockState>>) -> Response {
    state.request_count.fetch_add(1, Ordering::SeqCst);

    match &state.behavior {
        Behavior::NotFound => (StatusCode::NOT_FOUND, Json(serde_json::json!({ "error": "Not found" }))).into_response(),
        Behavior::HtmlError(status) => (*status, "<html><body>Bad Gateway</body></html>").into_response(),
        Behavior::Slow(delay) => {
            tokio::time::sleep(*delay).await;
            Json(serde_json::json!({
                "success": true,
                "data": {
                    "studentId": "6401234",
                    "ticket": "00000000-0000-4000-8000-000000000000",
                    "checkedInAt": "2026-10-19T08:00:00Z"
                }
            }))
            .into_response()
        }
    }
}
