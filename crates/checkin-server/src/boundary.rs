//! Delivery of handler failures into the error channel
//!
//! A failed handler does not write a body. It returns a bare status response
//! carrying [`FailedWith`] in its extensions; the normalizer picks that up and
//! renders the wire format. Panics are caught and routed the same way.

use std::any::Any;
use std::sync::Arc;

use axum::response::{IntoResponse, Response};
use checkin_core::HttpError;

use crate::error::AppError;

/// Result type for route handlers
pub type HandlerResult<T> = Result<T, AppError>;

/// Response extension marking a failed request
#[derive(Debug, Clone)]
pub struct FailedWith(pub Arc<AppError>);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let mut response = self.status_code().into_response();
        response.extensions_mut().insert(FailedWith(Arc::new(self)));
        response
    }
}

/// Turn a caught panic into an internal failure on the error channel
#[allow(clippy::needless_pass_by_value)]
pub fn panic_response(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_owned())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "non-string panic payload".to_owned());

    AppError::Internal(anyhow::anyhow!("handler panicked: {detail}")).into_response()
}
