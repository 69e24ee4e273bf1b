use axum::Json;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use checkin_core::{HttpError, WireErrorResponse, codes};
use http::Method;

use crate::boundary::FailedWith;
use crate::error::{AppError, INTERNAL_MESSAGE};

/// Terminal error middleware
///
/// Passes successful responses through untouched. A response carrying
/// [`FailedWith`] is replaced by exactly one [`WireErrorResponse`].
pub async fn normalize_errors(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_owned(), |pq| pq.as_str().to_owned());

    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<FailedWith>() {
        Some(FailedWith(error)) => normalize(&method, &path, &error),
        None => response,
    }
}

/// Classify, log and render a failure
pub fn normalize(method: &Method, path: &str, error: &AppError) -> Response {
    let status = error.status_code();
    let body = wire_body(error);

    if status.is_server_error() {
        tracing::error!(
            %method,
            path,
            status = status.as_u16(),
            code = %body.code,
            error = ?error,
            "request failed"
        );
    } else {
        tracing::warn!(
            %method,
            path,
            status = status.as_u16(),
            code = %body.code,
            error = ?error,
            "request rejected"
        );
    }

    (status, Json(body)).into_response()
}

/// Wire body with `error` and `code` always non-empty
fn wire_body(error: &AppError) -> WireErrorResponse {
    let mut body = WireErrorResponse::from_error(error);

    if body.error.trim().is_empty() {
        body.error = error
            .status_code()
            .canonical_reason()
            .unwrap_or(INTERNAL_MESSAGE)
            .to_owned();
    }

    if body.code.trim().is_empty() {
        body.code = codes::INTERNAL_ERROR.to_owned();
    }

    body
}
