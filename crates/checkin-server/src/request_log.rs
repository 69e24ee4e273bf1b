use std::net::SocketAddr;

use axum::extract::{ConnectInfo, Request};
use axum::middleware::Next;
use axum::response::Response;
use checkin_core::RequestContext;

/// Outermost middleware: captures the [`RequestContext`] and logs entry and
/// completion of every request
///
/// The context is inserted into request extensions for handlers. Bodies pass
/// through untouched.
pub async fn log_requests(mut request: Request, next: Next) -> Response {
    let path = request
        .uri()
        .path_and_query()
        .map_or_else(|| request.uri().path().to_owned(), |pq| pq.as_str().to_owned());

    let context = RequestContext::new(request.method().clone(), path, client_address(&request));

    tracing::info!(
        method = %context.method,
        path = %context.path,
        client = %context.client_address,
        "request received"
    );

    request.extensions_mut().insert(context.clone());
    let response = next.run(request).await;

    tracing::info!(
        method = %context.method,
        path = %context.path,
        status = response.status().as_u16(),
        elapsed_ms = context.elapsed_ms(),
        "request completed"
    );

    response
}

/// Best-effort client address
///
/// Proxy headers win over the socket peer.
fn client_address(request: &Request) -> String {
    // First X-Forwarded-For hop
    if let Some(forwarded) = request.headers().get("x-forwarded-for")
        && let Ok(val) = forwarded.to_str()
        && let Some(first) = val.split(',').next()
        && !first.trim().is_empty()
    {
        return first.trim().to_string();
    }

    if let Some(real_ip) = request.headers().get("x-real-ip")
        && let Ok(val) = real_ip.to_str()
        && !val.trim().is_empty()
    {
        return val.trim().to_string();
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map_or_else(|| "unknown".to_string(), |ConnectInfo(addr)| addr.ip().to_string())
}
