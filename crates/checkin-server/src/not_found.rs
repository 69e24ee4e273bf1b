use axum::extract::OriginalUri;
use checkin_core::ApiError;
use http::{Method, Uri};

use crate::error::AppError;

/// Router fallback for unmatched paths
pub async fn route_not_found(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    ApiError::route_not_found(method.as_str(), requested_path(&uri)).into()
}

/// Router fallback for a known path requested with the wrong method
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    ApiError::method_not_allowed(method.as_str(), requested_path(&uri)).into()
}

fn requested_path(uri: &Uri) -> &str {
    uri.path_and_query().map_or_else(|| uri.path(), |pq| pq.as_str())
}
