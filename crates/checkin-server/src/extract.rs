use axum::extract::FromRequest;
use axum::extract::rejection::JsonRejection;
use checkin_core::{ApiError, codes};
use http::StatusCode;

use crate::error::AppError;

/// JSON body extractor whose rejections land on the error channel
///
/// Syntax errors are tagged as [`AppError::InvalidJson`], well-formed JSON of
/// the wrong shape as [`AppError::Validation`].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonSyntaxError(e) => Self::InvalidJson(e.body_text()),
            JsonRejection::JsonDataError(e) => Self::Validation(e.body_text()),
            JsonRejection::MissingJsonContentType(_) => Self::Api(ApiError::new(
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                codes::UNSUPPORTED_MEDIA_TYPE,
                "Content-Type must be application/json",
            )),
            other => Self::Api(ApiError::new(other.status(), codes::INVALID_BODY, other.body_text())),
        }
    }
}
