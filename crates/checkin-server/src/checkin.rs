use anyhow::Context;
use axum::{Extension, Json};
use checkin_core::RequestContext;
use jiff::Timestamp;
use serde::Serialize;
use serde_json::Value;
use uuid::Uuid;

use crate::boundary::HandlerResult;
use crate::error::AppError;
use crate::extract::JsonBody;
use crate::validation::{FieldRule, sanitize, validate};

const CHECKIN_SCHEMA: &[FieldRule] = &[FieldRule::string("studentId").required().min_length(3).trimmed()];

/// Success body of `POST /api/checkin`
#[derive(Debug, Serialize)]
pub struct CheckinResponse {
    pub success: bool,
    pub data: Checkin,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkin {
    pub student_id: String,
    /// Encoded into the QR code by the front end
    pub ticket: Uuid,
    pub checked_in_at: Timestamp,
}

/// Check a student in and issue a ticket
pub async fn check_in(
    Extension(context): Extension<RequestContext>,
    JsonBody(body): JsonBody<Value>,
) -> HandlerResult<Json<CheckinResponse>> {
    let Value::Object(mut fields) = body else {
        return Err(AppError::Validation("Request body must be a JSON object".to_owned()));
    };

    sanitize(CHECKIN_SCHEMA, &mut fields);
    validate(CHECKIN_SCHEMA, &fields)?;

    let student_id = fields
        .get("studentId")
        .and_then(Value::as_str)
        .context("studentId missing after validation")?
        .to_owned();

    let checkin = Checkin {
        student_id,
        ticket: Uuid::new_v4(),
        checked_in_at: Timestamp::now(),
    };

    tracing::info!(
        student_id = %checkin.student_id,
        ticket = %checkin.ticket,
        client = %context.client_address,
        "student checked in"
    );

    Ok(Json(CheckinResponse {
        success: true,
        data: checkin,
    }))
}
