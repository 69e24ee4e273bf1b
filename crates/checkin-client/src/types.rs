use serde::{Deserialize, Serialize};

/// Body of `POST /api/checkin`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckinRequest {
    /// Student identifier as typed into the form
    pub student_id: String,
}

/// Success envelope returned by the check-in endpoint
#[derive(Debug, Clone, Deserialize)]
pub struct CheckinResponse {
    /// Always `true` for a success body
    pub success: bool,
    /// The issued check-in
    pub data: Checkin,
}

/// A completed check-in
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Checkin {
    /// Student identifier after sanitization
    pub student_id: String,
    /// Opaque ticket the QR renderer encodes
    pub ticket: String,
    /// When the server accepted the check-in
    pub checked_in_at: jiff::Timestamp,
}
