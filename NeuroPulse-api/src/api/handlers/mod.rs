use axum::{
    extract::rejection::JsonRejection,
    response::{IntoResponse, Response},
};
use tracing::warn;

use crate::entities::common::ErrorResponse;

pub mod health;
pub mod risk;
pub mod vitals;

// Re-export handlers for easier imports
pub use health::health_check;
pub use risk::{assess_stroke_risk, triage_case};
pub use vitals::{assess_vital_snapshot, classify_blood_pressure_text, classify_vital};

/// Turn a rejected JSON body into the API error format
pub(crate) fn reject_body(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    ErrorResponse::from(rejection).into_response()
}

/// Fallback for routes that do not exist
pub async fn route_not_found() -> ErrorResponse {
    ErrorResponse::not_found("route")
}
