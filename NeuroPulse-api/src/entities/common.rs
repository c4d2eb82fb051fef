use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Error response format for API
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// Error type/code - machine-readable identifier
    pub error: String,

    /// Human-readable error message
    pub message: String,

    /// Optional additional details about the error
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Create a not found error response
    pub fn not_found(resource: &str) -> Self {
        Self {
            error: "not_found".to_string(),
            message: format!("The requested {} could not be found", resource),
            details: None,
        }
    }

    /// Create a validation error response
    pub fn validation_error(message: &str, details: Option<serde_json::Value>) -> Self {
        Self {
            error: "validation_error".to_string(),
            message: message.to_string(),
            details,
        }
    }

    /// Create a bad request error response
    pub fn bad_request(message: &str) -> Self {
        Self {
            error: "bad_request".to_string(),
            message: message.to_string(),
            details: None,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.error.as_str() {
            "not_found" => StatusCode::NOT_FOUND,
            "validation_error" | "bad_request" => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Bodies that parse but do not fit the schema are validation errors;
/// anything else about the body is a bad request.
impl From<JsonRejection> for ErrorResponse {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::JsonDataError(e) => Self::validation_error(&e.body_text(), None),
            other => Self::bad_request(&other.body_text()),
        }
    }
}

impl IntoResponse for ErrorResponse {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(ErrorResponse::not_found("route").status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorResponse::validation_error("bad", None).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(ErrorResponse::bad_request("bad").status_code(), StatusCode::BAD_REQUEST);

        let unknown = ErrorResponse {
            error: "unexpected".to_string(),
            message: "boom".to_string(),
            details: None,
        };
        assert_eq!(unknown.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_details_omitted_when_empty() {
        let json = serde_json::to_value(ErrorResponse::bad_request("nope")).unwrap();
        assert_eq!(json["error"], "bad_request");
        assert!(json.get("details").is_none());
    }
}
