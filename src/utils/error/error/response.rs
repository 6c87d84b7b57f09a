//! HTTP response handling for errors

use super::types::GatewayError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

impl ResponseError for GatewayError {
    fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Forbidden(_) => StatusCode::FORBIDDEN,
            GatewayError::Validation(_) => StatusCode::BAD_REQUEST,
            GatewayError::NotFound(_) => StatusCode::NOT_FOUND,
            GatewayError::Gone(_) => StatusCode::GONE,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.response_for_request(None)
    }
}

impl GatewayError {
    /// Build the JSON error response, tagged with the request id when known
    pub fn response_for_request(&self, request_id: Option<String>) -> HttpResponse {
        let (error_code, message) = match self {
            GatewayError::Forbidden(_) => ("FORBIDDEN", "Invalid API key".to_string()),
            GatewayError::Validation(_) => ("VALIDATION_ERROR", self.to_string()),
            GatewayError::NotFound(_) => ("NOT_FOUND", self.to_string()),
            GatewayError::Gone(_) => ("GONE", self.to_string()),
            GatewayError::Service(message) => ("SERVICE_ERROR", message.clone()),
            GatewayError::Config(_) => ("CONFIG_ERROR", "Service misconfigured".to_string()),
            // Upstream, crypto and storage failures may carry patient text; never echo them
            GatewayError::Provider(_) => (
                "PROVIDER_ERROR",
                "Upstream provider request failed".to_string(),
            ),
            _ => ("INTERNAL_ERROR", "An internal error occurred".to_string()),
        };

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: error_code.to_string(),
                message,
                timestamp: chrono::Utc::now().timestamp(),
                request_id,
            },
        };

        HttpResponse::build(self.status_code()).json(error_response)
    }
}

/// Standard error response format
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

/// Error detail structure
#[derive(serde::Serialize, serde::Deserialize, Debug)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    pub timestamp: i64,
    pub request_id: Option<String>,
}
