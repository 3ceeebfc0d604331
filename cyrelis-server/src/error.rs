//! API error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use cyrelis_core::ExportError;
use serde::Serialize;

/// Message returned for any failure other than an empty export. The detail
/// is logged, never sent to the client.
pub const GENERIC_FAILURE: &str = "Requête d'export invalide";

/// Export handler failure mapped to a status code and a JSON payload.
#[derive(Debug)]
pub struct ApiError(pub ExportError);

#[derive(Debug, Serialize)]
struct FailureBody<'a> {
    success: bool,
    message: &'a str,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl std::error::Error for ApiError {}

impl From<ExportError> for ApiError {
    fn from(e: ExportError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.0.to_string();
        let (status, message) = match &self.0 {
            // Empty input keeps a 200 status.
            ExportError::NoCredentials => (StatusCode::OK, message.as_str()),
            ExportError::InvalidRequest(_)
            | ExportError::InvalidRecord { .. }
            | ExportError::Csv(_)
            | ExportError::Encoding(_) => {
                tracing::warn!("Export failed: {}", message);
                (StatusCode::BAD_REQUEST, GENERIC_FAILURE)
            }
        };

        let body = FailureBody {
            success: false,
            message,
        };
        (status, axum::Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_credentials_is_ok_status() {
        let response = ApiError(ExportError::NoCredentials).into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[test]
    fn test_processing_errors_are_bad_request() {
        let errors = [
            ExportError::InvalidRequest("EOF while parsing".to_string()),
            ExportError::InvalidRecord {
                index: 2,
                reason: "expected an object".to_string(),
            },
        ];

        for error in errors {
            let response = ApiError(error).into_response();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        }
    }
}
