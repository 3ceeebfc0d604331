//! Bitwarden CSV export handler.

use crate::error::ApiError;
use axum::body::Bytes;
use axum::http::header;
use axum::response::{IntoResponse, Response};
use cyrelis_core::{to_csv_string, ExportRequest, EXPORT_FILENAME};

/// Convert `{"credentials": [...]}` into a Bitwarden import file.
///
/// The body is parsed by hand rather than through `Json` so that every
/// decoding failure, including a missing content type, gets the same
/// failure payload.
pub async fn export_bitwarden_csv(body: Bytes) -> Result<Response, ApiError> {
    let credentials = ExportRequest::from_slice(&body)?.into_credentials()?;
    let csv = to_csv_string(&credentials)?;

    tracing::info!("Exported {} credentials", credentials.len());

    let disposition = format!("attachment; filename={}", EXPORT_FILENAME);
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8"),
            (header::CONTENT_DISPOSITION, disposition.as_str()),
        ],
        csv,
    )
        .into_response())
}
