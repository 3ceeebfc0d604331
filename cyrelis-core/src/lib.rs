//! Cyrelis Core Library
//!
//! Decodes credential records submitted by clients and renders them as a
//! CSV file in the Bitwarden import format.

pub mod bitwarden;
pub mod credential;

pub use bitwarden::{to_csv_string, write_csv, BitwardenRow, COLUMNS, EXPORT_FILENAME};
pub use credential::{CredentialRecord, ExportRequest};

use thiserror::Error;

/// Result type for export operations
pub type Result<T> = std::result::Result<T, ExportError>;

/// Error type for export operations
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Aucun identifiant fourni")]
    NoCredentials,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Invalid credential at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Encoding error: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn export_bitwarden_csv(body: &[u8]) -> Result<String> {
        let credentials = ExportRequest::from_slice(body)?.into_credentials()?;
        to_csv_string(&credentials)
    }

    #[test]
    fn test_export_single_credential() {
        let body = br#"{"credentials": [{"name": "Site A", "login_username": "u", "login_password": "p"}]}"#;
        let csv = export_bitwarden_csv(body).unwrap();

        assert_eq!(
            csv,
            "folder,favorite,type,name,notes,fields,login_uri,login_username,login_password,login_totp\r\n\
             ,0,login,Site A,,,,u,p,\r\n"
        );
    }

    #[test]
    fn test_export_empty_credentials() {
        let err = export_bitwarden_csv(br#"{"credentials": []}"#).unwrap_err();
        assert!(matches!(err, ExportError::NoCredentials));
        assert_eq!(err.to_string(), "Aucun identifiant fourni");
    }

    #[test]
    fn test_export_missing_credentials() {
        let err = export_bitwarden_csv(b"{}").unwrap_err();
        assert!(matches!(err, ExportError::NoCredentials));
    }

    #[test]
    fn test_export_boolean_text_field() {
        let csv = export_bitwarden_csv(br#"{"credentials": [{"name": true, "notes": false}]}"#).unwrap();
        assert!(csv.ends_with("\r\n,0,login,True,False,,,,,\r\n"));
    }

    #[test]
    fn test_export_falsy_credentials() {
        for body in [
            r#"{"credentials": false}"#,
            r#"{"credentials": 0}"#,
            r#"{"credentials": ""}"#,
            r#"{"credentials": {}}"#,
        ] {
            let err = export_bitwarden_csv(body.as_bytes()).unwrap_err();
            assert!(matches!(err, ExportError::NoCredentials), "body = {}", body);
        }
    }

    #[test]
    fn test_export_malformed_json() {
        let err = export_bitwarden_csv(b"{\"credentials\": [").unwrap_err();
        assert!(matches!(err, ExportError::InvalidRequest(_)));
    }

    #[test]
    fn test_export_is_idempotent() {
        let body = br#"{"credentials": [
            {"folder": "Work", "favorite": true, "name": "Mail", "login_uri": "https://mail.example.com"},
            {"name": "Bank, Inc.", "notes": "line one\nline two", "login_totp": "JBSWY3DPEHPK3PXP"}
        ]}"#;

        let first = export_bitwarden_csv(body).unwrap();
        let second = export_bitwarden_csv(body).unwrap();
        assert_eq!(first, second);
    }
}
