//! Bitwarden CSV import format.

use crate::{CredentialRecord, ExportError, Result};
use serde::Serialize;
use std::io::Write;

/// Header row of a Bitwarden import file, in column order.
pub const COLUMNS: [&str; 10] = [
    "folder",
    "favorite",
    "type",
    "name",
    "notes",
    "fields",
    "login_uri",
    "login_username",
    "login_password",
    "login_totp",
];

/// File name suggested to clients downloading an export.
pub const EXPORT_FILENAME: &str = "bitwarden_import.csv";

const LOGIN_TYPE: &str = "login";

/// One output line. Field order must match [`COLUMNS`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BitwardenRow<'a> {
    pub folder: &'a str,
    pub favorite: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub name: &'a str,
    pub notes: &'a str,
    pub fields: &'static str,
    pub login_uri: &'a str,
    pub login_username: &'a str,
    pub login_password: &'a str,
    pub login_totp: &'a str,
}

impl<'a> From<&'a CredentialRecord> for BitwardenRow<'a> {
    fn from(record: &'a CredentialRecord) -> Self {
        Self {
            folder: &record.folder,
            favorite: if record.favorite { "1" } else { "0" },
            kind: LOGIN_TYPE,
            name: &record.name,
            notes: &record.notes,
            fields: "",
            login_uri: &record.login_uri,
            login_username: &record.login_username,
            login_password: &record.login_password,
            login_totp: &record.login_totp,
        }
    }
}

/// Write the header and one row per record to `output`.
///
/// Fields are quoted only when they contain a delimiter, a quote or a line
/// break, and records end with CRLF.
pub fn write_csv<W: Write>(records: &[CredentialRecord], output: W) -> Result<W> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::CRLF)
        .from_writer(output);

    writer.write_record(COLUMNS)?;
    for row in records.iter().map(BitwardenRow::from) {
        writer.serialize(row)?;
    }

    writer
        .into_inner()
        .map_err(|e| ExportError::Csv(csv::Error::from(e.into_error())))
}

/// Render records as an in-memory CSV document.
pub fn to_csv_string(records: &[CredentialRecord]) -> Result<String> {
    let buffer = write_csv(records, Vec::new())?;
    Ok(String::from_utf8(buffer)?)
}
