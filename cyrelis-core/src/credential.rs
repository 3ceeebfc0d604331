//! Credential records as submitted by clients.
//!
//! Clients send loosely-typed JSON. Every record field is optional and is
//! decoded once here into a `CredentialRecord` with its default filled in,
//! so the CSV mapping never has to deal with missing or oddly-typed values.

use crate::{ExportError, Result};
use serde::de::{self, Deserializer, Unexpected};
use serde::Deserialize;
use serde_json::Value;

/// One login entry to export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CredentialRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub folder: String,
    #[serde(deserialize_with = "truthy")]
    pub favorite: bool,
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub notes: String,
    #[serde(deserialize_with = "lenient_text")]
    pub login_uri: String,
    #[serde(deserialize_with = "lenient_text")]
    pub login_username: String,
    #[serde(deserialize_with = "lenient_text")]
    pub login_password: String,
    #[serde(deserialize_with = "lenient_text")]
    pub login_totp: String,
}

impl CredentialRecord {
    /// Decode the record at `index` of the `credentials` array.
    fn from_value(index: usize, value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ExportError::InvalidRecord {
                index,
                reason: format!("expected an object, found {}", kind_of(&value)),
            });
        }

        serde_json::from_value(value).map_err(|e| ExportError::InvalidRecord {
            index,
            reason: e.to_string(),
        })
    }
}

/// Body of an export request: `{"credentials": [...]}`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportRequest {
    pub credentials: Vec<CredentialRecord>,
}

impl ExportRequest {
    /// Parse a raw request body.
    ///
    /// An absent or falsy (`null`, `false`, `0`, `""`, `{}`) `credentials`
    /// value decodes as an empty list; the emptiness check is left to
    /// [`ExportRequest::into_credentials`].
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let body: Value =
            serde_json::from_slice(body).map_err(|e| ExportError::InvalidRequest(e.to_string()))?;

        let mut fields = match body {
            Value::Object(fields) => fields,
            other => {
                return Err(ExportError::InvalidRequest(format!(
                    "expected a JSON object, found {}",
                    kind_of(&other)
                )))
            }
        };

        let credentials = match fields.remove("credentials") {
            None => Vec::new(),
            Some(Value::Array(items)) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| CredentialRecord::from_value(index, item))
                .collect::<Result<Vec<_>>>()?,
            Some(other) if !is_truthy(&other) => Vec::new(),
            Some(other) => {
                return Err(ExportError::InvalidRequest(format!(
                    "`credentials` must be an array, found {}",
                    kind_of(&other)
                )))
            }
        };

        Ok(Self { credentials })
    }

    /// Take the decoded records, failing when there is nothing to export.
    pub fn into_credentials(self) -> Result<Vec<CredentialRecord>> {
        if self.credentials.is_empty() {
            return Err(ExportError::NoCredentials);
        }
        Ok(self.credentials)
    }
}

/// Strings pass through, `null` is empty, numbers keep their JSON text and
/// booleans render as `True` or `False`.
fn lenient_text<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Bool(true) => Ok("True".to_string()),
        Value::Bool(false) => Ok("False".to_string()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Array(_) => Err(de::Error::invalid_type(Unexpected::Seq, &"a string")),
        Value::Object(_) => Err(de::Error::invalid_type(Unexpected::Map, &"a string")),
    }
}

fn truthy<'de, D>(deserializer: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(is_truthy(&Value::deserialize(deserializer)?))
}

/// `null`, `false`, zero and empty strings, arrays or objects are false.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
