//! Wire types for the Dog CEO response envelope.
//!
//! Every endpoint wraps its payload in an object whose `status` field
//! discriminates a success body from an error body. [`decode_envelope`]
//! performs that two-stage decode.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use super::{BreedMap, DirectoryError};

/// Payload of `/breeds/list/all`.
#[derive(Debug, Clone, Deserialize)]
pub struct AllBreedsPayload {
    pub message: BreedMap,
}

/// Payload of `/breed/{key}/images`.
#[derive(Debug, Clone, Deserialize)]
pub struct BreedImagesPayload {
    pub message: Vec<String>,
}

/// Payload of `/breed/{key}/images/random`.
#[derive(Debug, Clone, Deserialize)]
pub struct RandomImagePayload {
    pub message: String,
}

/// Body carried by an `"error"`-status envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    pub status: String,
    pub code: i64,
}

const STATUS_SUCCESS: &str = "success";
const STATUS_ERROR: &str = "error";

/// Decode an enveloped response body.
///
/// A `"success"` discriminant decodes the whole object as `T`; an
/// `"error"` discriminant decodes the [`ErrorBody`] and surfaces it as
/// [`DirectoryError::Response`]; any other discriminant is a decode
/// failure.
pub fn decode_envelope<T: DeserializeOwned>(body: &[u8]) -> Result<T, DirectoryError> {
    let value: Value = serde_json::from_slice(body)?;
    let status = value
        .get("status")
        .and_then(Value::as_str)
        .ok_or_else(|| DirectoryError::Decode("missing status field".to_string()))?
        .to_string();

    match status.as_str() {
        STATUS_SUCCESS => Ok(serde_json::from_value(value)?),
        STATUS_ERROR => {
            let body: ErrorBody = serde_json::from_value(value)?;
            Err(DirectoryError::from_error_body(body))
        }
        other => Err(DirectoryError::Decode(format!("invalid status: {other}"))),
    }
}
