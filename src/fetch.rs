use std::fmt;

use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{error, info, info_span};

use crate::endpoint::Endpoint;

#[derive(Debug)]
pub enum FetchError {
    Request(ureq::Error),
    Body(ureq::Error),
    Decode(serde_json::Error),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Request(e) => write!(f, "request failed: {e}"),
            FetchError::Body(e) => write!(f, "failed to read response body: {e}"),
            FetchError::Decode(e) => write!(f, "failed to decode response as JSON: {e}"),
        }
    }
}

impl std::error::Error for FetchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            FetchError::Request(e) | FetchError::Body(e) => Some(e),
            FetchError::Decode(e) => Some(e),
        }
    }
}

/// Accepts anything match-shaped: an object carrying a home_team object,
/// or anything with an away_team object or an integer group_id. Everything
/// else is dropped without surfacing an error.
pub fn is_valid(record: &Value) -> bool {
    (record.is_object() && record.get("home_team").is_some_and(Value::is_object))
        || record.get("away_team").is_some_and(Value::is_object)
        || record.get("group_id").is_some_and(Value::is_i64)
}

/// Decode a response body into validated records. Entries failing validation
/// or not fitting the target shape are silently skipped.
pub fn decode<T: DeserializeOwned>(body: &str) -> Result<Vec<T>, FetchError> {
    let records: Vec<Value> = serde_json::from_str(body).map_err(FetchError::Decode)?;
    Ok(records
        .into_iter()
        .filter(is_valid)
        .filter_map(|record| serde_json::from_value(record).ok())
        .collect())
}

/// Issue one blocking GET against the API and decode the full body.
pub fn fetch<T: DeserializeOwned>(endpoint: &Endpoint) -> Result<Vec<T>, FetchError> {
    let url = endpoint.url();
    let response = {
        let _span = info_span!("fetch", url = %url).entered();
        ureq::get(&url).call().map_err(|e| {
            error!(error = %e, url = %url, "request failed");
            FetchError::Request(e)
        })?
    };
    let mut body_reader = response.into_body();
    let body = body_reader.read_to_string().map_err(|e| {
        error!(error = %e, "failed to read response body");
        FetchError::Body(e)
    })?;
    let records = decode(&body)?;
    info!(records = records.len(), "fetched records");
    Ok(records)
}
