//! Match-end webhook: verify the shared secret, extract fields, upsert the record.

use crate::logic::extraction::extract_match_fields;
use crate::models::MatchRecord;
use crate::store::{MatchStore, StoreError};
use serde_json::Value;

/// Why an ingestion request was refused.
#[derive(Debug)]
pub enum IngestError {
    /// Anything but POST.
    MethodNotAllowed,
    /// Secret header missing or wrong, or no secret configured.
    Unauthorized,
    /// No usable match id in the payload.
    MissingMatchId,
    /// Persisting the record failed.
    Store(StoreError),
}

impl IngestError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            IngestError::MethodNotAllowed => 405,
            IngestError::Unauthorized => 401,
            IngestError::MissingMatchId => 400,
            IngestError::Store(_) => 500,
        }
    }
}

impl std::fmt::Display for IngestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestError::MethodNotAllowed => write!(f, "Method Not Allowed"),
            IngestError::Unauthorized => write!(f, "Unauthorized"),
            IngestError::MissingMatchId => write!(f, "Missing match id"),
            IngestError::Store(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for IngestError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IngestError::Store(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for IngestError {
    fn from(e: StoreError) -> Self {
        IngestError::Store(e)
    }
}

/// An inbound webhook call, independent of the HTTP framework.
#[derive(Clone, Copy, Debug)]
pub struct IngestRequest<'a> {
    pub method: &'a str,
    /// Value of the `Authorization` header, if sent.
    pub authorization: Option<&'a str>,
    pub body: &'a [u8],
}

/// Handle one match-end notification.
///
/// Checks run in order: method, secret, match id, then the store write. An
/// empty `expected_secret` rejects everything. A body that is not JSON is
/// treated as a null payload and so fails on the match id.
pub fn ingest_match(
    request: IngestRequest<'_>,
    expected_secret: &str,
    store: &dyn MatchStore,
) -> Result<MatchRecord, IngestError> {
    if !request.method.eq_ignore_ascii_case("POST") {
        return Err(IngestError::MethodNotAllowed);
    }
    let got = request.authorization.unwrap_or("");
    if expected_secret.is_empty() || got != expected_secret {
        return Err(IngestError::Unauthorized);
    }
    let payload: Value = serde_json::from_slice(request.body).unwrap_or(Value::Null);
    let fields = extract_match_fields(&payload).ok_or(IngestError::MissingMatchId)?;
    Ok(store.upsert(fields, payload)?)
}
