//! Reply interpretation shared by every page component.
//!
//! The backend answers with `{ success, message? }` objects, but proxies and
//! error pages do not, so a reply is read in this order: declared JSON, then
//! body-that-happens-to-be-JSON, then plain text as the failure message.
//! Nothing that is not an explicit `success: true` counts as success.

use serde_json::Value;

use crate::error::StorefrontError;
use crate::transport::RawResponse;

#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    Success(Value),
    /// Rejected or unreadable. `None` means the caller's generic message applies.
    Failure(Option<String>),
}

impl ResponseOutcome {
    pub fn into_result(self, fallback: &str) -> Result<Value, StorefrontError> {
        match self {
            ResponseOutcome::Success(value) => Ok(value),
            ResponseOutcome::Failure(message) => Err(StorefrontError::operation(
                message.unwrap_or_else(|| fallback.to_owned()),
            )),
        }
    }
}

pub fn parse_response(raw: &RawResponse) -> ResponseOutcome {
    let declared_json = raw
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"));

    match serde_json::from_str::<Value>(&raw.body) {
        Ok(value) => classify(value),
        Err(_) if declared_json => ResponseOutcome::Failure(None),
        Err(_) => {
            let text = raw.body.trim();
            if text.is_empty() {
                ResponseOutcome::Failure(None)
            } else {
                ResponseOutcome::Failure(Some(text.to_owned()))
            }
        }
    }
}

fn classify(value: Value) -> ResponseOutcome {
    if value.get("success").and_then(Value::as_bool) == Some(true) {
        return ResponseOutcome::Success(value);
    }
    let message = value
        .get("message")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .map(str::to_owned);
    ResponseOutcome::Failure(message)
}
