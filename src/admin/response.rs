//! Response interpretation
//!
//! Converts a raw transport result (status + body) into the uniform result
//! envelope, or classifies it into one of the error kinds.

use serde_json::Value;

use crate::error::AdminError;

/// Message fragment the service uses to signal a duplicate-name conflict
/// when it does not answer with 409 outright.
const ALREADY_EXISTS_PATTERN: &str = "already exists";

/// Uniform result wrapper for every successful admin operation.
///
/// `data` holds the server-defined resource document (an object for single
/// resources, an array for list operations, `Null` for bodies carrying no
/// recognizable payload). `message` is present on mutation responses, e.g.
/// `"updated"`.
#[derive(Debug, Clone)]
pub struct ApiResponse {
    data: Value,
    message: Option<String>,
}

impl ApiResponse {
    #[must_use]
    pub const fn data(&self) -> &Value {
        &self.data
    }

    #[must_use]
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    #[must_use]
    pub fn into_data(self) -> Value {
        self.data
    }
}

/// Interpret a raw response.
///
/// The body is parsed first; anything unparseable is a fatal
/// `MalformedResponse` regardless of status. A 2xx status always yields an
/// envelope, even when the body carries no recognizable data key. Non-2xx
/// statuses are classified into `AlreadyExists`, `NotFound` or `Api`.
pub fn interpret(status: u16, body: &[u8]) -> Result<ApiResponse, AdminError> {
    let text = std::str::from_utf8(body)
        .map_err(|e| AdminError::MalformedResponse(format!("Response body is not UTF-8: {e}")))?;
    let value: Value = if text.trim().is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text)?
    };

    if (200..300).contains(&status) {
        return Ok(envelope(value));
    }

    let message = error_message(&value, text);
    Err(classify(status, message))
}

/// Wrap a parsed 2xx body. A top-level `data` key is lifted as-is;
/// otherwise the whole parsed body becomes the payload. A top-level string
/// `message` is copied forward either way.
fn envelope(value: Value) -> ApiResponse {
    match value {
        Value::Object(mut map) => {
            let message = map
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned);
            let data = match map.remove("data") {
                Some(data) => data,
                None => Value::Object(map),
            };
            ApiResponse { data, message }
        }
        other => ApiResponse {
            data: other,
            message: None,
        },
    }
}

fn classify(status: u16, message: String) -> AdminError {
    match status {
        404 => AdminError::NotFound { message },
        409 => AdminError::AlreadyExists { message },
        400..=499 if message.to_ascii_lowercase().contains(ALREADY_EXISTS_PATTERN) => {
            AdminError::AlreadyExists { message }
        }
        _ => AdminError::Api { status, message },
    }
}

/// Pull the server message out of an error body. The service nests it under
/// `error.message`; older endpoints put it at the top level. Fall back to
/// the raw text so the caller always has something to log.
fn error_message(value: &Value, raw: &str) -> String {
    value
        .pointer("/error/message")
        .or_else(|| value.pointer("/message"))
        .and_then(Value::as_str)
        .map_or_else(|| raw.trim().to_string(), str::to_owned)
}
