// src/core/error.rs
//! Failures surfaced by the matching API gateway.

use reqwest::StatusCode;
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("HTTP {status} from {url}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("unexpected response from {url}: {message}")]
    Decode { url: String, message: String },
}

impl ApiError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Server-provided explanation taken from the error body.
    ///
    /// Handles `{"detail": "..."}` and the validation form
    /// `{"detail": [{"msg": "..."}, ...]}`.
    pub fn detail(&self) -> Option<String> {
        let ApiError::Status { body, .. } = self else {
            return None;
        };
        let parsed: Value = serde_json::from_str(body).ok()?;
        match parsed.get("detail")? {
            Value::String(detail) if !detail.trim().is_empty() => Some(detail.clone()),
            Value::Array(items) => {
                let messages: Vec<&str> = items
                    .iter()
                    .filter_map(|item| item.get("msg").and_then(Value::as_str))
                    .collect();
                (!messages.is_empty()).then(|| messages.join("; "))
            }
            _ => None,
        }
    }

    /// The detail message when the server sent one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.detail().unwrap_or_else(|| fallback.to_string())
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
