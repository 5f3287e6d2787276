// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The cross-boundary error shape (§7).
//!
//! Every exposed operation in this workspace returns `Result<T, SxError>`
//! internally; at a module boundary (task result, webhook response, CLI
//! output) that gets turned into an [`ErrorEnvelope`] via `From<&SxError>`.
//! Exceptions never escape a component — code that would otherwise
//! `.unwrap()`/`.expect()` on fallible input returns `SxError::Internal`
//! with a `tracing::error!` log instead, per the workspace lint
//! (`unwrap_used = "deny"`, `expect_used = "deny"`, `panic = "deny"`
//! outside `#[cfg(test)]`).

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

/// The closed set of error codes from §7. Variant names are Rust-cased;
/// [`Display`] renders the exact wire string (`VALIDATION_ERROR`, …).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Input failed schema checks on a required field.
    Validation,
    /// Tenant/bot/scenario/user absent.
    NotFound,
    /// Required configuration missing (e.g. webhook URL, secrets).
    Config,
    /// Downstream chat-vendor or HTTP call returned non-success.
    Api,
    /// YAML or expression could not be parsed.
    Parse,
    /// Cross-system synchronization (DB <-> file) failed.
    Sync,
    /// Handler or outbound call exceeded its deadline.
    Timeout,
    /// Unexpected exception; always accompanied by a log entry.
    Internal,
}

crate::simple_display! {
    ErrorCode {
        Validation => "VALIDATION_ERROR",
        NotFound => "NOT_FOUND",
        Config => "CONFIG_ERROR",
        Api => "API_ERROR",
        Parse => "PARSE_ERROR",
        Sync => "SYNC_ERROR",
        Timeout => "TIMEOUT",
        Internal => "INTERNAL_ERROR",
    }
}

/// Internal error type threaded through every fallible operation.
#[derive(Debug, thiserror::Error)]
pub enum SxError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("downstream api error: {0}")]
    Api(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("sync error: {0}")]
    Sync(String),

    #[error("operation timed out: {0}")]
    Timeout(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl SxError {
    pub fn code(&self) -> ErrorCode {
        match self {
            SxError::Validation(_) => ErrorCode::Validation,
            SxError::NotFound(_) => ErrorCode::NotFound,
            SxError::Config(_) => ErrorCode::Config,
            SxError::Api(_) => ErrorCode::Api,
            SxError::Parse(_) => ErrorCode::Parse,
            SxError::Sync(_) => ErrorCode::Sync,
            SxError::Timeout(_) => ErrorCode::Timeout,
            SxError::Internal(_) => ErrorCode::Internal,
        }
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}

/// The `{code, message, details?}` shape from §7, serialized at the wire
/// boundary (webhook response, task result, CLI output).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Json>,
}

impl ErrorEnvelope {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self { code: code.to_string(), message: message.into(), details: None }
    }

    pub fn with_details(mut self, details: Json) -> Self {
        self.details = Some(details);
        self
    }
}

impl From<&SxError> for ErrorEnvelope {
    fn from(err: &SxError) -> Self {
        ErrorEnvelope::new(err.code(), err.message())
    }
}

impl From<SxError> for ErrorEnvelope {
    fn from(err: SxError) -> Self {
        ErrorEnvelope::from(&err)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
