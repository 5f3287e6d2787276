// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The cross-boundary result shape every exposed operation returns.

use serde::{Deserialize, Serialize};
use serde_json::Value as Json;

pub use sx_core::error::{ErrorCode, ErrorEnvelope, SxError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResultKind {
    Success,
    Failed,
    Error,
}

/// `{result: "success"|"failed"|"error", response_data?, error?}` — the
/// action hub's per-call result shape (§4.7).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResultEnvelope {
    pub result: ResultKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_data: Option<Json>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorEnvelope>,
}

impl TaskResultEnvelope {
    pub fn success(response_data: Option<Json>) -> Self {
        Self { result: ResultKind::Success, response_data, error: None }
    }

    pub fn failed(error: ErrorEnvelope) -> Self {
        Self { result: ResultKind::Failed, response_data: None, error: Some(error) }
    }

    pub fn error(error: &SxError) -> Self {
        Self { result: ResultKind::Error, response_data: None, error: Some(error.into()) }
    }
}

#[cfg(test)]
#[path = "envelope_tests.rs"]
mod tests;
