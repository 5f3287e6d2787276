// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Per-user conversational state (§3).
//!
//! Expired states are cleared lazily on read — `UserState` itself only
//! carries the data; the lazy-expiry check lives with whoever stores it
//! (`sx-tenant`, backed by `sx-cache`), mirroring how the original
//! `_get_user_state_with_cleanup` checks `expires_at` before ever
//! returning `state_data` to a caller.

use serde::{Deserialize, Serialize};
use serde_json::Map;

/// `{state_type, state_data, expires_at}` from §3.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserState {
    pub state_type: String,
    pub state_data: Map<String, serde_json::Value>,
    /// Unix-epoch milliseconds; `None` means the state never expires.
    pub expires_at: Option<u64>,
}

impl UserState {
    pub fn new(state_type: impl Into<String>) -> Self {
        Self { state_type: state_type.into(), state_data: Map::new(), expires_at: None }
    }

    pub fn with_expiry(mut self, expires_at_ms: u64) -> Self {
        self.expires_at = Some(expires_at_ms);
        self
    }

    pub fn with_data(mut self, state_data: Map<String, serde_json::Value>) -> Self {
        self.state_data = state_data;
        self
    }

    /// True when `expires_at` is set and has already passed `now_ms`.
    pub fn is_expired(&self, now_ms: u64) -> bool {
        match self.expires_at {
            Some(deadline) => now_ms >= deadline,
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "user_state_tests.rs"]
mod tests;
