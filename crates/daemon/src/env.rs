// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized environment variable access for the daemon crate.

use std::path::PathBuf;

/// Settings file path: `SX_SETTINGS_PATH`, falling back to
/// `/etc/sx/settings.yaml`.
pub fn settings_path() -> PathBuf {
    std::env::var("SX_SETTINGS_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/etc/sx/settings.yaml"))
}
