// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! The inbound HTTP surface and the periodic backup job. Both are
//! trait-only: the concrete HTTP server and the actual backup storage
//! target belong to `sx-daemon`, which owns the process entrypoint.

use async_trait::async_trait;

use sx_core::SxError;

/// `/webhooks/telegram` and `/webhooks/github` always answer 200 once the
/// request is accepted for processing, per §6 and §7 — failures are
/// logged and surfaced through the task result envelope instead.
#[async_trait]
pub trait WebhookServer: Send + Sync {
    async fn serve(&self, bind_addr: &str) -> Result<(), SxError>;
    async fn shutdown(&self);
}

/// Periodic snapshot of tenant configuration/scenario state to durable
/// storage, independent of the cache's own TTL-driven eviction.
#[async_trait]
pub trait BackupScheduler: Send + Sync {
    async fn run_backup(&self) -> Result<(), SxError>;
}
