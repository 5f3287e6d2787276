// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Database-backed lookups the tenant/bot directory needs. Only the
//! trait shapes live here; a concrete implementation (sqlx, or whatever
//! store the deployment uses) is out of scope and wired up by `sx-daemon`.

use async_trait::async_trait;
use serde_json::Value as Json;

use sx_core::{BotId, SxError, TenantId};

/// A bot's durable row, as fetched from the source-of-truth store.
#[derive(Debug, Clone)]
pub struct BotRecord {
    pub bot_id: BotId,
    pub tenant_id: TenantId,
    pub telegram_bot_id: Option<String>,
    pub bot_token: Option<String>,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub is_active: bool,
    pub commands: Vec<Json>,
}

#[async_trait]
pub trait BotRepository: Send + Sync {
    async fn find_bot_for_tenant(&self, tenant_id: TenantId) -> Result<Option<BotRecord>, SxError>;
    async fn find_bot_by_webhook_secret(&self, secret: &str) -> Result<Option<BotRecord>, SxError>;
}

#[async_trait]
pub trait TenantConfigRepository: Send + Sync {
    async fn load_tenant_config(&self, tenant_id: TenantId) -> Result<Option<Json>, SxError>;
}
