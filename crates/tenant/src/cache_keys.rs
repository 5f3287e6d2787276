// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Cache key builders, grounded one-to-one on the original's
//! `_get_tenant_bot_id_key`/`_get_bot_cache_key`/`_get_tenant_meta_cache_key`/
//! `_get_tenant_config_key`/user-state key helpers.

use sx_core::{BotId, TenantId};

pub fn tenant_bot_id_key(tenant_id: TenantId) -> String {
    format!("tenant:{tenant_id}:bot_id")
}

pub fn tenant_bot_id_pattern() -> &'static str {
    "tenant:*:bot_id"
}

pub fn bot_cache_key(bot_id: BotId) -> String {
    format!("bot:{bot_id}")
}

pub fn tenant_meta_key(tenant_id: TenantId) -> String {
    format!("tenant:{tenant_id}:meta")
}

pub fn tenant_config_key(tenant_id: TenantId) -> String {
    format!("tenant:{tenant_id}:config")
}

pub fn webhook_secret_key(token: &str) -> String {
    format!("webhook_secret:{token}")
}

pub fn user_state_key(user_id: &str) -> String {
    format!("user:{user_id}:state")
}

#[cfg(test)]
#[path = "cache_keys_tests.rs"]
mod tests;
