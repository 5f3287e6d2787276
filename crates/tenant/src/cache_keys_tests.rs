// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use sx_core::{BotId, TenantId};

use super::*;

#[test]
fn keys_embed_their_ids() {
    assert_eq!(tenant_bot_id_key(TenantId(7)), "tenant:7:bot_id");
    assert_eq!(bot_cache_key(BotId(42)), "bot:42");
    assert_eq!(tenant_meta_key(TenantId(7)), "tenant:7:meta");
    assert_eq!(tenant_config_key(TenantId(7)), "tenant:7:config");
    assert_eq!(webhook_secret_key("abc123"), "webhook_secret:abc123");
    assert_eq!(user_state_key("u1"), "user:u1:state");
}

#[test]
fn bot_id_pattern_matches_the_key_shape() {
    let pattern = tenant_bot_id_pattern();
    assert_eq!(pattern, "tenant:*:bot_id");
    assert_eq!(tenant_bot_id_key(TenantId(99)), "tenant:99:bot_id");
}
