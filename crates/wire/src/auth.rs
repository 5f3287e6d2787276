// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Inbound webhook authentication (§6). The GitHub HMAC-SHA256 check is
//! real, pure computation; the Telegram secret-token check is a cache
//! lookup owned by `sx-tenant` (it needs the cache, which this crate does
//! not depend on) — `WebhookAuth` is the shared trait both implement.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// How a given webhook request proved it came from the vendor it claims.
pub trait WebhookAuth {
    /// Returns `true` if the request is authenticated.
    fn authenticate(&self, headers: &dyn Fn(&str) -> Option<String>, raw_body: &[u8]) -> bool;
}

/// Verifies `X-Hub-Signature-256: sha256=<hex>` over the raw request body
/// with the shared secret, constant-time via `hmac`'s built-in comparison.
pub fn verify_github_signature(secret: &[u8], raw_body: &[u8], header_value: &str) -> bool {
    let Some(hex_sig) = header_value.strip_prefix("sha256=") else { return false };
    let Ok(expected) = hex::decode(hex_sig) else { return false };

    let Ok(mut mac) = HmacSha256::new_from_slice(secret) else { return false };
    mac.update(raw_body);
    mac.verify_slice(&expected).is_ok()
}

/// Trait-only signature for the inbound Telegram webhook handler — the
/// real HTTP listener loop is out of scope; `sx-daemon` wires a concrete
/// implementation to whatever server crate it picks.
#[async_trait::async_trait]
pub trait TelegramWebhookHandler: Send + Sync {
    async fn handle(&self, secret_token: Option<&str>, raw_body: &[u8]) -> Result<(), sx_core::SxError>;
}

/// Trait-only signature for the inbound GitHub webhook handler; only
/// `X-GitHub-Event: push` is processed per §6.
#[async_trait::async_trait]
pub trait GithubWebhookHandler: Send + Sync {
    async fn handle(&self, event_name: &str, signature_header: &str, raw_body: &[u8]) -> Result<(), sx_core::SxError>;
}

#[cfg(test)]
#[path = "auth_tests.rs"]
mod tests;
