// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Outbound messaging to the chat platform a bot is registered on.
//! Trait-only: the real Telegram/Bot-API client is an HTTP integration
//! out of scope for this crate, wired up by `sx-daemon`.

use async_trait::async_trait;
use serde_json::Value as Json;

use sx_core::SxError;

#[derive(Debug, Clone)]
pub struct OutboundMessage {
    pub chat_id: String,
    pub text: Option<String>,
    pub reply_markup: Option<Json>,
}

#[async_trait]
pub trait ChatClient: Send + Sync {
    async fn send_message(&self, message: OutboundMessage) -> Result<Json, SxError>;
    async fn edit_message(&self, chat_id: &str, message_id: &str, text: &str) -> Result<Json, SxError>;
    async fn answer_callback(&self, callback_query_id: &str, text: Option<&str>) -> Result<(), SxError>;
}
