// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Webhook ingress glue: resolves the inbound path token to a bot,
//! builds an [`sx_core::Event`], and hands it to the scenario engine.
//! The actual HTTP listener is out of scope (§1 non-goals) — this is
//! the piece a real listener (axum, or whatever `sx-wire::WebhookServer`
//! ends up backed by) would call per request.

use std::sync::Arc;

use serde_json::Value as Json;

use sx_cache::CacheManager;
use sx_core::{BotId, Clock, Event, SxError};
use sx_engine::engine::{EngineError, ProcessOutcome, ScenarioEngine, ScenarioSource};
use sx_tenant::resolve_secret;

/// Resolves a webhook path token and dispatches the decoded body through
/// the scenario engine for the bot it belongs to.
pub struct WebhookIngress<C: Clock, S: ScenarioSource> {
    cache: Arc<CacheManager>,
    engine: Arc<ScenarioEngine<C, S>>,
}

#[derive(Debug, thiserror::Error)]
pub enum IngressError {
    #[error("unknown webhook token")]
    UnknownToken,
    #[error(transparent)]
    Engine(#[from] EngineError),
    #[error(transparent)]
    Sx(#[from] SxError),
}

impl<C: Clock, S: ScenarioSource> WebhookIngress<C, S> {
    pub fn new(cache: Arc<CacheManager>, engine: Arc<ScenarioEngine<C, S>>) -> Self {
        Self { cache, engine }
    }

    /// Resolve `token` to a bot, then process `body` as an event emitted
    /// by that bot. `body` must already carry the fields the rest of the
    /// system reads through `Event`'s typed accessors — decoding a
    /// vendor-specific payload (Telegram update shape, GitHub webhook
    /// shape) into that common form is itself out of scope, same as the
    /// listener.
    pub async fn ingest(&self, token: &str, body: Json) -> Result<ProcessOutcome, IngressError> {
        let bot_id = self.bot_for_token(token)?;
        let event = Event::new(stamp_bot_id(body, bot_id));
        Ok(self.engine.process_event(&event).await?)
    }

    fn bot_for_token(&self, token: &str) -> Result<BotId, IngressError> {
        resolve_secret(&self.cache, token).ok_or(IngressError::UnknownToken)
    }
}

fn stamp_bot_id(mut body: Json, bot_id: BotId) -> Json {
    if let Json::Object(map) = &mut body {
        if let Some(Json::Object(system)) = map.get_mut("system") {
            system.insert("bot_id".to_string(), Json::from(bot_id.0));
        }
    }
    body
}
