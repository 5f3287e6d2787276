// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! External-boundary shapes and traits: the result envelope returned to
//! the action hub, webhook authentication, the repository/chat traits a
//! tenant directory is built against, and scenario-file deserialization.

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

mod auth;
mod chat;
mod envelope;
mod repos;
mod scenario_file;
mod server;

pub use auth::{verify_github_signature, GithubWebhookHandler, TelegramWebhookHandler, WebhookAuth};
pub use chat::{ChatClient, OutboundMessage};
pub use envelope::{ErrorCode, ErrorEnvelope, ResultKind, SxError, TaskResultEnvelope};
pub use repos::{BotRecord, BotRepository, TenantConfigRepository};
pub use scenario_file::{ScenarioFile, ScenarioFileParser, StepFile, TransitionFile, TriggerFile};
pub use server::{BackupScheduler, WebhookServer};
