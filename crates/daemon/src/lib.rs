// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! sx-daemon: settings loading and webhook-ingress wiring around the
//! scenario engine. The actual HTTP listener, DB repositories, and chat
//! vendor clients are out of scope — this crate only owns the glue that
//! turns a loaded settings file and a resolved bot into a running
//! [`sx_engine::engine::ScenarioEngine`].

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod env;
pub mod settings;
pub mod webhook;

pub use settings::Settings;
pub use webhook::{IngressError, WebhookIngress};
