// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use serde_json::json;

fn sample_event() -> Event {
    Event::new(json!({
        "system": {"tenant_id": 7, "bot_id": 42, "source": "webhook"},
        "event_type": "text",
        "event_text": "hello world",
        "chat_id": 100,
        "user_id": 200,
        "chat_type": "private",
    }))
}

#[test]
fn reads_system_fields() {
    let event = sample_event();
    assert_eq!(event.tenant_id(), Some(TenantId(7)));
    assert_eq!(event.bot_id(), Some(BotId(42)));
    assert_eq!(event.source(), Some(EventSource::Webhook));
}

#[test]
fn reads_top_level_fields() {
    let event = sample_event();
    assert_eq!(event.event_type(), Some("text"));
    assert_eq!(event.event_text(), Some("hello world"));
    assert_eq!(event.chat_type(), Some("private"));
}

#[test]
fn missing_system_yields_none_not_panic() {
    let event = Event::new(json!({"event_type": "text"}));
    assert_eq!(event.tenant_id(), None);
    assert_eq!(event.source(), None);
}

#[test]
fn attachments_default_to_empty_slice() {
    let event = sample_event();
    assert!(event.attachments().is_empty());
}

#[test]
fn resolve_walks_into_raw_body() {
    let event = sample_event();
    assert_eq!(event.resolve("system.tenant_id"), Value::Json(json!(7)));
    assert_eq!(event.resolve("system.missing"), Value::Missing);
}
