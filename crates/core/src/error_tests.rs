// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn error_codes_render_exact_wire_strings() {
    assert_eq!(ErrorCode::Validation.to_string(), "VALIDATION_ERROR");
    assert_eq!(ErrorCode::NotFound.to_string(), "NOT_FOUND");
    assert_eq!(ErrorCode::Config.to_string(), "CONFIG_ERROR");
    assert_eq!(ErrorCode::Api.to_string(), "API_ERROR");
    assert_eq!(ErrorCode::Parse.to_string(), "PARSE_ERROR");
    assert_eq!(ErrorCode::Sync.to_string(), "SYNC_ERROR");
    assert_eq!(ErrorCode::Timeout.to_string(), "TIMEOUT");
    assert_eq!(ErrorCode::Internal.to_string(), "INTERNAL_ERROR");
}

#[test]
fn envelope_from_error_carries_code_and_message() {
    let err = SxError::NotFound("tenant 7".into());
    let envelope = ErrorEnvelope::from(&err);
    assert_eq!(envelope.code, "NOT_FOUND");
    assert!(envelope.message.contains("tenant 7"));
    assert!(envelope.details.is_none());
}

#[test]
fn envelope_serializes_without_details_field_when_absent() {
    let envelope = ErrorEnvelope::new(ErrorCode::Validation, "bad input");
    let json = serde_json::to_value(&envelope).unwrap();
    assert!(json.get("details").is_none());
}

#[test]
fn envelope_with_details_serializes_them() {
    let envelope = ErrorEnvelope::new(ErrorCode::Api, "boom")
        .with_details(serde_json::json!({"status": 503}));
    let json = serde_json::to_value(&envelope).unwrap();
    assert_eq!(json["details"]["status"], 503);
}
