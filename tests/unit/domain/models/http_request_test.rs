// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crawl_schema::domain::models::{CrawlId, Flag, HttpRequest, Timestamp, VisitId};
use serde_json::json;

use crate::fixtures;

#[test]
fn test_http_request_accepts_required_fields_only() {
    let request: HttpRequest = serde_json::from_value(fixtures::minimal_http_request()).unwrap();

    assert_eq!(request.url, "https://example.com/");
    assert_eq!(request.method, "GET");
    assert_eq!(request.resource_type, "main_frame");
    assert_eq!(request.id, None);
    assert_eq!(request.visit_id, None);
    assert_eq!(request.is_xhr, None);
    assert_eq!(request.post_body, None);
}

#[test]
fn test_http_request_rejects_each_missing_required_field() {
    for column in [
        "url",
        "method",
        "referrer",
        "headers",
        "channel_id",
        "resource_type",
        "time_stamp",
    ] {
        let data = fixtures::without(fixtures::minimal_http_request(), column);
        let result = serde_json::from_value::<HttpRequest>(data);
        assert!(result.is_err(), "missing {} should be rejected", column);
    }
}

#[test]
fn test_http_request_full_record_round_trips() {
    let original = fixtures::full_http_request();
    let request: HttpRequest = serde_json::from_value(original.clone()).unwrap();

    assert_eq!(request.crawl_id, Some(CrawlId(7)));
    assert_eq!(request.visit_id, Some(VisitId(42)));
    assert_eq!(request.is_xhr, Some(Flag::TRUE));
    assert_eq!(request.is_frame_load, Some(Flag::FALSE));

    assert_eq!(serde_json::to_value(&request).unwrap(), original);
}

#[test]
fn test_http_request_absent_flags_stay_absent() {
    let request: HttpRequest = serde_json::from_value(fixtures::minimal_http_request()).unwrap();
    let value = serde_json::to_value(&request).unwrap();

    assert!(value.get("is_XHR").is_none());
    assert!(value.get("is_frame_load").is_none());
    assert_eq!(value, fixtures::minimal_http_request());
}

#[test]
fn test_http_request_rejects_non_binary_flag() {
    let data = fixtures::with(fixtures::minimal_http_request(), "is_XHR", json!(2));
    assert!(serde_json::from_value::<HttpRequest>(data).is_err());
}

#[test]
fn test_http_request_new_fills_defaults() {
    let request = HttpRequest::new(
        "https://example.com/".to_string(),
        "GET".to_string(),
        "chan-1".to_string(),
        "main_frame".to_string(),
        Timestamp::new(fixtures::TS),
    );

    assert_eq!(request.referrer, "");
    assert_eq!(request.headers, "");
    assert_eq!(request.top_level_url, None);

    let decoded: HttpRequest =
        serde_json::from_str(&serde_json::to_string(&request).unwrap()).unwrap();
    assert_eq!(decoded, request);
}
