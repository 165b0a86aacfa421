// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crawl_schema::domain::models::{Flag, HttpRedirect, Timestamp};
use serde_json::json;

use crate::fixtures;

#[test]
fn test_http_redirect_decodes_flags() {
    let redirect: HttpRedirect = serde_json::from_value(fixtures::minimal_http_redirect()).unwrap();

    assert_eq!(redirect.old_channel_id, "chan-1");
    assert_eq!(redirect.new_channel_id, "chan-3");
    assert!(redirect.is_temporary.as_bool());
    assert!(!redirect.is_permanent.as_bool());
    assert_eq!(redirect.is_sts_upgrade, Flag::FALSE);
}

#[test]
fn test_http_redirect_flags_are_not_exclusive() {
    // 两个标志同时为 1 在类型层面是合法的
    let data = fixtures::with(fixtures::minimal_http_redirect(), "is_permanent", json!(1));
    let redirect: HttpRedirect = serde_json::from_value(data).unwrap();

    assert!(redirect.is_temporary.as_bool());
    assert!(redirect.is_permanent.as_bool());
}

#[test]
fn test_http_redirect_full_record_round_trips() {
    let original = fixtures::full_http_redirect();
    let redirect: HttpRedirect = serde_json::from_value(original.clone()).unwrap();
    assert_eq!(serde_json::to_value(&redirect).unwrap(), original);
}

#[test]
fn test_http_redirect_rejects_boolean_flag() {
    let data = fixtures::with(fixtures::minimal_http_redirect(), "is_internal", json!(true));
    assert!(serde_json::from_value::<HttpRedirect>(data).is_err());
}

#[test]
fn test_http_redirect_new_has_all_flags_cleared() {
    let redirect = HttpRedirect::new("a".into(), "b".into(), Timestamp::new(fixtures::TS));
    let value = serde_json::to_value(&redirect).unwrap();

    assert_eq!(value["is_temporary"], json!(0));
    assert_eq!(value["is_permanent"], json!(0));
    assert_eq!(value["is_internal"], json!(0));
    assert_eq!(value["is_sts_upgrade"], json!(0));
}
