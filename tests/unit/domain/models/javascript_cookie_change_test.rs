// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crawl_schema::domain::models::{CookieChange, JavascriptCookieChange};
use serde_json::json;
use std::str::FromStr;

use crate::fixtures;

#[test]
fn test_cookie_change_accepts_the_three_tags() {
    for (tag, expected) in [
        ("deleted", CookieChange::Deleted),
        ("added", CookieChange::Added),
        ("changed", CookieChange::Changed),
    ] {
        let data = fixtures::with(
            fixtures::minimal_javascript_cookie_change(),
            "change",
            json!(tag),
        );
        let cookie: JavascriptCookieChange = serde_json::from_value(data).unwrap();
        assert_eq!(cookie.change, Some(expected));
        assert_eq!(expected.to_string(), tag);
        assert_eq!(CookieChange::from_str(tag), Ok(expected));
    }
}

#[test]
fn test_cookie_change_rejects_unknown_tag() {
    for tag in ["modified", "Added", ""] {
        let data = fixtures::with(
            fixtures::minimal_javascript_cookie_change(),
            "change",
            json!(tag),
        );
        assert!(
            serde_json::from_value::<JavascriptCookieChange>(data).is_err(),
            "{:?} should be rejected",
            tag
        );
    }
    assert!(CookieChange::from_str("modified").is_err());
}

#[test]
fn test_cookie_change_uses_camel_case_creation_time() {
    let cookie: JavascriptCookieChange =
        serde_json::from_value(fixtures::minimal_javascript_cookie_change()).unwrap();
    assert_eq!(cookie.creation_time.as_str(), fixtures::TS);

    let value = serde_json::to_value(&cookie).unwrap();
    assert!(value.get("creationTime").is_some());
    assert!(value.get("creation_time").is_none());
}

#[test]
fn test_cookie_change_full_record_round_trips() {
    let original = fixtures::full_javascript_cookie_change();
    let cookie: JavascriptCookieChange = serde_json::from_value(original.clone()).unwrap();

    assert_eq!(cookie.expires, Some(1735689600));
    assert!(cookie.is_host_only.as_bool());
    assert!(cookie.is_secure.as_bool());
    assert_eq!(serde_json::to_value(&cookie).unwrap(), original);
}

#[test]
fn test_cookie_change_requires_name() {
    let data = fixtures::without(fixtures::minimal_javascript_cookie_change(), "name");
    assert!(serde_json::from_value::<JavascriptCookieChange>(data).is_err());
}

#[test]
fn test_cookie_expires_must_be_whole_seconds() {
    let data = fixtures::with(
        fixtures::minimal_javascript_cookie_change(),
        "expires",
        json!(1735689600.5),
    );
    assert!(serde_json::from_value::<JavascriptCookieChange>(data).is_err());

    let data = fixtures::with(
        fixtures::minimal_javascript_cookie_change(),
        "expires",
        json!(1735689600),
    );
    let cookie: JavascriptCookieChange = serde_json::from_value(data).unwrap();
    assert_eq!(cookie.expires, Some(1735689600));
}
