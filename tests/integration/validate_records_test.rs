// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crawl_schema::application::usecases::validate_records::ValidateRecordsUseCase;
use crawl_schema::config::settings::ValidationSettings;
use crawl_schema::domain::models::VisitId;
use crawl_schema::domain::record::RecordType;
use crawl_schema::utils::errors::RecordError;
use serde_json::{json, Value};

use crate::fixtures;

fn jsonl(lines: &[Value]) -> String {
    lines
        .iter()
        .map(Value::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

fn strict() -> ValidateRecordsUseCase {
    ValidateRecordsUseCase::new(ValidationSettings::default())
}

#[tokio::test]
async fn test_validate_mixed_valid_stream() {
    let input = jsonl(&[
        fixtures::envelope("http_requests", fixtures::full_http_request()),
        fixtures::envelope("http_responses", fixtures::minimal_http_response()),
        fixtures::envelope("http_redirects", fixtures::full_http_redirect()),
        fixtures::envelope("javascript", fixtures::minimal_javascript_operation()),
        fixtures::envelope("javascript_cookies", fixtures::full_javascript_cookie_change()),
    ]);

    let report = strict().execute(input.as_bytes()).await.unwrap();

    assert!(report.is_clean());
    assert_eq!(report.lines_read, 5);
    assert_eq!(report.valid, 5);
    for table in RecordType::ALL {
        assert_eq!(report.per_table.get(&table), Some(&1));
    }
    assert_eq!(report.visits.len(), 1);
    assert!(report.visits.contains(&VisitId(42)));
}

#[tokio::test]
async fn test_validate_reports_line_numbers_and_skips_blank_lines() {
    let good = fixtures::envelope("http_responses", fixtures::minimal_http_response()).to_string();
    let bad = fixtures::envelope(
        "http_responses",
        fixtures::without(fixtures::minimal_http_response(), "channel_id"),
    )
    .to_string();
    let input = format!("{}\n\n{}\n   \n{}\n", good, bad, good);

    let report = strict().execute(input.as_bytes()).await.unwrap();

    assert_eq!(report.lines_read, 3);
    assert_eq!(report.valid, 2);
    assert_eq!(report.invalid, 1);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].line, 3);
    assert_eq!(report.errors[0].record_type, Some(RecordType::HttpResponses));
    assert!(report.errors[0].message.contains("channel_id"));
}

#[test]
fn test_check_line_rejects_bad_cookie_change() {
    let line = fixtures::envelope(
        "javascript_cookies",
        fixtures::with(
            fixtures::minimal_javascript_cookie_change(),
            "change",
            json!("renamed"),
        ),
    )
    .to_string();

    let rejection = strict().check_line(&line).unwrap_err();
    assert_eq!(rejection.record_type, Some(RecordType::JavascriptCookies));
    assert!(matches!(rejection.error, RecordError::Json(_)));
}

#[test]
fn test_check_line_rejects_malformed_envelopes() {
    let use_case = strict();

    let not_json = use_case.check_line("{not json").unwrap_err();
    assert!(matches!(not_json.error, RecordError::Json(_)));

    let not_object = use_case.check_line("[1, 2]").unwrap_err();
    assert!(matches!(not_object.error, RecordError::MalformedEnvelope(_)));

    let no_type = use_case
        .check_line(&json!({ "data": fixtures::minimal_http_request() }).to_string())
        .unwrap_err();
    assert!(matches!(no_type.error, RecordError::MalformedEnvelope(_)));

    let unknown_type = use_case
        .check_line(&fixtures::envelope("page_content", json!({})).to_string())
        .unwrap_err();
    assert!(matches!(unknown_type.error, RecordError::UnknownRecordType(_)));
    assert_eq!(unknown_type.record_type, None);

    let data_not_object = use_case
        .check_line(&fixtures::envelope("javascript", json!("x")).to_string())
        .unwrap_err();
    assert!(matches!(
        data_not_object.error,
        RecordError::MalformedEnvelope(_)
    ));
    assert_eq!(data_not_object.record_type, Some(RecordType::Javascript));
}

#[test]
fn test_check_line_strict_columns() {
    let line = fixtures::envelope(
        "http_redirects",
        fixtures::with(fixtures::minimal_http_redirect(), "browser_id", json!(1)),
    )
    .to_string();

    let rejection = strict().check_line(&line).unwrap_err();
    assert!(matches!(
        rejection.error,
        RecordError::UnknownColumns { ref columns, .. } if columns == "browser_id"
    ));

    let lenient = ValidateRecordsUseCase::new(ValidationSettings {
        strict_columns: false,
        ..ValidationSettings::default()
    });
    assert!(lenient.check_line(&line).is_ok());
}

#[test]
fn test_check_line_strict_rejects_extra_envelope_keys() {
    let mut envelope = fixtures::envelope("http_redirects", fixtures::minimal_http_redirect());
    envelope
        .as_object_mut()
        .unwrap()
        .insert("visit".into(), json!(1));

    let rejection = strict().check_line(&envelope.to_string()).unwrap_err();
    assert!(matches!(rejection.error, RecordError::UnknownColumns { .. }));
}

#[test]
fn test_check_line_reports_all_missing_columns() {
    let data = fixtures::without(
        fixtures::without(fixtures::minimal_http_request(), "url"),
        "method",
    );
    let line = fixtures::envelope("http_requests", data).to_string();

    let rejection = strict().check_line(&line).unwrap_err();
    match rejection.error {
        RecordError::MissingColumns { table, columns } => {
            assert_eq!(table, "http_requests");
            assert_eq!(columns, "url, method");
        }
        other => panic!("unexpected error: {}", other),
    }
}

#[test]
fn test_check_line_timestamp_check_is_opt_in() {
    let line = fixtures::envelope(
        "http_redirects",
        fixtures::with(
            fixtures::minimal_http_redirect(),
            "time_stamp",
            json!("last tuesday"),
        ),
    )
    .to_string();

    assert!(strict().check_line(&line).is_ok());

    let checking = ValidateRecordsUseCase::new(ValidationSettings {
        check_timestamps: true,
        ..ValidationSettings::default()
    });
    let rejection = checking.check_line(&line).unwrap_err();
    assert!(matches!(
        rejection.error,
        RecordError::InvalidTimestamp { .. }
    ));
}

#[tokio::test]
async fn test_validate_truncates_error_list() {
    let bad = fixtures::envelope("http_redirects", json!({})).to_string();
    let input = vec![bad; 5].join("\n");

    let use_case = ValidateRecordsUseCase::new(ValidationSettings {
        max_errors: 2,
        ..ValidationSettings::default()
    });
    let report = use_case.execute(input.as_bytes()).await.unwrap();

    assert_eq!(report.invalid, 5);
    assert_eq!(report.errors.len(), 2);
    assert!(report.truncated);
    assert!(!report.is_clean());
}

#[tokio::test]
async fn test_validate_continues_after_invalid_utf8_line() {
    let good = fixtures::envelope("http_responses", fixtures::minimal_http_response()).to_string();
    let mut input = Vec::new();
    input.extend_from_slice(good.as_bytes());
    input.push(b'\n');
    input.extend_from_slice(b"\xff\xfe\n");
    input.extend_from_slice(good.as_bytes());
    input.push(b'\n');

    let report = strict().execute(input.as_slice()).await.unwrap();

    assert_eq!(report.lines_read, 3);
    assert_eq!(report.valid, 2);
    assert_eq!(report.invalid, 1);
    assert_eq!(report.errors[0].line, 2);
    assert_eq!(report.errors[0].record_type, None);
}

#[test]
fn test_check_line_timestamp_check_covers_cookie_date_columns() {
    let checking = ValidateRecordsUseCase::new(ValidationSettings {
        check_timestamps: true,
        ..ValidationSettings::default()
    });

    for column in ["creationTime", "expiry", "last_accessed"] {
        let line = fixtures::envelope(
            "javascript_cookies",
            fixtures::with(
                fixtures::minimal_javascript_cookie_change(),
                column,
                json!("not a date"),
            ),
        )
        .to_string();

        assert!(strict().check_line(&line).is_ok());
        let rejection = checking.check_line(&line).unwrap_err();
        assert!(
            matches!(rejection.error, RecordError::InvalidTimestamp { .. }),
            "{} should be checked",
            column
        );
    }

    let valid = fixtures::envelope(
        "javascript_cookies",
        fixtures::minimal_javascript_cookie_change(),
    )
    .to_string();
    assert!(checking.check_line(&valid).is_ok());
}
