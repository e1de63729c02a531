//! JSON deserialization through `serde_json`.

use chrono::{Datelike, Timelike};
use isotime_rfc::rfc::iso8601::Time;
use isotime_test::{OFFSET_SAMPLES, ZULU_SAMPLES};
use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize, Serialize)]
struct Document {
    time: Time,
}

#[derive(Debug, Deserialize)]
struct OptionalDocument {
    time: Option<Time>,
}

#[test_log::test]
fn string_values_parse() {
    for input in ZULU_SAMPLES.into_iter().chain(OFFSET_SAMPLES) {
        let json = format!(r#"{{"time": "{input}"}}"#);
        let doc: Document = serde_json::from_str(&json).unwrap();
        tracing::debug!(%input, time = %doc.time, "Parsed JSON timestamp");
        assert!(doc.time.year() == 1900 || doc.time.year() == 2020, "{json}");
    }
}

#[test]
fn null_leaves_default() {
    let doc: Document = serde_json::from_str(r#"{"time": null}"#).unwrap();
    assert_eq!(doc.time, Time::default());

    let doc: OptionalDocument = serde_json::from_str(r#"{"time": null}"#).unwrap();
    assert!(doc.time.is_none());

    let doc: OptionalDocument = serde_json::from_str(r#"{"time": "19001231"}"#).unwrap();
    assert_eq!(doc.time.map(|t| t.day()), Some(31));
}

#[test]
fn number_is_a_format_error() {
    let err = serde_json::from_str::<Document>(r#"{"time": 1}"#).unwrap_err();
    assert!(err.is_data(), "{err}");
    assert!(err.to_string().contains("Not a string literal: 1"), "{err}");
}

#[test]
fn serializes_to_canonical_form() {
    let doc = Document {
        time: "2020-02-17T11:39:27.658731-0230".parse().unwrap(),
    };

    let json = serde_json::to_string(&doc).unwrap();
    assert_eq!(json, r#"{"time":"2020-02-17T11:39:27.658731-02:30"}"#);

    let back: Document = serde_json::from_str(&json).unwrap();
    assert_eq!(back.time, doc.time);
    assert_eq!(back.time.utc().hour(), 14);
}
