//! XML attribute and element text deserialization through `quick-xml`.

use chrono::Timelike;
use isotime_rfc::rfc::iso8601::Time;
use isotime_test::{OFFSET_SAMPLES, ZULU_SAMPLES};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Value {
    #[serde(rename = "@time")]
    time: Time,
}

#[derive(Debug, Deserialize)]
struct Embedded {
    time: Time,
}

#[test_log::test]
fn attribute_values_parse() {
    for input in ZULU_SAMPLES {
        let xml = format!(r#"<value time="{input}" />"#);
        let value: Value = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!((value.time.minute(), value.time.second()), (10, 20), "{xml}");
    }

    for input in OFFSET_SAMPLES {
        let xml = format!(r#"<value time="{input}" />"#);
        let value: Value = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(value.time.nanosecond(), 658_731_000, "{xml}");
    }
}

#[test]
fn malformed_attribute_is_rejected() {
    let result = quick_xml::de::from_str::<Value>(r#"<value time="1900-1231T00:10:20Z" />"#);
    assert!(result.is_err());
}

#[test_log::test]
fn element_text_parses() {
    for input in ZULU_SAMPLES {
        let xml = format!("<value><time>{input}</time></value>");
        let value: Embedded = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!((value.time.minute(), value.time.second()), (10, 20), "{xml}");
    }

    for input in OFFSET_SAMPLES {
        let xml = format!("<value><time>{input}</time></value>");
        let value: Embedded = quick_xml::de::from_str(&xml).unwrap();
        assert_eq!(value.time.nanosecond(), 658_731_000, "{xml}");
    }
}

#[test]
fn malformed_element_text_is_rejected() {
    let result =
        quick_xml::de::from_str::<Embedded>("<value><time>1900-1231T00:10:20Z</time></value>");
    assert!(result.is_err());
}
