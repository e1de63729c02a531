//! End-to-end parsing through the public API.

use chrono::{Datelike, Timelike, Utc};
use isotime_rfc::CalendarPolicy;
use isotime_rfc::rfc::iso8601::{
    Layout, ParseErrorKind, Time, format_compact, parse_detailed, parse_timestamp,
};
use isotime_test::{OFFSET_SAMPLES, ZULU_SAMPLES};

#[test_log::test]
fn every_sample_parses_to_the_same_instant() {
    let expected = parse_timestamp(ZULU_SAMPLES[0]).unwrap();

    for input in ZULU_SAMPLES {
        let parsed = parse_timestamp(input).unwrap();
        assert_eq!(parsed, expected, "{input}");
        assert_eq!(format_compact(&parsed), "19001231T001020Z", "{input}");
    }
}

#[test]
fn each_alternative_reports_its_layout() {
    let cases = [
        ("1900-12-31T00:10:20.5+01:00", Layout::ExtendedDateTime),
        ("19001231T001020.5+0100", Layout::BasicDateTime),
        ("1900-12-31t001020,5-01", Layout::ExtendedDateBasicTime),
        ("19001231 00:10:20Z", Layout::BasicDateExtendedTime),
        ("1900-12-31", Layout::ExtendedDate),
        ("19001231", Layout::BasicDate),
    ];

    for (input, layout) in cases {
        let parsed = parse_detailed(input, CalendarPolicy::Normalize).unwrap();
        assert_eq!(parsed.layout, layout, "{input}");
        assert_eq!(parsed.datetime.year(), 1900);
        assert_eq!(parsed.datetime.month(), 12);
        assert_eq!(parsed.datetime.day(), 31);
    }
}

#[test]
fn mixed_separators_are_rejected() {
    for input in [
        "1900-1231T00:10:20Z",
        "1900-12-31T00:1020Z",
        "190012-31",
        "19001231T0010:20Z",
    ] {
        let err = parse_timestamp(input).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::LexicalMismatch, "{input}");
        assert!(err.to_string().contains(input), "{err}");
    }
}

#[test]
fn offsets_convert_to_utc() {
    let utc: Vec<_> = OFFSET_SAMPLES
        .iter()
        .map(|input| parse_timestamp(input).unwrap().with_timezone(&Utc))
        .collect();

    assert_eq!(utc[0], utc[1]);
    assert_eq!((utc[2].hour(), utc[2].minute(), utc[2].second()), (14, 9, 27));
    assert_eq!(utc[2].nanosecond(), 658_731_000);
}

#[test]
fn named_zone_conversion() {
    let time: Time = "2020-02-17T11:39:27Z".parse().unwrap();

    let new_york = time.in_zone(chrono_tz::America::New_York);
    assert_eq!(new_york.offset().local_minus_utc(), -5 * 3600);
    assert_eq!(new_york.hour(), 6);
    assert_eq!(new_york.to_string(), "2020-02-17T06:39:27-05:00");

    let summer: Time = "2020-07-01T12:00:00Z".parse().unwrap();
    let new_york = summer.in_zone(chrono_tz::America::New_York);
    assert_eq!(new_york.offset().local_minus_utc(), -4 * 3600);
}

#[test]
fn strict_policy_rejects_impossible_days() {
    for input in ["2021-02-29", "2021-04-31T00:00:00Z", "20210931"] {
        let err = Time::parse_with(input, CalendarPolicy::Strict).unwrap_err();
        assert_eq!(err.kind, ParseErrorKind::CalendarOverflow, "{input}");

        assert!(Time::parse_with(input, CalendarPolicy::Normalize).is_ok());
    }
}
