use json_raw::{Error, Layout, TimeFormat, Value, DEFAULT_LAYOUTS, MIN_MILLIS, MIN_NANOS};

#[test]
fn epoch_magnitude_matrix() {
    let cases = [
        ("1000000000", "U", 1_000_000_000_000_000_000_i128),
        ("-1", "U", -1_000_000_000),
        ("1.25", "U", 1_250_000_000),
        ("1000000000000", "MS", 1_000_000_000_000_000_000),
        ("1000000000001", "MS", 1_000_000_000_001_000_000),
        ("1000000000000000000", "NS", 1_000_000_000_000_000_000),
        ("1000000000000000001", "NS", 1_000_000_000_000_000_001),
        ("10000000000000000000", "NS", 10_000_000_000_000_000_000),
    ];

    for (raw, label, nanos) in cases {
        let parsed = Value::from_raw(raw).as_time().unwrap();
        assert_eq!(parsed.format.label(), label, "label of {raw}");
        assert_eq!(parsed.time.unix_timestamp_nanos(), nanos, "instant of {raw}");
    }
}

#[test]
fn epoch_thresholds_are_powers_of_ten() {
    assert_eq!(MIN_MILLIS, 10_i64.pow(12));
    assert_eq!(MIN_NANOS, 10_i64.pow(18));
}

#[test]
fn epoch_out_of_range() {
    for raw in ["500000000000", "-99999999999999", "1e300"] {
        let err = Value::from_raw(raw).as_time().unwrap_err();
        assert!(
            matches!(err, Error::TimestampOutOfRange { .. }),
            "{raw}: {err}"
        );
    }
}

#[test]
fn malformed_numbers_are_not_epochs() {
    // Each of these sniffs as a number but parses as neither int nor float.
    for raw in ["12abc", "2023-01-02", "0x1F", "-1-"] {
        let err = Value::from_raw(raw).as_time().unwrap_err();
        assert!(matches!(err, Error::InvalidEpoch { .. }), "{raw}: {err}");
    }
}

#[test]
fn calendar_date_with_default_layouts() {
    let parsed = Value::from_raw("\"2023-01-02\"").as_time().unwrap();
    assert_eq!(parsed.format, TimeFormat::Layout(DEFAULT_LAYOUTS[4].clone()));

    let date = parsed.time.date();
    assert_eq!(
        (date.year(), u8::from(date.month()), date.day()),
        (2023, 1, 2)
    );
}

#[test]
fn layouts_loaded_from_strings() {
    let configured = ["RFC2822", "[day]-[month]-[year]"];
    let layouts: Vec<Layout> = configured
        .iter()
        .map(|name| name.parse().unwrap())
        .collect();

    let parsed = Value::from_raw("\"Tue, 3 Jan 2006 10:00:00 +0000\"")
        .as_time_with(&layouts)
        .unwrap();
    assert_eq!(parsed.format.label(), "RFC2822");

    let parsed = Value::from_raw("\"03-01-2006\"")
        .as_time_with(&layouts)
        .unwrap();
    assert_eq!(parsed.format.label(), "[day]-[month]-[year]");
    assert_eq!(parsed.time.unix_timestamp(), 1_136_246_400);
}

#[test]
fn text_that_matches_nothing() {
    for raw in ["\"\"", "\"soon\"", "\"2023-13-45\"", "null", "[1]"] {
        let err = Value::from_raw(raw).as_time().unwrap_err();
        assert!(matches!(err, Error::NoLayoutMatched { .. }), "{raw}: {err}");
    }
}
