use json_raw::{Kind, Object, Value};

#[test]
fn serialize_reproduces_source_text() {
    let cases = [
        "null",
        "true",
        "-12.5e3",
        r#""with \"escapes\" and é""#,
        "[1, 2,3 ]",
        r#"{"b":1, "a": [true, null]}"#,
        r#"{ "nested" : { "deep" : [ { } ] } }"#,
    ];

    for text in cases {
        let value: Value = serde_json::from_str(text).unwrap();
        assert_eq!(value.raw(), text);
        assert_eq!(serde_json::to_string(&value).unwrap(), text);
    }
}

#[test]
fn nested_values_keep_their_own_spans() {
    let doc = r#"{"meta": {"v": 1 }, "rows": [ [1,2], {"k":"v"} ]}"#;
    let object: Object = serde_json::from_str(doc).unwrap();

    assert_eq!(object["meta"].raw(), r#"{"v": 1 }"#);
    let rows = object["rows"].as_array();
    assert_eq!(rows[0].raw(), "[1,2]");
    assert_eq!(rows[1].raw(), r#"{"k":"v"}"#);
    assert_eq!(rows[1].kind(), Kind::Object);

    // Re-encoding the container re-emits every member verbatim.
    let rows_only: Vec<Value> = serde_json::from_str(object["rows"].raw()).unwrap();
    assert_eq!(
        serde_json::to_string(&rows_only).unwrap(),
        r#"[[1,2],{"k":"v"}]"#
    );
}

#[test]
fn optional_fields() {
    #[derive(serde::Deserialize, serde::Serialize)]
    struct Record {
        id: Value,
        #[serde(default)]
        note: Option<Value>,
    }

    let record: Record = serde_json::from_str(r#"{"id": 7}"#).unwrap();
    assert_eq!(record.id.as_int(0), 7);
    assert!(record.note.is_none());

    let record: Record = serde_json::from_str(r#"{"id": "x", "note": [1]}"#).unwrap();
    assert_eq!(record.note.as_ref().map(Value::kind), Some(Kind::Array));
    assert_eq!(
        serde_json::to_string(&record).unwrap(),
        r#"{"id":"x","note":[1]}"#
    );
}

#[test]
fn empty_value_serializes_as_null() {
    let values = vec![Value::null(), Value::from_raw("1")];
    assert_eq!(serde_json::to_string(&values).unwrap(), "[null,1]");
}
