use framelet_protocol::{record, Column, DataFrame, Record, Value};
use pretty_assertions::assert_eq;

#[test]
fn value_round_trips_through_json() {
    let values = vec![
        Value::bool(true),
        Value::int(101),
        Value::float(1.5),
        Value::string("Alice"),
        Value::nothing(),
    ];
    for value in values {
        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}

#[test]
fn record_round_trip_preserves_column_order() {
    let record = record!(
        "student_id" => Value::int(101),
        "name" => Value::string("Alice"),
        "age" => Value::int(20),
    );

    let json = serde_json::to_string(&record).unwrap();
    let back: Record = serde_json::from_str(&json).unwrap();

    assert_eq!(back, record);
    let cols: Vec<&str> = back.columns().map(String::as_str).collect();
    assert_eq!(cols, vec!["student_id", "name", "age"]);
}

#[test]
fn record_rejects_duplicate_keys() {
    let err = serde_json::from_str::<Record>(r#"{"age":{"Int":20},"age":{"Int":21}}"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains("duplicate keys"), "unexpected error: {err}");
}

#[test]
fn frame_round_trip_preserves_names_order_and_cells() {
    let frame = DataFrame::try_from_columns(vec![
        Column::new("student_id", vec![Value::int(101), Value::int(102)]),
        Column::new(
            "name",
            vec![Value::string("Alice"), Value::string("Bob")],
        ),
    ])
    .unwrap();

    let json = serde_json::to_string(&frame).unwrap();
    let back: DataFrame = serde_json::from_str(&json).unwrap();

    assert_eq!(back, frame);
    assert_eq!(back.column_names(), vec!["student_id", "name"]);
}

#[test]
fn frame_deserialization_rechecks_invariants() {
    let uneven = r#"[
        {"name":"student_id","values":[{"Int":101},{"Int":102}]},
        {"name":"age","values":[{"Int":20}]}
    ]"#;
    let err = serde_json::from_str::<DataFrame>(uneven)
        .unwrap_err()
        .to_string();
    assert!(err.contains("Expected 2 rows"), "unexpected error: {err}");
}
