use json_sql_functions::{
    extract, json_type, json_type_from_raw, merge, set_insert_replace, unquote, JsonError,
    JsonFunctions, JsonFunctionsOptions, ModifyType,
};
use json_sql_path::{PathExpression, PathLeg};
use json_sql_value::{JsonType, JsonValue, ValueError};
use serde_json::json;

fn doc(v: serde_json::Value) -> JsonValue {
    JsonValue::from(v)
}

fn path(legs: Vec<PathLeg>) -> PathExpression {
    PathExpression::new(legs)
}

#[test]
fn extract_matrix() {
    let d = doc(json!({
        "store": {
            "book": [
                {"title": "A", "price": 10},
                {"title": "B", "price": 20}
            ],
            "bicycle": {"color": "red", "price": 100}
        }
    }));

    let title = path(vec![
        PathLeg::key("store"),
        PathLeg::key("book"),
        PathLeg::index(0),
        PathLeg::key("title"),
    ]);
    assert_eq!(extract(&d, &[title.clone()]).unwrap(), Some(JsonValue::from("A")));

    let all_titles = path(vec![
        PathLeg::key("store"),
        PathLeg::key("book"),
        PathLeg::any_index(),
        PathLeg::key("title"),
    ]);
    assert_eq!(extract(&d, &[all_titles]).unwrap(), Some(doc(json!(["A", "B"]))));

    // bicycle sorts before book
    let prices = path(vec![PathLeg::double_asterisk(), PathLeg::key("price")]);
    assert_eq!(extract(&d, &[prices]).unwrap(), Some(doc(json!([100, 10, 20]))));

    let store_members = path(vec![PathLeg::key("store"), PathLeg::any_key(), PathLeg::key("color")]);
    assert_eq!(extract(&d, &[store_members]).unwrap(), Some(JsonValue::from("red")));

    // two paths wrap even when each matches once
    let missing = path(vec![PathLeg::key("nope")]);
    assert_eq!(
        extract(&d, &[title.clone(), title]).unwrap(),
        Some(doc(json!(["A", "A"])))
    );
    assert_eq!(extract(&d, &[missing]).unwrap(), None);
}

#[test]
fn extract_results_are_independent_copies() {
    let mut d = doc(json!({"a": {"b": 1}}));
    let found = extract(&d, &[path(vec![PathLeg::key("a")])]).unwrap().unwrap();
    set_insert_replace(
        &mut d,
        &[path(vec![PathLeg::key("a"), PathLeg::key("b")])],
        vec![JsonValue::Int64(2)],
        ModifyType::Replace,
    )
    .unwrap();
    assert_eq!(found, doc(json!({"b": 1})));
    assert_eq!(d, doc(json!({"a": {"b": 2}})));
}

#[test]
fn merge_matrix() {
    let cases = [
        (json!([1, 2]), vec![json!([3])], json!([1, 2, 3])),
        (json!({"a": 1}), vec![json!({"a": 2, "b": 3})], json!({"a": 2, "b": 3})),
        (json!({"a": 1}), vec![json!(5)], json!([{"a": 1}, 5])),
        (json!(1), vec![json!(2)], json!([1, 2])),
        (json!([]), vec![json!({"k": 1}), json!([2, [3]])], json!([{"k": 1}, 2, [3]])),
        (json!(null), vec![json!({"a": 1})], json!([null, {"a": 1}])),
    ];
    for (base, suffixes, expected) in cases {
        let mut base = doc(base);
        merge(&mut base, suffixes.into_iter().map(doc));
        assert_eq!(base, doc(expected));
    }
}

#[test]
fn modify_type_matrix() {
    let cases = [
        (ModifyType::Insert, json!([1, 9, 8]), json!({"a": 9, "z": 8})),
        (ModifyType::Replace, json!([9]), json!({"a": 9})),
        (ModifyType::Set, json!([9, 8]), json!({"a": 9, "z": 8})),
    ];
    for (modify_type, expected_array, expected_object) in cases {
        let mut arr = doc(json!([1]));
        set_insert_replace(
            &mut arr,
            &[path(vec![PathLeg::index(0)]), path(vec![PathLeg::index(5)])],
            vec![JsonValue::Int64(9), JsonValue::Int64(8)],
            modify_type,
        )
        .unwrap();
        assert_eq!(arr, doc(expected_array), "{modify_type:?} on array");

        let mut obj = doc(json!({"a": 1}));
        set_insert_replace(
            &mut obj,
            &[path(vec![PathLeg::key("a")]), path(vec![PathLeg::key("z")])],
            vec![JsonValue::Int64(9), JsonValue::Int64(8)],
            modify_type,
        )
        .unwrap();
        assert_eq!(obj, doc(expected_object), "{modify_type:?} on object");
    }
}

#[test]
fn insert_only_does_not_descend_into_existing_members() {
    let mut d = doc(json!({"o": {}}));
    set_insert_replace(
        &mut d,
        &[path(vec![PathLeg::key("o"), PathLeg::key("k")])],
        vec![JsonValue::Int64(1)],
        ModifyType::Insert,
    )
    .unwrap();
    assert_eq!(d, doc(json!({"o": {}})));
}

#[test]
fn array_insert_always_appends() {
    for index in [0, 1, 2, 50] {
        let mut d = doc(json!(["x", "y"]));
        set_insert_replace(
            &mut d,
            &[path(vec![PathLeg::index(index)])],
            vec![JsonValue::from("new")],
            ModifyType::Insert,
        )
        .unwrap();
        assert_eq!(d, doc(json!(["x", "y", "new"])), "index {index}");
    }
}

#[test]
fn mutations_see_previous_mutations() {
    let mut d = doc(json!({}));
    set_insert_replace(
        &mut d,
        &[
            path(vec![PathLeg::key("a")]),
            path(vec![PathLeg::key("a"), PathLeg::index(0)]),
            path(vec![PathLeg::key("a"), PathLeg::index(0)]),
        ],
        vec![doc(json!([])), doc(json!(1)), doc(json!(2))],
        ModifyType::Set,
    )
    .unwrap();
    assert_eq!(d, doc(json!({"a": [2]})));
}

#[test]
fn wildcard_paths_rejected_for_every_modify_type() {
    let wildcard_paths = [
        path(vec![PathLeg::any_key()]),
        path(vec![PathLeg::key("a"), PathLeg::any_index()]),
        path(vec![PathLeg::double_asterisk(), PathLeg::key("a")]),
    ];
    for modify_type in [ModifyType::Insert, ModifyType::Replace, ModifyType::Set] {
        for p in &wildcard_paths {
            let mut d = doc(json!({"a": [1]}));
            let err = set_insert_replace(
                &mut d,
                std::slice::from_ref(p),
                vec![JsonValue::Null],
                modify_type,
            )
            .unwrap_err();
            assert!(matches!(err, JsonError::InvalidPathForMutation { .. }));
            assert_eq!(d, doc(json!({"a": [1]})));
        }
    }
}

#[test]
fn long_path_over_shallow_document_is_a_no_op() {
    let legs: Vec<PathLeg> = (0..1025).map(|_| PathLeg::key("k")).collect();
    for modify_type in [ModifyType::Insert, ModifyType::Replace, ModifyType::Set] {
        let mut d = doc(json!({}));
        set_insert_replace(&mut d, &[path(legs.clone())], vec![JsonValue::Null], modify_type)
            .unwrap();
        assert_eq!(d, doc(json!({})), "{modify_type:?}");
    }
}

#[test]
fn deep_mutation_fails_without_partial_writes() {
    let engine = JsonFunctions::new(JsonFunctionsOptions { max_depth: 1 });
    let mut d = doc(json!({"a": {"b": 1}, "c": 1}));
    let err = engine
        .set_insert_replace(
            &mut d,
            &[path(vec![PathLeg::key("c")]), path(vec![PathLeg::key("a"), PathLeg::key("b")])],
            vec![JsonValue::Int64(2), JsonValue::Int64(3)],
            ModifyType::Replace,
        )
        .unwrap_err();
    assert_eq!(err, JsonError::DepthExceeded { max_depth: 1 });
    assert_eq!(d, doc(json!({"a": {"b": 1}, "c": 1})));
}

#[test]
fn unquote_matrix() {
    assert_eq!(unquote(&JsonValue::from(r"\n")).unwrap(), "\n");
    assert_eq!(unquote(&JsonValue::from(r"\\")).unwrap(), "\\");
    assert_eq!(unquote(&JsonValue::from(r"\q")).unwrap(), "q");
    assert!(matches!(
        unquote(&JsonValue::from("ends with \\")),
        Err(JsonError::MalformedEscape(_))
    ));
    assert_eq!(unquote(&doc(json!({"k": true}))).unwrap(), r#"{"k":true}"#);
    assert_eq!(unquote(&doc(json!(1.5))).unwrap(), "1.5");
    assert_eq!(unquote(&JsonValue::from(r"\ud83d\ude00!")).unwrap(), "\u{1f600}!");
    assert!(matches!(
        unquote(&JsonValue::from(r"\ude00")),
        Err(JsonError::MalformedEscape(_))
    ));
}

#[test]
fn json_type_matrix() {
    assert_eq!(json_type(&JsonValue::Null), "NULL");
    assert_eq!(json_type(&JsonValue::Bool(true)), "BOOLEAN");
    assert_eq!(json_type(&JsonValue::Bool(false)), "BOOLEAN");
    assert_eq!(json_type(&doc(json!([1]))), "ARRAY");
    assert_eq!(json_type(&doc(json!(1.0))), "DOUBLE");
}

#[test]
fn json_type_from_raw_matrix() {
    let cases = [
        (0x01, 0x00, JsonType::Object),
        (0x03, 0x00, JsonType::Array),
        (0x04, 0x00, JsonType::Null),
        (0x04, 0x01, JsonType::Boolean),
        (0x04, 0x02, JsonType::Boolean),
        (0x09, 0x00, JsonType::Integer),
        (0x0b, 0x00, JsonType::Double),
        (0x0c, 0x00, JsonType::String),
    ];
    for (code, marker, expected) in cases {
        assert_eq!(json_type_from_raw(code, marker), Ok(expected), "code {code:#04x}");
    }

    let err = json_type_from_raw(0x42, 0x00).unwrap_err();
    assert_eq!(err, JsonError::Value(ValueError::InvariantViolation { type_code: 0x42 }));
    assert_eq!(err.to_string(), "unknown type code 0x42 for JSON value");
}
