use nonew_json::{NonewError, Object, Value};
use serde_json::json;

/// Helper: assert conversion fails as unsupported and return the path.
fn unsupported_path(json: &str) -> String {
    match Object::from_json_str(json).unwrap_err() {
        NonewError::UnsupportedJson { path, .. } => path,
        other => panic!("expected UnsupportedJson for {json}, got {other}"),
    }
}

// ============================================================================
// Object → JSON
// ============================================================================

#[test]
fn to_json_value_maps_every_kind() {
    let mut son = Object::new();
    son.add("name", "Johnny");

    let mut obj = Object::new();
    obj.add("age", 25);
    obj.add("height", 1.75);
    obj.add("name", "John");
    obj.add("lucky", vec![1, 2, 3]);
    obj.add("doubles", vec![12.3, 3.0]);
    obj.add("toys", vec!["car"]);
    obj.add("son", son);

    assert_eq!(
        obj.to_json_value(),
        json!({
            "age": 25,
            "height": 1.75,
            "name": "John",
            "lucky": [1, 2, 3],
            "doubles": [12.3, 3.0],
            "toys": ["car"],
            "son": {"name": "Johnny"}
        })
    );
}

#[test]
fn to_json_value_empty_object() {
    assert_eq!(Object::new().to_json_value(), json!({}));
}

#[test]
fn to_json_value_nested_and_vector_non_finite() {
    let mut inner = Object::new();
    inner.add("ds", vec![1.5, f64::INFINITY]);
    let mut obj = Object::new();
    obj.add("inner", inner);
    assert_eq!(obj.to_json_value(), json!({"inner": {"ds": [1.5, null]}}));
}

#[test]
fn to_json_value_non_finite_double_is_null() {
    let mut obj = Object::new();
    obj.add("bad", f64::NAN);
    assert_eq!(obj.to_json_value(), json!({"bad": null}));
}

// ============================================================================
// JSON → Object
// ============================================================================

#[test]
fn from_json_str_scalars_and_nesting() {
    let obj = Object::from_json_str(
        r#"{"name":"John","age":25,"son":{"name":"Johnny","height":0.75}}"#,
    )
    .unwrap();
    assert_eq!(obj.get::<String>("name").unwrap(), "John");
    assert_eq!(*obj.get::<i64>("age").unwrap(), 25);
    let son = obj.get::<Object>("son").unwrap();
    assert_eq!(*son.get::<f64>("height").unwrap(), 0.75);
}

#[test]
fn from_json_str_whole_float_stays_double() {
    let obj = Object::from_json_str(r#"{"d": 3.0}"#).unwrap();
    assert_eq!(obj.value("d"), Some(&Value::Double(3.0)));
}

#[test]
fn from_json_str_arrays() {
    let obj = Object::from_json_str(
        r#"{"ints":[1,2],"doubles":[1.5,2],"strings":["a","b"],"empty":[]}"#,
    )
    .unwrap();
    assert_eq!(obj.get::<Vec<i64>>("ints").unwrap(), &vec![1, 2]);
    assert_eq!(obj.get::<Vec<f64>>("doubles").unwrap(), &vec![1.5, 2.0]);
    assert_eq!(obj.get::<Vec<String>>("strings").unwrap().len(), 2);
    assert!(obj.is_empty_vector("empty").unwrap());
}

#[test]
fn from_json_str_rejects_integers_beyond_i64() {
    assert_eq!(unsupported_path(r#"{"big": 18446744073709551615}"#), "big");
    assert_eq!(
        unsupported_path(r#"{"son": {"xs": [1, 9223372036854775808]}}"#),
        "son.xs[1]"
    );
}

#[test]
fn from_json_str_keeps_i64_extremes_exact() {
    let obj = Object::from_json_str(
        r#"{"max": 9223372036854775807, "min": -9223372036854775808}"#,
    )
    .unwrap();
    assert_eq!(*obj.get::<i64>("max").unwrap(), i64::MAX);
    assert_eq!(*obj.get::<i64>("min").unwrap(), i64::MIN);
}

#[test]
fn from_json_str_invalid_json() {
    let err = Object::from_json_str("{not json").unwrap_err();
    assert!(matches!(err, NonewError::Json(_)));
}

#[test]
fn from_json_str_rejects_non_object_root() {
    assert_eq!(unsupported_path("[1, 2]"), "$");
    assert_eq!(unsupported_path("42"), "$");
}

#[test]
fn from_json_str_rejects_bool_and_null_with_path() {
    assert_eq!(unsupported_path(r#"{"ok": true}"#), "ok");
    assert_eq!(unsupported_path(r#"{"son": {"nothing": null}}"#), "son.nothing");
}

#[test]
fn from_json_str_rejects_unsupported_arrays() {
    assert_eq!(unsupported_path(r#"{"xs": [{"a": 1}]}"#), "xs[0]");
    assert_eq!(unsupported_path(r#"{"xs": [1, "a"]}"#), "xs[1]");
    assert_eq!(unsupported_path(r#"{"a": {"xs": [[1]]}}"#), "a.xs[0]");
}

// ============================================================================
// Through the native grammar
// ============================================================================

#[test]
fn json_converted_object_roundtrips_through_grammar() {
    let obj = Object::from_json_str(
        r#"{"name":"John","lucky":[7,13],"doubles":[0.5],"son":{"toys":["car","doll"]}}"#,
    )
    .unwrap();
    let text = nonew_json::serialize(&obj);
    assert_eq!(nonew_json::parse(&text).unwrap(), obj);
}
