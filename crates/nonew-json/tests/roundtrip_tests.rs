use nonew_json::{parse, parse_with, serialize, Object, ParserConfig, Value, ValueKind};

/// Assert that serialize → parse reproduces `obj` exactly.
fn assert_roundtrip(obj: &Object) {
    let text = serialize(obj);
    let parsed = parse(&text).expect("parse failed");
    assert_eq!(
        &parsed, obj,
        "Roundtrip failed:\n  text:   {text}\n  parsed: {parsed}"
    );
}

/// The object the reference demonstration builds, step by step.
fn demo_object() -> Object {
    let mut grandson = Object::new();
    grandson.add("name", "Baby");
    grandson.add("age", 1);
    grandson.add("weight", 10.5);

    let mut son = Object::new();
    son.add("name", "Johnny");
    son.add("age", 3);
    son.add("grand son", grandson);
    son.add("height", 0.75);

    let mut john = Object::new();
    john.add("name", "John");
    john.add("age", 25);
    john.add("son", son);
    john.add("height", 1.75);
    john
}

// ============================================================================
// Roundtrips
// ============================================================================

#[test]
fn roundtrip_empty_object() {
    assert_roundtrip(&Object::new());
}

#[test]
fn roundtrip_demo_object() {
    assert_roundtrip(&demo_object());
}

#[test]
fn roundtrip_demo_object_with_vectors() {
    let mut john = demo_object();
    john.add("lucky", vec![1, 2, 3]);
    john.add("doubles", vec![12.3, 22.3, 3.0]);
    john.get_mut::<Object>("son")
        .unwrap()
        .add("toys", vec!["car", "ball", "doll"]);
    john.add("empty", Vec::<String>::new());
    assert_roundtrip(&john);
}

#[test]
fn roundtrip_lucky_numbers() {
    let mut obj = Object::new();
    obj.add("lucky", vec![1, 2, 3]);
    let parsed = parse(&serialize(&obj)).unwrap();
    assert_eq!(parsed.get::<Vec<i64>>("lucky").unwrap(), &vec![1, 2, 3]);
}

#[test]
fn roundtrip_whole_doubles_stay_doubles() {
    let mut obj = Object::new();
    obj.add("d", 3.0);
    obj.add("ds", vec![1.0, 2.0]);
    let parsed = parse(&serialize(&obj)).unwrap();
    assert_eq!(parsed.value("d").unwrap().kind(), ValueKind::Double);
    assert_eq!(parsed.value("ds").unwrap().kind(), ValueKind::DoubleVector);
    assert_roundtrip(&obj);
}

#[test]
fn roundtrip_awkward_doubles() {
    let mut obj = Object::new();
    obj.add("third", 1.0 / 3.0);
    obj.add("tiny", 1e-300);
    obj.add("huge", 1.7976931348623157e308);
    obj.add("neg_zero", -0.0);
    assert_roundtrip(&obj);
}

#[test]
fn roundtrip_i64_extremes() {
    let mut obj = Object::new();
    obj.add("max", i64::MAX);
    obj.add("min", i64::MIN);
    obj.add("xs", vec![i64::MIN, 0, i64::MAX]);
    assert_roundtrip(&obj);
}

#[test]
fn roundtrip_strings_with_grammar_safe_punctuation() {
    let mut obj = Object::new();
    obj.add("path", r"C:\dir\file");
    obj.add("sentence", "a b: c");
    obj.add("unicode", "caf\u{e9} \u{4f60}\u{597d}");
    obj.add("", "empty key");
    assert_roundtrip(&obj);
}

#[test]
fn roundtrip_deep_nesting() {
    let mut obj = Object::new();
    obj.add("leaf", 1);
    for i in 0..50 {
        let mut parent = Object::new();
        parent.add(format!("level{i}"), obj);
        obj = parent;
    }
    assert_roundtrip(&obj);
}

#[test]
fn roundtrip_beyond_default_depth_needs_raised_bound() {
    let mut obj = Object::new();
    obj.add("leaf", 1);
    for _ in 1..129 {
        let mut parent = Object::new();
        parent.add("child", obj);
        obj = parent;
    }
    let text = serialize(&obj);

    assert!(parse(&text).unwrap_err().is_parse());
    let config = ParserConfig::default().with_max_depth(129);
    assert_eq!(parse_with(&text, &config).unwrap(), obj);
}

#[test]
fn reparse_is_stable() {
    let text = serialize(&demo_object());
    let once = parse(&text).unwrap();
    assert_eq!(serialize(&once), text);
}

// ============================================================================
// Known limitation: empty vectors come back as string vectors
// ============================================================================

#[test]
fn empty_int_vector_returns_as_empty_string_vector() {
    let mut obj = Object::new();
    obj.add("none", Vec::<i64>::new());
    let parsed = parse(&serialize(&obj)).unwrap();
    assert_eq!(parsed.value("none"), Some(&Value::StringVector(vec![])));
    assert!(parsed.is_empty_vector("none").unwrap());
}
