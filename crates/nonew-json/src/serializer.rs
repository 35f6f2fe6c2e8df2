//! Serializer: [`Object`] → text.
//!
//! Output is always re-parseable by [`crate::parse`] into an equal object,
//! within the grammar's limits (strings must not contain `"`, doubles must be
//! finite). Keys are emitted in the object's key order. Objects nested deeper
//! than [`crate::parser::DEFAULT_MAX_DEPTH`] need [`crate::parse_with`] with a
//! raised `max_depth` to read back.
//!
//! # Example
//! ```
//! use nonew_json::{serialize, Object};
//!
//! let mut obj = Object::new();
//! obj.add("name", "John");
//! obj.add("height", 1.75);
//! obj.add("lucky", vec![1, 2, 3]);
//! assert_eq!(
//!     serialize(&obj),
//!     r#"{ "height": 1.75, "lucky": [1, 2, 3], "name": "John" }"#
//! );
//! ```

use crate::object::Object;
use crate::value::Value;

const INDENT: &str = "  ";

/// Render an object on a single line: `{ "k1": v1, "k2": v2 }`.
pub fn serialize(object: &Object) -> String {
    let mut out = String::new();
    encode_object_inline(object, &mut out);
    out
}

/// Render an object with one entry per line and two-space indentation.
/// Vectors stay on one line.
pub fn serialize_pretty(object: &Object) -> String {
    let mut out = String::new();
    encode_object_pretty(object, 0, &mut out);
    out
}

/// Where a nested object is being written.
#[derive(Clone, Copy)]
enum Layout {
    Inline,
    /// One entry per line; the value sits at this nesting depth.
    Pretty(usize),
}

fn encode_object_inline(object: &Object, out: &mut String) {
    if object.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push_str("{ ");
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        encode_key(key, out);
        encode_value(value, Layout::Inline, out);
    }
    out.push_str(" }");
}

fn encode_object_pretty(object: &Object, depth: usize, out: &mut String) {
    if object.is_empty() {
        out.push_str("{}");
        return;
    }
    out.push('{');
    for (i, (key, value)) in object.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push('\n');
        push_indent(depth + 1, out);
        encode_key(key, out);
        encode_value(value, Layout::Pretty(depth + 1), out);
    }
    out.push('\n');
    push_indent(depth, out);
    out.push('}');
}

fn encode_key(key: &str, out: &mut String) {
    encode_string(key, out);
    out.push_str(": ");
}

fn encode_value(value: &Value, layout: Layout, out: &mut String) {
    match value {
        Value::Int(n) => out.push_str(&n.to_string()),
        Value::Double(f) => encode_double(*f, out),
        Value::String(s) => encode_string(s, out),
        Value::IntVector(v) => encode_vector(v, out, |n, out| out.push_str(&n.to_string())),
        Value::DoubleVector(v) => encode_vector(v, out, |f, out| encode_double(*f, out)),
        Value::StringVector(v) => encode_vector(v, out, |s, out| encode_string(s, out)),
        Value::Object(nested) => match layout {
            Layout::Inline => encode_object_inline(nested, out),
            Layout::Pretty(depth) => encode_object_pretty(nested, depth, out),
        },
    }
}

fn encode_vector<T>(items: &[T], out: &mut String, mut encode: impl FnMut(&T, &mut String)) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        encode(item, out);
    }
    out.push(']');
}

/// Strings are written verbatim between quotes; the grammar has no escapes.
fn encode_string(s: &str, out: &mut String) {
    out.push('"');
    out.push_str(s);
    out.push('"');
}

/// Shortest round-trip decimal rendering, always with a `.` so the parser
/// reads it back as a double (`3.0`, never `3`). `Display` for `f64` never
/// uses exponent notation.
fn encode_double(f: f64, out: &mut String) {
    let rendered = f.to_string();
    out.push_str(&rendered);
    if f.is_finite() && !rendered.contains('.') {
        out.push_str(".0");
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
}
