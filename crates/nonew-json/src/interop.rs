//! Conversion to and from standard JSON through `serde_json`.
//!
//! Going out is lossless: every [`Object`] is valid JSON (via `Serialize`).
//! Coming in is partial, since general JSON has constructs this model cannot
//! hold. Those fail with [`NonewError::UnsupportedJson`] naming the dotted
//! path of the offending value.

use serde_json::{Map, Number};

use crate::error::{NonewError, Result};
use crate::object::Object;
use crate::value::Value;

impl Object {
    /// Standard JSON value for this object. Non-finite doubles become `null`.
    pub fn to_json_value(&self) -> serde_json::Value {
        serde_json::Value::from(self)
    }

    /// Parse standard JSON text and convert it.
    pub fn from_json_str(json: &str) -> Result<Object> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Object::try_from(&value)
    }
}

impl From<&Object> for serde_json::Value {
    fn from(object: &Object) -> Self {
        let map = object
            .iter()
            .map(|(key, value)| (key.to_string(), json_value(value)))
            .collect();
        serde_json::Value::Object(map)
    }
}

fn json_value(value: &Value) -> serde_json::Value {
    match value {
        Value::Int(i) => (*i).into(),
        Value::Double(f) => json_double(*f),
        Value::String(s) => s.clone().into(),
        Value::IntVector(v) => v.iter().map(|&i| serde_json::Value::from(i)).collect(),
        Value::DoubleVector(v) => v.iter().map(|&f| json_double(f)).collect(),
        Value::StringVector(v) => v.iter().map(|s| serde_json::Value::from(s.as_str())).collect(),
        Value::Object(nested) => nested.into(),
    }
}

fn json_double(f: f64) -> serde_json::Value {
    Number::from_f64(f).map_or(serde_json::Value::Null, serde_json::Value::Number)
}

impl TryFrom<&serde_json::Value> for Object {
    type Error = NonewError;

    fn try_from(value: &serde_json::Value) -> Result<Self> {
        match value {
            serde_json::Value::Object(map) => convert_object(map, ""),
            other => Err(unsupported(
                "$",
                format!("root must be an object, found {}", json_type(other)),
            )),
        }
    }
}

fn convert_object(map: &Map<String, serde_json::Value>, prefix: &str) -> Result<Object> {
    let mut object = Object::new();
    for (key, value) in map {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        object.add(key.as_str(), convert_value(value, &path)?);
    }
    Ok(object)
}

fn convert_value(value: &serde_json::Value, path: &str) -> Result<Value> {
    match value {
        serde_json::Value::Number(n) => convert_number(n, path),
        serde_json::Value::String(s) => Ok(Value::String(s.clone())),
        serde_json::Value::Array(items) => convert_array(items, path),
        serde_json::Value::Object(map) => convert_object(map, path).map(Value::Object),
        other => Err(unsupported(
            path,
            format!("{} values are not supported", json_type(other)),
        )),
    }
}

/// Integers must fit `i64`; larger ones would silently lose precision as a
/// double, so they are rejected instead.
fn convert_number(n: &Number, path: &str) -> Result<Value> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Int(i));
    }
    if n.is_u64() {
        return Err(unsupported(path, format!("integer {n} out of i64 range")));
    }
    match n.as_f64() {
        Some(f) => Ok(Value::Double(f)),
        None => Err(unsupported(path, format!("number {n} is not representable"))),
    }
}

/// Arrays must be all-string or all-number, as decided by the first element.
/// Numbers form an int vector unless any element needs a double, in which
/// case every element widens.
fn convert_array(items: &[serde_json::Value], path: &str) -> Result<Value> {
    if items.is_empty() {
        return Ok(Value::StringVector(Vec::new()));
    }

    let strings = items[0].is_string();
    if let Some(pos) = items
        .iter()
        .position(|v| if strings { !v.is_string() } else { !v.is_number() })
    {
        let expected = if strings { "strings" } else { "numbers" };
        return Err(unsupported(
            &format!("{path}[{pos}]"),
            format!(
                "arrays must hold only {expected}, found {}",
                json_type(&items[pos])
            ),
        ));
    }

    if strings {
        let strings = items
            .iter()
            .filter_map(|v| v.as_str().map(str::to_string))
            .collect();
        return Ok(Value::StringVector(strings));
    }

    let numbers = items
        .iter()
        .enumerate()
        .filter_map(|(i, v)| match v {
            serde_json::Value::Number(n) => Some(convert_number(n, &format!("{path}[{i}]"))),
            _ => None,
        })
        .collect::<Result<Vec<Value>>>()?;
    if numbers.iter().all(|v| matches!(v, Value::Int(_))) {
        let ints = numbers
            .into_iter()
            .filter_map(|v| match v {
                Value::Int(i) => Some(i),
                _ => None,
            })
            .collect();
        Ok(Value::IntVector(ints))
    } else {
        let doubles = numbers
            .into_iter()
            .filter_map(|v| match v {
                Value::Int(i) => Some(i as f64),
                Value::Double(f) => Some(f),
                _ => None,
            })
            .collect();
        Ok(Value::DoubleVector(doubles))
    }
}

fn json_type(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "boolean",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

fn unsupported(path: &str, reason: String) -> NonewError {
    NonewError::UnsupportedJson {
        path: path.to_string(),
        reason,
    }
}
