//! The closed set of value kinds an [`Object`] entry can hold.
//!
//! `Value` is a tagged union over exactly seven kinds. Vectors are homogeneous:
//! the element type is fixed by the variant, so a mixed array is not
//! representable. The recursive case owns its nested [`Object`] by value; the
//! object's map provides the heap indirection, and no two parents ever share
//! a nested object.

use crate::object::Object;
use serde::Serialize;

/// A single entry value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Int(i64),
    Double(f64),
    String(String),
    IntVector(Vec<i64>),
    DoubleVector(Vec<f64>),
    StringVector(Vec<String>),
    Object(Object),
}

/// The tag of a [`Value`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Int,
    Double,
    String,
    IntVector,
    DoubleVector,
    StringVector,
    Object,
}

impl ValueKind {
    /// Human-readable name used in error messages.
    pub fn name(self) -> &'static str {
        match self {
            ValueKind::Int => "int",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::IntVector => "int vector",
            ValueKind::DoubleVector => "double vector",
            ValueKind::StringVector => "string vector",
            ValueKind::Object => "object",
        }
    }

    pub fn is_vector(self) -> bool {
        matches!(
            self,
            ValueKind::IntVector | ValueKind::DoubleVector | ValueKind::StringVector
        )
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl Value {
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::Int(_) => ValueKind::Int,
            Value::Double(_) => ValueKind::Double,
            Value::String(_) => ValueKind::String,
            Value::IntVector(_) => ValueKind::IntVector,
            Value::DoubleVector(_) => ValueKind::DoubleVector,
            Value::StringVector(_) => ValueKind::StringVector,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn is_vector(&self) -> bool {
        self.kind().is_vector()
    }

    /// Element count for the three vector kinds, `None` for everything else.
    pub fn vector_len(&self) -> Option<usize> {
        match self {
            Value::IntVector(v) => Some(v.len()),
            Value::DoubleVector(v) => Some(v.len()),
            Value::StringVector(v) => Some(v.len()),
            _ => None,
        }
    }
}

mod sealed {
    pub trait Sealed {}
}

/// A Rust type that can be borrowed out of a [`Value`].
///
/// Implemented for exactly the seven supported payload types and sealed, so
/// [`Object::get`] can only be instantiated with a kind the model can store.
pub trait Kind: sealed::Sealed + Sized {
    const KIND: ValueKind;

    fn from_value(value: &Value) -> Option<&Self>;

    fn from_value_mut(value: &mut Value) -> Option<&mut Self>;
}

macro_rules! impl_kind {
    ($ty:ty, $variant:ident) => {
        impl sealed::Sealed for $ty {}

        impl Kind for $ty {
            const KIND: ValueKind = ValueKind::$variant;

            fn from_value(value: &Value) -> Option<&Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }

            fn from_value_mut(value: &mut Value) -> Option<&mut Self> {
                match value {
                    Value::$variant(inner) => Some(inner),
                    _ => None,
                }
            }
        }

        impl From<$ty> for Value {
            fn from(inner: $ty) -> Self {
                Value::$variant(inner)
            }
        }
    };
}

impl_kind!(i64, Int);
impl_kind!(f64, Double);
impl_kind!(String, String);
impl_kind!(Vec<i64>, IntVector);
impl_kind!(Vec<f64>, DoubleVector);
impl_kind!(Vec<String>, StringVector);
impl_kind!(Object, Object);

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Int(n.into())
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<Vec<i32>> for Value {
    fn from(v: Vec<i32>) -> Self {
        Value::IntVector(v.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<&str>> for Value {
    fn from(v: Vec<&str>) -> Self {
        Value::StringVector(v.into_iter().map(str::to_string).collect())
    }
}
