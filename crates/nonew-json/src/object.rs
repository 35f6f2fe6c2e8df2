//! `Object` — a keyed collection of [`Value`]s.
//!
//! Entries are kept in a `BTreeMap`, so iteration and serialization visit
//! keys in lexicographic byte order. That order is the one stable rendering
//! of an object and is what makes serializer output reproducible.

use std::collections::BTreeMap;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{NonewError, Result};
use crate::parser::{self, ParserConfig};
use crate::serializer;
use crate::value::{Kind, Value};

/// A JSON-like object: unique string keys, each mapped to exactly one value.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Object {
    entries: BTreeMap<String, Value>,
}

impl Object {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`, replacing whatever was there.
    ///
    /// The kind of the new value always wins; a key may change kind across
    /// calls. Nested objects are moved in, so later edits to the caller's copy
    /// are not observed here.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Borrow the payload stored at `key` as `T`.
    ///
    /// Fails with [`NonewError::KeyNotFound`] if the key is absent and with
    /// [`NonewError::TypeMismatch`] if it holds a different kind.
    ///
    /// ```
    /// use nonew_json::Object;
    ///
    /// let mut person = Object::new();
    /// person.add("age", 25);
    /// assert_eq!(*person.get::<i64>("age").unwrap(), 25);
    /// assert!(person.get::<String>("age").unwrap_err().is_type_mismatch());
    /// ```
    pub fn get<T: Kind>(&self, key: &str) -> Result<&T> {
        let value = self.entries.get(key).ok_or_else(|| not_found(key))?;
        T::from_value(value).ok_or_else(|| mismatch::<T>(key, value))
    }

    /// Mutable counterpart of [`Object::get`], for editing nested objects and
    /// vectors in place.
    pub fn get_mut<T: Kind>(&mut self, key: &str) -> Result<&mut T> {
        let value = self.entries.get_mut(key).ok_or_else(|| not_found(key))?;
        let found = value.kind();
        T::from_value_mut(value).ok_or_else(|| NonewError::TypeMismatch {
            key: key.to_string(),
            expected: T::KIND.name(),
            found: found.name(),
        })
    }

    /// Untyped access to the value at `key`.
    pub fn value(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Whether `key` holds a vector (of any element kind) with no elements.
    ///
    /// An absent key is an error rather than `false`, so a missing entry is
    /// never mistaken for a present-but-empty one. Non-vector values are
    /// `Ok(false)`.
    pub fn is_empty_vector(&self, key: &str) -> Result<bool> {
        let value = self.entries.get(key).ok_or_else(|| not_found(key))?;
        Ok(value.vector_len() == Some(0))
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Parse a document with the default [`ParserConfig`].
    pub fn parse(text: &str) -> Result<Object> {
        parser::parse(text)
    }

    pub fn parse_with(text: &str, config: &ParserConfig) -> Result<Object> {
        parser::parse_with(text, config)
    }
}

fn not_found(key: &str) -> NonewError {
    NonewError::KeyNotFound {
        key: key.to_string(),
    }
}

fn mismatch<T: Kind>(key: &str, found: &Value) -> NonewError {
    NonewError::TypeMismatch {
        key: key.to_string(),
        expected: T::KIND.name(),
        found: found.kind().name(),
    }
}

impl From<BTreeMap<String, Value>> for Object {
    fn from(entries: BTreeMap<String, Value>) -> Self {
        Object { entries }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Object {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = Object::new();
        for (key, value) in iter {
            object.add(key, value);
        }
        object
    }
}

impl<'a> IntoIterator for &'a Object {
    type Item = (&'a String, &'a Value);
    type IntoIter = std::collections::btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl std::fmt::Display for Object {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&serializer::serialize(self))
    }
}

impl FromStr for Object {
    type Err = NonewError;

    fn from_str(s: &str) -> Result<Self> {
        parser::parse(s)
    }
}
