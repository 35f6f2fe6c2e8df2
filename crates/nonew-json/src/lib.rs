//! # nonew-json
//!
//! A minimal JSON-like object model with a recursive-descent parser and a
//! serializer that round-trip each other.
//!
//! The model is deliberately closed: an [`Object`] maps string keys to a
//! [`Value`] of exactly one of seven kinds (int, double, string, homogeneous
//! int/double/string vectors, and nested objects). There are no booleans,
//! nulls, mixed arrays, arrays of objects, or escape sequences.
//!
//! ## Quick start
//!
//! ```rust
//! use nonew_json::{parse, serialize, Object};
//!
//! let mut son = Object::new();
//! son.add("name", "Johnny");
//!
//! let mut person = Object::new();
//! person.add("name", "John");
//! person.add("age", 25);
//! person.add("son", son);
//!
//! let text = serialize(&person);
//! assert_eq!(text, r#"{ "age": 25, "name": "John", "son": { "name": "Johnny" } }"#);
//!
//! let back = parse(&text).unwrap();
//! assert_eq!(back.get::<Object>("son").unwrap().get::<String>("name").unwrap(), "Johnny");
//! assert_eq!(back, person);
//! ```
//!
//! ## Modules
//!
//! - [`object`] — `Object`: insert, typed get, key and emptiness queries
//! - [`value`] — `Value` tagged union and the sealed `Kind` trait
//! - [`parser`] — text → `Object`, with a configurable nesting bound
//! - [`serializer`] — `Object` → text (single-line and pretty)
//! - [`interop`] — conversion to and from standard JSON via `serde_json`
//! - [`error`] — `NonewError` and the crate `Result` alias

pub mod error;
pub mod interop;
pub mod object;
pub mod parser;
pub mod serializer;
pub mod value;

pub use error::{NonewError, Result};
pub use object::Object;
pub use parser::{parse, parse_with, ParserConfig};
pub use serializer::{serialize, serialize_pretty};
pub use value::{Kind, Value, ValueKind};
