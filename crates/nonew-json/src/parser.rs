//! Recursive-descent parser: text → [`Object`].
//!
//! A single left-to-right scan with one byte of lookahead. The grammar is
//! deliberately small:
//!
//! - A document is exactly one object, optionally surrounded by whitespace.
//! - Keys and string values are `"..."` read verbatim; there are no escapes.
//! - Numbers are `-?digits(.digits)?`; a `.` makes the value a double.
//! - Arrays are homogeneous. The first element decides the vector kind:
//!   `"` → strings, a number with `.` → doubles, any other number → ints.
//!
//! # Key design decisions
//!
//! - **Empty arrays** (`[]`) carry no element to sniff and parse as an empty
//!   string vector. Empty int/double vectors therefore come back as string
//!   vectors; their emptiness is preserved.
//! - **Int widening**: a double vector accepts elements written without a `.`
//!   (`[1.5, 2]`), but an int vector rejects a later `.` element.
//! - **Trailing content** after the top-level object is an error.
//! - **Depth limit**: nesting is bounded by [`ParserConfig::max_depth`] so
//!   adversarial input fails with a parse error instead of overflowing the
//!   stack.

use tracing::debug;

use crate::error::{NonewError, Result};
use crate::object::Object;
use crate::value::Value;

/// Default bound on object nesting; the top-level object is depth 1.
pub const DEFAULT_MAX_DEPTH: usize = 128;

/// Tunables for [`parse_with`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParserConfig {
    /// Deepest object nesting accepted before failing.
    pub max_depth: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl ParserConfig {
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

/// Parse a document with the default configuration.
///
/// ```
/// let obj = nonew_json::parse(r#"{"name": "John", "age": 25}"#).unwrap();
/// assert_eq!(obj.get::<String>("name").unwrap(), "John");
/// ```
pub fn parse(text: &str) -> Result<Object> {
    parse_with(text, &ParserConfig::default())
}

/// Parse a document, failing on anything but a single well-formed object.
#[tracing::instrument(level = "debug", skip_all, fields(len = text.len(), max_depth = config.max_depth))]
pub fn parse_with(text: &str, config: &ParserConfig) -> Result<Object> {
    let mut cursor = Cursor::new(text, config.max_depth);
    let result = cursor.document();
    match &result {
        Ok(object) => debug!(entries = object.len(), "parsed document"),
        Err(err) => debug!(error = %err, "failed to parse document"),
    }
    result
}

/// Which scalar a vector holds, decided from its first element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ElementKind {
    Int,
    Double,
    String,
}

/// A lexed numeric token.
enum Number {
    Int(i64),
    Double(f64),
}

struct Cursor<'a> {
    text: &'a str,
    bytes: &'a [u8],
    pos: usize,
    depth: usize,
    max_depth: usize,
}

impl<'a> Cursor<'a> {
    fn new(text: &'a str, max_depth: usize) -> Self {
        Self {
            text,
            bytes: text.as_bytes(),
            pos: 0,
            depth: 0,
            max_depth,
        }
    }

    /// document := ws object ws EOF
    fn document(&mut self) -> Result<Object> {
        self.skip_ws();
        let object = self.object()?;
        self.skip_ws();
        if self.pos < self.bytes.len() {
            return Err(self.error(format!(
                "trailing characters after document: {}",
                self.describe_current()
            )));
        }
        Ok(object)
    }

    /// object := '{' ws ( entry ( ',' ws entry )* )? '}'
    ///
    /// Expects the cursor on the opening brace.
    fn object(&mut self) -> Result<Object> {
        self.expect(b'{')?;
        self.depth += 1;
        if self.depth > self.max_depth {
            return Err(self.error(format!(
                "maximum nesting depth of {} exceeded",
                self.max_depth
            )));
        }

        let mut object = Object::new();
        self.skip_ws();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            self.depth -= 1;
            return Ok(object);
        }

        loop {
            self.skip_ws();
            let key = self.string("key")?;
            self.skip_ws();
            self.expect(b':')?;
            self.skip_ws();
            let value = self.value()?;
            object.add(key, value);

            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    break;
                }
                _ => {
                    return Err(self.error(format!(
                        "expected ',' or '}}' after value, found {}",
                        self.describe_current()
                    )))
                }
            }
        }

        self.depth -= 1;
        Ok(object)
    }

    /// Dispatch on the next significant byte.
    fn value(&mut self) -> Result<Value> {
        match self.peek() {
            Some(b'"') => Ok(Value::String(self.string("string value")?)),
            Some(b'{') => Ok(Value::Object(self.object()?)),
            Some(b'[') => self.vector(),
            Some(b) if b == b'-' || b.is_ascii_digit() => match self.number()? {
                Number::Int(n) => Ok(Value::Int(n)),
                Number::Double(f) => Ok(Value::Double(f)),
            },
            _ => Err(self.error(format!(
                "expected a value, found {}",
                self.describe_current()
            ))),
        }
    }

    /// vector := '[' ws ( element ( ',' ws element )* )? ws ']'
    fn vector(&mut self) -> Result<Value> {
        self.expect(b'[')?;
        self.skip_ws();

        let kind = match self.peek() {
            Some(b']') => {
                self.pos += 1;
                return Ok(Value::StringVector(Vec::new()));
            }
            Some(b'"') => ElementKind::String,
            Some(b) if b == b'-' || b.is_ascii_digit() => {
                if self.number_token_has_dot() {
                    ElementKind::Double
                } else {
                    ElementKind::Int
                }
            }
            _ => {
                return Err(self.error(format!(
                    "expected an array element, found {}",
                    self.describe_current()
                )))
            }
        };

        match kind {
            ElementKind::Int => self
                .elements(|cursor| {
                    let start = cursor.pos;
                    match cursor.number()? {
                        Number::Int(n) => Ok(n),
                        Number::Double(_) => {
                            Err(cursor.error_at(start, "double element in an int array"))
                        }
                    }
                })
                .map(Value::IntVector),
            ElementKind::Double => self
                .elements(|cursor| match cursor.number()? {
                    Number::Int(n) => Ok(n as f64),
                    Number::Double(f) => Ok(f),
                })
                .map(Value::DoubleVector),
            ElementKind::String => self
                .elements(|cursor| cursor.string("array element"))
                .map(Value::StringVector),
        }
    }

    /// Comma-separated elements up to and including the closing `]`.
    /// The cursor sits on the first element.
    fn elements<T>(&mut self, mut element: impl FnMut(&mut Self) -> Result<T>) -> Result<Vec<T>> {
        let mut items = Vec::new();
        loop {
            self.skip_ws();
            items.push(element(self)?);
            self.skip_ws();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(items);
                }
                _ => {
                    return Err(self.error(format!(
                        "expected ',' or ']' in array, found {}",
                        self.describe_current()
                    )))
                }
            }
        }
    }

    /// `"..."`, copied verbatim. `what` names the construct for error messages.
    fn string(&mut self, what: &str) -> Result<String> {
        if self.peek() != Some(b'"') {
            return Err(self.error(format!(
                "expected '\"' to start {what}, found {}",
                self.describe_current()
            )));
        }
        let start = self.pos + 1;
        match self.bytes[start..].iter().position(|&b| b == b'"') {
            Some(len) => {
                let end = start + len;
                self.pos = end + 1;
                Ok(self.text[start..end].to_string())
            }
            None => Err(self.error_at(self.pos, format!("unterminated {what}"))),
        }
    }

    /// Scan the maximal `-?[0-9.]*` token and convert it.
    fn number(&mut self) -> Result<Number> {
        let text = self.text;
        let start = self.pos;
        let end = self.number_token_end();
        let token = &text[start..end];

        if token.is_empty() {
            return Err(self.error(format!(
                "expected a number, found {}",
                self.describe_current()
            )));
        }
        let (sign_len, body) = match token.strip_prefix('-') {
            Some(rest) => (1, rest),
            None => (0, token),
        };
        let dots = body.bytes().filter(|&b| b == b'.').count();
        if dots > 1 {
            return Err(self.error_at(start, format!("malformed number '{token}'")));
        }
        if !body.bytes().next().is_some_and(|b| b.is_ascii_digit()) {
            return Err(self.error_at(
                start + sign_len,
                format!("malformed number '{token}': expected a digit"),
            ));
        }

        self.pos = end;
        if dots == 1 {
            token
                .parse::<f64>()
                .map(Number::Double)
                .map_err(|e| self.error_at(start, format!("invalid double '{token}': {e}")))
        } else {
            token
                .parse::<i64>()
                .map(Number::Int)
                .map_err(|e| self.error_at(start, format!("invalid integer '{token}': {e}")))
        }
    }

    fn number_token_end(&self) -> usize {
        let mut end = self.pos;
        if self.bytes.get(end) == Some(&b'-') {
            end += 1;
        }
        while let Some(&b) = self.bytes.get(end) {
            if b.is_ascii_digit() || b == b'.' {
                end += 1;
            } else {
                break;
            }
        }
        end
    }

    /// Peek ahead over the numeric token at the cursor without consuming it.
    fn number_token_has_dot(&self) -> bool {
        self.bytes[self.pos..self.number_token_end()].contains(&b'.')
    }

    fn skip_ws(&mut self) {
        while let Some(b' ' | b'\t' | b'\n' | b'\r') = self.peek() {
            self.pos += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    fn expect(&mut self, want: u8) -> Result<()> {
        if self.peek() == Some(want) {
            self.pos += 1;
            Ok(())
        } else {
            Err(self.error(format!(
                "expected '{}', found {}",
                want as char,
                self.describe_current()
            )))
        }
    }

    /// Describe the character under the cursor for error messages.
    fn describe_current(&self) -> String {
        match self.text[self.pos.min(self.text.len())..].chars().next() {
            Some(c) => format!("'{c}'"),
            None => "end of input".to_string(),
        }
    }

    fn error(&self, message: impl Into<String>) -> NonewError {
        self.error_at(self.pos, message)
    }

    fn error_at(&self, offset: usize, message: impl Into<String>) -> NonewError {
        NonewError::parse_at(self.bytes, offset, message)
    }
}
