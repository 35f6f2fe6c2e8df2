//! Error types for object access, parsing, and JSON conversion.

use thiserror::Error;

/// Errors that can occur while reading from an [`Object`](crate::Object) or
/// converting text into one.
#[derive(Error, Debug)]
pub enum NonewError {
    /// Typed access (or an emptiness query) named a key that is not present.
    #[error("key not found: \"{key}\"")]
    KeyNotFound { key: String },

    /// Typed access asked for a different kind than the one stored at the key.
    #[error("type mismatch for key \"{key}\": expected {expected}, found {found}")]
    TypeMismatch {
        key: String,
        expected: &'static str,
        found: &'static str,
    },

    /// The input text was not a well-formed document.
    /// `line` and `column` are 1-based; `offset` is the 0-based byte offset.
    #[error("parse error at line {line}, column {column}: {message}")]
    Parse {
        line: usize,
        column: usize,
        offset: usize,
        message: String,
    },

    /// The input was not valid standard JSON (interop path).
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Valid JSON that uses a construct this model cannot hold.
    #[error("unsupported JSON at {path}: {reason}")]
    UnsupportedJson { path: String, reason: String },
}

impl NonewError {
    /// Build a [`NonewError::Parse`] for a byte offset into `input`.
    pub(crate) fn parse_at(input: &[u8], offset: usize, message: impl Into<String>) -> Self {
        let (line, column) = line_column(input, offset);
        NonewError::Parse {
            line,
            column,
            offset,
            message: message.into(),
        }
    }

    pub fn is_parse(&self) -> bool {
        matches!(self, NonewError::Parse { .. })
    }

    pub fn is_key_not_found(&self) -> bool {
        matches!(self, NonewError::KeyNotFound { .. })
    }

    pub fn is_type_mismatch(&self) -> bool {
        matches!(self, NonewError::TypeMismatch { .. })
    }
}

/// 1-based line and column (in characters) of `offset`.
fn line_column(input: &[u8], offset: usize) -> (usize, usize) {
    let end = offset.min(input.len());
    let before = &input[..end];
    let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
    let line_start = before
        .iter()
        .rposition(|&b| b == b'\n')
        .map(|p| p + 1)
        .unwrap_or(0);
    let column = String::from_utf8_lossy(&before[line_start..]).chars().count() + 1;
    (line, column)
}

/// Convenience alias used throughout nonew-json.
pub type Result<T> = std::result::Result<T, NonewError>;
