//! Per-type behavior for wrapped primitives
//!
//! [`Primitive`] captures everything a wrapper family needs to know about the
//! type it wraps: the zero value, the JSON literal forms, the text form and
//! the driver representation. The families themselves only decide what to do
//! with null and zero.
//!
//! | Rust type | JSON literal | Text form | Driver value |
//! |-----------|--------------|-----------|--------------|
//! | `i8`..`i64`, `u64` | integer (or quoted integer) | decimal | `Int64` |
//! | `f32`, `f64` | number (or quoted number) | shortest decimal | `Float64` |
//! | `bool` | `true` / `false` | `true` / `false` | `Bool` |
//! | `String` | string | raw UTF-8 | `String` |
//! | `Vec<u8>` | base64 string | raw bytes | `Bytes` |
//! | `DateTime<FixedOffset>` | integer milliseconds | decimal milliseconds | `Timestamp` |

mod bool;
mod bytes;
mod float;
mod int;
mod str;
pub mod timestamp;

use crate::driver::DriverValue;
use crate::error::{Error, Result};
use serde::Serializer;
use serde_json::Value as JsonValue;

/// A type that can live inside a nullable wrapper.
pub trait Primitive: Clone + PartialEq + std::fmt::Debug + Sized {
    /// Type name used in error messages
    const NAME: &'static str;

    /// Whether the bare text `null` decodes as absent.
    ///
    /// Kept for inputs written by older encoders. Off for text-like types,
    /// where `null` is ordinary content.
    const NULL_TEXT_SHIM: bool = true;

    /// Whether the quoted JSON string `"null"` decodes as the zero value.
    ///
    /// Older encoders wrote it for timestamps. It is a present value, not the
    /// JSON null token: the null family keeps it valid, the zero family
    /// collapses it like any other zero.
    const NULL_JSON_STRING_SHIM: bool = false;

    /// The zero value
    fn zero() -> Self;

    /// Check if this is the zero value
    fn is_zero(&self) -> bool {
        *self == Self::zero()
    }

    /// Representational equality.
    ///
    /// Same as `==` except for types whose `==` ignores part of the
    /// representation (timestamps compare instants but not offsets).
    fn exact_eq(&self, other: &Self) -> bool {
        self == other
    }

    /// Decode a non-null JSON literal
    fn from_json(value: &JsonValue) -> Result<Self>;

    /// Encode as a JSON literal
    fn serialize_json<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>;

    /// Decode the text form (never called with empty input)
    fn parse_text(text: &[u8]) -> Result<Self>;

    /// Encode the text form
    fn format_text(&self) -> Vec<u8>;

    /// Decode a non-null driver value
    fn from_driver(value: DriverValue) -> Result<Self>;

    /// Encode as a driver value
    fn to_driver(&self) -> Result<DriverValue>;

    /// Decode a non-null SQLite column value
    #[cfg(feature = "rusqlite")]
    fn from_sqlite(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        crate::sqlite::from_sqlite_via_driver(value)
    }
}

// ============================================================================
// JSON helpers
// ============================================================================

/// Parse a single JSON document, classifying failures as syntax errors.
pub fn parse_json(data: &[u8]) -> Result<JsonValue> {
    serde_json::from_slice(data).map_err(Error::Syntax)
}

/// JSON kind name, for type mismatch errors
pub fn json_kind(value: &JsonValue) -> &'static str {
    match value {
        JsonValue::Null => "null",
        JsonValue::Bool(_) => "boolean",
        JsonValue::Number(n) if n.is_f64() => "float",
        JsonValue::Number(_) => "integer",
        JsonValue::String(_) => "string",
        JsonValue::Array(_) => "array",
        JsonValue::Object(_) => "object",
    }
}

/// Build a type mismatch error for `found`.
pub fn type_mismatch(expected: &'static str, found: &JsonValue) -> Error {
    Error::TypeMismatch {
        expected,
        found: json_kind(found),
    }
}

/// Check if `value` is the empty JSON string `""`.
pub fn is_empty_json_string(value: &JsonValue) -> bool {
    matches!(value, JsonValue::String(s) if s.is_empty())
}

/// Decode UTF-8 text or report a parse error against `target`.
fn utf8<'a>(text: &'a [u8], target: &'static str) -> Result<&'a str> {
    std::str::from_utf8(text).map_err(|e| Error::parse(text, target, e))
}

/// Build a binding error for an unexpected driver value.
fn binding_type(expected: &'static str, found: &DriverValue) -> Error {
    tracing::debug!(expected, found = found.kind(), "rejected driver value");
    Error::BindingType {
        expected,
        found: found.kind(),
    }
}
