//! Timestamps travel as integer milliseconds since the Unix epoch in JSON and
//! text, and as native driver timestamps in relational binding. Decoded
//! instants are in UTC; the zero timestamp is the Unix epoch.

use chrono::{DateTime, FixedOffset, Utc};
use serde::Serializer;
use serde_json::Value as JsonValue;

use super::int::{integer_from_number, parse_integer};
use super::{binding_type, type_mismatch, Primitive};
use crate::driver::DriverValue;
use crate::error::{Error, Result};

/// The zero timestamp (1970-01-01 00:00:00 UTC)
pub fn epoch() -> DateTime<FixedOffset> {
    DateTime::<Utc>::UNIX_EPOCH.fixed_offset()
}

/// Convert milliseconds since the epoch to a UTC timestamp.
pub fn from_millis(millis: i64) -> Result<DateTime<FixedOffset>> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|t| t.fixed_offset())
        .ok_or_else(|| Error::overflow(millis, "timestamp"))
}

impl Primitive for DateTime<FixedOffset> {
    const NAME: &'static str = "timestamp";
    const NULL_JSON_STRING_SHIM: bool = true;

    fn zero() -> Self {
        epoch()
    }

    /// Same instant and same offset.
    fn exact_eq(&self, other: &Self) -> bool {
        self == other && self.offset() == other.offset()
    }

    fn from_json(value: &JsonValue) -> Result<Self> {
        let millis = match value {
            JsonValue::Number(n) => {
                integer_from_number::<i64>(n, "int64", i64::MIN as f64, i64::MAX as f64)?
            }
            JsonValue::String(s) => parse_integer::<i64>(s.as_bytes(), "int64")?,
            other => return Err(type_mismatch("integer milliseconds", other)),
        };
        from_millis(millis)
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_i64(self.timestamp_millis())
    }

    fn parse_text(text: &[u8]) -> Result<Self> {
        from_millis(parse_integer::<i64>(text, Self::NAME)?)
    }

    fn format_text(&self) -> Vec<u8> {
        self.timestamp_millis().to_string().into_bytes()
    }

    fn from_driver(value: DriverValue) -> Result<Self> {
        match value {
            DriverValue::Timestamp(t) => Ok(t),
            other => Err(binding_type(Self::NAME, &other)),
        }
    }

    fn to_driver(&self) -> Result<DriverValue> {
        Ok(DriverValue::Timestamp(*self))
    }

    /// SQLite has no timestamp storage class; values are RFC 3339 TEXT.
    #[cfg(feature = "rusqlite")]
    fn from_sqlite(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        use rusqlite::types::{FromSqlError, ValueRef};
        match value {
            ValueRef::Text(text) => {
                let s = std::str::from_utf8(text).map_err(|e| FromSqlError::Other(Box::new(e)))?;
                DateTime::parse_from_rfc3339(s).map_err(|e| FromSqlError::Other(Box::new(e)))
            }
            _ => Err(FromSqlError::InvalidType),
        }
    }
}
