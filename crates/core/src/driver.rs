//! Driver-neutral relational values.
//!
//! [`DriverValue`] is the closed set of values a SQL driver exchanges with
//! wrapper types: parameters produced by [`Valuer`](crate::traits::Valuer) and
//! columns consumed by [`Scan`](crate::traits::Scan). Narrow integer columns
//! travel as `Int64` and are range-checked on the way in.

use chrono::{DateTime, FixedOffset};

/// A value passed to or read from a database driver.
#[derive(Debug, Clone, PartialEq)]
pub enum DriverValue {
    /// SQL NULL
    Null,
    /// 64-bit signed integer (every integer column)
    Int64(i64),
    /// 64-bit floating point (every floating point column)
    Float64(f64),
    /// Boolean
    Bool(bool),
    /// Binary data
    Bytes(Vec<u8>),
    /// Text data
    String(String),
    /// Timestamp with offset
    Timestamp(DateTime<FixedOffset>),
}

impl DriverValue {
    /// Kind name used in binding errors
    pub fn kind(&self) -> &'static str {
        match self {
            DriverValue::Null => "null",
            DriverValue::Int64(_) => "int64",
            DriverValue::Float64(_) => "float64",
            DriverValue::Bool(_) => "bool",
            DriverValue::Bytes(_) => "bytes",
            DriverValue::String(_) => "string",
            DriverValue::Timestamp(_) => "timestamp",
        }
    }

    /// Check if this value is NULL.
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, DriverValue::Null)
    }
}

impl From<i64> for DriverValue {
    fn from(v: i64) -> Self {
        DriverValue::Int64(v)
    }
}

impl From<f64> for DriverValue {
    fn from(v: f64) -> Self {
        DriverValue::Float64(v)
    }
}

impl From<bool> for DriverValue {
    fn from(v: bool) -> Self {
        DriverValue::Bool(v)
    }
}

impl From<&str> for DriverValue {
    fn from(v: &str) -> Self {
        DriverValue::String(v.to_string())
    }
}

impl From<String> for DriverValue {
    fn from(v: String) -> Self {
        DriverValue::String(v)
    }
}

impl From<Vec<u8>> for DriverValue {
    fn from(v: Vec<u8>) -> Self {
        DriverValue::Bytes(v)
    }
}

impl From<&[u8]> for DriverValue {
    fn from(v: &[u8]) -> Self {
        DriverValue::Bytes(v.to_vec())
    }
}

impl From<DateTime<FixedOffset>> for DriverValue {
    fn from(v: DateTime<FixedOffset>) -> Self {
        DriverValue::Timestamp(v)
    }
}

impl<T: Into<DriverValue>> From<Option<T>> for DriverValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(DriverValue::Null, Into::into)
    }
}
