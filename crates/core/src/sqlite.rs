//! SQLite glue for the `rusqlite` feature
//!
//! Maps SQLite storage classes onto [`DriverValue`] and back. Booleans are
//! stored as INTEGER 0/1 and timestamps as RFC 3339 TEXT.

use rusqlite::types::{FromSqlError, FromSqlResult, ToSqlOutput, Value, ValueRef};

use crate::driver::DriverValue;
use crate::error::Error;
use crate::primitive::Primitive;

/// Convert a borrowed SQLite value to its driver-neutral form.
///
/// TEXT that is not valid UTF-8 is passed through as bytes.
pub fn driver_value_from_sqlite(value: ValueRef<'_>) -> DriverValue {
    match value {
        ValueRef::Null => DriverValue::Null,
        ValueRef::Integer(i) => DriverValue::Int64(i),
        ValueRef::Real(f) => DriverValue::Float64(f),
        ValueRef::Text(t) => match std::str::from_utf8(t) {
            Ok(s) => DriverValue::String(s.to_owned()),
            Err(_) => DriverValue::Bytes(t.to_vec()),
        },
        ValueRef::Blob(b) => DriverValue::Bytes(b.to_vec()),
    }
}

/// Default [`Primitive::from_sqlite`]: go through [`Primitive::from_driver`].
pub(crate) fn from_sqlite_via_driver<T: Primitive>(value: ValueRef<'_>) -> FromSqlResult<T> {
    let raw_integer = match value {
        ValueRef::Integer(i) => Some(i),
        _ => None,
    };
    T::from_driver(driver_value_from_sqlite(value)).map_err(|e| match (e, raw_integer) {
        (Error::BindingType { .. }, _) => FromSqlError::InvalidType,
        (Error::Overflow { .. }, Some(i)) => FromSqlError::OutOfRange(i),
        (other, _) => FromSqlError::Other(Box::new(other)),
    })
}

/// Convert a driver value into an owned SQLite parameter.
pub fn to_sql_output(value: DriverValue) -> ToSqlOutput<'static> {
    let value = match value {
        DriverValue::Null => Value::Null,
        DriverValue::Int64(i) => Value::Integer(i),
        DriverValue::Float64(f) => Value::Real(f),
        DriverValue::Bool(b) => Value::Integer(i64::from(b)),
        DriverValue::Bytes(b) => Value::Blob(b),
        DriverValue::String(s) => Value::Text(s),
        DriverValue::Timestamp(t) => Value::Text(t.to_rfc3339()),
    };
    ToSqlOutput::Owned(value)
}

/// Wrap a crate error as a rusqlite parameter conversion failure.
pub fn to_sql_error(err: Error) -> rusqlite::Error {
    rusqlite::Error::ToSqlConversionFailure(Box::new(err))
}
