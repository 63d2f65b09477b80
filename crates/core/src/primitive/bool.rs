use serde::{Serialize, Serializer};
use serde_json::Value as JsonValue;

use super::{binding_type, type_mismatch, Primitive};
use crate::driver::DriverValue;
use crate::error::{Error, Result};

impl Primitive for bool {
    const NAME: &'static str = "bool";

    fn zero() -> Self {
        false
    }

    fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Bool(b) => Ok(*b),
            other => Err(type_mismatch("boolean", other)),
        }
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.serialize(serializer)
    }

    /// Only the exact spellings `true` and `false` are accepted.
    fn parse_text(text: &[u8]) -> Result<Self> {
        match text {
            b"true" => Ok(true),
            b"false" => Ok(false),
            _ => Err(Error::parse(text, Self::NAME, "expected true or false")),
        }
    }

    fn format_text(&self) -> Vec<u8> {
        if *self {
            b"true".to_vec()
        } else {
            b"false".to_vec()
        }
    }

    fn from_driver(value: DriverValue) -> Result<Self> {
        match value {
            DriverValue::Bool(b) => Ok(b),
            other => Err(binding_type(Self::NAME, &other)),
        }
    }

    fn to_driver(&self) -> Result<DriverValue> {
        Ok(DriverValue::Bool(*self))
    }

    #[cfg(feature = "rusqlite")]
    fn from_sqlite(value: rusqlite::types::ValueRef<'_>) -> rusqlite::types::FromSqlResult<Self> {
        use rusqlite::types::{FromSqlError, ValueRef};
        match value {
            ValueRef::Integer(0) => Ok(false),
            ValueRef::Integer(1) => Ok(true),
            ValueRef::Integer(i) => Err(FromSqlError::OutOfRange(i)),
            _ => Err(FromSqlError::InvalidType),
        }
    }
}
