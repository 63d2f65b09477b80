use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use serde::Serializer;
use serde_json::Value as JsonValue;

use super::{binding_type, type_mismatch, Primitive};
use crate::driver::DriverValue;
use crate::error::{Error, Result};

impl Primitive for Vec<u8> {
    const NAME: &'static str = "bytes";
    const NULL_TEXT_SHIM: bool = false;

    fn zero() -> Self {
        Vec::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    /// JSON carries bytes as a standard-alphabet base64 string.
    fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::String(s) => BASE64
                .decode(s)
                .map_err(|e| Error::parse(s.as_bytes(), Self::NAME, e)),
            other => Err(type_mismatch("base64 string", other)),
        }
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(self))
    }

    fn parse_text(text: &[u8]) -> Result<Self> {
        Ok(text.to_vec())
    }

    fn format_text(&self) -> Vec<u8> {
        self.clone()
    }

    fn from_driver(value: DriverValue) -> Result<Self> {
        match value {
            DriverValue::Bytes(b) => Ok(b),
            DriverValue::String(s) => Ok(s.into_bytes()),
            other => Err(binding_type(Self::NAME, &other)),
        }
    }

    fn to_driver(&self) -> Result<DriverValue> {
        Ok(DriverValue::Bytes(self.clone()))
    }
}
