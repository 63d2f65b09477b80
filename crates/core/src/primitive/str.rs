use serde::Serializer;
use serde_json::Value as JsonValue;

use super::{binding_type, type_mismatch, utf8, Primitive};
use crate::driver::DriverValue;
use crate::error::{Error, Result};

impl Primitive for String {
    const NAME: &'static str = "string";
    const NULL_TEXT_SHIM: bool = false;

    fn zero() -> Self {
        String::new()
    }

    fn is_zero(&self) -> bool {
        self.is_empty()
    }

    fn from_json(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::String(s) => Ok(s.clone()),
            other => Err(type_mismatch("string", other)),
        }
    }

    fn serialize_json<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self)
    }

    fn parse_text(text: &[u8]) -> Result<Self> {
        utf8(text, Self::NAME).map(str::to_owned)
    }

    fn format_text(&self) -> Vec<u8> {
        self.as_bytes().to_vec()
    }

    fn from_driver(value: DriverValue) -> Result<Self> {
        match value {
            DriverValue::String(s) => Ok(s),
            DriverValue::Bytes(b) => String::from_utf8(b).map_err(|e| {
                let bytes = e.as_bytes().to_vec();
                Error::parse(&bytes, Self::NAME, e.utf8_error())
            }),
            other => Err(binding_type(Self::NAME, &other)),
        }
    }

    fn to_driver(&self) -> Result<DriverValue> {
        Ok(DriverValue::String(self.clone()))
    }
}
