//! The zero-family wrapper
//!
//! [`Zero<T>`] treats null and the zero value as the same thing. Decoding
//! marks zero as invalid, and encoding an invalid value produces the zero
//! literal (`0`, `""`, `false`, the epoch) rather than `null`.

use std::ops::{Deref, DerefMut};

use nullable_core::primitive::{is_empty_json_string, parse_json};
use nullable_core::{
    DriverValue, Error, MarshalJson, MarshalText, Nullable, Primitive, Result, Scan,
    UnmarshalJson, UnmarshalText, Valuer, LEGACY_NULL_TEXT, NULL_TOKEN,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// A nullable `T` where null and zero collapse into one state.
#[derive(Debug, Clone, Copy)]
pub struct Zero<T>(Nullable<T>);

impl<T: Primitive> Zero<T> {
    /// Build a wrapper as-is, without normalizing `value`.
    pub const fn new(value: T, valid: bool) -> Self {
        Zero(Nullable::new(value, valid))
    }

    /// An invalid wrapper holding the zero value.
    pub fn null() -> Self {
        Zero(Nullable::invalid())
    }

    /// Valid iff `value` is not zero.
    pub fn from_value(value: T) -> Self {
        let valid = !value.is_zero();
        Self::new(value, valid)
    }

    /// Invalid when `value` is absent or points at zero.
    pub fn from_ptr(value: Option<&T>) -> Self {
        match value {
            Some(v) => Self::from_value(v.clone()),
            None => Self::null(),
        }
    }

    /// Invalid when `value` is `None` or zero.
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or_else(Self::null, Self::from_value)
    }

    /// True if invalid or zero.
    pub fn is_zero(&self) -> bool {
        !self.0.valid || self.0.value.is_zero()
    }

    /// Compares [`Nullable::value_or_zero`] of both sides, so null equals a valid zero.
    pub fn equal(&self, other: &Self) -> bool {
        self.0.value_or_zero() == other.0.value_or_zero()
    }

    pub(crate) fn exact_equal_inner(&self, other: &Self) -> bool {
        self.0.value_or_zero().exact_eq(&other.0.value_or_zero())
    }

    /// Decode from an already-parsed JSON value.
    ///
    /// `null` and `""` decode as invalid for every type.
    pub fn from_json_value(value: &JsonValue) -> Result<Self> {
        if value.is_null() || is_empty_json_string(value) {
            return Ok(Self::null());
        }
        if T::NULL_JSON_STRING_SHIM && value.as_str() == Some("null") {
            tracing::trace!(ty = T::NAME, "legacy \"null\" JSON string decoded as zero");
            return Ok(Self::null());
        }
        T::from_json(value).map(Self::from_value)
    }

    /// Decode from the text form.
    pub fn from_text(text: &[u8]) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::null());
        }
        if T::NULL_TEXT_SHIM && text == LEGACY_NULL_TEXT {
            tracing::trace!(ty = T::NAME, "legacy \"null\" text treated as zero");
            return Ok(Self::null());
        }
        T::parse_text(text).map(Self::from_value)
    }

    /// Decode from a driver value.
    pub fn from_driver(src: DriverValue) -> Result<Self> {
        if src.is_null() {
            return Ok(Self::null());
        }
        T::from_driver(src).map(Self::from_value)
    }

    fn replace_with(&mut self, result: Result<Self>, codec: &'static str) -> Result<()> {
        match result {
            Ok(decoded) => {
                *self = decoded;
                Ok(())
            }
            Err(e) => {
                tracing::debug!(ty = T::NAME, codec, error = %e, "decode failed");
                self.0.clear();
                Err(e)
            }
        }
    }
}

impl<T> Deref for Zero<T> {
    type Target = Nullable<T>;

    fn deref(&self) -> &Nullable<T> {
        &self.0
    }
}

impl<T> DerefMut for Zero<T> {
    fn deref_mut(&mut self) -> &mut Nullable<T> {
        &mut self.0
    }
}

impl<T: Primitive> Default for Zero<T> {
    fn default() -> Self {
        Self::null()
    }
}

/// Valid iff `value` is not zero.
impl<T: Primitive> From<T> for Zero<T> {
    fn from(value: T) -> Self {
        Self::from_value(value)
    }
}

impl<T: Primitive> PartialEq for Zero<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

// ============================================================================
// JSON
// ============================================================================

impl<T: Primitive> Serialize for Zero<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.is_zero() {
            T::zero().serialize_json(serializer)
        } else {
            self.0.value.serialize_json(serializer)
        }
    }
}

impl<'de, T: Primitive> Deserialize<'de> for Zero<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Self::from_json_value(&value).map_err(de::Error::custom)
    }
}

impl<T: Primitive> MarshalJson for Zero<T> {
    fn marshal_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::Unsupported {
            value: e.to_string(),
            target: "JSON",
        })
    }
}

impl<T: Primitive> UnmarshalJson for Zero<T> {
    fn unmarshal_json(&mut self, data: &[u8]) -> Result<()> {
        if data == NULL_TOKEN {
            self.0.clear();
            return Ok(());
        }
        let decoded = parse_json(data).and_then(|v| Self::from_json_value(&v));
        self.replace_with(decoded, "json")
    }
}

// ============================================================================
// Text
// ============================================================================

impl<T: Primitive> MarshalText for Zero<T> {
    fn marshal_text(&self) -> Result<Vec<u8>> {
        if !self.0.valid {
            return Ok(T::zero().format_text());
        }
        Ok(self.0.value.format_text())
    }
}

impl<T: Primitive> UnmarshalText for Zero<T> {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        let decoded = Self::from_text(text);
        self.replace_with(decoded, "text")
    }
}

// ============================================================================
// Driver binding
// ============================================================================

impl<T: Primitive> Scan for Zero<T> {
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        let decoded = Self::from_driver(src);
        self.replace_with(decoded, "driver")
    }
}

impl<T: Primitive> Valuer for Zero<T> {
    fn driver_value(&self) -> Result<DriverValue> {
        if self.is_zero() {
            return Ok(DriverValue::Null);
        }
        self.0.value.to_driver()
    }
}
