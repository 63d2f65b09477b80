//! The null-family wrapper
//!
//! [`Null<T>`] keeps absence and the zero value apart through every codec:
//! JSON `null`, empty text and driver NULL all decode to an invalid value, and
//! an invalid value encodes back to them. A valid zero is an ordinary value.

use std::ops::{Deref, DerefMut};

use nullable_core::primitive::parse_json;
use nullable_core::{
    DriverValue, Error, MarshalJson, MarshalText, Nullable, Primitive, Result, Scan,
    UnmarshalJson, UnmarshalText, Valuer, LEGACY_NULL_TEXT, NULL_TOKEN,
};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;

/// A nullable `T` whose null state survives encoding.
///
/// Dereferences to the embedded [`Nullable<T>`], so `value`, `valid` and the
/// shared accessors are available directly.
#[derive(Debug, Clone, Copy)]
pub struct Null<T>(Nullable<T>);

impl<T: Primitive> Null<T> {
    /// Build a wrapper as-is, without normalizing `value`.
    pub const fn new(value: T, valid: bool) -> Self {
        Null(Nullable::new(value, valid))
    }

    /// A null wrapper holding the zero value.
    pub fn null() -> Self {
        Null(Nullable::invalid())
    }

    /// Valid iff `value` is present; the pointee is copied.
    pub fn from_ptr(value: Option<&T>) -> Self {
        match value {
            Some(v) => Self::new(v.clone(), true),
            None => Self::null(),
        }
    }

    /// Valid iff `value` is `Some`.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::new(v, true),
            None => Self::null(),
        }
    }

    /// True iff null. A valid zero is not considered zero.
    pub fn is_zero(&self) -> bool {
        !self.0.valid
    }

    /// Both null, or both valid with equal values.
    pub fn equal(&self, other: &Self) -> bool {
        self.0.valid == other.0.valid && (!self.0.valid || self.0.value == other.0.value)
    }

    /// Like [`Null::equal`], but values must also match representationally.
    pub(crate) fn exact_equal_inner(&self, other: &Self) -> bool {
        self.0.valid == other.0.valid && (!self.0.valid || self.0.value.exact_eq(&other.0.value))
    }

    /// Decode from an already-parsed JSON value.
    pub fn from_json_value(value: &JsonValue) -> Result<Self> {
        match value {
            JsonValue::Null => Ok(Self::null()),
            JsonValue::String(s) if T::NULL_JSON_STRING_SHIM && s == "null" => {
                tracing::trace!(ty = T::NAME, "legacy \"null\" JSON string decoded as zero");
                Ok(Self::new(T::zero(), true))
            }
            other => T::from_json(other).map(|v| Self::new(v, true)),
        }
    }

    /// Decode from the text form.
    pub fn from_text(text: &[u8]) -> Result<Self> {
        if text.is_empty() {
            return Ok(Self::null());
        }
        if T::NULL_TEXT_SHIM && text == LEGACY_NULL_TEXT {
            tracing::trace!(ty = T::NAME, "legacy \"null\" text treated as null");
            return Ok(Self::null());
        }
        T::parse_text(text).map(|v| Self::new(v, true))
    }

    /// Decode from a driver value.
    pub fn from_driver(src: DriverValue) -> Result<Self> {
        if src.is_null() {
            return Ok(Self::null());
        }
        T::from_driver(src).map(|v| Self::new(v, true))
    }

    /// Store `result` on success; reset to null and pass the error on failure.
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

impl<T> Deref for Null<T> {
    type Target = Nullable<T>;

    fn deref(&self) -> &Nullable<T> {
        &self.0
    }
}

impl<T> DerefMut for Null<T> {
    fn deref_mut(&mut self) -> &mut Nullable<T> {
        &mut self.0
    }
}

impl<T: Primitive> Default for Null<T> {
    fn default() -> Self {
        Self::null()
    }
}

/// Always valid, even for the zero value.
impl<T: Primitive> From<T> for Null<T> {
    fn from(value: T) -> Self {
        Self::new(value, true)
    }
}

impl<T: Primitive> PartialEq for Null<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

// ============================================================================
// JSON
// ============================================================================

impl<T: Primitive> Serialize for Null<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        if self.0.valid {
            self.0.value.serialize_json(serializer)
        } else {
            serializer.serialize_none()
        }
    }
}

impl<'de, T: Primitive> Deserialize<'de> for Null<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let value = JsonValue::deserialize(deserializer)?;
        Self::from_json_value(&value).map_err(de::Error::custom)
    }
}

impl<T: Primitive> MarshalJson for Null<T> {
    fn marshal_json(&self) -> Result<Vec<u8>> {
        serde_json::to_vec(self).map_err(|e| Error::Unsupported {
            value: e.to_string(),
            target: "JSON",
        })
    }
}

impl<T: Primitive> UnmarshalJson for Null<T> {
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

impl<T: Primitive> MarshalText for Null<T> {
    fn marshal_text(&self) -> Result<Vec<u8>> {
        if !self.0.valid {
            return Ok(Vec::new());
        }
        Ok(self.0.value.format_text())
    }
}

impl<T: Primitive> UnmarshalText for Null<T> {
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()> {
        let decoded = Self::from_text(text);
        self.replace_with(decoded, "text")
    }
}

// ============================================================================
// Driver binding
// ============================================================================

impl<T: Primitive> Scan for Null<T> {
    fn scan(&mut self, src: DriverValue) -> Result<()> {
        let decoded = Self::from_driver(src);
        self.replace_with(decoded, "driver")
    }
}

impl<T: Primitive> Valuer for Null<T> {
    fn driver_value(&self) -> Result<DriverValue> {
        if !self.0.valid {
            return Ok(DriverValue::Null);
        }
        self.0.value.to_driver()
    }
}
