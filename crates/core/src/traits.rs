//! Codec capability traits
//!
//! Each wrapper type implements the full set:
//! - [`MarshalJson`] / [`UnmarshalJson`]: structured (JSON) literal form
//! - [`MarshalText`] / [`UnmarshalText`]: bare text form for non-structured contexts
//! - [`Scan`] / [`Valuer`]: relational driver binding
//!
//! The JSON pair sits beside serde's `Serialize`/`Deserialize`, which the
//! wrappers also implement so they can be embedded in derived structs.
//! The inherent byte-level pair exists to report the precise [`Error`]
//! class (syntax, type mismatch, overflow) for a single literal.
//!
//! [`Error`]: crate::Error

use crate::driver::DriverValue;
use crate::error::Result;

/// Encode into a single JSON literal.
pub trait MarshalJson {
    /// Render the JSON literal for this value
    fn marshal_json(&self) -> Result<Vec<u8>>;
}

/// Decode from a single JSON literal.
///
/// On error the receiver is left invalid, holding the zero value.
pub trait UnmarshalJson {
    /// Replace this value with the one encoded in `data`
    fn unmarshal_json(&mut self, data: &[u8]) -> Result<()>;
}

/// Encode into the bare text form.
pub trait MarshalText {
    /// Render the text form for this value
    fn marshal_text(&self) -> Result<Vec<u8>>;
}

/// Decode from the bare text form.
///
/// On error the receiver is left invalid, holding the zero value.
pub trait UnmarshalText {
    /// Replace this value with the one encoded in `text`
    fn unmarshal_text(&mut self, text: &[u8]) -> Result<()>;
}

/// Read a result column from the driver.
pub trait Scan {
    /// Replace this value with `src`
    fn scan(&mut self, src: DriverValue) -> Result<()>;
}

/// Produce a parameter for the driver.
pub trait Valuer {
    /// Driver representation of this value
    fn driver_value(&self) -> Result<DriverValue>;
}
