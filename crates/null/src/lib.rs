//! Nullable wrappers that keep null distinct from the zero value
//!
//! Every wrapper is a [`Null<T>`]: a value plus a validity flag. Null is a
//! first-class state that round-trips through JSON (`null`), text (empty) and
//! driver binding (NULL). A valid zero (`0`, `""`, `false`, the epoch) is an
//! ordinary present value.
//!
//! # Example
//!
//! ```
//! use nullable_null::Int64;
//! use nullable_core::{MarshalJson, UnmarshalText};
//!
//! let mut n = Int64::default();
//! n.unmarshal_text(b"12345").unwrap();
//! assert!(n.valid);
//! assert_eq!(n.marshal_json().unwrap(), b"12345");
//!
//! n.unmarshal_text(b"").unwrap();
//! assert_eq!(n.marshal_json().unwrap(), b"null");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod null;
#[cfg(feature = "rusqlite")]
mod sqlite;
mod timestamp;

pub use null::Null;

/// Nullable `i8`
pub type Int8 = Null<i8>;
/// Nullable `i16`
pub type Int16 = Null<i16>;
/// Nullable `i32`
pub type Int32 = Null<i32>;
/// Nullable `i64`
pub type Int64 = Null<i64>;
/// Nullable `u64`
pub type Uint64 = Null<u64>;
/// Nullable `f32`
pub type Float32 = Null<f32>;
/// Nullable `f64`
pub type Float64 = Null<f64>;
/// Nullable `bool`
pub type Bool = Null<bool>;
/// Nullable `String`
pub type Str = Null<String>;
/// Nullable byte sequence
pub type Bytes = Null<Vec<u8>>;
/// Nullable timestamp, encoded as milliseconds since the Unix epoch
pub type Timestamp = Null<nullable_core::TimestampValue>;
