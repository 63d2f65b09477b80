//! Nullable wrappers that collapse null into the zero value
//!
//! Every wrapper is a [`Zero<T>`]. Null and the zero value (`0`, `""`,
//! `false`, the epoch) are one state: decoding a zero yields an invalid
//! wrapper, and an invalid wrapper encodes as the zero literal. Only the
//! driver binding emits NULL, for invalid and zero values alike.
//!
//! # Example
//!
//! ```
//! use nullable_zero::Int64;
//! use nullable_core::{MarshalJson, UnmarshalJson};
//!
//! let mut n = Int64::default();
//! n.unmarshal_json(b"null").unwrap();
//! assert!(!n.valid);
//! assert_eq!(n.marshal_json().unwrap(), b"0");
//! assert_eq!(n, Int64::from(0));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

#[cfg(feature = "rusqlite")]
mod sqlite;
mod timestamp;
pub mod zero;

pub use zero::Zero;

/// Zero-collapsing `i8`
pub type Int8 = Zero<i8>;
/// Zero-collapsing `i16`
pub type Int16 = Zero<i16>;
/// Zero-collapsing `i32`
pub type Int32 = Zero<i32>;
/// Zero-collapsing `i64`
pub type Int64 = Zero<i64>;
/// Zero-collapsing `u64`
pub type Uint64 = Zero<u64>;
/// Zero-collapsing `f32`
pub type Float32 = Zero<f32>;
/// Zero-collapsing `f64`
pub type Float64 = Zero<f64>;
/// Zero-collapsing `bool`
pub type Bool = Zero<bool>;
/// Zero-collapsing `String`
pub type Str = Zero<String>;
/// Zero-collapsing byte sequence
pub type Bytes = Zero<Vec<u8>>;
/// Zero-collapsing timestamp; the zero value is the Unix epoch
pub type Timestamp = Zero<nullable_core::TimestampValue>;
