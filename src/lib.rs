//! Nullable value wrappers with JSON, text and SQL binding support
//!
//! Two families of wrappers share one set of primitive types (`i8`..`i64`,
//! `u64`, `f32`, `f64`, `bool`, `String`, bytes and timestamps):
//!
//! - [`null`]: null is distinct from the zero value and survives every codec.
//! - [`zero`]: null and the zero value are the same state.
//!
//! Both embed the generic [`Nullable`] record and implement the same codec
//! traits.
//!
//! # Quick Start
//!
//! ```
//! use nullable::{null, zero, MarshalJson, UnmarshalJson};
//!
//! let mut a = null::Int32::default();
//! a.unmarshal_json(b"null").unwrap();
//! assert_eq!(a.marshal_json().unwrap(), b"null");
//!
//! let mut b = zero::Int32::default();
//! b.unmarshal_json(b"null").unwrap();
//! assert_eq!(b.marshal_json().unwrap(), b"0");
//! ```
//!
//! Enable the `rusqlite` feature to bind wrappers as SQLite parameters and
//! read them from result columns.

pub use nullable_core::{
    epoch, from_millis, DriverValue, Error, MarshalJson, MarshalText, Nullable, Primitive,
    Result, Scan, TimestampValue, UnmarshalJson, UnmarshalText, Valuer, LEGACY_NULL_TEXT,
    NULL_TOKEN,
};
pub use nullable_null as null;
pub use nullable_zero as zero;

pub use nullable_null::Null;
pub use nullable_zero::Zero;
