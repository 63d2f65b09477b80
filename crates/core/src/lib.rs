//! Core types and traits for nullable wrappers
//!
//! This crate defines the foundations shared by both wrapper families:
//! - Nullable: the generic `(value, valid)` record each wrapper embeds
//! - Primitive: per-type zero value, JSON literal, text form and driver conversion
//! - DriverValue: driver-neutral relational value
//! - Traits: codec capability traits (JSON, text, driver binding)
//! - Error: error type hierarchy
//! - SQLite glue (feature `rusqlite`)

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod driver;
pub mod error;
pub mod nullable;
pub mod primitive;
#[cfg(feature = "rusqlite")]
pub mod sqlite;
pub mod traits;

pub use driver::DriverValue;
pub use error::{Error, Result};
pub use nullable::Nullable;
pub use primitive::Primitive;
pub use traits::{MarshalJson, MarshalText, Scan, UnmarshalJson, UnmarshalText, Valuer};

pub use chrono;

/// The JSON null token
pub const NULL_TOKEN: &[u8] = b"null";

/// Text accepted as absent by older encoders
pub const LEGACY_NULL_TEXT: &[u8] = b"null";

/// The timestamp type wrapped by both families
pub type TimestampValue = chrono::DateTime<chrono::FixedOffset>;

pub use primitive::timestamp::{epoch, from_millis};
