//! Timestamp-specific helpers for [`Zero`]
//!
//! The zero timestamp is the Unix epoch, so a valid epoch and an invalid
//! value are indistinguishable here.

use chrono::{DateTime, TimeZone};
use nullable_core::TimestampValue;

use crate::zero::Zero;

impl Zero<TimestampValue> {
    /// A timestamp from any time zone, valid unless it is the epoch.
    pub fn from_datetime<Tz: TimeZone>(t: DateTime<Tz>) -> Self {
        Self::from_value(t.fixed_offset())
    }

    /// Compares [`Nullable::value_or_zero`](nullable_core::Nullable::value_or_zero)
    /// of both sides, including the offset.
    pub fn exact_equal(&self, other: &Self) -> bool {
        self.exact_equal_inner(other)
    }
}
