//! Timestamp-specific helpers for [`Null`]

use chrono::{DateTime, TimeZone};
use nullable_core::TimestampValue;

use crate::null::Null;

impl Null<TimestampValue> {
    /// A valid timestamp from any time zone, keeping its offset.
    pub fn from_datetime<Tz: TimeZone>(t: DateTime<Tz>) -> Self {
        Self::from(t.fixed_offset())
    }

    /// True if both are null, or both are valid and encode the same instant
    /// in the same offset.
    ///
    /// [`Null::equal`] treats 06:00 +02:00 and 04:00 UTC as equal; this does not.
    pub fn exact_equal(&self, other: &Self) -> bool {
        self.exact_equal_inner(other)
    }
}
