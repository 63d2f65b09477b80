//! The shared `(value, valid)` record
//!
//! Both wrapper families embed a [`Nullable<T>`] and dereference to it, so the
//! fields and the accessors below are reachable on every wrapper.

use crate::primitive::Primitive;

/// A primitive paired with a validity flag.
///
/// `valid == false` means "absent". Construction helpers keep `value` at the
/// zero value in that case, but [`Nullable::new`] does not normalize.
#[derive(Debug, Clone, Copy, Default)]
pub struct Nullable<T> {
    /// Underlying primitive
    pub value: T,
    /// Whether `value` is present
    pub valid: bool,
}

impl<T: Primitive> Nullable<T> {
    /// Build a record as-is.
    #[inline]
    pub const fn new(value: T, valid: bool) -> Self {
        Nullable { value, valid }
    }

    /// An absent record holding the zero value.
    pub fn invalid() -> Self {
        Nullable {
            value: T::zero(),
            valid: false,
        }
    }

    /// Reset to the absent state.
    pub fn clear(&mut self) {
        *self = Self::invalid();
    }

    /// Replace the value and mark it present.
    pub fn set_valid(&mut self, value: T) {
        self.value = value;
        self.valid = true;
    }

    /// The value if present, otherwise the zero value.
    pub fn value_or_zero(&self) -> T {
        if self.valid {
            self.value.clone()
        } else {
            T::zero()
        }
    }

    /// A reference to the value if present.
    pub fn ptr(&self) -> Option<&T> {
        self.valid.then_some(&self.value)
    }

    /// Take the value out if present.
    pub fn into_option(self) -> Option<T> {
        self.valid.then_some(self.value)
    }
}
