use std::num::IntErrorKind;

use serde::{Serialize, Serializer};
use serde_json::{Number, Value as JsonValue};

use super::{binding_type, type_mismatch, utf8, Primitive};
use crate::driver::DriverValue;
use crate::error::{Error, Result};

/// Convert a JSON number to an integer of the target width.
///
/// Float literals are a type mismatch unless they are integral and outside
/// the target range, in which case they are reported as overflow (that is how
/// serde_json represents integers beyond `u64`).
pub(crate) fn integer_from_number<T>(
    n: &Number,
    target: &'static str,
    min: f64,
    max: f64,
) -> Result<T>
where
    T: TryFrom<i64> + TryFrom<u64>,
{
    if let Some(i) = n.as_i64() {
        return <T as TryFrom<i64>>::try_from(i).map_err(|_| Error::overflow(n, target));
    }
    if let Some(u) = n.as_u64() {
        return <T as TryFrom<u64>>::try_from(u).map_err(|_| Error::overflow(n, target));
    }
    match n.as_f64() {
        Some(f) if f.is_finite() && f.fract() == 0.0 && (f < min || f > max) => {
            Err(Error::overflow(n, target))
        }
        _ => Err(Error::TypeMismatch {
            expected: "integer",
            found: "float",
        }),
    }
}

/// Parse decimal text into an integer, separating range failures from garbage.
pub(crate) fn parse_integer<T>(text: &[u8], target: &'static str) -> Result<T>
where
    T: std::str::FromStr<Err = std::num::ParseIntError>,
{
    let s = utf8(text, target)?;
    s.parse::<T>().map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::overflow(s, target),
        _ => Error::parse(text, target, e),
    })
}

macro_rules! impl_integer {
    ($($t:ty => $name:literal),+ $(,)?) => {$(
        impl Primitive for $t {
            const NAME: &'static str = $name;

            fn zero() -> Self {
                0
            }

            fn from_json(value: &JsonValue) -> Result<Self> {
                match value {
                    JsonValue::Number(n) => {
                        integer_from_number(n, Self::NAME, <$t>::MIN as f64, <$t>::MAX as f64)
                    }
                    JsonValue::String(s) => Self::parse_text(s.as_bytes()),
                    other => Err(type_mismatch("integer", other)),
                }
            }

            fn serialize_json<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                self.serialize(serializer)
            }

            fn parse_text(text: &[u8]) -> Result<Self> {
                parse_integer(text, Self::NAME)
            }

            fn format_text(&self) -> Vec<u8> {
                self.to_string().into_bytes()
            }

            fn from_driver(value: DriverValue) -> Result<Self> {
                match value {
                    DriverValue::Int64(i) => {
                        <$t>::try_from(i).map_err(|_| Error::overflow(i, Self::NAME))
                    }
                    other => Err(binding_type(Self::NAME, &other)),
                }
            }

            fn to_driver(&self) -> Result<DriverValue> {
                i64::try_from(*self)
                    .map(DriverValue::Int64)
                    .map_err(|_| Error::overflow(self, "int64"))
            }
        }
    )+};
}

impl_integer! {
    i8 => "int8",
    i16 => "int16",
    i32 => "int32",
    i64 => "int64",
    u64 => "uint64",
}
