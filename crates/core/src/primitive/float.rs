use serde::{ser, Serialize, Serializer};
use serde_json::Value as JsonValue;

use super::{binding_type, type_mismatch, utf8, Primitive};
use crate::driver::DriverValue;
use crate::error::{Error, Result};

/// Largest magnitude below which every integral `f64` is an exact `i64` (2^53)
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

/// Parse float text directly at the target width.
///
/// A result that is infinite only because of rounding is reported as overflow.
fn parse_float<T>(text: &[u8], target: &'static str) -> Result<T>
where
    T: std::str::FromStr<Err = std::num::ParseFloatError> + Copy + Into<f64>,
{
    let s = utf8(text, target)?;
    let f: T = s.parse().map_err(|e| Error::parse(text, target, e))?;
    let wide: f64 = f.into();
    if wide.is_infinite() && !s.to_ascii_lowercase().contains("inf") {
        return Err(Error::overflow(s, target));
    }
    Ok(f)
}

/// Report overflow when a finite value became infinite by narrowing.
fn check_narrowed(original: f64, narrowed: f64, target: &'static str) -> Result<()> {
    if original.is_finite() && narrowed.is_infinite() {
        Err(Error::overflow(original, target))
    } else {
        Ok(())
    }
}

macro_rules! impl_float {
    ($($t:ty => $name:literal),+ $(,)?) => {$(
        impl Primitive for $t {
            const NAME: &'static str = $name;

            fn zero() -> Self {
                0.0
            }

            fn from_json(value: &JsonValue) -> Result<Self> {
                match value {
                    JsonValue::Number(n) => match n.as_f64() {
                        Some(f) => {
                            let g = f as $t;
                            check_narrowed(f, f64::from(g), Self::NAME).map(|()| g)
                        }
                        None => Err(Error::overflow(n, Self::NAME)),
                    },
                    JsonValue::String(s) => Self::parse_text(s.as_bytes()),
                    other => Err(type_mismatch("number", other)),
                }
            }

            fn serialize_json<S: Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                if !self.is_finite() {
                    return Err(ser::Error::custom(format!(
                        "unsupported value {} for JSON",
                        self
                    )));
                }
                let wide = f64::from(*self);
                if wide.fract() == 0.0 && wide.abs() < MAX_EXACT_INTEGER {
                    return serializer.serialize_i64(wide as i64);
                }
                self.serialize(serializer)
            }

            fn parse_text(text: &[u8]) -> Result<Self> {
                parse_float(text, Self::NAME)
            }

            fn format_text(&self) -> Vec<u8> {
                self.to_string().into_bytes()
            }

            fn from_driver(value: DriverValue) -> Result<Self> {
                match value {
                    DriverValue::Float64(f) => {
                        let g = f as $t;
                        check_narrowed(f, f64::from(g), Self::NAME).map(|()| g)
                    }
                    other => Err(binding_type(Self::NAME, &other)),
                }
            }

            fn to_driver(&self) -> Result<DriverValue> {
                Ok(DriverValue::Float64(f64::from(*self)))
            }

            #[cfg(feature = "rusqlite")]
            fn from_sqlite(
                value: rusqlite::types::ValueRef<'_>,
            ) -> rusqlite::types::FromSqlResult<Self> {
                use rusqlite::types::ValueRef;
                match value {
                    // REAL affinity columns hand back whole numbers as INTEGER
                    ValueRef::Integer(i) => Ok(i as $t),
                    other => crate::sqlite::from_sqlite_via_driver(other),
                }
            }
        }
    )+};
}

impl_float! {
    f32 => "float32",
    f64 => "float64",
}
