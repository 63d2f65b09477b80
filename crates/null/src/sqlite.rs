//! rusqlite parameter and column support for [`Null`]

use nullable_core::sqlite::{to_sql_error, to_sql_output};
use nullable_core::{Primitive, Valuer};
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};

use crate::null::Null;

impl<T: Primitive> ToSql for Null<T> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        self.driver_value().map(to_sql_output).map_err(to_sql_error)
    }
}

impl<T: Primitive> FromSql for Null<T> {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Null => Ok(Self::null()),
            other => T::from_sqlite(other).map(|v| Self::new(v, true)),
        }
    }
}
