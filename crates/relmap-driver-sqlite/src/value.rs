use relmap_core::{Error, Result, Value as CoreValue};
use rusqlite::{types::ValueRef, Row};

#[derive(Debug)]
pub struct Value(CoreValue);

impl Value {
    /// Converts this SQLite driver value into the core value.
    pub fn into_inner(self) -> CoreValue {
        self.0
    }

    /// Converts a SQLite value within a row to a core value.
    ///
    /// SQLite columns are dynamically typed, so the storage class of each
    /// cell decides the variant. Blobs are read as lossy UTF-8 text.
    pub fn from_sql(row: &Row<'_>, index: usize) -> Result<Self> {
        let value = row.get_ref(index).map_err(Error::driver_operation_failed)?;

        let core_value = match value {
            ValueRef::Null => CoreValue::Null,
            ValueRef::Integer(value) => CoreValue::I64(value),
            ValueRef::Real(value) => CoreValue::F64(value),
            ValueRef::Text(value) | ValueRef::Blob(value) => {
                CoreValue::String(String::from_utf8_lossy(value).into_owned())
            }
        };

        Ok(Value(core_value))
    }
}
