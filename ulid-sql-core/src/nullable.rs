use crate::{AsValue, Dialect, Result, Value, scan_ulid};
use ulid::Ulid;

/// A [`Ulid`] column that may be NULL.
///
/// A NULL instance always holds the nil ulid, so the identifier can only be
/// read through [`NullableUlid::ulid`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NullableUlid {
    ulid: Ulid,
    valid: bool,
}

impl NullableUlid {
    pub const fn new(ulid: Ulid) -> Self {
        Self { ulid, valid: true }
    }

    pub const fn null() -> Self {
        Self {
            ulid: Ulid::nil(),
            valid: false,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    pub const fn ulid(&self) -> Option<Ulid> {
        if self.valid { Some(self.ulid) } else { None }
    }

    /// Replace the content with the scanned `value`. NULL leaves the instance
    /// invalid without error, on failure the instance is not modified.
    pub fn scan(&mut self, value: Value) -> Result<()> {
        *self = if value.is_null() {
            Self::null()
        } else {
            Self::new(scan_ulid(value)?)
        };
        Ok(())
    }

    /// Driver value: NULL when invalid, the 16 bytes otherwise.
    pub fn value(&self) -> Value {
        match self.ulid() {
            Some(v) => Value::Blob(Some(v.to_bytes().into())),
            None => Value::Null,
        }
    }

    /// Dialect independent type name.
    pub const fn data_type() -> &'static str {
        "uuid"
    }

    /// Column type to use when creating a table for `dialect`.
    pub fn column_type(dialect: &Dialect) -> &'static str {
        dialect.column_type()
    }
}

impl Default for NullableUlid {
    fn default() -> Self {
        Self::null()
    }
}

impl From<Ulid> for NullableUlid {
    fn from(value: Ulid) -> Self {
        Self::new(value)
    }
}

impl From<Option<Ulid>> for NullableUlid {
    fn from(value: Option<Ulid>) -> Self {
        value.map_or_else(Self::null, Self::new)
    }
}

impl From<NullableUlid> for Option<Ulid> {
    fn from(value: NullableUlid) -> Self {
        value.ulid()
    }
}

impl AsValue for NullableUlid {
    const NULLABLE: bool = true;
    fn as_empty_value() -> Value {
        Value::Ulid(None)
    }
    fn as_value(self) -> Value {
        Value::Ulid(self.ulid())
    }
    fn try_from_value(value: Value) -> Result<Self> {
        let mut result = Self::null();
        result.scan(value)?;
        Ok(result)
    }
}
