use crate::{Error, Result, Value, truncate_long};
use anyhow::Context;
use std::any;
use uuid::Uuid;

/// Conversion between native Rust types and the dynamically typed [`Value`]
/// used for bind arguments and row decoding.
///
/// # Contract
/// - `as_empty_value` returns the typed NULL of the variant. It doubles as the
///   column prototype handed to [`crate::SqlWriter::write_column_type`].
/// - `try_from_value` accepts the canonical variant and may accept a few
///   lossless alternatives. Anything else is an error naming both the value
///   and the target type.
/// - `parse` reads the full textual form of the type, failing on leftovers.
///
/// # Examples
/// ```rust
/// use ulid_sql_core::{AsValue, Value};
/// let v = 42i64.as_value();
/// assert_eq!(v, Value::Int64(Some(42)));
/// let n: i64 = AsValue::try_from_value(v).unwrap();
/// assert_eq!(n, 42);
/// ```
pub trait AsValue {
    /// Whether the type can hold NULL, columns of this type are nullable.
    const NULLABLE: bool = false;
    /// Typed NULL for this type.
    fn as_empty_value() -> Value;
    /// Owned [`Value`] representation.
    fn as_value(self) -> Value;
    /// Convert a dynamic [`Value`] back into `Self`.
    fn try_from_value(value: Value) -> Result<Self>
    where
        Self: Sized;
    /// Parse the complete textual form of `Self`.
    fn parse(input: impl AsRef<str>) -> Result<Self>
    where
        Self: Sized,
    {
        Err(Error::msg(format!(
            "Cannot parse `{}` as {}",
            truncate_long(input.as_ref()),
            any::type_name::<Self>()
        )))
    }
}

impl<T: AsValue> From<T> for Value {
    fn from(value: T) -> Self {
        value.as_value()
    }
}

impl From<&'static str> for Value {
    fn from(value: &'static str) -> Self {
        Value::Varchar(Some(value.into()))
    }
}

macro_rules! impl_as_value {
    ($source:ty, $destination:path $(, $pat_rest:pat => $expr_rest:expr)* $(,)?) => {
        impl AsValue for $source {
            fn as_empty_value() -> Value {
                $destination(None)
            }
            fn as_value(self) -> Value {
                $destination(Some(self.into()))
            }
            fn try_from_value(value: Value) -> Result<Self> {
                match value {
                    $destination(Some(v), ..) => Ok(v.into()),
                    $($pat_rest => $expr_rest,)*
                    _ => Err(Error::msg(format!(
                        "Cannot convert {value:?} to {}",
                        any::type_name::<Self>(),
                    ))),
                }
            }
        }
    };
}

impl_as_value!(bool, Value::Boolean);
impl_as_value!(i32, Value::Int32);
impl_as_value!(
    i64,
    Value::Int64,
    Value::Int32(Some(v), ..) => Ok(v as _),
);
impl_as_value!(
    f64,
    Value::Float64,
    Value::Int32(Some(v), ..) => Ok(v as _),
);
impl_as_value!(String, Value::Varchar);
impl_as_value!(
    Box<[u8]>,
    Value::Blob,
    Value::Varchar(Some(v), ..) => Ok(v.into_bytes().into_boxed_slice()),
);
impl_as_value!(
    Vec<u8>,
    Value::Blob,
    Value::Varchar(Some(v), ..) => Ok(v.into_bytes()),
);

impl AsValue for Uuid {
    fn as_empty_value() -> Value {
        Value::Uuid(None)
    }
    fn as_value(self) -> Value {
        Value::Uuid(Some(self))
    }
    fn try_from_value(value: Value) -> Result<Self> {
        match value {
            Value::Uuid(Some(v), ..) => Ok(v),
            Value::Varchar(Some(v), ..) => Self::parse(v),
            Value::Blob(Some(v), ..) => Uuid::from_slice(&v)
                .with_context(|| format!("Cannot convert a blob of {} bytes to a uuid", v.len())),
            _ => Err(Error::msg(format!(
                "Cannot convert {value:?} to {}",
                any::type_name::<Self>(),
            ))),
        }
    }
    fn parse(input: impl AsRef<str>) -> Result<Self> {
        let input = input.as_ref();
        Uuid::parse_str(input)
            .with_context(|| format!("Cannot parse `{}` as a uuid", truncate_long(input)))
    }
}

impl<T: AsValue> AsValue for Option<T> {
    const NULLABLE: bool = true;
    fn as_empty_value() -> Value {
        T::as_empty_value()
    }
    fn as_value(self) -> Value {
        match self {
            Some(v) => v.as_value(),
            None => T::as_empty_value(),
        }
    }
    fn try_from_value(value: Value) -> Result<Self> {
        Ok(if value.is_null() {
            None
        } else {
            Some(<T as AsValue>::try_from_value(value)?)
        })
    }
}
