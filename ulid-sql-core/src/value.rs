use ulid::Ulid;
use uuid::Uuid;

/// Dynamically typed value exchanged with the database driver.
///
/// Every variant carries an `Option`: `None` is a typed SQL NULL, while
/// [`Value::Null`] is a NULL of unknown type. The `None` form of a variant also
/// works as a column prototype (see [`crate::SqlWriter::write_column_type`]).
#[derive(Default, Debug, Clone, PartialEq)]
pub enum Value {
    #[default]
    Null,
    Boolean(Option<bool>),
    Int32(Option<i32>),
    Int64(Option<i64>),
    Float64(Option<f64>),
    Varchar(Option<String>),
    Blob(Option<Box<[u8]>>),
    Uuid(Option<Uuid>),
    Ulid(Option<Ulid>),
}

impl Value {
    /// True for [`Value::Null`] and for every variant holding `None`.
    pub fn is_null(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Boolean(v) => v.is_none(),
            Value::Int32(v) => v.is_none(),
            Value::Int64(v) => v.is_none(),
            Value::Float64(v) => v.is_none(),
            Value::Varchar(v) => v.is_none(),
            Value::Blob(v) => v.is_none(),
            Value::Uuid(v) => v.is_none(),
            Value::Ulid(v) => v.is_none(),
        }
    }

    /// Name of the variant, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(..) => "Boolean",
            Value::Int32(..) => "Int32",
            Value::Int64(..) => "Int64",
            Value::Float64(..) => "Float64",
            Value::Varchar(..) => "Varchar",
            Value::Blob(..) => "Blob",
            Value::Uuid(..) => "Uuid",
            Value::Ulid(..) => "Ulid",
        }
    }
}
