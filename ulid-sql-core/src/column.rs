use crate::{AsValue, Value};
use std::borrow::Cow;

/// Indicates how (or if) a column participates in the primary key.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum PrimaryKeyType {
    /// Single-column primary key.
    PrimaryKey,
    /// Member of a composite primary key.
    PartOfPrimaryKey,
    /// Not part of the primary key.
    #[default]
    None,
}

/// Column of a table created by [`crate::SqlWriter::write_create_table`].
#[derive(Default, Debug, Clone, PartialEq)]
pub struct ColumnDef {
    pub name: Cow<'static, str>,
    /// Prototype of the column type (a typed NULL, like `Value::Ulid(None)`).
    pub value: Value,
    pub nullable: bool,
    pub primary_key: PrimaryKeyType,
}

impl ColumnDef {
    /// Column of type `T`, nullable when `T` can hold NULL (`Option`, [`crate::NullableUlid`]).
    pub fn new<T: AsValue>(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            value: T::as_empty_value(),
            nullable: T::NULLABLE,
            ..Default::default()
        }
    }

    pub fn primary_key(mut self) -> Self {
        self.primary_key = PrimaryKeyType::PrimaryKey;
        self
    }

    pub fn part_of_primary_key(mut self) -> Self {
        self.primary_key = PrimaryKeyType::PartOfPrimaryKey;
        self
    }
}
