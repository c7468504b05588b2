//! ULID columns for SQL databases.
//!
//! Scan row values into [`Ulid`] / [`NullableUlid`], produce driver values for
//! writes, and render per dialect column types, literals and placeholders.
//!
//! ```rust
//! use ulid_sql::{Dialect, Ulid, sql_writer, ulid_placeholders};
//! let dialect = Dialect::from_url("postgres://user@localhost/db").unwrap();
//! let writer = sql_writer(&dialect);
//! let ids = [Ulid::from_parts(1, 0), Ulid::from_parts(2, 0)];
//! let (args, placeholders) = ulid_placeholders(writer.as_ref(), &ids);
//! assert_eq!(args.len(), 2);
//! assert_eq!(placeholders, "$1,$2");
//! ```
mod writer;

pub use ulid_sql_core::*;
pub use ulid_sql_mysql::{MySQLDriver, MySQLSqlWriter};
pub use ulid_sql_postgres::{PostgresDriver, PostgresSqlWriter};
pub use ulid_sql_sqlite::{SQLiteDriver, SQLiteSqlWriter};
pub use writer::*;
