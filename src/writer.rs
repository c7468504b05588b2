use ulid_sql_core::{Dialect, Driver, GenericSqlWriter, SqlWriter};
use ulid_sql_mysql::MySQLDriver;
use ulid_sql_postgres::PostgresDriver;
use ulid_sql_sqlite::SQLiteDriver;

/// Writer rendering SQL for `dialect`, the generic one for unknown dialects.
pub fn sql_writer(dialect: &Dialect) -> Box<dyn SqlWriter> {
    match dialect {
        Dialect::MySql => Box::new(MySQLDriver::new().sql_writer()),
        Dialect::Postgres => Box::new(PostgresDriver::new().sql_writer()),
        Dialect::Sqlite => Box::new(SQLiteDriver::new().sql_writer()),
        Dialect::Other(name) => {
            log::warn!(
                "No dedicated sql writer for dialect `{}`, using the generic one",
                name
            );
            Box::new(GenericSqlWriter::new())
        }
    }
}

/// Writer for the dialect named by the scheme of a connection url.
pub fn sql_writer_for_url(url: &str) -> ulid_sql_core::Result<Box<dyn SqlWriter>> {
    Ok(sql_writer(&Dialect::from_url(url)?))
}
